// SPDX-License-Identifier: MPL-2.0
//! JSON shapes of the Gemini `generateContent` endpoint and their decoding.
//!
//! Only the fields needed for image-in/image-out editing are modelled.
//! Unknown fields are ignored so that additions to the API do not break
//! parsing.

use crate::application::port::text_removal::{RemoteError, RemoteResult};
use crate::domain::image::{EditedImage, ImageMime};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// MIME type assumed when the service omits one on an image part.
const DEFAULT_RESULT_MIME: &str = "image/png";

/// Finish reason reported for a normal completion.
const FINISH_REASON_STOP: &str = "STOP";

/// Maximum number of characters of a raw error body echoed to the user.
const MAX_ERROR_BODY_CHARS: usize = 200;

// =============================================================================
// Request
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [RequestPart<'a>; 2],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestPart<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineDataRef<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineDataRef<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: [&'static str; 2],
}

impl<'a> GenerateContentRequest<'a> {
    /// Builds a request carrying one inline image followed by the instruction.
    ///
    /// `base64_data` must already be standard base64.
    pub fn new(mime_type: &'a str, base64_data: &'a str, prompt: &'a str) -> Self {
        Self {
            contents: [Content {
                parts: [
                    RequestPart {
                        inline_data: Some(InlineDataRef {
                            mime_type,
                            data: base64_data,
                        }),
                        text: None,
                    },
                    RequestPart {
                        inline_data: None,
                        text: Some(prompt),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_modalities: ["IMAGE", "TEXT"],
            },
        }
    }
}

/// Encodes raw image bytes for an inline data part.
pub fn encode_image(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

// =============================================================================
// Response
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default, alias = "inline_data")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default, alias = "mime_type")]
    mime_type: String,
    #[serde(default)]
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
    #[serde(default)]
    block_reason_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

/// Decodes a successful response body into the edited image.
///
/// # Errors
///
/// - [`RemoteError::Refused`] when the prompt was blocked, generation stopped
///   early, or only text came back
/// - [`RemoteError::MalformedResponse`] when the JSON shape is unexpected,
///   no inline part has an `image/*` type, or the image payload is not valid
///   base64
pub fn parse_response(body: &str) -> RemoteResult<EditedImage> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| RemoteError::MalformedResponse(e.to_string()))?;

    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.as_deref())
    {
        let detail = response
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason_message.as_deref())
            .map(|msg| format!(": {msg}"))
            .unwrap_or_default();
        return Err(RemoteError::Refused(format!("{reason}{detail}")));
    }

    let candidate = response.candidates.first().ok_or_else(|| {
        RemoteError::MalformedResponse("response contained no candidates".to_string())
    })?;

    let parts = candidate
        .content
        .as_ref()
        .map(|content| content.parts.as_slice())
        .unwrap_or_default();

    let inline_parts: Vec<(ImageMime, &InlineData)> = parts
        .iter()
        .filter_map(|part| part.inline_data.as_ref())
        .map(|inline| (inline_mime(inline), inline))
        .collect();

    if let Some((first_mime, _)) = inline_parts.first() {
        return match inline_parts.iter().find(|(mime, _)| mime.is_image()) {
            Some((mime, inline)) => decode_inline(mime.clone(), inline),
            None => Err(RemoteError::MalformedResponse(format!(
                "response contained no image part (got {first_mime})"
            ))),
        };
    }

    if let Some(reason) = candidate
        .finish_reason
        .as_deref()
        .filter(|reason| *reason != FINISH_REASON_STOP)
    {
        return Err(RemoteError::Refused(reason.to_string()));
    }

    let text = parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if text.is_empty() {
        Err(RemoteError::MalformedResponse(
            "response contained no image data".to_string(),
        ))
    } else {
        Err(RemoteError::Refused(text))
    }
}

/// MIME type of an inline part; a blank type is assumed to be PNG.
fn inline_mime(inline: &InlineData) -> ImageMime {
    if inline.mime_type.trim().is_empty() {
        ImageMime::new(DEFAULT_RESULT_MIME)
    } else {
        ImageMime::new(inline.mime_type.as_str())
    }
}

fn decode_inline(mime: ImageMime, inline: &InlineData) -> RemoteResult<EditedImage> {
    let bytes = STANDARD
        .decode(inline.data.trim())
        .map_err(|e| RemoteError::MalformedResponse(format!("invalid image data: {e}")))?;

    if bytes.is_empty() {
        return Err(RemoteError::MalformedResponse(
            "image data was empty".to_string(),
        ));
    }

    Ok(EditedImage::new(mime, bytes))
}

/// Converts a non-success response into a [`RemoteError::Status`].
///
/// Uses `error.message` from the service's error envelope when present,
/// otherwise a truncated copy of the raw body.
pub fn parse_error(code: u16, body: &str) -> RemoteError {
    let message = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope
            .error
            .message
            .filter(|msg| !msg.trim().is_empty())
            .or(envelope.error.status)
            .unwrap_or_default(),
        Err(_) => body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect(),
    };

    RemoteError::Status { code, message }
}
