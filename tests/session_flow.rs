// SPDX-License-Identifier: MPL-2.0
//! End-to-end session flow against a scripted text remover.

use futures_util::future::BoxFuture;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use text_eraser::application::port::{RemoteError, RemoteResult, TextRemover};
use text_eraser::domain::image::{EditedImage, ImageMime};
use text_eraser::media::intake;
use text_eraser::session::{Completion, Phase, Session};

/// Returns queued outcomes in order and counts calls.
struct ScriptedRemover {
    outcomes: Mutex<Vec<RemoteResult<EditedImage>>>,
    calls: AtomicUsize,
}

impl ScriptedRemover {
    fn new(outcomes: Vec<RemoteResult<EditedImage>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into_iter().rev().collect()),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextRemover for ScriptedRemover {
    fn remove_text(
        &self,
        _image: text_eraser::domain::image::SourceImage,
    ) -> BoxFuture<'static, RemoteResult<EditedImage>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self
            .outcomes
            .lock()
            .expect("lock")
            .pop()
            .unwrap_or_else(|| Err(RemoteError::Network("no scripted outcome".into())));
        Box::pin(async move { outcome })
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}

fn png_bytes() -> Vec<u8> {
    let buffer = image_rs::ImageBuffer::from_pixel(4, 4, image_rs::Rgba([10u8, 20, 30, 255]));
    let mut out = Cursor::new(Vec::new());
    buffer
        .write_to(&mut out, image_rs::ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

fn jpeg_bytes() -> Vec<u8> {
    let buffer = image_rs::RgbImage::from_pixel(4, 4, image_rs::Rgb([200u8, 100, 50]));
    let mut out = Cursor::new(Vec::new());
    buffer
        .write_to(&mut out, image_rs::ImageFormat::Jpeg)
        .expect("encode jpeg");
    out.into_inner()
}

async fn run_pending(session: &mut Session, remover: &dyn TextRemover) -> Option<Completion> {
    let pending = session.submit()?;
    let outcome = remover.remove_text(pending.image).await;
    Some(session.complete(pending.id, outcome))
}

#[tokio::test]
async fn jpeg_upload_yields_png_download_name() {
    let remover = ScriptedRemover::new(vec![Ok(EditedImage::new(
        ImageMime::new("image/png"),
        png_bytes(),
    ))]);
    let mut session = Session::new();

    let original = intake::accept("photo.jpg", jpeg_bytes()).expect("jpeg accepted");
    session.upload(original);
    assert_eq!(session.phase(), Phase::Ready);

    let completion = run_pending(&mut session, remover.as_ref()).await;

    assert_eq!(completion, Some(Completion::Succeeded));
    assert_eq!(session.phase(), Phase::Succeeded);
    let result = session.result().expect("result");
    assert_eq!(result.mime().as_str(), "image/png");
    assert_eq!(result.download_file_name(), "edited-image.png");
    assert!(session.result_preview().is_some());
    assert!(session.error().is_none());
}

#[tokio::test]
async fn remote_failure_is_shown_in_banner() {
    let remover = ScriptedRemover::new(vec![Err(RemoteError::Network(
        "service unavailable".into(),
    ))]);
    let mut session = Session::new();
    session.upload(intake::accept("photo.png", png_bytes()).expect("png accepted"));

    let completion = run_pending(&mut session, remover.as_ref()).await;

    assert_eq!(completion, Some(Completion::Failed));
    assert_eq!(session.phase(), Phase::Failed);
    assert!(session.result().is_none());
    let error = session.error().expect("error stored");
    assert_eq!(error.i18n_key(), "remote-error-network");
    assert_eq!(
        error.i18n_args(),
        vec![("detail", "service unavailable".to_string())]
    );
    assert!(error.user_message().contains("service unavailable"));
}

#[tokio::test]
async fn retry_after_failure_clears_error() {
    let remover = ScriptedRemover::new(vec![
        Err(RemoteError::Status {
            code: 503,
            message: "overloaded".into(),
        }),
        Ok(EditedImage::new(ImageMime::new("image/webp"), vec![1, 2])),
    ]);
    let mut session = Session::new();
    session.upload(intake::accept("a.png", png_bytes()).expect("png accepted"));

    run_pending(&mut session, remover.as_ref()).await;
    assert_eq!(session.phase(), Phase::Failed);

    let pending = session.submit().expect("retry allowed from Failed");
    assert!(session.error().is_none());
    assert!(session.is_processing());

    let outcome = remover.remove_text(pending.image).await;
    session.complete(pending.id, outcome);
    assert_eq!(
        session.result().map(EditedImage::download_file_name),
        Some("edited-image.webp".to_string())
    );
    assert_eq!(remover.calls(), 2);
}

#[tokio::test]
async fn submit_is_a_no_op_without_image_or_while_processing() {
    let remover = ScriptedRemover::new(vec![]);
    let mut session = Session::new();

    assert!(run_pending(&mut session, remover.as_ref()).await.is_none());
    assert_eq!(session.phase(), Phase::Empty);

    session.upload(intake::accept("a.png", png_bytes()).expect("png accepted"));
    let first = session.submit().expect("first request");
    assert!(session.submit().is_none());
    assert_eq!(session.pending_request(), Some(first.id));
    assert_eq!(remover.calls(), 0);
}

#[tokio::test]
async fn responses_landing_after_reset_or_new_upload_are_discarded() {
    let remover = ScriptedRemover::new(vec![
        Ok(EditedImage::new(ImageMime::new("image/png"), vec![1])),
        Ok(EditedImage::new(ImageMime::new("image/png"), vec![2])),
    ]);
    let mut session = Session::new();

    session.upload(intake::accept("first.png", png_bytes()).expect("png accepted"));
    let pending = session.submit().expect("request");
    let late = remover.remove_text(pending.image).await;
    session.reset();
    assert_eq!(session.complete(pending.id, late), Completion::Stale);
    assert_eq!(session.phase(), Phase::Empty);

    session.upload(intake::accept("second.png", png_bytes()).expect("png accepted"));
    let pending = session.submit().expect("request");
    let late = remover.remove_text(pending.image).await;
    session.upload(intake::accept("third.png", png_bytes()).expect("png accepted"));
    assert_eq!(session.complete(pending.id, late), Completion::Stale);

    assert_eq!(session.phase(), Phase::Ready);
    let original = session.original().expect("original");
    assert_eq!(original.image().file_name(), "third.png");
}

#[test]
fn non_image_bytes_never_reach_the_session() {
    let err = intake::accept("notes.png", b"just some text".to_vec()).expect_err("rejected");
    assert_eq!(err.i18n_key(), "notification-intake-not-image");
}
