// SPDX-License-Identifier: MPL-2.0
//! Saving an edited image to disk.

use crate::domain::image::EditedImage;
use crate::error::Result;
use std::path::PathBuf;

/// Returns the save-dialog filter (label, extensions) for `image`.
#[must_use]
pub fn save_filter(image: &EditedImage) -> (String, Vec<String>) {
    let ext = image.mime().extension();
    (ext.to_uppercase(), vec![ext])
}

/// Writes the edited bytes to `path`, creating parent directories.
///
/// Returns the path written so the caller can remember its directory.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] if the file cannot be written.
pub async fn save(image: EditedImage, path: PathBuf) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, image.bytes()).await?;

    tracing::info!(path = %path.display(), bytes = image.bytes().len(), "edited image saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::image::ImageMime;
    use tempfile::tempdir;

    #[test]
    fn save_filter_matches_mime() {
        let image = EditedImage::new(ImageMime::new("image/jpeg"), vec![1]);
        let (label, exts) = save_filter(&image);
        assert_eq!(label, "JPEG");
        assert_eq!(exts, vec!["jpeg".to_string()]);
    }

    #[tokio::test]
    async fn save_writes_bytes() {
        let dir = tempdir().expect("temp dir");
        let target = dir.path().join("nested").join("edited-image.png");
        let image = EditedImage::new(ImageMime::new("image/png"), vec![7, 8, 9]);

        let written = save(image, target.clone()).await.expect("save");

        assert_eq!(written, target);
        assert_eq!(std::fs::read(&target).expect("read back"), vec![7, 8, 9]);
    }
}
