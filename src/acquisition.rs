use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use image::{DynamicImage, ImageReader};
use tracing::info;

use crate::error::ImageDecodeError;

/// File extensions offered by the picker
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp", "tif", "tiff"];

/// A decoded image together with the file it came from
#[derive(Debug, Clone)]
pub struct PickedImage {
    pub path: PathBuf,
    pub image: Arc<DynamicImage>,
}

/// Result of asking the user for an image
#[derive(Debug, Clone)]
pub enum PickOutcome {
    Cancelled,
    Picked(Result<PickedImage, ImageDecodeError>),
}

/// Read and decode an image file
pub fn load_image(path: impl AsRef<Path>) -> Result<PickedImage, ImageDecodeError> {
    let path = path.as_ref();
    let image = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| ImageDecodeError::Read {
            path: path.to_path_buf(),
            source: Arc::new(e),
        })?
        .decode()
        .map_err(|e| ImageDecodeError::Decode {
            path: path.to_path_buf(),
            source: Arc::new(e),
        })?;

    info!(path = %path.display(), width = image.width(), height = image.height(), "Image loaded");
    Ok(PickedImage {
        path: path.to_path_buf(),
        image: Arc::new(image),
    })
}

/// Show the OS file picker and decode the chosen image
#[cfg(feature = "gui")]
pub async fn pick_image() -> PickOutcome {
    let handle = rfd::AsyncFileDialog::new()
        .set_title("Select Image")
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
        .await;

    match handle {
        Some(file) => PickOutcome::Picked(load_image(file.path())),
        None => {
            info!("Image pick cancelled");
            PickOutcome::Cancelled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use std::io::Write;

    #[test]
    fn loads_png_from_disk() -> anyhow::Result<()> {
        let file = tempfile::Builder::new().suffix(".png").tempfile()?;
        ImageBuffer::from_fn(8, 6, |_, _| Rgb([0u8, 128u8, 255u8]))
            .save_with_format(file.path(), image::ImageFormat::Png)?;

        let picked = load_image(file.path())?;
        assert_eq!(picked.path, file.path());
        assert_eq!((picked.image.width(), picked.image.height()), (8, 6));
        Ok(())
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_image("no/such/image.png").unwrap_err();
        assert!(matches!(err, ImageDecodeError::Read { .. }));
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() -> anyhow::Result<()> {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile()?;
        file.write_all(b"definitely not a png")?;

        let err = load_image(file.path()).unwrap_err();
        assert!(matches!(err, ImageDecodeError::Decode { .. }));
        Ok(())
    }
}
