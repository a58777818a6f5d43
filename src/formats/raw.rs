use crate::converter::{Features, ImageConverter};
use crate::error::Result;
use crate::image_view::ImageView;

/// Dumps the tightly packed pixel bytes, with no header.
///
/// Only in-memory export is implemented; writing files goes through the
/// generic data-to-file path of [`ImageConverter`].
pub struct RawConverter;

impl ImageConverter for RawConverter {
    fn features(&self) -> Features {
        Features::CONVERT_DATA
    }

    fn name(&self) -> &'static str {
        "raw"
    }

    fn do_export_to_data(&self, image: &ImageView<'_>) -> Result<Vec<u8>> {
        Ok(image.pixels().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_view::ImageSize;
    use crate::pixel::{PixelFormat, PixelType};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_exports_pixels_only() {
        let data = [1u8, 2, 3, 4, 5, 6, 0xAA, 0xBB];
        let image = ImageView::new(
            PixelFormat::Rgb,
            PixelType::UnsignedByte,
            ImageSize::new(2, 1),
            &data,
        )
        .unwrap();

        assert_eq!(
            RawConverter.export_to_data(&image).unwrap(),
            vec![1, 2, 3, 4, 5, 6]
        );
    }

    #[rstest]
    fn test_file_goes_through_data_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.raw");
        let data: Vec<u8> = (0..16).collect();
        let image = ImageView::new(
            PixelFormat::Rg,
            PixelType::UnsignedShort,
            ImageSize::new(2, 2),
            &data,
        )
        .unwrap();

        RawConverter.export_to_file(&image, &path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), data);
    }
}
