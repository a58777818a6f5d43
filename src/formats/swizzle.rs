use crate::converter::{Features, ImageConverter};
use crate::error::{Error, Result};
use crate::image_view::{Image, ImageView};
use crate::pixel::PixelFormat;

/// Swaps the red and blue channels, turning RGB(A) into BGR(A) and back.
pub struct ChannelSwapConverter;

impl ImageConverter for ChannelSwapConverter {
    fn features(&self) -> Features {
        Features::CONVERT_IMAGE
    }

    fn name(&self) -> &'static str {
        "swizzle"
    }

    fn do_export_to_image(&self, image: &ImageView<'_>) -> Result<Image> {
        let swapped = match image.format() {
            PixelFormat::Rgb => PixelFormat::Bgr,
            PixelFormat::Bgr => PixelFormat::Rgb,
            PixelFormat::Rgba => PixelFormat::Bgra,
            PixelFormat::Bgra => PixelFormat::Rgba,
            format => {
                return Err(Error::Conversion {
                    format: "swizzle",
                    message: format!("no red/blue channels to swap in {format}"),
                });
            }
        };

        let component = image.pixel_type().size();
        let mut data = image.pixels().to_vec();
        for pixel in data.chunks_exact_mut(image.pixel_size()) {
            // Red is the first component, blue the third.
            let (red, rest) = pixel.split_at_mut(component);
            red.swap_with_slice(&mut rest[component..2 * component]);
        }

        Image::new(swapped, image.pixel_type(), image.size(), data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_view::ImageSize;
    use crate::pixel::PixelType;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_rgba8_to_bgra8() {
        let data = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let view = ImageView::new(
            PixelFormat::Rgba,
            PixelType::UnsignedByte,
            ImageSize::new(2, 1),
            &data,
        )
        .unwrap();

        let swapped = ChannelSwapConverter.export_to_image(&view).unwrap();

        assert_eq!(swapped.format(), PixelFormat::Bgra);
        assert_eq!(swapped.data(), &[3, 2, 1, 4, 7, 6, 5, 8]);
    }

    #[rstest]
    fn test_bgr16_to_rgb16_keeps_component_bytes_together() {
        let data = [0xB0u8, 0xB1, 0x60, 0x61, 0xA0, 0xA1];
        let view = ImageView::new(
            PixelFormat::Bgr,
            PixelType::UnsignedShort,
            ImageSize::new(1, 1),
            &data,
        )
        .unwrap();

        let swapped = ChannelSwapConverter.export_to_image(&view).unwrap();

        assert_eq!(swapped.format(), PixelFormat::Rgb);
        assert_eq!(swapped.data(), &[0xA0, 0xA1, 0x60, 0x61, 0xB0, 0xB1]);
    }

    #[rstest]
    #[case::red(PixelFormat::Red)]
    #[case::rg(PixelFormat::Rg)]
    fn test_formats_without_blue(#[case] format: PixelFormat) {
        let data = [0u8; 2];
        let view =
            ImageView::new(format, PixelType::UnsignedByte, ImageSize::new(1, 1), &data).unwrap();

        let err = ChannelSwapConverter.export_to_image(&view).unwrap_err();

        assert!(matches!(err, Error::Conversion { format: "swizzle", .. }));
    }

    #[rstest]
    fn test_no_data_or_file_export() {
        let data = [0u8; 3];
        let view = ImageView::new(
            PixelFormat::Rgb,
            PixelType::UnsignedByte,
            ImageSize::new(1, 1),
            &data,
        )
        .unwrap();

        assert!(matches!(
            ChannelSwapConverter.export_to_data(&view),
            Err(Error::UnsupportedOperation { .. })
        ));
    }
}
