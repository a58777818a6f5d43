#[cfg(feature = "image")]
pub mod image;
pub mod raw;
pub mod swizzle;

use crate::converter::ImageConverter;
use crate::detect::Format;

pub fn get_converter(format: Format) -> crate::error::Result<Box<dyn ImageConverter>> {
    match format {
        Format::Raw => Ok(Box::new(raw::RawConverter)),

        #[cfg(feature = "image")]
        Format::Png | Format::Bmp | Format::Tga | Format::Tiff => {
            Ok(Box::new(image::ImageCrateConverter::new(format)?))
        }
        #[cfg(not(feature = "image"))]
        Format::Png | Format::Bmp | Format::Tga | Format::Tiff => {
            Err(crate::error::Error::FeatureDisabled("image".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::Features;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_raw_is_always_available() {
        let converter = get_converter(Format::Raw).unwrap();
        assert_eq!(converter.name(), "raw");
        assert_eq!(converter.features(), Features::CONVERT_DATA);
    }

    #[cfg(feature = "image")]
    #[rstest]
    #[case::png(Format::Png, "png")]
    #[case::tiff(Format::Tiff, "tiff")]
    fn test_image_formats(#[case] format: Format, #[case] name: &str) {
        let converter = get_converter(format).unwrap();
        assert_eq!(converter.name(), name);
        assert!(converter.features().contains(Features::CONVERT_FILE));
    }

    #[cfg(not(feature = "image"))]
    #[rstest]
    fn test_image_formats_need_feature() {
        assert!(matches!(
            get_converter(Format::Png),
            Err(crate::error::Error::FeatureDisabled(_))
        ));
    }
}
