use std::io::Cursor;
use std::path::Path;

use image::{ColorType, DynamicImage, ImageFormat};

use crate::converter::{Features, ImageConverter};
use crate::detect::Format;
use crate::error::{Error, Result};
use crate::image_view::{Image, ImageSize, ImageView};
use crate::pixel::{PixelFormat, PixelType};

/// Encodes through the `image` crate, both in memory and straight to disk.
pub struct ImageCrateConverter {
    format: ImageFormat,
    name: &'static str,
}

impl ImageCrateConverter {
    pub fn new(format: Format) -> Result<Self> {
        let (format, name) = match format {
            Format::Png => (ImageFormat::Png, "png"),
            Format::Bmp => (ImageFormat::Bmp, "bmp"),
            Format::Tga => (ImageFormat::Tga, "tga"),
            Format::Tiff => (ImageFormat::Tiff, "tiff"),
            Format::Raw => return Err(Error::UnsupportedFormat(format.to_string())),
        };
        Ok(Self { format, name })
    }

    fn color_type(&self, image: &ImageView<'_>) -> Result<ColorType> {
        use PixelFormat as F;
        use PixelType as T;

        match (image.format(), image.pixel_type()) {
            (F::Red, T::UnsignedByte) => Ok(ColorType::L8),
            (F::Rg, T::UnsignedByte) => Ok(ColorType::La8),
            (F::Rgb, T::UnsignedByte) => Ok(ColorType::Rgb8),
            (F::Rgba, T::UnsignedByte) => Ok(ColorType::Rgba8),
            (F::Red, T::UnsignedShort) => Ok(ColorType::L16),
            (F::Rg, T::UnsignedShort) => Ok(ColorType::La16),
            (F::Rgb, T::UnsignedShort) => Ok(ColorType::Rgb16),
            (F::Rgba, T::UnsignedShort) => Ok(ColorType::Rgba16),
            (F::Rgb, T::Float) => Ok(ColorType::Rgb32F),
            (F::Rgba, T::Float) => Ok(ColorType::Rgba32F),
            (format, ty) => Err(Error::Conversion {
                format: self.name,
                message: format!("unsupported pixel layout {format} {ty}"),
            }),
        }
    }

    fn map_error(&self, err: image::ImageError) -> Error {
        match err {
            image::ImageError::IoError(e) => Error::Io(e),
            other => Error::Conversion {
                format: self.name,
                message: other.to_string(),
            },
        }
    }
}

impl ImageConverter for ImageCrateConverter {
    fn features(&self) -> Features {
        Features::CONVERT_DATA | Features::CONVERT_FILE
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn do_export_to_data(&self, image: &ImageView<'_>) -> Result<Vec<u8>> {
        let color = self.color_type(image)?;
        let size = image.size();
        let mut out = Cursor::new(Vec::new());
        image::write_buffer_with_format(
            &mut out,
            image.pixels(),
            size.width,
            size.height,
            color,
            self.format,
        )
        .map_err(|e| self.map_error(e))?;
        Ok(out.into_inner())
    }

    fn do_export_to_file(&self, image: &ImageView<'_>, path: &Path) -> Result<()> {
        let color = self.color_type(image)?;
        let size = image.size();
        image::save_buffer_with_format(
            path,
            image.pixels(),
            size.width,
            size.height,
            color,
            self.format,
        )
        .map_err(|e| self.map_error(e))
    }
}

/// Decodes any supported container into an owned [`Image`].
///
/// Color types without a [`PixelFormat`] counterpart are converted to RGBA8.
pub fn decode(input: &[u8]) -> Result<Image> {
    let reader = image::ImageReader::new(Cursor::new(input))
        .with_guessed_format()
        .map_err(|e| Error::Conversion {
            format: "image",
            message: e.to_string(),
        })?;

    let img = reader.decode().map_err(|e| Error::Conversion {
        format: "image",
        message: e.to_string(),
    })?;

    let (img, (format, ty)) = match pixel_layout(img.color()) {
        Some(layout) => (img, layout),
        None => (
            DynamicImage::ImageRgba8(img.to_rgba8()),
            (PixelFormat::Rgba, PixelType::UnsignedByte),
        ),
    };

    let size = ImageSize::new(img.width(), img.height());
    tracing::debug!(%size, %format, %ty, "decoded input image");
    Image::new(format, ty, size, img.into_bytes())
}

fn pixel_layout(color: ColorType) -> Option<(PixelFormat, PixelType)> {
    match color {
        ColorType::L8 => Some((PixelFormat::Red, PixelType::UnsignedByte)),
        ColorType::La8 => Some((PixelFormat::Rg, PixelType::UnsignedByte)),
        ColorType::Rgb8 => Some((PixelFormat::Rgb, PixelType::UnsignedByte)),
        ColorType::Rgba8 => Some((PixelFormat::Rgba, PixelType::UnsignedByte)),
        ColorType::L16 => Some((PixelFormat::Red, PixelType::UnsignedShort)),
        ColorType::La16 => Some((PixelFormat::Rg, PixelType::UnsignedShort)),
        ColorType::Rgb16 => Some((PixelFormat::Rgb, PixelType::UnsignedShort)),
        ColorType::Rgba16 => Some((PixelFormat::Rgba, PixelType::UnsignedShort)),
        ColorType::Rgb32F => Some((PixelFormat::Rgb, PixelType::Float)),
        ColorType::Rgba32F => Some((PixelFormat::Rgba, PixelType::Float)),
        _ => None,
    }
}
