use std::fs::File;
use std::io::Write;
use std::path::Path;

use bitflags::bitflags;

use crate::error::{Error, Result};
use crate::image_view::{Image, ImageView};

bitflags! {
    /// Operations a converter implements natively.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Features: u8 {
        /// Image to image conversion, see [`ImageConverter::export_to_image`].
        const CONVERT_IMAGE = 1 << 0;
        /// Encoding into an in-memory buffer, see [`ImageConverter::export_to_data`].
        const CONVERT_DATA = 1 << 1;
        /// Writing a file directly, see [`ImageConverter::export_to_file`].
        const CONVERT_FILE = 1 << 2;
    }
}

/// Converts an [`ImageView`] into another image, encoded bytes or a file.
///
/// Implementors declare what they support through [`features`](Self::features)
/// and override the matching `do_*` hooks. Callers go through the `export_*`
/// methods, which check the declared features before dispatching.
///
/// A converter that declares only [`Features::CONVERT_DATA`] gets file export
/// for free: the default [`do_export_to_file`](Self::do_export_to_file)
/// encodes into memory and writes the buffer out verbatim.
pub trait ImageConverter {
    fn features(&self) -> Features;

    /// Short name used in errors and logs.
    fn name(&self) -> &'static str;

    fn export_to_image(&self, image: &ImageView<'_>) -> Result<Image> {
        if !self.features().contains(Features::CONVERT_IMAGE) {
            return Err(unsupported(self.name(), "image conversion"));
        }
        tracing::debug!(converter = self.name(), size = %image.size(), "exporting to image");
        self.do_export_to_image(image)
    }

    fn export_to_data(&self, image: &ImageView<'_>) -> Result<Vec<u8>> {
        if !self.features().contains(Features::CONVERT_DATA) {
            return Err(unsupported(self.name(), "data export"));
        }
        tracing::debug!(converter = self.name(), size = %image.size(), "exporting to data");
        self.do_export_to_data(image)
    }

    fn export_to_file(&self, image: &ImageView<'_>, path: &Path) -> Result<()> {
        if !self
            .features()
            .intersects(Features::CONVERT_FILE | Features::CONVERT_DATA)
        {
            return Err(unsupported(self.name(), "file export"));
        }
        tracing::debug!(
            converter = self.name(),
            size = %image.size(),
            path = %path.display(),
            "exporting to file"
        );
        self.do_export_to_file(image, path)
    }

    fn do_export_to_image(&self, _image: &ImageView<'_>) -> Result<Image> {
        Err(unsupported(self.name(), "image conversion"))
    }

    fn do_export_to_data(&self, _image: &ImageView<'_>) -> Result<Vec<u8>> {
        Err(unsupported(self.name(), "data export"))
    }

    fn do_export_to_file(&self, image: &ImageView<'_>, path: &Path) -> Result<()> {
        if !self.features().contains(Features::CONVERT_DATA) {
            return Err(unsupported(self.name(), "file export"));
        }
        let data = self.export_to_data(image)?;
        write_file(path, &data)?;
        tracing::debug!(
            converter = self.name(),
            path = %path.display(),
            bytes = data.len(),
            "wrote exported data"
        );
        Ok(())
    }
}

fn unsupported(converter: &'static str, operation: &'static str) -> Error {
    Error::UnsupportedOperation {
        converter,
        operation,
    }
}

/// Creates or truncates `path` and writes `data` to it unchanged.
pub fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    Ok(())
}
