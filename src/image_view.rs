use crate::error::{Error, Result};
use crate::pixel::{PixelFormat, PixelType, pixel_size};

/// Width and height of an image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `None` if the count does not fit in `usize`.
    pub const fn pixel_count(self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Number of bytes a tightly packed image of this description occupies,
/// or `None` if that overflows `usize`.
pub const fn data_size(format: PixelFormat, ty: PixelType, size: ImageSize) -> Option<usize> {
    match size.pixel_count() {
        Some(count) => count.checked_mul(pixel_size(format, ty)),
        None => None,
    }
}

fn check_data_size(format: PixelFormat, ty: PixelType, size: ImageSize, actual: usize) -> Result<()> {
    match data_size(format, ty, size) {
        Some(expected) if actual >= expected => Ok(()),
        expected => Err(Error::ImageDataTooSmall {
            expected: expected.unwrap_or(usize::MAX),
            actual,
        }),
    }
}

/// Borrowed, tightly packed pixel data with its description.
///
/// The data slice may be longer than the image needs; only the leading
/// [`ImageView::data_size`] bytes belong to the pixels.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a> {
    format: PixelFormat,
    ty: PixelType,
    size: ImageSize,
    data: &'a [u8],
}

impl<'a> ImageView<'a> {
    pub fn new(format: PixelFormat, ty: PixelType, size: ImageSize, data: &'a [u8]) -> Result<Self> {
        check_data_size(format, ty, size, data.len())?;
        Ok(Self {
            format,
            ty,
            size,
            data,
        })
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn pixel_type(&self) -> PixelType {
        self.ty
    }

    pub fn size(&self) -> ImageSize {
        self.size
    }

    pub fn pixel_size(&self) -> usize {
        pixel_size(self.format, self.ty)
    }

    pub fn data_size(&self) -> usize {
        // Checked against the slice length on construction.
        data_size(self.format, self.ty, self.size).unwrap_or(usize::MAX)
    }

    /// The full borrowed slice, including any trailing bytes.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Just the bytes covered by the pixels.
    pub fn pixels(&self) -> &'a [u8] {
        &self.data[..self.data_size()]
    }
}

/// Owned counterpart of [`ImageView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    format: PixelFormat,
    ty: PixelType,
    size: ImageSize,
    data: Vec<u8>,
}

impl Image {
    pub fn new(format: PixelFormat, ty: PixelType, size: ImageSize, data: Vec<u8>) -> Result<Self> {
        check_data_size(format, ty, size, data.len())?;
        Ok(Self {
            format,
            ty,
            size,
            data,
        })
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn pixel_type(&self) -> PixelType {
        self.ty
    }

    pub fn size(&self) -> ImageSize {
        self.size
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn as_view(&self) -> ImageView<'_> {
        // Length was checked on construction and the fields are private.
        ImageView {
            format: self.format,
            ty: self.ty,
            size: self.size,
            data: &self.data,
        }
    }
}

impl From<ImageView<'_>> for Image {
    fn from(view: ImageView<'_>) -> Self {
        Self {
            format: view.format,
            ty: view.ty,
            size: view.size,
            data: view.pixels().to_vec(),
        }
    }
}
