pub mod converter;
pub mod detect;
pub mod error;
pub mod formats;
pub mod image_view;
pub mod pixel;

pub use converter::{Features, ImageConverter};
pub use error::{Error, Result};
pub use image_view::{Image, ImageSize, ImageView};
pub use pixel::{PixelFormat, PixelType};
