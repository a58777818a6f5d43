/// Channel layout of a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    Red,
    Rg,
    Rgb,
    Rgba,
    Bgr,
    Bgra,
}

impl PixelFormat {
    pub const fn components(self) -> usize {
        match self {
            Self::Red => 1,
            Self::Rg => 2,
            Self::Rgb | Self::Bgr => 3,
            Self::Rgba | Self::Bgra => 4,
        }
    }
}

/// Storage type of a single pixel component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelType {
    UnsignedByte,
    Byte,
    UnsignedShort,
    Short,
    HalfFloat,
    UnsignedInt,
    Int,
    Float,
}

impl PixelType {
    pub const fn size(self) -> usize {
        match self {
            Self::UnsignedByte | Self::Byte => 1,
            Self::UnsignedShort | Self::Short | Self::HalfFloat => 2,
            Self::UnsignedInt | Self::Int | Self::Float => 4,
        }
    }
}

/// Bytes occupied by one pixel of the given format and component type.
pub const fn pixel_size(format: PixelFormat, ty: PixelType) -> usize {
    format.components() * ty.size()
}

impl std::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "R"),
            Self::Rg => write!(f, "RG"),
            Self::Rgb => write!(f, "RGB"),
            Self::Rgba => write!(f, "RGBA"),
            Self::Bgr => write!(f, "BGR"),
            Self::Bgra => write!(f, "BGRA"),
        }
    }
}

impl std::fmt::Display for PixelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsignedByte => write!(f, "u8"),
            Self::Byte => write!(f, "i8"),
            Self::UnsignedShort => write!(f, "u16"),
            Self::Short => write!(f, "i16"),
            Self::HalfFloat => write!(f, "f16"),
            Self::UnsignedInt => write!(f, "u32"),
            Self::Int => write!(f, "i32"),
            Self::Float => write!(f, "f32"),
        }
    }
}
