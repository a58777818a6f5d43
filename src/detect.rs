use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Raw,
    Png,
    Bmp,
    Tga,
    Tiff,
}

impl Format {
    /// Picks an output format from the extension of `path`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())?;

        match ext.as_str() {
            "raw" | "bin" | "data" => Some(Self::Raw),
            "png" => Some(Self::Png),
            "bmp" => Some(Self::Bmp),
            "tga" => Some(Self::Tga),
            "tif" | "tiff" => Some(Self::Tiff),
            _ => None,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Raw => write!(f, "raw"),
            Self::Png => write!(f, "png"),
            Self::Bmp => write!(f, "bmp"),
            Self::Tga => write!(f, "tga"),
            Self::Tiff => write!(f, "tiff"),
        }
    }
}
