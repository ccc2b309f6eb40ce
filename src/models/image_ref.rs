use std::path::PathBuf;

/// Normalized media kind for a gallery image, detected from the file
/// extension. No decoding is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Gif,
    Jpeg,
    Png,
    Webp,
    Bmp,
    Tiff,
}

impl MediaKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "gif" => Some(Self::Gif),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "webp" => Some(Self::Webp),
            "bmp" => Some(Self::Bmp),
            "tiff" | "tif" => Some(Self::Tiff),
            _ => None,
        }
    }

    /// MIME-like type string, e.g. `image/gif`.
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Gif => "image/gif",
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
            Self::Bmp => "image/bmp",
            Self::Tiff => "image/tiff",
        }
    }

    pub fn is_gif(&self) -> bool {
        matches!(self, Self::Gif)
    }
}

/// Immutable descriptor of one image in a gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// File name without the directory component.
    pub name: String,
    /// Where the image content lives.
    pub path: PathBuf,
    pub kind: MediaKind,
    /// Last modification time, epoch millis.
    pub modified: i64,
    /// File size in bytes. Carried for collaborators; unused by the reader.
    pub size: i64,
}

impl ImageRef {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, kind: MediaKind) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind,
            modified: 0,
            size: 0,
        }
    }

    /// The file name with its final `.ext` suffix stripped.
    ///
    /// A name whose only dot is the leading one ("." files) strips to the
    /// empty string; a name without any extension is returned unchanged.
    pub fn stem(&self) -> &str {
        match self.name.rsplit_once('.') {
            Some((before, after)) if !after.is_empty() => before,
            _ => &self.name,
        }
    }
}
