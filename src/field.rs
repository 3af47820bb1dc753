use crate::error::ExtractError;
use nom_exif::ExifTag;
use std::fmt;
use std::str::FromStr;

/// A namespace-qualified metadata field key, e.g. `Exif.Image.DateTime`.
///
/// Only the keys this crate knows how to look up are representable. The tag
/// dictionary itself (ids, formats, byte layout) stays inside the decoder;
/// a key is just a stable name mapped onto one of the decoder's tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    /// `Exif.Image.DateTime` — the capture/modification timestamp.
    DateTime,
    /// `Exif.Photo.DateTimeOriginal`
    DateTimeOriginal,
    /// `Exif.Photo.DateTimeDigitized`
    DateTimeDigitized,
    /// `Exif.Image.Make`
    Make,
    /// `Exif.Image.Model`
    Model,
    /// `Exif.Image.Software`
    Software,
    /// `Exif.Image.ImageDescription`
    ImageDescription,
    /// `Exif.Image.Orientation`
    Orientation,
    /// `Exif.Photo.UserComment`
    UserComment,
}

impl FieldKey {
    /// Resolves a dotted key name. Unknown names are an [`ExtractError::UnsupportedKey`].
    pub fn parse(name: &str) -> Result<Self, ExtractError> {
        match name {
            "Exif.Image.DateTime" => Ok(Self::DateTime),
            "Exif.Photo.DateTimeOriginal" => Ok(Self::DateTimeOriginal),
            "Exif.Photo.DateTimeDigitized" => Ok(Self::DateTimeDigitized),
            "Exif.Image.Make" => Ok(Self::Make),
            "Exif.Image.Model" => Ok(Self::Model),
            "Exif.Image.Software" => Ok(Self::Software),
            "Exif.Image.ImageDescription" => Ok(Self::ImageDescription),
            "Exif.Image.Orientation" => Ok(Self::Orientation),
            "Exif.Photo.UserComment" => Ok(Self::UserComment),
            _ => Err(ExtractError::UnsupportedKey {
                key: name.to_string(),
            }),
        }
    }

    /// The fully-qualified dotted name of this key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DateTime => "Exif.Image.DateTime",
            Self::DateTimeOriginal => "Exif.Photo.DateTimeOriginal",
            Self::DateTimeDigitized => "Exif.Photo.DateTimeDigitized",
            Self::Make => "Exif.Image.Make",
            Self::Model => "Exif.Image.Model",
            Self::Software => "Exif.Image.Software",
            Self::ImageDescription => "Exif.Image.ImageDescription",
            Self::Orientation => "Exif.Image.Orientation",
            Self::UserComment => "Exif.Photo.UserComment",
        }
    }

    /// The decoder-side tag this key resolves to.
    pub(crate) fn tag(&self) -> ExifTag {
        match self {
            Self::DateTime => ExifTag::ModifyDate,
            Self::DateTimeOriginal => ExifTag::DateTimeOriginal,
            Self::DateTimeDigitized => ExifTag::CreateDate,
            Self::Make => ExifTag::Make,
            Self::Model => ExifTag::Model,
            Self::Software => ExifTag::Software,
            Self::ImageDescription => ExifTag::ImageDescription,
            Self::Orientation => ExifTag::Orientation,
            Self::UserComment => ExifTag::UserComment,
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldKey {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
