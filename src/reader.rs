use crate::error::ExtractError;
use crate::field::FieldKey;
use crate::timestamp::Timestamp;
use crate::utils::render_entry;
use nom_exif::{Exif, ExifIter, MediaParser, MediaSource};
use std::path::Path;

/// Reads single metadata fields out of image files.
///
/// All decoding is delegated to the external decoder: the reader opens the
/// resource by path, has the decoder parse every embedded field, looks one
/// field up by key and hands back an owned string rendering. The file handle
/// and parse buffers are scoped to the call and released on every exit path.
///
/// **Note:** read methods take `&mut self` because the underlying parser
/// reuses its internal buffers between calls. No semantic state survives a
/// call; two reads of an unchanged file return equal strings.
pub struct MetadataReader {
    parser: MediaParser,
}

impl MetadataReader {
    pub fn new() -> Self {
        Self {
            parser: MediaParser::new(),
        }
    }

    /// Reads one field and renders its value as an owned string.
    ///
    /// The string aliases nothing inside the decoder and stays valid after
    /// the decoder's resources are gone. No validation happens before
    /// delegating: a missing or undecodable file surfaces as
    /// [`ExtractError::Decode`], a file whose metadata lacks the field as
    /// [`ExtractError::FieldMissing`].
    ///
    /// # Example
    /// ```no_run
    /// # use exifstamp::{ExtractError, FieldKey, MetadataReader};
    /// # use std::path::Path;
    /// # fn main() -> Result<(), ExtractError> {
    /// let mut reader = MetadataReader::new();
    /// let make = reader.read_field(Path::new("photo.jpg"), FieldKey::Make)?;
    /// println!("Make: {make}");
    /// # Ok(())
    /// # }
    /// ```
    pub fn read_field(&mut self, path: &Path, key: FieldKey) -> Result<String, ExtractError> {
        let source = MediaSource::file_path(path)?;
        let iter: ExifIter = self.parser.parse(source)?;
        let exif: Exif = iter.into();

        let value = exif.get(key.tag()).ok_or_else(|| ExtractError::FieldMissing {
            file: path.to_path_buf(),
            key: key.name().to_string(),
        })?;

        render_entry(value).ok_or_else(|| ExtractError::FieldMissing {
            file: path.to_path_buf(),
            key: key.name().to_string(),
        })
    }

    /// Reads the capture/modification timestamp (`Exif.Image.DateTime`).
    ///
    /// # Example
    /// ```no_run
    /// # use exifstamp::{ExtractError, MetadataReader};
    /// # use std::path::Path;
    /// # fn main() -> Result<(), ExtractError> {
    /// let mut reader = MetadataReader::new();
    /// let taken = reader.read_timestamp(Path::new("photo.jpg"))?;
    /// println!("Taken: {taken}");
    /// # Ok(())
    /// # }
    /// ```
    pub fn read_timestamp(&mut self, path: &Path) -> Result<String, ExtractError> {
        self.read_field(path, FieldKey::DateTime)
    }

    /// Reads the timestamp and guesses its shape, for callers that want the
    /// date and time rather than the decoder's rendering.
    pub fn read_timestamp_parsed(&mut self, path: &Path) -> Result<Timestamp, ExtractError> {
        Ok(Timestamp::parse(&self.read_timestamp(path)?))
    }
}

impl Default for MetadataReader {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot timestamp read with every failure collapsed into `None`.
///
/// This is the contract the C ABI exposes: the caller learns value vs. no
/// value and nothing else — a missing file, an undecodable image and an
/// absent timestamp field are indistinguishable. The discarded error is
/// logged at debug level.
pub fn extract_timestamp(path: &Path) -> Option<String> {
    match MetadataReader::new().read_timestamp(path) {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("timestamp extraction failed for {}: {err}", path.display());
            None
        }
    }
}
