use std::path::PathBuf;
use thiserror::Error;

/// Typed failure modes for same-runtime callers.
///
/// The C ABI in [`crate::ffi`] does not expose this taxonomy: there every
/// variant collapses into the null sentinel.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("metadata decode failed: {0}")]
    Decode(#[from] nom_exif::Error),

    #[error("unsupported field key: {key}")]
    UnsupportedKey { key: String },

    #[error("field not present. file={}, key={key}", file.display())]
    FieldMissing { file: PathBuf, key: String },
}
