//! # exifstamp
//!
//! Reads the capture timestamp out of an image file's Exif metadata and
//! returns it as an owned string — including to callers in other runtimes,
//! through a small C ABI.
//!
//! All metadata decoding (TIFF/IFD structure, tag dictionaries, byte order)
//! is owned by the external decoder this crate wraps; exifstamp is the
//! extraction boundary around it: open by path, parse everything, look one
//! field up, hand back an independently owned string.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use exifstamp::{ExtractError, FieldKey, MetadataReader, Timestamp};
//! use std::path::Path;
//!
//! fn main() -> Result<(), ExtractError> {
//!     let mut reader = MetadataReader::new();
//!     let path = Path::new("path/to/your/image.jpg");
//!
//!     // The decoder's rendering of Exif.Image.DateTime
//!     let taken = reader.read_timestamp(path)?;
//!     println!("Taken: {taken}");
//!
//!     // Parsed into date and time
//!     let ts: Timestamp = reader.read_timestamp_parsed(path)?;
//!     println!("Date: {:?}, time: {:?}", ts.date(), ts.time());
//!
//!     // Any other supported field, by its qualified key
//!     let make = reader.read_field(path, FieldKey::parse("Exif.Image.Make")?)?;
//!     println!("Make: {make}");
//!
//!     Ok(())
//! }
//! ```
//!
//! Callers that only want the original one-bit outcome — a value or nothing,
//! no failure detail — use the collapsed form:
//!
//! ```no_run
//! use std::path::Path;
//!
//! match exifstamp::extract_timestamp(Path::new("image.jpg")) {
//!     Some(taken) => println!("Taken: {taken}"),
//!     None => println!("no timestamp"),
//! }
//! ```
//!
//! The same collapsed contract is what crosses the C ABI; see [`ffi`] for
//! the entry point and the ownership rules of the returned string.

// Public API
mod error;
mod field;
mod reader;
mod timestamp;

pub use error::ExtractError;
pub use field::FieldKey;
pub use reader::{extract_timestamp, MetadataReader};
pub use timestamp::Timestamp;

pub mod ffi;

mod utils;
