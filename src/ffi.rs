//! C ABI for embedding in other runtimes.
//!
//! The boundary is deliberately one bit wide: the caller gets an owned,
//! null-terminated timestamp string or the null sentinel, with no failure
//! detail — a missing file, an undecodable image, an absent timestamp field
//! and a decoder fault all look the same from the far side. Diagnostics stay
//! on this side of the fence, at debug log level.
//!
//! Ownership contract: the callee allocates, the caller frees — exactly
//! once, through [`exifstamp_string_free`], and never the sentinel.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::ptr;

use crate::reader::extract_timestamp;

/// Path bytes are opaque to the call: on Unix they pass straight through,
/// elsewhere they must be valid UTF-8.
fn path_from_bytes(bytes: &[u8]) -> Option<PathBuf> {
    #[cfg(unix)]
    {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        Some(PathBuf::from(OsStr::from_bytes(bytes)))
    }
    #[cfg(not(unix))]
    {
        std::str::from_utf8(bytes).ok().map(PathBuf::from)
    }
}

/// Reads the capture timestamp of the image at `path`.
///
/// Returns an owned, null-terminated string with the decoder's rendering of
/// the `Exif.Image.DateTime` field, or null if the file cannot be opened or
/// decoded, carries no timestamp, or the decoder faults. Release non-null
/// results with [`exifstamp_string_free`].
///
/// # Safety
/// `path` must be null or point to a valid null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn exifstamp_read_timestamp(path: *const c_char) -> *mut c_char {
    if path.is_null() {
        return ptr::null_mut();
    }
    let bytes = CStr::from_ptr(path).to_bytes();
    let Some(path) = path_from_bytes(bytes) else {
        return ptr::null_mut();
    };

    // A decoder panic must not unwind into foreign stack frames.
    let value = match panic::catch_unwind(AssertUnwindSafe(|| extract_timestamp(&path))) {
        Ok(value) => value,
        Err(_) => {
            log::debug!("metadata decoder panicked for {}", path.display());
            None
        }
    };

    match value {
        // A rendering with an interior NUL cannot cross a C string boundary.
        Some(value) => CString::new(value)
            .map(CString::into_raw)
            .unwrap_or(ptr::null_mut()),
        None => ptr::null_mut(),
    }
}

/// Releases a string returned by [`exifstamp_read_timestamp`].
///
/// Null is a no-op; anything else must be released exactly once, and only
/// through this entry point.
///
/// # Safety
/// `ptr` must be null or a pointer obtained from
/// [`exifstamp_read_timestamp`] that has not been released yet.
#[no_mangle]
pub unsafe extern "C" fn exifstamp_string_free(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    drop(CString::from_raw(ptr));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_helpers::{fake_jpeg, jpeg_with_fields, DATETIME};
    use crate::MetadataReader;
    use std::ffi::CString;

    fn c_path(path: &std::path::Path) -> CString {
        CString::new(path.to_str().unwrap()).unwrap()
    }

    #[test]
    fn returns_owned_copy_of_library_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = jpeg_with_fields(dir.path(), "image.jpg", &[(DATETIME, "2017:08:01 16:20:43")]);
        let expected = MetadataReader::new().read_timestamp(&path).unwrap();

        let c_path = c_path(&path);
        let raw = unsafe { exifstamp_read_timestamp(c_path.as_ptr()) };
        assert!(!raw.is_null());

        let value = unsafe { CStr::from_ptr(raw) }.to_str().unwrap().to_string();
        assert_eq!(value, expected);

        // The string must stay usable until explicitly released.
        assert_eq!(unsafe { CStr::from_ptr(raw) }.to_str().unwrap(), expected);
        unsafe { exifstamp_string_free(raw) };
    }

    #[test]
    fn missing_file_yields_sentinel() {
        let c_path = CString::new("no/such/image.jpg").unwrap();
        let raw = unsafe { exifstamp_read_timestamp(c_path.as_ptr()) };
        assert!(raw.is_null());
    }

    #[test]
    fn null_path_yields_sentinel() {
        let raw = unsafe { exifstamp_read_timestamp(ptr::null()) };
        assert!(raw.is_null());
    }

    #[test]
    fn non_image_yields_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let path = fake_jpeg(dir.path(), "fake.jpg");
        let c_path = c_path(&path);
        let raw = unsafe { exifstamp_read_timestamp(c_path.as_ptr()) };
        assert!(raw.is_null());
    }

    #[test]
    fn repeated_calls_agree() {
        let dir = tempfile::tempdir().unwrap();
        let path = jpeg_with_fields(dir.path(), "image.jpg", &[(DATETIME, "2017:08:01 16:20:43")]);
        let c_path = c_path(&path);

        let first = unsafe { exifstamp_read_timestamp(c_path.as_ptr()) };
        let second = unsafe { exifstamp_read_timestamp(c_path.as_ptr()) };
        assert!(!first.is_null() && !second.is_null());
        assert_ne!(first, second, "each call must allocate its own string");
        assert_eq!(unsafe { CStr::from_ptr(first) }, unsafe {
            CStr::from_ptr(second)
        });

        unsafe { exifstamp_string_free(first) };
        unsafe { exifstamp_string_free(second) };
    }

    #[test]
    fn freeing_null_is_a_no_op() {
        unsafe { exifstamp_string_free(ptr::null_mut()) };
    }

    #[test]
    fn failure_loop_holds_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let good = jpeg_with_fields(dir.path(), "good.jpg", &[(DATETIME, "2017:08:01 16:20:43")]);
        let fake = fake_jpeg(dir.path(), "fake.jpg");
        let good_c = c_path(&good);
        let fake_c = c_path(&fake);
        let missing_c = CString::new(dir.path().join("missing.jpg").to_str().unwrap().to_string())
            .unwrap();

        for _ in 0..256 {
            let raw = unsafe { exifstamp_read_timestamp(good_c.as_ptr()) };
            assert!(!raw.is_null());
            unsafe { exifstamp_string_free(raw) };

            assert!(unsafe { exifstamp_read_timestamp(fake_c.as_ptr()) }.is_null());
            assert!(unsafe { exifstamp_read_timestamp(missing_c.as_ptr()) }.is_null());
        }
    }
}
