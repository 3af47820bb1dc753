use nom_exif::EntryValue;

/// Renders a decoded entry as a clean owned string.
///
/// The decoder's `Display` wraps text values in quotes; strip those along
/// with surrounding whitespace. An empty rendering counts as no value.
pub(crate) fn render_entry(value: &EntryValue) -> Option<String> {
    let rendered = value.to_string();
    let cleaned = rendered.trim().trim_matches('"').trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}
