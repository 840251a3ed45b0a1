//! Body previews for the debug log
//!
//! Object downloads may be large or binary. Only a short, printable prefix of
//! a response body is ever logged.

/// Maximum number of characters shown in a preview.
const PREVIEW_CHARS: usize = 256;

/// Printable preview of a response body.
///
/// Bodies of up to `PREVIEW_CHARS` characters are returned as is. Longer ones
/// are cut at a character boundary and suffixed with the total byte count.
/// Invalid UTF-8 is replaced and control characters other than whitespace are
/// shown as `.`.
pub fn body_preview(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let mut chars = text.chars();
    let mut preview: String = chars
        .by_ref()
        .take(PREVIEW_CHARS)
        .map(|c| {
            if c.is_control() && !c.is_whitespace() {
                '.'
            } else {
                c
            }
        })
        .collect();

    if chars.next().is_some() {
        preview.push_str(&format!("... [{} bytes]", body.len()));
    }
    preview
}
