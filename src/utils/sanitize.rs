//! Cleanup of editor-supplied strings.
//!
//! Rich text editors leave invisible formatting characters behind when
//! content is copy-pasted. They break key lookups and host parsing while
//! looking identical on screen.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::domain::entities::GENERIC_LINK;

/// Zero-width characters, the BOM, the word joiner, the Mongolian vowel
/// separator and bidirectional control marks (LRM/RLM, embeddings,
/// overrides, isolates).
static INVISIBLE_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[\u{200B}-\u{200F}\u{202A}-\u{202E}\u{2060}\u{2066}-\u{2069}\u{180E}\u{FEFF}]")
        .unwrap()
});

/// Removes invisible formatting characters, borrowing when there are none.
pub fn strip_invisible(input: &str) -> Cow<'_, str> {
    INVISIBLE_CHARS.replace_all(input, "")
}

/// Cleans a raw platform key.
///
/// Strips invisible characters and surrounding whitespace. Absent input,
/// or input that is empty once cleaned, becomes [`GENERIC_LINK`].
/// The result is never empty and `clean(Some(&clean(x))) == clean(x)`.
///
/// # Examples
///
/// ```
/// use social_links::utils::sanitize::clean;
///
/// assert_eq!(clean(Some("\u{200B}facebook\u{FEFF}")), "facebook");
/// assert_eq!(clean(Some("  ")), "genericLink");
/// assert_eq!(clean(None), "genericLink");
/// ```
pub fn clean(raw: Option<&str>) -> String {
    let stripped = strip_invisible(raw.unwrap_or_default());
    let trimmed = stripped.trim();

    if trimmed.is_empty() {
        GENERIC_LINK.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Like [`clean`], but keeps absence: returns `None` when nothing usable remains.
pub fn clean_optional(raw: Option<&str>) -> Option<String> {
    let stripped = strip_invisible(raw?);
    let trimmed = stripped.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
