//! URL slugs for category labels and ids.
//!
//! Every filter state and every open overlay is a directory in the output
//! tree, so labels like `"Behind the Scenes"` need a path-safe form:
//!
//! - `"Theatre Play"` → `"theatre-play"`
//! - `"Behind the Scenes"` → `"behind-the-scenes"`
//! - `"Q&A  Night!"` → `"q-a-night"`
//! - `"नुक्कड़ नाटक"` → `"नुक्कड़-नाटक"`
//!
//! Letters outside ASCII are kept (lowercased where the script has case),
//! so a category in any script still gets a non-empty slug. Whitespace,
//! ASCII punctuation and the Latin-1, general and CJK punctuation blocks
//! act as separators.
//!
//! The sentinel [`ALL`] is reserved for the inactive criterion.

/// Slug of the inactive ("All") criterion.
pub const ALL: &str = "all";

/// Lowercased word characters, with every run of separators collapsed to a
/// single dash. Leading and trailing dashes are dropped.
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut pending_dash = false;
    for c in label.chars() {
        if is_word_char(c) {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Combining marks (virama, nukta, accents) count as word characters, which
/// is why this is not `char::is_alphanumeric`.
fn is_word_char(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric();
    }
    !(c.is_whitespace()
        || c.is_control()
        || matches!(c, '\u{00A0}'..='\u{00BF}' | '\u{00D7}' | '\u{00F7}')
        || matches!(c, '\u{2000}'..='\u{206F}' | '\u{3000}'..='\u{303F}'))
}
