/// Derives the URL-safe slug for a topic title.
///
/// The title is lowercased and every maximal run of characters outside
/// `[a-z0-9]` collapses into a single hyphen. Leading and trailing hyphens are
/// dropped, so `"A!! B--C"` becomes `"a-b-c"`. Applying it to its own output
/// returns the same slug.
pub fn derive_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
