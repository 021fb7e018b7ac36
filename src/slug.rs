use deunicode::deunicode_char;

/// Derive a filesystem-safe identifier from a display name.
///
/// Accented letters are transliterated to ASCII ("Área" -> "area"), runs of
/// whitespace and punctuation collapse to a single underscore, edges are
/// trimmed, and the result is lowercased. Pathological names (all
/// punctuation, all whitespace, empty) fall back to `"distrito"`.
///
/// The output always matches `^[a-z0-9_]+$` and slugifying twice gives the
/// same result as slugifying once.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());

    for ch in value.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if ch.is_alphabetic() {
            for c in deunicode_char(ch).unwrap_or("").chars() {
                if c.is_ascii_alphanumeric() {
                    slug.push(c.to_ascii_lowercase());
                }
            }
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }

    let slug = slug.trim_matches('_');
    if slug.is_empty() {
        "distrito".to_string()
    } else {
        slug.to_string()
    }
}
