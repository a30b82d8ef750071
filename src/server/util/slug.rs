//! URL slugs for resorts.

/// Slug used when a name contains no letters or digits
pub const FALLBACK_SLUG: &str = "resort";

/// Lower-cases `name` and joins its alphanumeric runs with single dashes.
///
/// Applying `slugify` to its own output returns the same string.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase().filter(|c| c.is_alphanumeric()));
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        return FALLBACK_SLUG.to_string();
    }

    slug
}

/// Appends `-n` for the `n`th collision of the same base slug, starting at 2
pub fn numbered_slug(base: &str, n: u32) -> String {
    if n < 2 {
        return base.to_string();
    }

    format!("{}-{}", base, n)
}
