#![forbid(unsafe_code)]

//! Slug rules binding card headings to modal element ids.
//!
//! The markup contract: a card's heading text, slugified and suffixed with
//! `-modal`, must equal the element id of the card's modal. The rule is
//! hyphen-preserving: whitespace runs collapse to a single hyphen and
//! existing hyphens pass through untouched.

/// Slugify heading text: lowercase, trimmed, internal whitespace runs
/// replaced by one hyphen each.
///
/// ```
/// # use pagelet_core::slug::slugify;
/// assert_eq!(slugify("Cloud  Hosting"), "cloud-hosting");
/// assert_eq!(slugify("  E-Mail Support "), "e-mail-support");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_gap = false;
    for ch in text.trim().chars() {
        if ch.is_whitespace() {
            pending_gap = true;
            continue;
        }
        if pending_gap {
            slug.push('-');
            pending_gap = false;
        }
        for lowered in ch.to_lowercase() {
            slug.push(lowered);
        }
    }
    slug
}

/// The modal element id for a heading: `slugify(text) + "-modal"`.
pub fn modal_slug(text: &str) -> String {
    let mut slug = slugify(text);
    slug.push_str("-modal");
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(slugify("Web   Design"), "web-design");
        assert_eq!(slugify("Web\t\nDesign"), "web-design");
    }

    #[test]
    fn preserves_existing_hyphens() {
        assert_eq!(slugify("E-Commerce"), "e-commerce");
        assert_eq!(modal_slug("E-Commerce"), "e-commerce-modal");
    }

    #[test]
    fn trims_edges() {
        assert_eq!(slugify("  Support  "), "support");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn modal_suffix() {
        assert_eq!(modal_slug("Cloud Hosting"), "cloud-hosting-modal");
    }

    proptest! {
        // Slugifying is idempotent: a slug re-slugified is unchanged.
        #[test]
        fn slugify_is_idempotent(text in "\\PC{0,40}") {
            let once = slugify(&text);
            prop_assert_eq!(slugify(&once), once);
        }

        // Output never contains whitespace or uppercase.
        #[test]
        fn slug_is_normalized(text in "\\PC{0,40}") {
            let slug = slugify(&text);
            prop_assert!(!slug.chars().any(char::is_whitespace));
            prop_assert!(!slug.chars().any(char::is_uppercase));
        }
    }
}
