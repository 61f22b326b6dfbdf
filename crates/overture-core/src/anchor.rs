//! In-page anchor link resolution.
//!
//! Fragment links (`href="#section"`) animate-scroll to their target
//! instead of jump-scrolling. Default navigation is suppressed even when
//! the target does not exist; a default jump to a missing fragment is
//! already a no-op, so uniform suppression keeps the handler single-shaped.

/// What to do with an activated link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorAction {
    /// Suppress the default jump and animate-scroll to this element id
    SmoothScroll(String),
    /// Suppress the default jump; target missing or fragment empty
    Suppress,
    /// Not a fragment link; leave it alone
    PassThrough,
}

/// Classify an href, asking `target_exists` only for well-formed fragments.
pub fn resolve<F>(href: &str, target_exists: F) -> AnchorAction
where
    F: FnOnce(&str) -> bool,
{
    let Some(id) = href.strip_prefix('#') else {
        return AnchorAction::PassThrough;
    };
    if id.is_empty() {
        return AnchorAction::Suppress;
    }
    if target_exists(id) {
        AnchorAction::SmoothScroll(id.to_string())
    } else {
        AnchorAction::Suppress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_target_scrolls() {
        let action = resolve("#features", |id| id == "features");
        assert_eq!(action, AnchorAction::SmoothScroll("features".to_string()));
    }

    #[test]
    fn test_missing_target_suppressed_without_error() {
        let action = resolve("#missing", |_| false);
        assert_eq!(action, AnchorAction::Suppress);
    }

    #[test]
    fn test_bare_hash_suppressed() {
        assert_eq!(resolve("#", |_| true), AnchorAction::Suppress);
    }

    #[test]
    fn test_external_link_passes_through() {
        assert_eq!(
            resolve("https://example.com", |_| true),
            AnchorAction::PassThrough
        );
        assert_eq!(resolve("/about", |_| true), AnchorAction::PassThrough);
    }
}
