//! In-page anchor resolution for smooth scrolling.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Selector for an anchor `href`, if it points inside the page.
///
/// Only non-empty fragments (`#pricing`) are selectors; bare `#`, absolute
/// URLs and relative paths are left alone.
#[must_use]
pub fn anchor_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() || fragment.contains(char::is_whitespace) {
        return None;
    }
    Some(href)
}

/// Window scroll position that puts `offset_top` just below the fixed navbar.
#[must_use]
pub fn scroll_target(offset_top: f64, navbar_offset: f64) -> f64 {
    offset_top - navbar_offset
}
