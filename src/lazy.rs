//! Deferred image loading and resource preload hints.

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;

/// Images whose real source waits in `data-src`.
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const STAGING_ATTRIBUTE: &str = "data-src";
pub const LAZY_CLASS: &str = "lazy";

/// A `<link rel="preload">` to append to `<head>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreloadHint {
    pub href: &'static str,
    pub kind: &'static str,
}

/// Resources the page needs early.
pub const PRELOAD_HINTS: &[PreloadHint] = &[PreloadHint {
    href: "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css",
    kind: "style",
}];

/// Source to load for an image whose staging attribute holds `data_src`.
///
/// Blank staging values are skipped so the image does not swap to an empty
/// `src`.
#[must_use]
pub fn lazy_source(data_src: Option<&str>) -> Option<&str> {
    data_src.map(str::trim).filter(|src| !src.is_empty())
}
