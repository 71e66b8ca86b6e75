//! Stylesheet backing the classes the controllers toggle.
//!
//! Ripples, entrance animations and the scrolled navbar shadow have no rules
//! in the page's own CSS; they ship with this crate and are appended to
//! `<head>` once at mount.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

/// `id` of the injected `<style>` element, used to avoid injecting twice.
pub const STYLE_ELEMENT_ID: &str = "storefront-fx-styles";

pub const ENHANCED_CSS: &str = r"
.btn {
    position: relative;
    overflow: hidden;
    transition: all 0.3s cubic-bezier(0.175, 0.885, 0.32, 1.275);
}

.ripple {
    position: absolute;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.3);
    transform: scale(0);
    animation: ripple-animation 0.6s linear;
    pointer-events: none;
}

@keyframes ripple-animation {
    to {
        transform: scale(4);
        opacity: 0;
    }
}

.animate-fade-up {
    animation: fadeInUp 0.8s ease-out forwards;
}

.animate-slide-left {
    animation: slideInLeft 0.8s ease-out forwards;
}

.animate-slide-right {
    animation: slideInRight 0.8s ease-out forwards;
}

.navbar.scrolled {
    box-shadow: 0 2px 20px var(--shadow-color);
}

.product-card {
    opacity: 0;
    transform: translateY(30px);
}

.product-card.animate-fade-up {
    opacity: 1;
    transform: translateY(0);
}

.category-card {
    opacity: 0;
    transform: scale(0.9);
}

.category-card.animate-fade-up {
    opacity: 1;
    transform: scale(1);
}

* {
    transition: all 0.3s cubic-bezier(0.175, 0.885, 0.32, 1.275);
}
";
