//! Built-in browser and feature detection variants.
//!
//! Browser checks rely on engine quirks and should be treated as a last
//! resort. `nojs` expects a `no-js` class on `<html>` that script removes,
//! and `flexgap` expects script to add a `flexgap` class when supported.

use std::sync::OnceLock;

use crate::variant::descriptor::VariantDescriptor;

static DEFAULTS: OnceLock<Vec<VariantDescriptor>> = OnceLock::new();

/// The built-in catalog, in registration order.
pub fn default_variants() -> &'static [VariantDescriptor] {
    DEFAULTS.get_or_init(build)
}

fn build() -> Vec<VariantDescriptor> {
    vec![
        // Browser detection
        VariantDescriptor::at_rule(
            "ie",
            "media",
            "all and (-ms-high-contrast: none), (-ms-high-contrast: active)",
        ),
        // Pre-Chromium Edge; the new Edge matches `chromium`.
        VariantDescriptor::at_rule("old-edge", "supports", "(-ms-ime-align: auto)"),
        VariantDescriptor::at_rule("firefox", "-moz-document", "url-prefix()"),
        VariantDescriptor::at_rule(
            "safari",
            "media",
            "not all and (min-resolution: 0.001dpcm)",
        ),
        VariantDescriptor::at_rule(
            "chromium",
            "media",
            "screen and (-webkit-min-device-pixel-ratio: 0) and (min-resolution: 0.001dpcm)",
        ),
        // Browser generations, by global support of recent CSS features.
        VariantDescriptor::at_rule(
            "modern",
            "supports",
            "(display: revert) \
             and (font-size: min(1em, 2em)) \
             and (font-size: max(1em, 2em)) \
             and (font-size: clamp(1em, 2em, 3em))",
        ),
        VariantDescriptor::at_rule(
            "egde",
            "supports",
            "(contain: content) \
             and (height: fit-content) \
             and (content-visibility: hidden) \
             and (contain-intrinsic-size: 1000px) \
             and (aspect-ratio: 1 / 1)",
        ),
        // Specific features
        VariantDescriptor::class("nojs").with("parentClassName", "no-js"),
        VariantDescriptor::class("flexgap"),
        VariantDescriptor::at_rule("var", "supports", "(color: var(--primary))"),
        VariantDescriptor::at_rule("grid", "supports", "(display: grid) and (gap: 1em)"),
        VariantDescriptor::at_rule("object-fit", "supports", "(object-fit: cover)"),
        VariantDescriptor::at_rule("clamp", "supports", "(font-size: clamp(1em, 2em, 3em))"),
        VariantDescriptor::at_rule("aspect", "supports", "(aspect-ratio: 1 / 1)"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::validate::validate;
    use std::collections::HashSet;

    #[test]
    fn every_default_is_valid() {
        for descriptor in default_variants() {
            assert!(
                validate(descriptor).is_ok(),
                "invalid default {}",
                descriptor.to_json()
            );
        }
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = default_variants()
            .iter()
            .filter_map(VariantDescriptor::name)
            .collect();
        assert_eq!(names.len(), default_variants().len());
    }

    #[test]
    fn catalog_is_initialized_once() {
        assert!(std::ptr::eq(default_variants(), default_variants()));
    }
}
