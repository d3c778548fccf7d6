//! Deterministic transforms from free-text Figma labels to component
//! identifiers.

use crate::discover::IconNode;
use std::collections::HashMap;

/// Fallback identifier used when sanitization strips a label down to nothing.
pub const UNNAMED_ICON: &str = "UnnamedIcon";

/// Derive a PascalCase component identifier from a raw design label.
///
/// The label is split on every non-alphanumeric character; each segment's
/// first letter is upper-cased and the segments are concatenated. A leading
/// digit is escaped with `_` so the result is always a valid JS identifier.
pub fn component_name(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut start_of_segment = true;
    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() {
            if start_of_segment {
                out.push(ch.to_ascii_uppercase());
            } else {
                out.push(ch);
            }
            start_of_segment = false;
        } else {
            start_of_segment = true;
        }
    }

    if out.is_empty() {
        return UNNAMED_ICON.to_string();
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Light escape applied to raw labels before they are embedded in generated
/// output (`=` breaks the export syntax some consumers parse the barrel with).
pub fn escape_label(label: &str) -> String {
    label.replace('=', "-")
}

/// Disambiguate colliding derived names with numeric suffixes, in input
/// order, reporting every rename. The first icon to claim a name keeps it.
pub fn resolve_collisions(icons: &mut [IconNode]) {
    let mut taken: HashMap<String, String> = HashMap::with_capacity(icons.len());

    for icon in icons.iter_mut() {
        if let Some(kept_label) = taken.get(&icon.component_name) {
            let base = icon.component_name.clone();
            let mut suffix = 2u32;
            let mut candidate = format!("{base}{suffix}");
            while taken.contains_key(&candidate) {
                suffix += 1;
                candidate = format!("{base}{suffix}");
            }
            tracing::warn!(
                name = %base,
                kept = %kept_label,
                renamed = %icon.original_name,
                new_name = %candidate,
                "icon name collision; disambiguated with numeric suffix"
            );
            icon.component_name = candidate;
        }
        taken.insert(icon.component_name.clone(), icon.original_name.clone());
    }
}
