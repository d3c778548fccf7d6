//! Lowering of raw SVG markup to JSX.
//!
//! The root `<svg>` tag is rewritten to bind the component's runtime props
//! (`size`, `color`, passthrough attributes); the rest of the markup is kept
//! as downloaded, with kebab-case and namespaced presentation attributes
//! camelCased so the body parses as JSX.

use crate::error::Error;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Default rendered size injected into the generated component signature.
pub const DEFAULT_SIZE: u32 = 24;

/// Default fill, inheriting the surrounding text color.
pub const DEFAULT_COLOR: &str = "currentColor";

static ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([A-Za-z_][A-Za-z0-9_:-]*)\s*=\s*"([^"]*)""#).unwrap());

/// Lower one downloaded SVG document to a JSX element.
///
/// `icon_name` is only used to attribute errors. Any prolog or comment ahead
/// of the root element is dropped.
pub fn to_jsx(svg: &str, icon_name: &str) -> Result<String, Error> {
    let start =
        find_root(svg).ok_or_else(|| Error::MissingSvgRoot { name: icon_name.to_string() })?;
    let after_tag = &svg[start + "<svg".len()..];
    let tag_end = after_tag
        .find('>')
        .ok_or_else(|| Error::UnterminatedSvgTag { name: icon_name.to_string() })?;

    let attrs_raw = after_tag[..tag_end].trim_end();
    let (attrs_raw, self_closing) = match attrs_raw.strip_suffix('/') {
        Some(rest) => (rest, true),
        None => (attrs_raw, false),
    };
    let body = &after_tag[tag_end + 1..];

    let mut out = String::with_capacity(svg.len() + 64);
    out.push_str("<svg width={size} height={size} fill={color}");
    for caps in ATTR_RE.captures_iter(attrs_raw) {
        let name = &caps[1];
        // The component props replace these on the root element.
        if matches!(name, "width" | "height" | "fill") {
            continue;
        }
        out.push(' ');
        out.push_str(&jsx_attr_name(name));
        out.push_str("=\"");
        out.push_str(&caps[2]);
        out.push('"');
    }
    out.push_str(" {...props}");
    if self_closing {
        out.push_str("/>");
    } else {
        out.push('>');
        out.push_str(&camel_case_attributes(body.trim_end()));
    }
    Ok(out)
}

/// Locate the opening `<svg` of the root element, skipping prefixes like
/// `<svgfoo` that merely share the byte sequence.
fn find_root(markup: &str) -> Option<usize> {
    let mut search_from = 0;
    while let Some(pos) = markup[search_from..].find("<svg") {
        let abs = search_from + pos;
        match markup.as_bytes().get(abs + 4) {
            Some(b) if b.is_ascii_alphanumeric() || *b == b'-' => search_from = abs + 4,
            _ => return Some(abs),
        }
    }
    None
}

fn camel_case_attributes(markup: &str) -> String {
    ATTR_RE
        .replace_all(markup, |caps: &Captures| {
            format!("{}=\"{}\"", jsx_attr_name(&caps[1]), &caps[2])
        })
        .into_owned()
}

/// Map an XML attribute name to its JSX spelling.
fn jsx_attr_name(name: &str) -> String {
    // JSX keeps these namespaces verbatim.
    if name.starts_with("data-") || name.starts_with("aria-") {
        return name.to_string();
    }
    if !name.contains(['-', ':']) {
        return name.to_string();
    }

    let mut segments = name.split(['-', ':']);
    let mut out = String::with_capacity(name.len());
    if let Some(first) = segments.next() {
        out.push_str(first);
    }
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
