//! SVG size normalization
//!
//! Icon services commonly ship SVGs sized in relative units
//! (`width="1em"`) or with no explicit size at all. Rasterizers need
//! literal pixel dimensions, so the opening `<svg>` tag is rewritten to
//! carry `width`/`height` taken from the viewBox. This is deliberate
//! attribute-string surgery, not XML parsing: it only has to cope with
//! the narrow shapes the icon API actually emits.

use crate::config::export::FALLBACK_DIMENSION;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref VIEWBOX_RE: Regex =
        Regex::new(r#"viewBox\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap();
    static ref WIDTH_RE: Regex = Regex::new(r#"\s+width\s*=\s*(?:"[^"]*"|'[^']*')"#).unwrap();
    static ref HEIGHT_RE: Regex = Regex::new(r#"\s+height\s*=\s*(?:"[^"]*"|'[^']*')"#).unwrap();
}

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Rewrite the opening `<svg>` tag so the document is self-contained and
/// carries literal pixel dimensions
///
/// - Any existing `width`/`height` attributes on the `<svg>` tag are
///   removed; attributes of inner elements are untouched.
/// - With a usable `viewBox="x y w h"`, `w` and `h` become the new
///   `width`/`height`, verbatim and unvalidated.
/// - Without one, the size falls back to 24x24.
/// - An `xmlns` declaration is injected if missing.
///
/// Idempotent: normalizing twice equals normalizing once. Input with no
/// `<svg` tag is returned unchanged.
pub fn normalize_svg(svg: &str) -> String {
    let Some(open_start) = svg.find("<svg") else {
        return svg.to_string();
    };
    let Some(rel_end) = svg[open_start..].find('>') else {
        return svg.to_string();
    };
    let open_end = open_start + rel_end;
    let original_tag = &svg[open_start..=open_end];

    let stripped = WIDTH_RE.replace_all(original_tag, "");
    let stripped = HEIGHT_RE.replace_all(&stripped, "").into_owned();

    let dimensions = VIEWBOX_RE.captures(&stripped).and_then(|caps| {
        let viewbox = caps.get(1).or_else(|| caps.get(2))?.as_str();
        let mut parts = viewbox.split_whitespace();
        let _x = parts.next()?;
        let _y = parts.next()?;
        let w = parts.next()?;
        let h = parts.next()?;
        Some((w.to_string(), h.to_string()))
    });
    let (width, height) = dimensions
        .unwrap_or_else(|| (FALLBACK_DIMENSION.to_string(), FALLBACK_DIMENSION.to_string()));

    let mut tag = stripped.replacen(
        "<svg",
        &format!(r#"<svg width="{}" height="{}""#, width, height),
        1,
    );

    if !tag.contains("xmlns=") {
        tag = tag.replacen("<svg", &format!(r#"<svg xmlns="{}""#, SVG_NAMESPACE), 1);
    }

    let mut out = String::with_capacity(svg.len() + 64);
    out.push_str(&svg[..open_start]);
    out.push_str(&tag);
    out.push_str(&svg[open_end + 1..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_viewbox_dimensions_become_width_height() {
        let svg = r#"<svg viewBox="0 0 24 24"><path d="M0 0h24v24"/></svg>"#;
        let out = normalize_svg(svg);

        assert_eq!(count(&out, r#"width="24""#), 1);
        assert_eq!(count(&out, r#"height="24""#), 1);
        assert!(out.contains(r#"viewBox="0 0 24 24""#));
    }

    #[test]
    fn test_relative_units_are_replaced() {
        let svg = r#"<svg width="1em" height="1em" viewBox="0 0 32 16"><path d="M0 0"/></svg>"#;
        let out = normalize_svg(svg);

        assert!(!out.contains("1em"));
        assert_eq!(count(&out, r#"width="32""#), 1);
        assert_eq!(count(&out, r#"height="16""#), 1);
        // Exactly one width/height pair survives in the opening tag
        assert_eq!(count(&out, "width="), 1);
        assert_eq!(count(&out, "height="), 1);
    }

    #[test]
    fn test_single_quoted_attributes() {
        let svg = r#"<svg width='100%' height='100%' viewBox='0 0 20 20'><circle r='9'/></svg>"#;
        let out = normalize_svg(svg);

        assert!(!out.contains("100%"));
        assert_eq!(count(&out, r#"width="20""#), 1);
        assert_eq!(count(&out, r#"height="20""#), 1);
    }

    #[test]
    fn test_extra_whitespace_around_equals() {
        let svg = r#"<svg width = "48" viewBox = "0 0 24 24"><path/></svg>"#;
        let out = normalize_svg(svg);

        assert!(!out.contains("48"));
        assert_eq!(count(&out, r#"width="24""#), 1);
    }

    #[test]
    fn test_missing_viewbox_falls_back_to_24() {
        let svg = r#"<svg><rect x="1"/></svg>"#;
        let out = normalize_svg(svg);

        assert!(out.contains(r#"width="24""#));
        assert!(out.contains(r#"height="24""#));
    }

    #[test]
    fn test_short_viewbox_counts_as_missing() {
        let svg = r#"<svg viewBox="0 0 16"><path/></svg>"#;
        let out = normalize_svg(svg);

        assert!(out.contains(r#"width="24""#));
        assert!(out.contains(r#"height="24""#));
    }

    #[test]
    fn test_namespace_injected_when_missing() {
        let svg = r#"<svg viewBox="0 0 24 24"><path/></svg>"#;
        let out = normalize_svg(svg);
        assert_eq!(count(&out, r#"xmlns="http://www.w3.org/2000/svg""#), 1);
    }

    #[test]
    fn test_existing_namespace_kept() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path/></svg>"#;
        let out = normalize_svg(svg);
        assert_eq!(count(&out, "xmlns="), 1);
    }

    #[test]
    fn test_inner_element_dimensions_untouched() {
        let svg = r#"<svg width="1em" viewBox="0 0 24 24"><rect width="16" height="16"/></svg>"#;
        let out = normalize_svg(svg);

        // The rect keeps its size; only the svg tag is rewritten
        assert!(out.contains(r#"<rect width="16" height="16"/>"#));
        assert_eq!(count(&out, r#"width="24""#), 1);
    }

    #[test]
    fn test_stroke_width_untouched() {
        let svg = r#"<svg viewBox="0 0 24 24" stroke-width="2"><path/></svg>"#;
        let out = normalize_svg(svg);
        assert!(out.contains(r#"stroke-width="2""#));
    }

    #[test]
    fn test_percentage_viewbox_passed_through() {
        let svg = r#"<svg viewBox="0 0 100% 50%"><path/></svg>"#;
        let out = normalize_svg(svg);

        // No numeric validation: the tokens are spliced in verbatim
        assert!(out.contains(r#"width="100%""#));
        assert!(out.contains(r#"height="50%""#));
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            r#"<svg width="1em" height="1em" viewBox="0 0 24 24"><path d="M0 0"/></svg>"#,
            r#"<svg><rect x="1"/></svg>"#,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox='0 0 48 48'><circle r="20"/></svg>"#,
        ];
        for svg in inputs {
            let once = normalize_svg(svg);
            let twice = normalize_svg(&once);
            assert_eq!(once, twice, "not idempotent for {}", svg);
        }
    }

    #[test]
    fn test_non_svg_input_unchanged() {
        assert_eq!(normalize_svg("not markup"), "not markup");
        assert_eq!(normalize_svg(""), "");
        assert_eq!(normalize_svg("<svg unterminated"), "<svg unterminated");
    }

    #[test]
    fn test_leading_content_preserved() {
        let svg = "<?xml version=\"1.0\"?>\n<svg viewBox=\"0 0 24 24\"><path/></svg>";
        let out = normalize_svg(svg);
        assert!(out.starts_with("<?xml version=\"1.0\"?>\n<svg"));
    }
}
