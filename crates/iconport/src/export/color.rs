//! Color substitution
//!
//! Icon sets express their paint as the CSS `currentColor` sentinel so
//! the surrounding page decides the color. Exported files have no
//! surrounding page, so the sentinel is resolved to a literal color
//! before writing or rasterizing.

/// Sentinel the icon service uses for "inherit the text color"
const COLOR_SENTINEL: &str = "currentColor";

/// Replace every occurrence of the `currentColor` sentinel with a
/// literal color
///
/// Covers the attribute form (`fill="currentColor"`), the style form
/// (`style="fill:currentColor"`), and any bare occurrence. Idempotent:
/// once no sentinel remains, reapplying is a no-op.
pub fn substitute_color(svg: &str, color: &str) -> String {
    svg.replace(COLOR_SENTINEL, color)
}
