//! HTML palette table generator.
//!
//! Generates a collapsible `<details>` block per palette containing a table of
//! every role the palette defines, with its hex, RGB, and HSL values and a
//! link to the published swatch image.

use crate::constants::{SWATCH_SIZE, SWATCH_URL_BASE};
use crate::export::swatch::swatch_file_name;
use crate::models::{ColorError, Palette, RgbColor, Role};
use std::fmt::Write as _;

/// Decorative glyph shown next to a palette's title.
///
/// Unknown palettes get an empty glyph.
#[must_use]
pub fn palette_glyph(palette_name: &str) -> &'static str {
    match palette_name {
        "dark" => "🌑",
        "frost" => "🧊",
        "ember" => "🔥",
        "wraith" => "👻",
        _ => "",
    }
}

/// Uppercases the first character of a palette name, leaving the rest alone.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Published URL of the swatch for `role` in the palette called `palette_name`.
#[must_use]
pub fn swatch_url(palette_name: &str, role: Role) -> String {
    format!("{}/{}", SWATCH_URL_BASE, swatch_file_name(palette_name, role))
}

/// Generates the HTML table block for one palette.
///
/// # Examples
///
/// ```
/// use onedark_palette::export::html_table::render_table;
/// use onedark_palette::models::Palette;
///
/// let palette = Palette::new().with_color("red", "#E06C75");
/// let html = render_table("dark", &palette).unwrap();
/// assert!(html.starts_with("<details><summary>🌑 Dark</summary>"));
/// assert!(html.contains("<td><code>rgb(224, 108, 117)</code></td>"));
/// ```
///
/// # Errors
///
/// Returns the first [`ColorError`] encountered. A single bad color aborts
/// the whole table; no partial markup is returned.
pub fn render_table(palette_name: &str, palette: &Palette) -> Result<String, ColorError> {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "<details><summary>{} {}</summary>",
        palette_glyph(palette_name),
        capitalize(palette_name)
    );
    output.push_str("<table>\n");
    output.push_str("\t<tr>\n");
    output.push_str("\t\t<th></th>\n");
    output.push_str("\t\t<th>Role</th>\n");
    output.push_str("\t\t<th>Hex</th>\n");
    output.push_str("\t\t<th>RGB</th>\n");
    output.push_str("\t\t<th>HSL</th>\n");
    output.push_str("\t</tr>\n");

    for (role, hex) in palette.role_colors() {
        let rgb = RgbColor::from_hex(hex)?;
        let hsl = rgb.to_hsl();

        output.push_str("\t<tr>\n");
        let _ = writeln!(
            output,
            "\t\t<td><img src=\"{}\" width=\"{}\"/></td>",
            swatch_url(palette_name, role),
            SWATCH_SIZE
        );
        let _ = writeln!(output, "\t\t<td>{}</td>", role);
        let _ = writeln!(output, "\t\t<td><code>{}</code></td>", hex);
        let _ = writeln!(output, "\t\t<td><code>{}</code></td>", rgb);
        let _ = writeln!(output, "\t\t<td><code>{}</code></td>", hsl);
        output.push_str("\t</tr>\n");
    }

    output.push_str("</table>\n</details>\n");
    Ok(output)
}
