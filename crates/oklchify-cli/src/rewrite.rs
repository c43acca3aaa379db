//! In-place rewriting of CSS custom-property colors.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

use oklchify::Srgb;

/// A CSS custom-property declaration whose value is a hex or HSL color:
/// `--name`, a colon, the color, a terminating semicolon. The first capture
/// group is the property name, the second the color value.
const VAR_COLOR_PATTERN: &str =
    r"--([A-Za-z0-9-]+):\s*(#[0-9A-Fa-f]{6}|#[0-9A-Fa-f]{3}|hsl\(\s*\d+\s+\d+%?\s+\d+%?\s*\))\s*;";

/// Convert one matched color value to its formatted OKLCH equivalent.
fn convert(value: &str) -> Result<String> {
    let srgb = if value.starts_with('#') {
        Srgb::from_hex(value)
    } else {
        Srgb::from_hsl(value)
    }
    .with_context(|| format!("cannot convert `{value}`"))?;

    Ok(srgb.to_oklch().to_string())
}

/// Rewrite every matching custom-property declaration in the text.
///
/// Returns the rewritten text together with the number of replaced
/// declarations. The substitution happens entirely in memory and the first
/// conversion failure aborts the whole rewrite. Text outside the matches is
/// copied through byte for byte, and duplicate property names are rewritten
/// independently, one occurrence at a time.
pub fn rewrite_text(text: &str) -> Result<(String, usize)> {
    let pattern = Regex::new(VAR_COLOR_PATTERN).expect("the declaration pattern is valid");

    let mut output = String::with_capacity(text.len());
    let mut last_end = 0;
    let mut count = 0;

    for captures in pattern.captures_iter(text) {
        let matched = captures.get(0).expect("capture 0 is the whole match");
        let name = &captures[1];
        let oklch = convert(&captures[2])?;

        output.push_str(&text[last_end..matched.start()]);
        output.push_str(&format!("--{name}: {oklch};"));
        last_end = matched.end();
        count += 1;
    }
    output.push_str(&text[last_end..]);

    Ok((output, count))
}

/// Rewrite the file at the given path in place, replacing every matching
/// custom-property color with its OKLCH equivalent.
///
/// The file is read whole, rewritten in memory, and written back whole, so a
/// parse or conversion failure leaves it untouched; only a failure during
/// the final write can leave it in an indeterminate state. Returns the
/// number of replaced declarations.
pub fn rewrite_file(path: &Path) -> Result<usize> {
    let text =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    let (rewritten, count) = rewrite_text(&text)?;
    fs::write(path, rewritten).with_context(|| format!("cannot write {}", path.display()))?;

    Ok(count)
}

// ====================================================================================================================
