use crate::conversion::{from_24bit, hsl_to_srgb};
use crate::error::ColorFormatError;
use crate::Float;

/// Parse a color in hashed hexadecimal format. If successful, this function
/// returns the three coordinates as unsigned bytes. The leading `#` is
/// optional, and three-digit shorthand is transparently expanded by
/// duplicating each digit.
pub(crate) fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 3 && digits.len() != 6 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = s.len() / 3;
        let t = s
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(digits, 0)?;
    let c2 = parse_coordinate(digits, 1)?;
    let c3 = parse_coordinate(digits, 2)?;
    Ok([c1, c2, c3])
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse a color in `hsl()` functional notation with whitespace-separated,
/// non-negative integer components, e.g. `hsl(120 100% 50%)`. The `%` sign
/// is tolerated, present or absent, independently on the saturation and
/// lightness; the hue carries no unit. The parenthesized body may contain
/// extra whitespace anywhere between tokens.
///
/// The hue is passed through as written. For what happens to hues of 360
/// degrees or more, see [`hsl_to_srgb`].
pub(crate) fn parse_hsl(s: &str) -> Result<[Float; 3], ColorFormatError> {
    let rest = s.strip_prefix("hsl").ok_or(ColorFormatError::UnknownFormat)?;
    let body = rest
        .strip_prefix('(')
        .ok_or(ColorFormatError::NoOpeningParenthesis)
        .and_then(|rest| {
            rest.strip_suffix(')')
                .ok_or(ColorFormatError::NoClosingParenthesis)
        })?;

    fn parse_component(s: Option<&str>, percent: bool) -> Result<Float, ColorFormatError> {
        let t = s.ok_or(ColorFormatError::MissingComponent)?;
        let t = if percent {
            t.strip_suffix('%').unwrap_or(t)
        } else {
            t
        };
        let n = t
            .parse::<u32>()
            .map_err(|_| ColorFormatError::MalformedInteger)?;
        Ok(n as Float)
    }

    let mut iter = body.split_whitespace();
    let h = parse_component(iter.next(), false)?;
    let s = parse_component(iter.next(), true)?;
    let l = parse_component(iter.next(), true)?;
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyComponents);
    }

    Ok(hsl_to_srgb(h, s / 100.0, l / 100.0))
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string into sRGB coordinates.
///
/// This function recognizes the hashed hexadecimal and `hsl()` formats: a
/// leading `#` or a bare run of hexadecimal digits selects the hexadecimal
/// parser, an `hsl` prefix the HSL parser. It trims surrounding white space
/// before dispatching.
pub(crate) fn parse(s: &str) -> Result<[Float; 3], ColorFormatError> {
    let s = s.trim();

    if s.starts_with('#') || (!s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())) {
        let [c1, c2, c3] = parse_hashed(s)?;
        Ok(from_24bit(c1, c2, c3))
    } else if s.starts_with("hsl") {
        parse_hsl(s)
    } else {
        Err(ColorFormatError::UnknownFormat)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse, parse_hashed, parse_hsl, ColorFormatError};
    use crate::assert_close_enough;

    #[test]
    fn test_parse_hashed() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hashed("#123")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hashed("#112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hashed("112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hashed("#f0a")?, [0xff_u8, 0x00, 0xaa]);
        assert_eq!(
            parse_hashed("#ff"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hashed("#💩00"),
            Err(ColorFormatError::UnexpectedCharacters)
        );

        let result = parse_hashed("#0g0");
        assert!(matches!(result, Err(ColorFormatError::MalformedHex)));

        let result = parse_hashed("#00000g");
        assert!(matches!(result, Err(ColorFormatError::MalformedHex)));

        Ok(())
    }

    #[test]
    fn test_parse_hsl() -> Result<(), ColorFormatError> {
        let [r, g, b] = parse_hsl("hsl(0 100% 50%)")?;
        assert_close_enough!(r, 1.0);
        assert_close_enough!(g, 0.0);
        assert_close_enough!(b, 0.0);

        // The percent sign is optional, per component.
        let [r, g, b] = parse_hsl("hsl(120 100 50)")?;
        assert_close_enough!(r, 0.0);
        assert_close_enough!(g, 1.0);
        assert_close_enough!(b, 0.0);

        let [r, g, b] = parse_hsl("hsl(  240   100%   50  )")?;
        assert_close_enough!(r, 0.0);
        assert_close_enough!(g, 0.0);
        assert_close_enough!(b, 1.0);

        assert_eq!(
            parse_hsl("not-hsl(1 2 3)"),
            Err(ColorFormatError::UnknownFormat)
        );
        assert_eq!(
            parse_hsl("hsl 0 100% 50%)"),
            Err(ColorFormatError::NoOpeningParenthesis)
        );
        assert_eq!(
            parse_hsl("hsl(0 100% 50%"),
            Err(ColorFormatError::NoClosingParenthesis)
        );
        assert_eq!(
            parse_hsl("hsl(0 100%)"),
            Err(ColorFormatError::MissingComponent)
        );
        assert_eq!(
            parse_hsl("hsl(0.5 100% 50%)"),
            Err(ColorFormatError::MalformedInteger)
        );
        assert_eq!(
            parse_hsl("hsl(-10 100% 50%)"),
            Err(ColorFormatError::MalformedInteger)
        );
        assert_eq!(
            parse_hsl("hsl(0 100% 50% 1)"),
            Err(ColorFormatError::TooManyComponents)
        );

        Ok(())
    }

    #[test]
    fn test_parse() -> Result<(), ColorFormatError> {
        // Dispatch on the prefix, after trimming.
        let [r, _, _] = parse("  #ff0000  ")?;
        assert_close_enough!(r, 1.0);

        let [r, _, _] = parse("ff0000")?;
        assert_close_enough!(r, 1.0);

        let [_, g, _] = parse("hsl(120 100% 50%)")?;
        assert_close_enough!(g, 1.0);

        assert_eq!(parse("oklch(1 0 0)"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(parse(""), Err(ColorFormatError::UnknownFormat));

        // A bare run of hex digits with the wrong length is still hex.
        assert_eq!(
            parse("cafe"),
            Err(ColorFormatError::UnexpectedCharacters)
        );

        Ok(())
    }
}
