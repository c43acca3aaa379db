//! Utility module with oklchify's errors.

/// An erroneous color format.
///
/// Each variant captures one way a hexadecimal or `hsl()` color literal can
/// be malformed. The [`Display`](core::fmt::Display) implementation renders
/// a human-readable one-liner per variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that starts with neither `#`, a hexadecimal digit, nor
    /// `hsl(`. For example, `rgb(1 2 3)` uses an unsupported notation.
    UnknownFormat,

    /// A hexadecimal color with an unexpected number of characters or with
    /// characters outside the ASCII range. For example, `#ff00` has neither
    /// three nor six digits, whereas `#💩00` has a suitable length but
    /// contains an unsuitable character.
    UnexpectedCharacters,

    /// A hexadecimal color with a coordinate that is not a hexadecimal
    /// number. For example, `#0g0` has a malformed second coordinate.
    MalformedHex,

    /// An `hsl()` color without the opening parenthesis. For example,
    /// `hsl 0 100% 50%)` is missing the opening parenthesis.
    NoOpeningParenthesis,

    /// An `hsl()` color without the closing parenthesis. For example,
    /// `hsl(0 100% 50%` is missing the closing parenthesis.
    NoClosingParenthesis,

    /// An `hsl()` color with fewer than three components. For example,
    /// `hsl(0 100%)` is missing the lightness.
    MissingComponent,

    /// An `hsl()` color with a component that is not a non-negative integer.
    /// For example, `hsl(0 abc% 50%)` has a malformed saturation and
    /// `hsl(0 100% 50.5%)` a malformed lightness.
    MalformedInteger,

    /// An `hsl()` color with more than three components. For example,
    /// `hsl(0 100% 50% 1)` has one component too many.
    TooManyComponents,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => {
                f.write_str("color format should start with `#`, a hex digit, or `hsl(`")
            }
            UnexpectedCharacters => {
                f.write_str("hex color should comprise 3 or 6 hexadecimal digits")
            }
            MalformedHex => f.write_str("hex color contains a malformed hexadecimal number"),
            NoOpeningParenthesis => f.write_str("HSL color is missing the opening parenthesis"),
            NoClosingParenthesis => f.write_str("HSL color is missing the closing parenthesis"),
            MissingComponent => f.write_str("HSL color has fewer than three components"),
            MalformedInteger => {
                f.write_str("HSL color contains a component that is not a non-negative integer")
            }
            TooManyComponents => f.write_str("HSL color has more than three components"),
        }
    }
}

impl std::error::Error for ColorFormatError {}
