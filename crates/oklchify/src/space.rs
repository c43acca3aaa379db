use crate::conversion::{
    from_24bit, hsl_to_srgb, linear_srgb_to_oklab, oklab_to_oklch, srgb_to_linear_srgb,
};
use crate::error::ColorFormatError;
use crate::string;
use crate::Float;

/// A gamma-corrected sRGB color.
///
/// Coordinates are red, green, and blue in `0..=1`, as normalized from an
/// 8-bit-per-channel source. This is the entry point of the conversion
/// pipeline: [`Srgb::from_hex`], [`Srgb::from_hsl`], and the
/// [`FromStr`](core::str::FromStr) implementation all produce it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Srgb([Float; 3]);

impl Srgb {
    /// Create a new sRGB color from the given red, green, and blue
    /// coordinates.
    pub const fn new(r: Float, g: Float, b: Float) -> Self {
        Self([r, g, b])
    }

    /// Parse a color in hashed hexadecimal notation, such as `#ff0000` or
    /// `#f00`. The leading `#` is optional; three-digit shorthand expands by
    /// duplicating each digit.
    pub fn from_hex(s: &str) -> Result<Self, ColorFormatError> {
        let [c1, c2, c3] = string::parse_hashed(s)?;
        Ok(Self(from_24bit(c1, c2, c3)))
    }

    /// Parse a color in `hsl()` functional notation, such as
    /// `hsl(120 100% 50%)`, and convert it to sRGB.
    pub fn from_hsl(s: &str) -> Result<Self, ColorFormatError> {
        string::parse_hsl(s).map(Self)
    }

    /// Create a new sRGB color from HSL coordinates, with the hue in degrees
    /// and saturation and lightness as fractions in `0..=1`.
    pub fn from_hsl_coordinates(h: Float, s: Float, l: Float) -> Self {
        Self(hsl_to_srgb(h, s, l))
    }

    /// Convert this color to linear sRGB by decoding sRGB's gamma.
    pub fn to_linear(&self) -> LinearSrgb {
        LinearSrgb(srgb_to_linear_srgb(&self.0))
    }

    /// Convert this color to Oklch, running the entire pipeline: gamma
    /// decoding, the Oklab matrices, and the polar form.
    pub fn to_oklch(&self) -> Oklch {
        self.to_linear().to_oklab().to_oklch()
    }
}

impl std::str::FromStr for Srgb {
    type Err = ColorFormatError;

    /// Parse the string into an sRGB color. This recognizes the hashed
    /// hexadecimal format, with or without the `#`, and the `hsl()`
    /// functional format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        string::parse(s).map(Self)
    }
}

impl AsRef<[Float; 3]> for Srgb {
    fn as_ref(&self) -> &[Float; 3] {
        &self.0
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A linear-light sRGB color.
///
/// Same shape as [`Srgb`] but with the gamma decoded. It is a distinct type
/// so that gamma-corrected and linear coordinates cannot be mixed up by
/// accident.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearSrgb([Float; 3]);

impl LinearSrgb {
    /// Create a new linear sRGB color from the given coordinates.
    pub const fn new(r: Float, g: Float, b: Float) -> Self {
        Self([r, g, b])
    }

    /// Convert this color to Oklab.
    pub fn to_oklab(&self) -> Oklab {
        Oklab(linear_srgb_to_oklab(&self.0))
    }
}

impl AsRef<[Float; 3]> for LinearSrgb {
    fn as_ref(&self) -> &[Float; 3] {
        &self.0
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color in the rectangular Oklab form.
///
/// Coordinates are the perceptual lightness L, conventionally near `0..=1`
/// for sRGB-gamut colors, and the two opponent-color axes a and b, which
/// carry no fixed range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oklab([Float; 3]);

impl Oklab {
    /// Create a new Oklab color from the given coordinates.
    pub const fn new(l: Float, a: Float, b: Float) -> Self {
        Self([l, a, b])
    }

    /// Convert this color to the polar Oklch form.
    pub fn to_oklch(&self) -> Oklch {
        Oklch(oklab_to_oklch(&self.0))
    }
}

impl AsRef<[Float; 3]> for Oklab {
    fn as_ref(&self) -> &[Float; 3] {
        &self.0
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color in the polar Oklch form.
///
/// Coordinates are the perceptual lightness L, the chroma C, which is
/// non-negative and small for sRGB-gamut colors, and the hue h in degrees.
/// For colors produced by this crate's pipeline the hue lies in `0..360`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oklch([Float; 3]);

impl Oklch {
    /// Create a new Oklch color from the given coordinates.
    pub const fn new(l: Float, c: Float, h: Float) -> Self {
        Self([l, c, h])
    }

    /// The perceptual lightness.
    pub const fn l(&self) -> Float {
        self.0[0]
    }

    /// The chroma.
    pub const fn c(&self) -> Float {
        self.0[1]
    }

    /// The hue in degrees.
    pub const fn h(&self) -> Float {
        self.0[2]
    }
}

impl AsRef<[Float; 3]> for Oklch {
    fn as_ref(&self) -> &[Float; 3] {
        &self.0
    }
}

impl std::fmt::Display for Oklch {
    /// Format this color as a CSS `oklch()` function.
    ///
    /// The lightness renders as a percentage with exactly two digits past
    /// the decimal, the chroma with exactly three, and the hue with exactly
    /// one, e.g. `oklch(62.80% 0.258 29.2)`. The decimal separator is always
    /// `.`, never locale-dependent.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [l, c, h] = self.0;
        f.write_fmt(format_args!("oklch({:.2}% {:.3} {:.1})", 100.0 * l, c, h))
    }
}

// ====================================================================================================================
