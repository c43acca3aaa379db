//! # Oklchify
//!
//! Oklchify converts colors written in hashed hexadecimal or `hsl()`
//! notation into the perceptually uniform OKLCH color model and formats the
//! result as a CSS color.
//!
//! The crate's abstractions are four narrow value types, one per stop of the
//! conversion pipeline:
//!
//!   * [`Srgb`] holds gamma-corrected sRGB coordinates as parsed from a
//!     color literal. It is the entry point: [`Srgb::from_hex`],
//!     [`Srgb::from_hsl`], and its [`FromStr`](core::str::FromStr)
//!     implementation all produce it.
//!   * [`LinearSrgb`] holds the same color after gamma decoding. Keeping it
//!     a distinct type ensures gamma-corrected and linear-light coordinates
//!     cannot be mixed up.
//!   * [`Oklab`] holds the rectangular form of the perceptual color, as
//!     produced by the two fixed matrix multiplications with intervening
//!     cube root.
//!   * [`Oklch`] holds the polar form. Its [`Display`](core::fmt::Display)
//!     implementation renders the `oklch(…)` CSS function.
//!
//! The pipeline is a straight line, so each type converts only forward:
//!
//! ```
//! # use oklchify::Srgb;
//! # use oklchify::error::ColorFormatError;
//! # fn main() -> Result<(), ColorFormatError> {
//! let oklch = Srgb::from_hex("#ff0000")?.to_linear().to_oklab().to_oklch();
//! assert_eq!(oklch.to_string(), "oklch(62.80% 0.258 29.2)");
//! # Ok(())
//! # }
//! ```
//!
//! [`Srgb::to_oklch`] packages the three hops for callers that do not care
//! about the intermediate stops. All conversions are pure and deterministic;
//! no type retains state between calls.

/// The floating point type in use.
pub type Float = f64;

mod conversion;
pub mod error;
mod space;
mod string;

pub use space::{LinearSrgb, Oklab, Oklch, Srgb};

/// Test macro for asserting the equality of floating point quantities.
///
/// The two quantities may differ by at most `1e-6`, which is far below the
/// resolution of any formatted coordinate yet forgiving of the rounding the
/// published matrix constants carry — they reproduce white's lightness only
/// to about `6.5e-9`, so a tighter bound cannot hold across the pipeline.
/// Its message places the numbers below each other at the beginning of
/// subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        let (f1, f2) = ($f1, $f2);
        assert!(
            (f1 - f2).abs() < 1e-6,
            "quantities differ:\n{:?}\n{:?}",
            f1,
            f2
        );
    };
}

#[cfg(test)]
pub(crate) use assert_close_enough;
