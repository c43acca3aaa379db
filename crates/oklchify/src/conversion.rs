use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing
/// a new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected sRGB to linear sRGB by inverting
/// sRGB's electro-optical transfer function. This is a one-hop, direct
/// conversion; it assumes coordinates in `0..=1`.
pub(crate) fn srgb_to_linear_srgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        if value <= 0.04045 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------
// https://bottosson.github.io/posts/oklab/

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_OKLMS: [[Float; 3]; 3] = [
    [ 0.4122214708, 0.5363325363, 0.0514459929 ],
    [ 0.2119034982, 0.6806995451, 0.1073969566 ],
    [ 0.0883024619, 0.2817188376, 0.6299787005 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_OKLAB: [[Float; 3]; 3] = [
    [ 0.2104542553,  0.7936177850, -0.0040720468 ],
    [ 1.9779984951, -2.4285922050,  0.4505937099 ],
    [ 0.0259040371,  0.7827717662, -0.8086757660 ],
];

/// Convert coordinates for linear sRGB to Oklab. This is a one-hop, direct
/// conversion, even though it requires two matrix multiplications and a
/// coordinate-wise cube root.
pub(crate) fn linear_srgb_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&LINEAR_SRGB_TO_OKLMS, value);
    multiply(&OKLMS_TO_OKLAB, &[l.cbrt(), m.cbrt(), s.cbrt()])
}

/// Convert coordinates for Oklab to Oklch. This is a one-hop, direct
/// conversion. The hue is degrees in `0..360`. Near-achromatic colors keep
/// whatever hue the vanishing rectangular components produce; with a chroma
/// that small the hue carries no visual information.
#[allow(non_snake_case)]
pub(crate) fn oklab_to_oklch(value: &[Float; 3]) -> [Float; 3] {
    let [L, a, b] = *value;

    let C = b.hypot(a);
    let h = b.atan2(a).to_degrees();
    let h = if h < 0.0 { h + 360.0 } else { h };

    [L, C, h]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert HSL coordinates to gamma-corrected sRGB with the standard sector
/// algorithm. The hue is degrees, saturation and lightness are fractions in
/// `0..=1`.
///
/// Sector dispatch is defined on `0..360` only. A hue of 360 or more matches
/// no sector and the color collapses to the achromatic `(m, m, m)`. That
/// degenerate case is preserved on purpose: stylesheets converted by earlier
/// revisions of this tool encode it, and normalizing the hue would silently
/// change their colors.
pub(crate) fn hsl_to_srgb(hue: Float, saturation: Float, lightness: Float) -> [Float; 3] {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = if (0.0..60.0).contains(&hue) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&hue) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&hue) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&hue) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&hue) {
        (x, 0.0, c)
    } else if (300.0..360.0).contains(&hue) {
        (c, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    [r + m, g + m, b + m]
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{hsl_to_srgb, linear_srgb_to_oklab, oklab_to_oklch, srgb_to_linear_srgb};
    use crate::assert_close_enough;

    #[test]
    fn test_srgb_to_linear_srgb() {
        let [r, g, b] = srgb_to_linear_srgb(&[0.0, 0.04045, 1.0]);
        assert_close_enough!(r, 0.0);
        assert_close_enough!(g, 0.04045 / 12.92);
        assert_close_enough!(b, 1.0);

        // Halfway gray decodes well below the halfway point.
        let [v, _, _] = srgb_to_linear_srgb(&[0.5, 0.5, 0.5]);
        assert_close_enough!(v, 0.21404114048223255);
    }

    #[test]
    fn test_linear_srgb_to_oklab() {
        // Pure linear red.
        let [l, a, b] = linear_srgb_to_oklab(&[1.0, 0.0, 0.0]);
        assert_close_enough!(l, 0.6279553606145516);
        assert_close_enough!(a, 0.22486306106597398);
        assert_close_enough!(b, 0.1258462985307351);

        // White: lightness one, both rectangular components vanish.
        let [l, a, b] = linear_srgb_to_oklab(&[1.0, 1.0, 1.0]);
        assert_close_enough!(l, 1.0);
        assert!(a.abs() < 1e-6, "white should be achromatic: a = {}", a);
        assert!(b.abs() < 1e-6, "white should be achromatic: b = {}", b);

        // Black stays at the origin.
        let [l, a, b] = linear_srgb_to_oklab(&[0.0, 0.0, 0.0]);
        assert_close_enough!(l, 0.0);
        assert_close_enough!(a, 0.0);
        assert_close_enough!(b, 0.0);
    }

    #[test]
    fn test_oklab_to_oklch() {
        // Pure sRGB red, rectangular to polar.
        let [l, c, h] = oklab_to_oklch(&[
            0.6279553606145516,
            0.22486306106597398,
            0.1258462985307351,
        ]);
        assert_close_enough!(l, 0.6279553606145516);
        assert_close_enough!(c, 0.2576833077361567);
        assert_close_enough!(h, 29.233885192342633);

        // A negative angle wraps into 0..360.
        let [_, c, h] = oklab_to_oklch(&[0.5, 0.0, -0.1]);
        assert_close_enough!(c, 0.1);
        assert_close_enough!(h, 270.0);
    }

    #[test]
    fn test_hsl_to_srgb() {
        // One color per sector.
        for (hue, expected) in [
            (0.0, [1.0, 0.0, 0.0]),
            (60.0, [1.0, 1.0, 0.0]),
            (120.0, [0.0, 1.0, 0.0]),
            (180.0, [0.0, 1.0, 1.0]),
            (240.0, [0.0, 0.0, 1.0]),
            (300.0, [1.0, 0.0, 1.0]),
        ] {
            let [r, g, b] = hsl_to_srgb(hue, 1.0, 0.5);
            assert_close_enough!(r, expected[0]);
            assert_close_enough!(g, expected[1]);
            assert_close_enough!(b, expected[2]);
        }

        // Zero saturation is gray no matter the hue.
        let [r, g, b] = hsl_to_srgb(217.0, 0.0, 0.4);
        assert_close_enough!(r, 0.4);
        assert_close_enough!(g, 0.4);
        assert_close_enough!(b, 0.4);

        // A hue of 360 matches no sector and degenerates to (m, m, m).
        let [r, g, b] = hsl_to_srgb(360.0, 1.0, 0.5);
        assert_close_enough!(r, 0.0);
        assert_close_enough!(g, 0.0);
        assert_close_enough!(b, 0.0);
    }
}
