use crate::Float;

/// The threshold below which a channel difference is treated as zero.
///
/// Both the achromatic test for HSL/HSV hue computation and the opacity
/// test for alpha handling reuse this quantum, which corresponds to less
/// than half a step of a 16-bit channel.
pub(crate) const CHANNEL_EPSILON: Float = 1.0 / 65536.0;

/// Convert the color coordinates to 24-bit representation.
///
/// This function assumes that the color is an in-gamut sRGB color, i.e.,
/// that its coordinates range `0..=1`. Even if that is not the case, the
/// conversion automatically clamps coordinates to the range `0x00..=0xff`.
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    let [r, g, b] = *coordinates;
    [
        (r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (b.clamp(0.0, 1.0) * 255.0).round() as u8,
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other,
/// producing a new 3-element vector.
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

/// Convert a gamma-corrected sRGB channel to its linear form.
#[inline]
pub(crate) fn linearize(value: Float) -> Float {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear sRGB channel to its gamma-corrected form. This is the
/// algebraic inverse of [`linearize`].
#[inline]
pub(crate) fn delinearize(value: Float) -> Float {
    if value <= 0.0031308 {
        12.92 * value
    } else {
        value.powf((2.4 as Float).recip()).mul_add(1.055, -0.055)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The CIE nonlinearity threshold 6/29.
const CIE_EPSILON: Float = 6.0 / 29.0;

/// Apply the CIE f(t) nonlinearity used by the XYZ to LAB conversion.
#[inline]
fn lab_f(t: Float) -> Float {
    if t > CIE_EPSILON * CIE_EPSILON * CIE_EPSILON {
        t.cbrt()
    } else {
        t / (3.0 * CIE_EPSILON * CIE_EPSILON) + 4.0 / 29.0
    }
}

/// Undo the CIE f(t) nonlinearity. This is the algebraic inverse of
/// [`lab_f`].
#[inline]
fn lab_f_inverse(t: Float) -> Float {
    if t > CIE_EPSILON {
        t * t * t
    } else {
        3.0 * CIE_EPSILON * CIE_EPSILON * (t - 4.0 / 29.0)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The D65 reference white in XYZ.
const D65_WHITE: [Float; 3] = [0.95047, 1.0, 1.08883];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4124564, 0.3575761, 0.1804375 ],
    [ 0.2126729, 0.7151522, 0.072175  ],
    [ 0.0193339, 0.119192,  0.9503041 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2404542, -1.5371385, -0.4985314 ],
    [ -0.969266,   1.8760108,  0.041556  ],
    [  0.0556434, -0.2040259,  1.0572252 ],
];

/// Convert coordinates for sRGB to LAB. This conversion goes through linear
/// sRGB and XYZ with the D65 standard illuminant.
pub(crate) fn srgb_to_lab(value: &[Float; 3]) -> [Float; 3] {
    let linear = [linearize(value[0]), linearize(value[1]), linearize(value[2])];
    let [x, y, z] = multiply(&LINEAR_SRGB_TO_XYZ, &linear);

    let fx = lab_f(x / D65_WHITE[0]);
    let fy = lab_f(y / D65_WHITE[1]);
    let fz = lab_f(z / D65_WHITE[2]);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Convert coordinates for LAB to sRGB, the inverse of [`srgb_to_lab`].
///
/// LAB covers colors well outside the sRGB gamut, so every channel of the
/// result is clamped to unit range.
pub(crate) fn lab_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let [l, a, b] = *value;

    let fy = (l + 16.0) / 116.0;
    let x = lab_f_inverse(fy + a / 500.0) * D65_WHITE[0];
    let y = lab_f_inverse(fy) * D65_WHITE[1];
    let z = lab_f_inverse(fy - b / 200.0) * D65_WHITE[2];

    let linear = multiply(&XYZ_TO_LINEAR_SRGB, &[x, y, z]);
    [
        delinearize(linear[0]).clamp(0.0, 1.0),
        delinearize(linear[1]).clamp(0.0, 1.0),
        delinearize(linear[2]).clamp(0.0, 1.0),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the hue in degrees for the given RGB coordinates, selecting the
/// 60-degree segment formula by the maximal channel.
fn rgb_hue(r: Float, g: Float, b: Float, max: Float, min: Float) -> Float {
    let hue = if max == r {
        60.0 * ((g - b) / (max - min))
    } else if max == g {
        60.0 * ((b - r) / (max - min)) + 120.0
    } else {
        60.0 * ((r - g) / (max - min)) + 240.0
    };

    hue.rem_euclid(360.0)
}

/// Convert coordinates for sRGB to HSL.
///
/// Achromatic colors, i.e., colors whose channels differ by no more than
/// [`CHANNEL_EPSILON`], have hue 0 and saturation 0.
pub(crate) fn srgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (0.5 * (max + min)).clamp(0.0, 1.0);

    if max - min <= CHANNEL_EPSILON {
        return [0.0, 0.0, lightness];
    }

    let saturation = if 0.0 < lightness && lightness <= 0.5 {
        (max - min) / (2.0 * lightness)
    } else {
        (max - min) / (2.0 - 2.0 * lightness)
    };

    [
        rgb_hue(r, g, b, max, min),
        saturation.clamp(0.0, 1.0),
        lightness,
    ]
}

/// Convert coordinates for sRGB to HSV.
pub(crate) fn srgb_to_hsv(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if max - min <= CHANNEL_EPSILON {
        return [0.0, 0.0, max];
    }

    [rgb_hue(r, g, b, max, min), (max - min) / max, max]
}

/// Map the hue onto red, green, and blue contributions for the given chroma.
fn hue_segments(hue: Float, chroma: Float) -> [Float; 3] {
    let h_prime = hue.rem_euclid(360.0) / 60.0;
    let x = chroma * (1.0 - (h_prime % 2.0 - 1.0).abs());

    match h_prime as u8 {
        0 => [chroma, x, 0.0],
        1 => [x, chroma, 0.0],
        2 => [0.0, chroma, x],
        3 => [0.0, x, chroma],
        4 => [x, 0.0, chroma],
        _ => [chroma, 0.0, x],
    }
}

/// Convert coordinates for HSL to sRGB.
pub(crate) fn hsl_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let [hue, saturation, lightness] = *value;
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let m = lightness - chroma / 2.0;

    let [r, g, b] = hue_segments(hue, chroma);
    [r + m, g + m, b + m]
}

/// Convert coordinates for HSV to sRGB.
pub(crate) fn hsv_to_srgb(value: &[Float; 3]) -> [Float; 3] {
    let [hue, saturation, v] = *value;
    let chroma = v * saturation;
    let m = v - chroma;

    let [r, g, b] = hue_segments(hue, chroma);
    [r + m, g + m, b + m]
}

/// Convert coordinates for HSV to HSL. This is a one-hop, direct conversion
/// that leaves the hue untouched.
pub(crate) fn hsv_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [hue, saturation, v] = *value;
    let lightness = ((2.0 - saturation) * v / 2.0).clamp(0.0, 1.0);

    let saturation = if 0.0 < lightness && lightness < 1.0 {
        let divisor = if lightness < 0.5 {
            2.0 * lightness
        } else {
            2.0 - 2.0 * lightness
        };
        (saturation * v / divisor).clamp(0.0, 1.0)
    } else {
        0.0
    };

    [hue, saturation, lightness]
}

/// Convert coordinates for HSL to HSV. This is a one-hop, direct conversion
/// that leaves the hue untouched.
pub(crate) fn hsl_to_hsv(value: &[Float; 3]) -> [Float; 3] {
    let [hue, saturation, lightness] = *value;
    let v = lightness + saturation * lightness.min(1.0 - lightness);

    let saturation = if v <= CHANNEL_EPSILON {
        0.0
    } else {
        2.0 * (1.0 - lightness / v)
    };

    [hue, saturation.clamp(0.0, 1.0), v]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates for LAB to LCH, the polar form of LAB.
///
/// The hue is `atan2(b, a)` normalized to `0..360` degrees; for achromatic
/// colors with vanishing a and b it degenerates to 0.
pub(crate) fn lab_to_lch(value: &[Float; 3]) -> [Float; 3] {
    let [l, a, b] = *value;
    [l, a.hypot(b), b.atan2(a).to_degrees().rem_euclid(360.0)]
}

/// Convert coordinates for LCH to LAB. This is the inverse of
/// [`lab_to_lch`].
pub(crate) fn lch_to_lab(value: &[Float; 3]) -> [Float; 3] {
    let [l, chroma, hue] = *value;
    let hue_radians = hue.to_radians();
    [l, chroma * hue_radians.cos(), chroma * hue_radians.sin()]
}

// ====================================================================================================================

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::*;
    use crate::assert_close_enough;
    use crate::Float;

    fn assert_components(actual: &[Float; 3], expected: &[Float; 3], tolerance: Float) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!(
                (a - e).abs() < tolerance,
                "components differ:\n{:?}\n{:?}",
                actual,
                expected
            );
        }
    }

    #[test]
    fn test_gamma() {
        for value in [0.002, 0.0031308, 0.01, 0.03, 0.04045, 0.5, 1.0] {
            assert!((delinearize(linearize(value)) - value).abs() < 1e-12);
            assert!((linearize(delinearize(value)) - value).abs() < 1e-12);
        }
    }

    #[test]
    fn test_lab_f() {
        for value in [0.001, 0.008, 0.5, 1.0] {
            assert!((lab_f_inverse(lab_f(value)) - value).abs() < 1e-12);
        }
    }

    #[test]
    fn test_srgb_to_lab() {
        // Reference values for the D65 two-degree observer.
        assert_components(
            &srgb_to_lab(&[1.0, 0.0, 0.0]),
            &[53.24079414, 80.09245959, 67.20319635],
            1e-4,
        );
        assert_components(
            &srgb_to_lab(&[0.0, 0.0, 0.0]),
            &[0.0, 0.0, 0.0],
            1e-4,
        );

        let white = srgb_to_lab(&[1.0, 1.0, 1.0]);
        assert!((white[0] - 100.0).abs() < 1e-3);
        assert!(white[1].abs() < 1e-3);
        assert!(white[2].abs() < 1e-3);
    }

    #[test]
    fn test_lab_round_trip() {
        for srgb in [
            [1.0, 0.0, 0.0],
            [0.5, 0.25, 0.75],
            [0.0, 1.0, 1.0],
            [0.9, 0.9, 0.9],
        ] {
            assert_components(&lab_to_srgb(&srgb_to_lab(&srgb)), &srgb, 1e-5);
        }
    }

    #[test]
    fn test_hsl_round_trip() {
        for srgb in [
            [0.5, 0.25, 0.75],
            [1.0, 0.0, 0.0],
            [0.2, 0.8, 0.4],
            [0.7, 0.7, 0.7],
        ] {
            assert_components(&hsl_to_srgb(&srgb_to_hsl(&srgb)), &srgb, 1e-4);
        }
    }

    #[test]
    fn test_hsv_round_trip() {
        for srgb in [
            [0.5, 0.25, 0.75],
            [1.0, 0.0, 0.0],
            [0.2, 0.8, 0.4],
            [0.7, 0.7, 0.7],
        ] {
            assert_components(&hsv_to_srgb(&srgb_to_hsv(&srgb)), &srgb, 1e-4);
        }
    }

    #[test]
    fn test_achromatic() {
        let hsl = srgb_to_hsl(&[0.5, 0.5, 0.5]);
        assert_close_enough!(hsl[0], 0.0);
        assert_close_enough!(hsl[1], 0.0);

        let hsv = srgb_to_hsv(&[0.5, 0.5, 0.5]);
        assert_close_enough!(hsv[0], 0.0);
        assert_close_enough!(hsv[1], 0.0);
    }

    #[test]
    fn test_hsv_to_hsl() {
        // A half-bright, half-saturated cyan.
        let [hue, saturation, lightness] = hsv_to_hsl(&[180.0, 0.5, 0.5]);
        assert_close_enough!(hue, 180.0);
        assert_close_enough!(lightness, 0.375);
        assert!((0.0..=1.0).contains(&saturation));

        // And back again.
        let [hue, saturation, v] = hsl_to_hsv(&hsv_to_hsl(&[180.0, 0.5, 0.5]));
        assert_close_enough!(hue, 180.0);
        assert!((saturation - 0.5).abs() < 1e-12);
        assert!((v - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_lab_to_lch() {
        let [l, chroma, hue] = lab_to_lch(&[50.0, 20.0, -30.0]);
        assert_close_enough!(l, 50.0);
        assert!((chroma - (20.0 as Float).hypot(-30.0)).abs() < 1e-12);
        assert!((0.0..360.0).contains(&hue));

        assert_components(&lch_to_lab(&lab_to_lch(&[50.0, 20.0, -30.0])), &[50.0, 20.0, -30.0], 1e-9);
    }

    #[test]
    fn test_to_24bit() {
        assert_eq!(to_24bit(&[1.0, 0.0, 0.5]), [255, 0, 128]);
        assert_eq!(to_24bit(&[1.2, -0.2, 0.0]), [255, 0, 0]);
    }
}
