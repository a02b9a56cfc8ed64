use std::str::FromStr;

use crate::core::{
    delta_e_2000, format_css, format_hex, hsl_to_hsv, hsl_to_srgb, hsv_to_hsl, hsv_to_srgb,
    lab_to_lch, lab_to_srgb, lch_to_lab, parse_hex, srgb_to_hsl, srgb_to_hsv, srgb_to_lab,
    to_eq_bits, to_eq_hue_bits, CHANNEL_EPSILON,
};
use crate::error::{ComponentRangeError, HexFormatError};
use crate::Float;

/// Validate that the component fits into the given range.
fn validated(
    component: &'static str,
    value: Float,
    expected: std::ops::RangeInclusive<Float>,
) -> Result<Float, ComponentRangeError> {
    if expected.contains(&value) {
        Ok(value)
    } else {
        Err(ComponentRangeError::new(component, value, expected))
    }
}

// ====================================================================================================================

/// A color with red, green, blue, and alpha coordinates in unit range.
///
/// This struct is the canonical interchange format of this crate: hex
/// parsing and formatting as well as CSS formatting live here, and both
/// palette generators consume and produce it. Equality testing rounds away
/// the least significant digits, so colors that differ only by floating
/// point noise compare equal.
#[derive(Clone, Copy, Debug)]
pub struct Rgba {
    red: Float,
    green: Float,
    blue: Float,
    alpha: Float,
}

impl Rgba {
    /// The opaque white color.
    pub const WHITE: Rgba = Rgba::with_coordinates(1.0, 1.0, 1.0, 1.0);

    /// The opaque black color.
    pub const BLACK: Rgba = Rgba::with_coordinates(0.0, 0.0, 0.0, 1.0);

    /// Instantiate a new RGBA color. Every coordinate must be in `0..=1`.
    pub fn new(
        red: Float,
        green: Float,
        blue: Float,
        alpha: Float,
    ) -> Result<Self, ComponentRangeError> {
        Ok(Self {
            red: validated("red", red, 0.0..=1.0)?,
            green: validated("green", green, 0.0..=1.0)?,
            blue: validated("blue", blue, 0.0..=1.0)?,
            alpha: validated("alpha", alpha, 0.0..=1.0)?,
        })
    }

    /// Instantiate a new color from coordinates known to be in range.
    pub(crate) const fn with_coordinates(
        red: Float,
        green: Float,
        blue: Float,
        alpha: Float,
    ) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Instantiate a new opaque color from its 24-bit representation.
    ///
    /// ```
    /// # use tintlab::Rgba;
    /// let tangerine = Rgba::from_24bit(0xff, 0x93, 0x00);
    /// assert_eq!(tangerine.to_hex(), "#ff9300");
    /// ```
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::with_coordinates(
            r as Float / 255.0,
            g as Float / 255.0,
            b as Float / 255.0,
            1.0,
        )
    }

    /// Parse a color from its hexadecimal representation.
    ///
    /// This function accepts 3, 4, 6, and 8 hexadecimal digits with an
    /// optional leading hash; the short forms expand by duplicating each
    /// digit and a missing alpha defaults to fully opaque.
    ///
    /// ```
    /// # use tintlab::Rgba;
    /// let red = Rgba::from_hex("#F00")?;
    /// assert_eq!(red, Rgba::from_hex("#ff0000")?);
    /// assert_eq!(red, Rgba::from_hex("FF0000FF")?);
    /// assert!(Rgba::from_hex("zz0000").is_err());
    /// # Ok::<(), tintlab::error::HexFormatError>(())
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, HexFormatError> {
        let [red, green, blue, alpha] = parse_hex(s)?;
        Ok(Self::with_coordinates(red, green, blue, alpha))
    }

    /// Access the red coordinate.
    #[inline]
    pub const fn red(&self) -> Float {
        self.red
    }

    /// Access the green coordinate.
    #[inline]
    pub const fn green(&self) -> Float {
        self.green
    }

    /// Access the blue coordinate.
    #[inline]
    pub const fn blue(&self) -> Float {
        self.blue
    }

    /// Access the alpha coordinate.
    #[inline]
    pub const fn alpha(&self) -> Float {
        self.alpha
    }

    /// Determine whether this color is fully opaque, allowing for a little
    /// floating point noise in the alpha.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        1.0 - self.alpha < CHANNEL_EPSILON
    }

    /// Strip this color of its translucency.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to_opaque(&self) -> Self {
        if self.is_opaque() {
            *self
        } else {
            Self::with_coordinates(self.red, self.green, self.blue, 1.0)
        }
    }

    /// Format this color as a hashed hexadecimal string with lowercase
    /// digits, omitting the alpha pair for opaque colors.
    ///
    /// ```
    /// # use tintlab::{error::ComponentRangeError, Rgba};
    /// assert_eq!(Rgba::new(1.0, 0.0, 0.0, 1.0)?.to_hex(), "#ff0000");
    /// assert_eq!(Rgba::new(0.0, 0.0, 1.0, 0.5)?.to_hex(), "#0000ff80");
    /// # Ok::<(), ComponentRangeError>(())
    /// ```
    pub fn to_hex(&self) -> String {
        format_hex(&[self.red, self.green, self.blue, self.alpha])
    }

    /// Convert this color to HSL.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to_hsl(&self) -> Hsl {
        let [hue, saturation, lightness] = srgb_to_hsl(&[self.red, self.green, self.blue]);
        Hsl::with_coordinates(hue, saturation, lightness, self.alpha)
    }

    /// Convert this color to HSV.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to_hsv(&self) -> Hsv {
        let [hue, saturation, value] = srgb_to_hsv(&[self.red, self.green, self.blue]);
        Hsv::with_coordinates(hue, saturation, value, self.alpha)
    }

    /// Convert this color to LAB.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to_lab(&self) -> Lab {
        let [l, a, b] = srgb_to_lab(&[self.red, self.green, self.blue]);
        Lab::with_coordinates(l, a, b, self.alpha)
    }

    /// Interpolate between this and the other color in LAB space.
    ///
    /// The fraction is clamped to unit range; 0 yields this color and 1
    /// yields the other color.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn interpolate(&self, other: &Self, fraction: Float) -> Self {
        let fraction = fraction.clamp(0.0, 1.0);
        let origin = self.to_lab();
        let destination = other.to_lab();

        Lab::with_coordinates(
            origin.lightness + fraction * (destination.lightness - origin.lightness),
            origin.a + fraction * (destination.a - origin.a),
            origin.b + fraction * (destination.b - origin.b),
            origin.alpha + fraction * (destination.alpha - origin.alpha),
        )
        .to_rgba()
    }
}

impl FromStr for Rgba {
    type Err = HexFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for Rgba {
    /// Format this color as a CSS color string, e.g., `rgb(255 0 0)` or
    /// `rgb(0 255 0 / 0.75)` for translucent colors.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_css(&[self.red, self.green, self.blue, self.alpha], f)
    }
}

impl PartialEq for Rgba {
    fn eq(&self, other: &Self) -> bool {
        to_eq_bits(self.red) == to_eq_bits(other.red)
            && to_eq_bits(self.green) == to_eq_bits(other.green)
            && to_eq_bits(self.blue) == to_eq_bits(other.blue)
            && to_eq_bits(self.alpha) == to_eq_bits(other.alpha)
    }
}

// ====================================================================================================================

/// A color with hue, saturation, and lightness coordinates.
///
/// The hue ranges `0..=360` degrees; for achromatic colors it is 0 by
/// convention. Saturation, lightness, and alpha are in unit range.
#[derive(Clone, Copy, Debug)]
pub struct Hsl {
    hue: Float,
    saturation: Float,
    lightness: Float,
    alpha: Float,
}

impl Hsl {
    /// Instantiate a new HSL color.
    pub fn new(
        hue: Float,
        saturation: Float,
        lightness: Float,
        alpha: Float,
    ) -> Result<Self, ComponentRangeError> {
        Ok(Self {
            hue: validated("hue", hue, 0.0..=360.0)?,
            saturation: validated("saturation", saturation, 0.0..=1.0)?,
            lightness: validated("lightness", lightness, 0.0..=1.0)?,
            alpha: validated("alpha", alpha, 0.0..=1.0)?,
        })
    }

    pub(crate) const fn with_coordinates(
        hue: Float,
        saturation: Float,
        lightness: Float,
        alpha: Float,
    ) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    /// Access the hue in degrees.
    #[inline]
    pub const fn hue(&self) -> Float {
        self.hue
    }

    /// Access the saturation.
    #[inline]
    pub const fn saturation(&self) -> Float {
        self.saturation
    }

    /// Access the lightness.
    #[inline]
    pub const fn lightness(&self) -> Float {
        self.lightness
    }

    /// Access the alpha.
    #[inline]
    pub const fn alpha(&self) -> Float {
        self.alpha
    }

    /// Rotate the hue by the given number of degrees, which may be
    /// negative. The resulting hue is normalized to `0..360`.
    ///
    /// ```
    /// # use tintlab::{error::ComponentRangeError, Hsl};
    /// let teal = Hsl::new(180.0, 0.5, 0.5, 1.0)?;
    /// assert_eq!(teal.rotate(90.0).hue(), 270.0);
    /// assert_eq!(teal.rotate(-200.0).hue(), 340.0);
    /// assert_eq!(teal.rotate(200.0).hue(), 20.0);
    /// # Ok::<(), ComponentRangeError>(())
    /// ```
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn rotate(&self, degrees: Float) -> Self {
        Self {
            hue: (self.hue + degrees).rem_euclid(360.0),
            ..*self
        }
    }

    /// Convert this color to RGBA.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to_rgba(&self) -> Rgba {
        let [red, green, blue] = hsl_to_srgb(&[self.hue, self.saturation, self.lightness]);
        Rgba::with_coordinates(
            red.clamp(0.0, 1.0),
            green.clamp(0.0, 1.0),
            blue.clamp(0.0, 1.0),
            self.alpha,
        )
    }

    /// Convert this color to HSV.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to_hsv(&self) -> Hsv {
        let [hue, saturation, value] = hsl_to_hsv(&[self.hue, self.saturation, self.lightness]);
        Hsv::with_coordinates(hue, saturation, value, self.alpha)
    }
}

impl PartialEq for Hsl {
    fn eq(&self, other: &Self) -> bool {
        to_eq_hue_bits(self.hue) == to_eq_hue_bits(other.hue)
            && to_eq_bits(self.saturation) == to_eq_bits(other.saturation)
            && to_eq_bits(self.lightness) == to_eq_bits(other.lightness)
            && to_eq_bits(self.alpha) == to_eq_bits(other.alpha)
    }
}

// ====================================================================================================================

/// A color with hue, saturation, and value coordinates.
///
/// The conventions match [`Hsl`]: hue in `0..=360` with 0 for achromatic
/// colors, everything else in unit range.
#[derive(Clone, Copy, Debug)]
pub struct Hsv {
    hue: Float,
    saturation: Float,
    value: Float,
    alpha: Float,
}

impl Hsv {
    /// Instantiate a new HSV color.
    pub fn new(
        hue: Float,
        saturation: Float,
        value: Float,
        alpha: Float,
    ) -> Result<Self, ComponentRangeError> {
        Ok(Self {
            hue: validated("hue", hue, 0.0..=360.0)?,
            saturation: validated("saturation", saturation, 0.0..=1.0)?,
            value: validated("value", value, 0.0..=1.0)?,
            alpha: validated("alpha", alpha, 0.0..=1.0)?,
        })
    }

    pub(crate) const fn with_coordinates(
        hue: Float,
        saturation: Float,
        value: Float,
        alpha: Float,
    ) -> Self {
        Self {
            hue,
            saturation,
            value,
            alpha,
        }
    }

    /// Access the hue in degrees.
    #[inline]
    pub const fn hue(&self) -> Float {
        self.hue
    }

    /// Access the saturation.
    #[inline]
    pub const fn saturation(&self) -> Float {
        self.saturation
    }

    /// Access the value.
    #[inline]
    pub const fn value(&self) -> Float {
        self.value
    }

    /// Access the alpha.
    #[inline]
    pub const fn alpha(&self) -> Float {
        self.alpha
    }

    /// Convert this color to RGBA.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to_rgba(&self) -> Rgba {
        let [red, green, blue] = hsv_to_srgb(&[self.hue, self.saturation, self.value]);
        Rgba::with_coordinates(
            red.clamp(0.0, 1.0),
            green.clamp(0.0, 1.0),
            blue.clamp(0.0, 1.0),
            self.alpha,
        )
    }

    /// Convert this color to HSL.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to_hsl(&self) -> Hsl {
        let [hue, saturation, lightness] = hsv_to_hsl(&[self.hue, self.saturation, self.value]);
        Hsl::with_coordinates(hue, saturation, lightness, self.alpha)
    }
}

impl PartialEq for Hsv {
    fn eq(&self, other: &Self) -> bool {
        to_eq_hue_bits(self.hue) == to_eq_hue_bits(other.hue)
            && to_eq_bits(self.saturation) == to_eq_bits(other.saturation)
            && to_eq_bits(self.value) == to_eq_bits(other.value)
            && to_eq_bits(self.alpha) == to_eq_bits(other.alpha)
    }
}

// ====================================================================================================================

/// A color in the CIELAB color space with the D65 standard illuminant.
///
/// The lightness L ranges `0..=100`. The a and b axes are unbounded, though
/// in practice they stay within -150 to 150. All perceptual reasoning in
/// this crate, including the palette matcher's distance metric, happens in
/// this space or its polar form [`Lch`].
#[derive(Clone, Copy, Debug)]
pub struct Lab {
    lightness: Float,
    a: Float,
    b: Float,
    alpha: Float,
}

impl Lab {
    /// Instantiate a new LAB color. The lightness must be in `0..=100` and
    /// the alpha in `0..=1`; the a/b axes are unbounded.
    pub fn new(lightness: Float, a: Float, b: Float, alpha: Float) -> Result<Self, ComponentRangeError> {
        Ok(Self {
            lightness: validated("lightness", lightness, 0.0..=100.0)?,
            a,
            b,
            alpha: validated("alpha", alpha, 0.0..=1.0)?,
        })
    }

    pub(crate) const fn with_coordinates(lightness: Float, a: Float, b: Float, alpha: Float) -> Self {
        Self {
            lightness,
            a,
            b,
            alpha,
        }
    }

    /// Access the lightness L.
    #[inline]
    pub const fn lightness(&self) -> Float {
        self.lightness
    }

    /// Access the green-red axis a.
    #[inline]
    pub const fn a(&self) -> Float {
        self.a
    }

    /// Access the blue-yellow axis b.
    #[inline]
    pub const fn b(&self) -> Float {
        self.b
    }

    /// Access the alpha.
    #[inline]
    pub const fn alpha(&self) -> Float {
        self.alpha
    }

    /// Compute the perceptual distance to the other color.
    ///
    /// The metric is the CIEDE2000 color difference without its final
    /// rotation term, exactly as used by the palette matcher. The result is
    /// only meaningful relative to other distances.
    #[must_use]
    pub fn distance(&self, other: &Self) -> Float {
        delta_e_2000(
            &[self.lightness, self.a, self.b],
            &[other.lightness, other.a, other.b],
        )
    }

    /// Convert this color to LCH, the polar form of LAB.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to_lch(&self) -> Lch {
        let [lightness, chroma, hue] = lab_to_lch(&[self.lightness, self.a, self.b]);
        Lch::with_coordinates(lightness, chroma, hue, self.alpha)
    }

    /// Convert this color to RGBA.
    ///
    /// LAB covers colors well outside the sRGB gamut; out-of-gamut channels
    /// clamp to unit range.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to_rgba(&self) -> Rgba {
        let [red, green, blue] = lab_to_srgb(&[self.lightness, self.a, self.b]);
        Rgba::with_coordinates(red, green, blue, self.alpha.clamp(0.0, 1.0))
    }
}

impl PartialEq for Lab {
    fn eq(&self, other: &Self) -> bool {
        to_eq_bits(self.lightness) == to_eq_bits(other.lightness)
            && to_eq_bits(self.a) == to_eq_bits(other.a)
            && to_eq_bits(self.b) == to_eq_bits(other.b)
            && to_eq_bits(self.alpha) == to_eq_bits(other.alpha)
    }
}

// ====================================================================================================================

/// A color in LCH, the polar form of [`Lab`].
///
/// The lightness L ranges `0..=100`, the chroma is non-negative without an
/// upper bound, and the hue ranges `0..=360` degrees with 0 by convention
/// when the chroma vanishes.
#[derive(Clone, Copy, Debug)]
pub struct Lch {
    lightness: Float,
    chroma: Float,
    hue: Float,
    alpha: Float,
}

impl Lch {
    /// Instantiate a new LCH color.
    pub fn new(
        lightness: Float,
        chroma: Float,
        hue: Float,
        alpha: Float,
    ) -> Result<Self, ComponentRangeError> {
        Ok(Self {
            lightness: validated("lightness", lightness, 0.0..=100.0)?,
            chroma: validated("chroma", chroma, 0.0..=Float::INFINITY)?,
            hue: validated("hue", hue, 0.0..=360.0)?,
            alpha: validated("alpha", alpha, 0.0..=1.0)?,
        })
    }

    pub(crate) const fn with_coordinates(
        lightness: Float,
        chroma: Float,
        hue: Float,
        alpha: Float,
    ) -> Self {
        Self {
            lightness,
            chroma,
            hue,
            alpha,
        }
    }

    /// Access the lightness L.
    #[inline]
    pub const fn lightness(&self) -> Float {
        self.lightness
    }

    /// Access the chroma.
    #[inline]
    pub const fn chroma(&self) -> Float {
        self.chroma
    }

    /// Access the hue in degrees.
    #[inline]
    pub const fn hue(&self) -> Float {
        self.hue
    }

    /// Access the alpha.
    #[inline]
    pub const fn alpha(&self) -> Float {
        self.alpha
    }

    /// Convert this color to LAB.
    #[must_use = "method returns a new color and does not mutate original value"]
    pub fn to_lab(&self) -> Lab {
        let [lightness, a, b] = lch_to_lab(&[self.lightness, self.chroma, self.hue]);
        Lab::with_coordinates(lightness, a, b, self.alpha)
    }
}

impl PartialEq for Lch {
    fn eq(&self, other: &Self) -> bool {
        to_eq_bits(self.lightness) == to_eq_bits(other.lightness)
            && to_eq_bits(self.chroma) == to_eq_bits(other.chroma)
            && to_eq_hue_bits(self.hue) == to_eq_hue_bits(other.hue)
            && to_eq_bits(self.alpha) == to_eq_bits(other.alpha)
    }
}

// ====================================================================================================================
