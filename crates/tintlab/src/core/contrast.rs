use super::conversion::linearize;
use crate::model::Rgba;
use crate::Float;

/// The coefficients for computing the relative luminance of linear sRGB
/// coordinates.
const SRGB_LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// The WCAG AA contrast threshold for normal body text.
const AA_NORMAL_TEXT: Float = 4.5;

/// Compute the relative luminance of the given sRGB coordinates.
///
/// This is the Y of XYZ as defined by WCAG 2: every channel is linearized
/// before the weighted sum. The result ranges `0..=1`.
fn relative_luminance(coordinates: &[Float; 3]) -> Float {
    let [c1, c2, c3] = *SRGB_LUMINANCE;
    let [r, g, b] = *coordinates;

    linearize(r).mul_add(c1, linearize(g).mul_add(c2, linearize(b) * c3))
}

/// Composite the foreground over the background with the standard
/// alpha-over operator. The background is treated as opaque.
fn composite_over(foreground: &Rgba, background: &Rgba) -> [Float; 3] {
    let alpha = foreground.alpha();
    [
        foreground.red().mul_add(alpha, background.red() * (1.0 - alpha)),
        foreground
            .green()
            .mul_add(alpha, background.green() * (1.0 - alpha)),
        foreground
            .blue()
            .mul_add(alpha, background.blue() * (1.0 - alpha)),
    ]
}

/// Compute the WCAG contrast ratio between foreground and background.
///
/// A translucent foreground is first composited over the opaque form of the
/// background; for opaque colors the function is symmetric in its
/// arguments. The result ranges from 1 for identical colors to 21 for black
/// on white.
///
/// # Examples
///
/// ```
/// # use tintlab::{contrast_ratio, Rgba};
/// let ratio = contrast_ratio(&Rgba::WHITE, &Rgba::BLACK);
/// assert!((ratio - 21.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn contrast_ratio(foreground: &Rgba, background: &Rgba) -> Float {
    let background = background.to_opaque();
    let foreground_luminance = relative_luminance(&composite_over(foreground, &background));
    let background_luminance = relative_luminance(&[
        background.red(),
        background.green(),
        background.blue(),
    ]);

    let (lighter, darker) = if foreground_luminance >= background_luminance {
        (foreground_luminance, background_luminance)
    } else {
        (background_luminance, foreground_luminance)
    };

    (lighter + 0.05) / (darker + 0.05)
}

// --------------------------------------------------------------------------------------------------------------------

/// The recommended tone for text on some background color.
///
/// This enum is returned by [`text_tone`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextTone {
    /// Use light, i.e., white, text.
    Light,
    /// Use dark, i.e., black, text.
    Dark,
}

impl std::fmt::Display for TextTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

/// Recommend a text tone for the given background color.
///
/// White text wins if it reaches the WCAG AA threshold of 4.5 for normal
/// body text. Otherwise black text wins if it reaches that threshold.
/// Otherwise neither meets AA and the tone with the higher contrast wins.
///
/// # Examples
///
/// ```
/// # use tintlab::{text_tone, Rgba, TextTone};
/// assert_eq!(text_tone(&Rgba::WHITE), TextTone::Dark);
/// assert_eq!(text_tone(&Rgba::BLACK), TextTone::Light);
/// ```
#[must_use]
pub fn text_tone(background: &Rgba) -> TextTone {
    let light = contrast_ratio(&Rgba::WHITE, background);
    if light >= AA_NORMAL_TEXT {
        return TextTone::Light;
    }

    let dark = contrast_ratio(&Rgba::BLACK, background);
    if dark >= AA_NORMAL_TEXT || dark >= light {
        TextTone::Dark
    } else {
        TextTone::Light
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{contrast_ratio, text_tone, TextTone};
    use crate::error::ComponentRangeError;
    use crate::Rgba;

    #[test]
    fn test_contrast_ratio() -> Result<(), ComponentRangeError> {
        let white_on_black = contrast_ratio(&Rgba::WHITE, &Rgba::BLACK);
        assert!((white_on_black - 21.0).abs() < 1e-6);

        // Symmetric for opaque colors.
        let red = Rgba::new(1.0, 0.0, 0.0, 1.0)?;
        assert!((contrast_ratio(&red, &Rgba::BLACK) - 5.252).abs() < 1e-2);
        assert!(
            (contrast_ratio(&red, &Rgba::BLACK) - contrast_ratio(&Rgba::BLACK, &red)).abs()
                < 1e-12
        );

        // Identical colors have no contrast.
        assert!((contrast_ratio(&red, &red) - 1.0).abs() < 1e-12);

        Ok(())
    }

    #[test]
    fn test_translucent_foreground() -> Result<(), ComponentRangeError> {
        // Fully transparent text disappears into its background.
        let ghost = Rgba::new(1.0, 1.0, 1.0, 0.0)?;
        assert!((contrast_ratio(&ghost, &Rgba::BLACK) - 1.0).abs() < 1e-12);

        // Half-transparent white over black reads as medium gray.
        let veil = Rgba::new(1.0, 1.0, 1.0, 0.5)?;
        let expected = contrast_ratio(&Rgba::new(0.5, 0.5, 0.5, 1.0)?, &Rgba::BLACK);
        assert!((contrast_ratio(&veil, &Rgba::BLACK) - expected).abs() < 1e-12);

        Ok(())
    }

    #[test]
    fn test_text_tone() -> Result<(), ComponentRangeError> {
        assert_eq!(text_tone(&Rgba::WHITE), TextTone::Dark);
        assert_eq!(text_tone(&Rgba::BLACK), TextTone::Light);

        // A dark navy wants light text, a pale yellow wants dark text.
        assert_eq!(text_tone(&Rgba::new(0.1, 0.1, 0.4, 1.0)?), TextTone::Light);
        assert_eq!(text_tone(&Rgba::new(1.0, 0.95, 0.6, 1.0)?), TextTone::Dark);

        Ok(())
    }
}
