use crate::error::GoldenPaletteError;
use crate::golden::{CHROMA_WEIGHTS, GOLDEN_PALETTES, LIGHTNESS_WEIGHTS};
use crate::model::{Hsl, Lab, Lch, Rgba};
use crate::Float;

/// The ten canonical tonal steps of a generated palette, from the lightest
/// step 50 to the darkest step 900.
pub const PALETTE_STEPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// The margin by which each generated step must be darker than its
/// predecessor. It keeps the lightness ramp strictly decreasing even when
/// the seed color sits right between two reference tones.
const LIGHTNESS_MARGIN: Float = 1.7;

/// A mid-tone chroma below this bound marks a nearly neutral reference
/// palette, which uses a different chroma scaling policy.
const NEUTRAL_CHROMA_BOUND: Float = 30.0;

/// The cap on the per-step chroma scaling ratio.
const CHROMA_RATIO_CAP: Float = 1.25;

// --------------------------------------------------------------------------------------------------------------------

/// The result of a nearest-neighbor search over a palette table.
///
/// The match borrows the winning palette and records the index of its
/// perceptually closest tonal step.
#[derive(Clone, Copy, Debug)]
pub struct PaletteMatch<'a> {
    /// The reference palette closest to the target color.
    pub palette: &'a [Lab],
    /// The index of the closest tonal step within that palette.
    pub index: usize,
}

/// Scan every (palette, step) pair for the entry closest to the target.
/// The table must have a non-empty first palette.
fn scan_closest<'a, P: AsRef<[Lab]>>(target: &Lab, palettes: &'a [P]) -> PaletteMatch<'a> {
    let mut best = PaletteMatch {
        palette: palettes[0].as_ref(),
        index: 0,
    };
    let mut min_distance = Float::INFINITY;

    for palette in palettes {
        let palette = palette.as_ref();
        for (index, entry) in palette.iter().enumerate() {
            let distance = entry.distance(target);
            if distance < min_distance {
                min_distance = distance;
                best = PaletteMatch { palette, index };
            }
        }
    }

    best
}

/// Find the reference palette entry perceptually closest to the target.
///
/// This function exhaustively scans every tonal step of every palette and
/// keeps the entry with the smallest [`Lab::distance`]; ties keep the first
/// entry in scan order. Callers that want the standard table pass
/// [`GOLDEN_PALETTES`](crate::GOLDEN_PALETTES).
///
/// # Errors
///
/// Fails with [`GoldenPaletteError`] if the table or any of its palettes is
/// empty.
///
/// # Examples
///
/// ```
/// # use tintlab::{find_closest_palette, GOLDEN_PALETTES, Rgba};
/// let seed = Rgba::from_hex("#e91e63")?.to_lab();
/// let matched = find_closest_palette(&seed, &GOLDEN_PALETTES)?;
/// assert_eq!(matched.palette.len(), 10);
/// assert!(matched.index < 10);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn find_closest_palette<'a, P: AsRef<[Lab]>>(
    target: &Lab,
    palettes: &'a [P],
) -> Result<PaletteMatch<'a>, GoldenPaletteError> {
    if palettes.is_empty() || palettes.iter().any(|palette| palette.as_ref().is_empty()) {
        return Err(GoldenPaletteError);
    }

    Ok(scan_closest(target, palettes))
}

// --------------------------------------------------------------------------------------------------------------------

/// Generate the ten-step tonal palette for the given seed color.
///
/// The generator looks up the reference palette whose tones come closest to
/// the seed, then rebuilds all ten steps so that the ramp passes through
/// the seed exactly at its natural tonal position:
///
///   1. The seed's LCH deltas against the matched reference tone determine
///      how far lightness, chroma, and hue have to move.
///   2. Every other step moves by those deltas scaled with the per-step
///      weight tables, so steps far from the anchor move less aggressively.
///      Nearly neutral palettes shift chroma uniformly instead.
///   3. A running ceiling forces each step to come out at least
///      [`LIGHTNESS_MARGIN`] darker than its predecessor, which keeps the
///      ramp monotonic. The steps are therefore processed strictly in
///      increasing index order.
///
/// The step at the matched index is the seed color itself, unchanged.
///
/// # Examples
///
/// ```
/// # use tintlab::{tonal_palette, Rgba};
/// let seed = Rgba::from_hex("#3f51b5")?;
/// let steps = tonal_palette(&seed);
/// assert!(steps.contains(&seed));
/// # Ok::<(), tintlab::error::HexFormatError>(())
/// ```
#[must_use]
pub fn tonal_palette(base: &Rgba) -> [Rgba; 10] {
    let target = base.to_lab();
    let matched = scan_closest(&target, &GOLDEN_PALETTES);

    let anchor = matched.palette[matched.index].to_lch();
    let goal = target.to_lch();

    let lightness_delta = anchor.lightness() - goal.lightness();
    let chroma_delta = anchor.chroma() - goal.chroma();
    let hue_delta = anchor.hue() - goal.hue();
    let nearly_neutral = matched.palette[5].to_lch().chroma() < NEUTRAL_CHROMA_BOUND;

    let mut ceiling: Float = 100.0;
    let mut steps = [Rgba::BLACK; 10];

    for (index, entry) in matched.palette.iter().enumerate() {
        if index == matched.index {
            ceiling = (goal.lightness() - LIGHTNESS_MARGIN).max(0.0);
            steps[index] = *base;
            continue;
        }

        let step = entry.to_lch();

        let lightness = step.lightness()
            - LIGHTNESS_WEIGHTS[index] / LIGHTNESS_WEIGHTS[matched.index] * lightness_delta;
        let lightness = lightness.min(ceiling).clamp(0.0, 100.0);

        let chroma = if nearly_neutral {
            step.chroma() - chroma_delta
        } else {
            step.chroma()
                - chroma_delta * (CHROMA_WEIGHTS[index] / CHROMA_WEIGHTS[matched.index]).min(CHROMA_RATIO_CAP)
        };
        let chroma = chroma.max(0.0);

        let hue = (step.hue() - hue_delta).rem_euclid(360.0);

        ceiling = (lightness - LIGHTNESS_MARGIN).max(0.0);
        steps[index] = Lch::with_coordinates(lightness, chroma, hue, entry.alpha())
            .to_lab()
            .to_rgba();
    }

    steps
}

// --------------------------------------------------------------------------------------------------------------------

/// The saturation cap for background surfaces.
const SURFACE_MAX_SATURATION: Float = 0.25;

/// The lightness band for background surfaces: step lightness remaps
/// linearly into `SURFACE_LIGHTNESS_FLOOR..=SURFACE_LIGHTNESS_FLOOR +
/// SURFACE_LIGHTNESS_SPAN`.
const SURFACE_LIGHTNESS_FLOOR: Float = 0.86;
const SURFACE_LIGHTNESS_SPAN: Float = 0.13;

/// Generate the ten-step background palette for the given seed color.
///
/// This sibling of [`tonal_palette`] targets surface colors rather than UI
/// elements and text: it runs the same generator and then biases every step
/// toward high lightness and low chroma, capping the HSL saturation at
/// [`SURFACE_MAX_SATURATION`] and remapping the lightness into a narrow
/// band near white. The remapping is linear, so the ramp keeps the
/// reference palette's tonal ordering.
///
/// # Examples
///
/// ```
/// # use tintlab::{background_palette, Rgba};
/// let surfaces = background_palette(&Rgba::from_hex("#8033cc")?);
/// for surface in &surfaces {
///     assert!(surface.red() >= 0.7);
///     assert!(surface.green() >= 0.7);
///     assert!(surface.blue() >= 0.7);
/// }
/// # Ok::<(), tintlab::error::HexFormatError>(())
/// ```
#[must_use]
pub fn background_palette(base: &Rgba) -> [Rgba; 10] {
    let mut steps = tonal_palette(base);

    for step in &mut steps {
        let tone = step.to_hsl();
        let saturation = tone.saturation().min(SURFACE_MAX_SATURATION);
        let lightness = SURFACE_LIGHTNESS_SPAN.mul_add(tone.lightness(), SURFACE_LIGHTNESS_FLOOR);
        *step = Hsl::with_coordinates(tone.hue(), saturation, lightness, tone.alpha()).to_rgba();
    }

    steps
}

// --------------------------------------------------------------------------------------------------------------------

/// The classic hue companions of a seed color.
///
/// All companions share the seed's saturation and lightness; only the hue
/// rotates. This struct is returned by [`harmonies`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Harmonies {
    /// The color opposite the seed on the hue wheel.
    pub complementary: Rgba,
    /// The two colors flanking the complementary by 22.5 degrees.
    pub split_complementary: [Rgba; 2],
    /// The two colors 30 degrees to either side of the seed.
    pub analogous: [Rgba; 2],
    /// The four colors at 60 and 120 degrees to either side of the seed.
    pub triadic: [Rgba; 4],
}

/// Compute the classic hue companions of the given seed color.
#[must_use]
pub fn harmonies(base: &Rgba) -> Harmonies {
    let tone = base.to_hsl();
    let spin = |degrees: Float| tone.rotate(degrees).to_rgba();

    Harmonies {
        complementary: spin(180.0),
        split_complementary: [spin(180.0 - 22.5), spin(180.0 + 22.5)],
        analogous: [spin(-30.0), spin(30.0)],
        triadic: [spin(60.0), spin(120.0), spin(-60.0), spin(-120.0)],
    }
}

/// Suggest the tonal step a seed color naturally occupies.
///
/// The suggestion buckets the seed's HSL lightness into the ten steps of
/// [`PALETTE_STEPS`]: lightness 0.9 and up maps to step 50, each tenth
/// below that moves one step darker, and lightness below 0.1 maps to step
/// 900.
#[must_use]
pub fn suggested_step(base: &Rgba) -> usize {
    let lightness = base.to_hsl().lightness();
    (9 - (lightness * 10.0).floor() as i32).clamp(0, 9) as usize
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{
        background_palette, find_closest_palette, harmonies, suggested_step, tonal_palette,
        PALETTE_STEPS,
    };
    use crate::error::{ComponentRangeError, GoldenPaletteError, HexFormatError};
    use crate::golden::GOLDEN_PALETTES;
    use crate::model::{Lab, Rgba};
    use crate::Float;

    #[test]
    fn test_steps() {
        assert_eq!(PALETTE_STEPS.len(), 10);
        assert_eq!(PALETTE_STEPS[0], 50);
        assert_eq!(PALETTE_STEPS[9], 900);
    }

    #[test]
    fn test_matcher_rejects_empty_tables() -> Result<(), ComponentRangeError> {
        let target = Lab::new(0.0, 0.0, 0.0, 1.0)?;

        let empty: Vec<Vec<Lab>> = Vec::new();
        assert_eq!(
            find_closest_palette(&target, &empty).map(|m| m.index),
            Err(GoldenPaletteError)
        );

        let empty_entry: Vec<Vec<Lab>> = vec![Vec::new()];
        assert_eq!(
            find_closest_palette(&target, &empty_entry).map(|m| m.index),
            Err(GoldenPaletteError)
        );

        Ok(())
    }

    #[test]
    fn test_matcher_finds_exact_entry() -> Result<(), GoldenPaletteError> {
        // The mid tone of the first golden palette matches itself.
        let target = GOLDEN_PALETTES[0][5];
        let matched = find_closest_palette(&target, &GOLDEN_PALETTES)?;
        assert!(std::ptr::eq(matched.palette.as_ptr(), GOLDEN_PALETTES[0].as_ptr()));
        assert_eq!(matched.index, 5);
        assert!(matched.palette[matched.index].distance(&target).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_matcher_finds_nearby_entry() -> Result<(), Box<dyn std::error::Error>> {
        // Slightly off the mid tone of the first palette.
        let target = Lab::new(56.0, 65.0, 48.0, 1.0)?;
        let matched = find_closest_palette(&target, &GOLDEN_PALETTES)?;
        assert!(std::ptr::eq(matched.palette.as_ptr(), GOLDEN_PALETTES[0].as_ptr()));
        assert_eq!(matched.index, 5);

        // A pale pink belongs to the lightest tone of the second palette.
        let target = Lab::new(92.68053776327665, 9.515385232804263, -0.8994072969754852, 1.0)?;
        let matched = find_closest_palette(&target, &GOLDEN_PALETTES)?;
        assert!(std::ptr::eq(matched.palette.as_ptr(), GOLDEN_PALETTES[1].as_ptr()));
        assert_eq!(matched.index, 0);

        Ok(())
    }

    #[test]
    fn test_generated_palette_anchors_on_seed() -> Result<(), HexFormatError> {
        for hex in ["#e91e63", "#3f51b5", "#4caf50", "#795548", "#607d8b"] {
            let seed = Rgba::from_hex(hex)?;
            let steps = tonal_palette(&seed);
            assert!(
                steps.iter().any(|step| *step == seed),
                "{} is missing from its own palette",
                hex
            );
        }
        Ok(())
    }

    #[test]
    fn test_generated_lightness_never_increases() -> Result<(), HexFormatError> {
        for hex in ["#e91e63", "#3f51b5", "#4caf50", "#ff9800", "#9e9e9e"] {
            let steps = tonal_palette(&Rgba::from_hex(hex)?);
            let lightness: Vec<Float> = steps
                .iter()
                .map(|step| step.to_lab().lightness())
                .collect();

            for pair in lightness.windows(2) {
                assert!(
                    pair[1] <= pair[0] + 0.5,
                    "{} produced a brightening ramp: {:?}",
                    hex,
                    lightness
                );
            }
        }
        Ok(())
    }

    #[test]
    fn test_generated_palette_for_golden_seed() {
        // A seed that is exactly a reference tone reproduces its whole
        // reference ramp, so the lightness ordering is strict.
        let seed = GOLDEN_PALETTES[0][5].to_rgba();
        let steps = tonal_palette(&seed);
        let lightness: Vec<Float> = steps.iter().map(|step| step.to_lab().lightness()).collect();

        for pair in lightness.windows(2) {
            assert!(pair[1] < pair[0], "ramp not strict: {:?}", lightness);
        }
    }

    #[test]
    fn test_generated_palette_boundaries() {
        for seed in [Rgba::WHITE, Rgba::BLACK] {
            for step in tonal_palette(&seed) {
                for channel in [step.red(), step.green(), step.blue(), step.alpha()] {
                    assert!(channel.is_finite());
                    assert!((0.0..=1.0).contains(&channel));
                }
            }
        }
    }

    #[test]
    fn test_background_palette_is_pale() -> Result<(), ComponentRangeError> {
        // Purple-ish, as in the reference test data.
        let seed = Rgba::new(0.5, 0.2, 0.8, 1.0)?;
        let steps = background_palette(&seed);
        assert_eq!(steps.len(), 10);

        for step in &steps {
            let channels = [step.red(), step.green(), step.blue()];
            let max = channels.iter().cloned().fold(Float::MIN, Float::max);
            let min = channels.iter().cloned().fold(Float::MAX, Float::min);

            // Every channel stays light and the max-min saturation low.
            assert!(min >= 0.7, "channel too dark: {:?}", step);
            assert!((max - min) / max <= 0.3, "surface too saturated: {:?}", step);
        }

        Ok(())
    }

    #[test]
    fn test_harmonies() -> Result<(), ComponentRangeError> {
        let red = Rgba::new(1.0, 0.0, 0.0, 1.0)?;
        let companions = harmonies(&red);

        // Red's complement is cyan.
        assert_eq!(companions.complementary.to_hsl().hue(), 180.0);
        assert_eq!(companions.split_complementary[0].to_hsl().hue(), 157.5);
        assert_eq!(companions.split_complementary[1].to_hsl().hue(), 202.5);
        assert_eq!(companions.analogous[0].to_hsl().hue(), 330.0);
        assert_eq!(companions.analogous[1].to_hsl().hue(), 30.0);
        assert_eq!(companions.triadic[1].to_hsl().hue(), 120.0);
        Ok(())
    }

    #[test]
    fn test_suggested_step() -> Result<(), ComponentRangeError> {
        assert_eq!(suggested_step(&Rgba::WHITE), 0);
        assert_eq!(suggested_step(&Rgba::BLACK), 9);
        assert_eq!(suggested_step(&Rgba::new(0.5, 0.5, 0.5, 1.0)?), 4);
        Ok(())
    }
}
