//! # Tintlab
//!
//! Tintlab is a deterministic color-science engine for deriving ten-step
//! tonal ramps from a single seed color. It has no internal mutable state:
//! every operation is a pure function of its inputs and a compiled-in table
//! of reference palettes.
//!
//!
//! ## 1. Overview
//!
//! Tintlab's main abstractions are:
//!
//!   * The color model, one plain value struct per color space: [`Rgba`],
//!     [`Hsl`], [`Hsv`], [`Lab`], and [`Lch`]. Constructors validate their
//!     components, hex parsing and CSS formatting live on [`Rgba`], and the
//!     pairwise conversions are exposed as methods.
//!   * The contrast engine: [`contrast_ratio`] computes the WCAG relative
//!     luminance contrast between two colors, compositing translucent
//!     foregrounds first, and [`text_tone`] turns that into a binary
//!     light-or-dark text recommendation.
//!   * The palette machinery: [`find_closest_palette`] scans a table of
//!     reference ramps for the entry perceptually closest to a [`Lab`]
//!     color, and [`tonal_palette`] and [`background_palette`] rebuild all
//!     ten steps of the winning ramp around an arbitrary seed color while
//!     preserving the ramp's tonal shape.
//!
//! The reference data itself is public as [`GOLDEN_PALETTES`] together with
//! the per-step weight tables [`LIGHTNESS_WEIGHTS`] and [`CHROMA_WEIGHTS`].
//!
//!
//! ## 2. One-Two-Three: Palettes!
//!
//! The three-step workflow for a themed surface works like this. First,
//! parse the seed color:
//!
//! ```
//! # use tintlab::Rgba;
//! let seed = Rgba::from_hex("#6200ee")?;
//! # Ok::<(), tintlab::error::HexFormatError>(())
//! ```
//!
//! Second, derive the ramps:
//!
//! ```
//! # use tintlab::{background_palette, tonal_palette, Rgba, PALETTE_STEPS};
//! # let seed = Rgba::from_hex("#6200ee").unwrap();
//! let tones = tonal_palette(&seed);
//! let surfaces = background_palette(&seed);
//! assert_eq!(tones.len(), PALETTE_STEPS.len());
//! assert_eq!(surfaces.len(), PALETTE_STEPS.len());
//! ```
//!
//! Third, pick readable text for each step:
//!
//! ```
//! # use tintlab::{text_tone, tonal_palette, Rgba, TextTone};
//! # let seed = Rgba::from_hex("#6200ee").unwrap();
//! # let tones = tonal_palette(&seed);
//! let on_700 = text_tone(&tones[7]);
//! assert_eq!(on_700, TextTone::Light);
//! ```
//!
//!
//! ## 3. Optional Features
//!
//! Tintlab supports one feature flag:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     and `u64` as [`Bits`] instead of `f32` as [`Float`] and `u32` as
//!     [`Bits`]. This feature is enabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod golden;
mod model;
mod palette;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use core::{contrast_ratio, text_tone, TextTone};
pub use golden::{CHROMA_WEIGHTS, GOLDEN_PALETTES, LIGHTNESS_WEIGHTS};
pub use model::{Hsl, Hsv, Lab, Lch, Rgba};
pub use palette::{
    background_palette, find_closest_palette, harmonies, suggested_step, tonal_palette, Harmonies,
    PaletteMatch, PALETTE_STEPS,
};
