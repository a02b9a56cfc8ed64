mod contrast;
mod conversion;
mod difference;
mod equality;
mod string;

// contrast
pub use contrast::{contrast_ratio, text_tone, TextTone};

// conversion
pub(crate) use conversion::{
    hsl_to_hsv, hsl_to_srgb, hsv_to_hsl, hsv_to_srgb, lab_to_lch, lab_to_srgb, lch_to_lab,
    srgb_to_hsl, srgb_to_hsv, srgb_to_lab, CHANNEL_EPSILON,
};

// difference
pub(crate) use difference::delta_e_2000;

// equality
pub use equality::to_eq_bits;
pub(crate) use equality::to_eq_hue_bits;

// string
pub(crate) use string::{format_css, format_hex, parse_hex};
