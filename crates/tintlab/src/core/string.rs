use super::conversion::{to_24bit, CHANNEL_EPSILON};
use crate::error::HexFormatError;
use crate::Float;

/// Parse a color in hexadecimal format. If successful, this function
/// returns the four coordinates, including alpha, in unit range.
///
/// The leading hash is optional and digits are case-insensitive. Three and
/// four digit colors are expanded by duplicating each digit; a missing
/// alpha pair defaults to fully opaque.
pub(crate) fn parse_hex(s: &str) -> Result<[Float; 4], HexFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);

    if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(HexFormatError::UnexpectedCharacters);
    }

    fn parse_single(digits: &str, index: usize) -> Result<u8, HexFormatError> {
        let t = digits
            .get(index..index + 1)
            .ok_or(HexFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| HexFormatError::UnexpectedCharacters)?;
        Ok(17 * n)
    }

    fn parse_pair(digits: &str, index: usize) -> Result<u8, HexFormatError> {
        let t = digits
            .get(2 * index..2 * index + 2)
            .ok_or(HexFormatError::UnexpectedCharacters)?;
        u8::from_str_radix(t, 16).map_err(|_| HexFormatError::UnexpectedCharacters)
    }

    let channels = match digits.len() {
        3 => [
            parse_single(digits, 0)?,
            parse_single(digits, 1)?,
            parse_single(digits, 2)?,
            0xff,
        ],
        4 => [
            parse_single(digits, 0)?,
            parse_single(digits, 1)?,
            parse_single(digits, 2)?,
            parse_single(digits, 3)?,
        ],
        6 => [
            parse_pair(digits, 0)?,
            parse_pair(digits, 1)?,
            parse_pair(digits, 2)?,
            0xff,
        ],
        8 => [
            parse_pair(digits, 0)?,
            parse_pair(digits, 1)?,
            parse_pair(digits, 2)?,
            parse_pair(digits, 3)?,
        ],
        length => return Err(HexFormatError::UnexpectedLength(length)),
    };

    Ok([
        channels[0] as Float / 255.0,
        channels[1] as Float / 255.0,
        channels[2] as Float / 255.0,
        channels[3] as Float / 255.0,
    ])
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the coordinates as a hashed hexadecimal color.
///
/// Channels render as two lowercase hex digits each. The alpha pair is
/// omitted for opaque colors.
pub(crate) fn format_hex(coordinates: &[Float; 4]) -> String {
    let [r, g, b] = to_24bit(&[coordinates[0], coordinates[1], coordinates[2]]);

    if 1.0 - coordinates[3] < CHANNEL_EPSILON {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        let alpha = (coordinates[3].clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, alpha)
    }
}

/// Format the coordinates as a CSS color with space-separated arguments.
///
/// Opaque colors render as `rgb(r g b)` with 24-bit channels; translucent
/// colors append the alpha after a slash, e.g., `rgb(0 255 0 / 0.75)`.
pub(crate) fn format_css(
    coordinates: &[Float; 4],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    let [r, g, b] = to_24bit(&[coordinates[0], coordinates[1], coordinates[2]]);

    if 1.0 - coordinates[3] < CHANNEL_EPSILON {
        f.write_fmt(format_args!("rgb({} {} {})", r, g, b))
    } else {
        // Round the alpha so that float noise does not leak into the
        // rendered string.
        let alpha = (coordinates[3].clamp(0.0, 1.0) * 1e5).round() / 1e5;
        f.write_fmt(format_args!("rgb({} {} {} / {})", r, g, b, alpha))
    }
}

// ====================================================================================================================
