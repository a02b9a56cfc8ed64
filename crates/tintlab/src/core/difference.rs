use crate::Float;

/// Compute the hue angle in degrees for the given chroma axes.
///
/// The result is `atan2(b, a)` normalized to `0..360`. Near-vanishing axes,
/// i.e., both magnitudes below 1e-4, yield a hue of 0 rather than an
/// arbitrary angle dominated by floating point noise.
fn hue_angle(a: Float, b: Float) -> Float {
    if a.abs() < 1e-4 && b.abs() < 1e-4 {
        return 0.0;
    }

    let angle = b.atan2(a).to_degrees();
    if angle >= 0.0 {
        angle
    } else {
        angle + 360.0
    }
}

/// Compute the CIEDE2000 color difference between two LAB colors.
///
/// This implementation carries the G chroma rescaling, the primed
/// chroma/hue terms with shortest-arc hue handling, and the T/Sl/Sc/Sh
/// weighting functions, but not the final rotation term RT. Distances are
/// only ever compared against each other, never reported as absolute
/// quantities.
#[allow(non_snake_case)]
pub(crate) fn delta_e_2000(reference: &[Float; 3], target: &[Float; 3]) -> Float {
    let [L1, a1, b1] = *reference;
    let [L2, a2, b2] = *target;

    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let mean_c = 0.5 * (c1 + c2);
    let G = 0.5
        * (1.0
            - (mean_c.powi(7) / (mean_c.powi(7) + (25.0 as Float).powi(7)))
                .sqrt());

    let a1_prime = a1 * (1.0 + G);
    let a2_prime = a2 * (1.0 + G);
    let c1_prime = a1_prime.hypot(b1);
    let c2_prime = a2_prime.hypot(b2);
    let h1_prime = hue_angle(a1_prime, b1);
    let h2_prime = hue_angle(a2_prime, b2);

    let delta_L = L1 - L2;
    let delta_c = c2_prime - c1_prime;

    // Shortest arc between the two hues.
    let delta_h = if (h1_prime - h2_prime).abs() <= 180.0 {
        h2_prime - h1_prime
    } else if h2_prime > h1_prime {
        h2_prime - h1_prime - 360.0
    } else {
        h2_prime - h1_prime + 360.0
    };
    let delta_h = 2.0 * (c1_prime * c2_prime).sqrt() * (delta_h / 2.0).to_radians().sin();

    let mean_L = 0.5 * (L1 + L2);
    let mean_c_prime = 0.5 * (c1_prime + c2_prime);

    // Mean hue, again on the shortest arc, with the extra rules for hues
    // straddling 0 degrees.
    let mean_h = if (h1_prime - h2_prime).abs() <= 180.0 {
        0.5 * (h1_prime + h2_prime)
    } else if h1_prime + h2_prime < 360.0 {
        0.5 * (h1_prime + h2_prime + 360.0)
    } else {
        0.5 * (h1_prime + h2_prime - 360.0)
    };

    let T = 1.0 - 0.17 * (mean_h - 30.0).to_radians().cos()
        + 0.24 * (2.0 * mean_h).to_radians().cos()
        + 0.32 * (3.0 * mean_h + 6.0).to_radians().cos()
        - 0.20 * (4.0 * mean_h - 63.0).to_radians().cos();

    let Sl = 1.0
        + (0.015 * (mean_L - 50.0).powi(2)) / (20.0 + (mean_L - 50.0).powi(2)).sqrt();
    let Sc = 1.0 + 0.045 * mean_c_prime;
    let Sh = 1.0 + 0.015 * mean_c_prime * T;

    let dl = delta_L / Sl;
    let dc = delta_c / Sc;
    let dh = delta_h / Sh;

    dl.mul_add(dl, dc.mul_add(dc, dh * dh)).sqrt()
}
