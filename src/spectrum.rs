//! Wavelength-to-color conversion for visualizing spectra.

use crate::colorize::Rgba;

/// Approximate color the eye perceives for a wavelength in nanometers.
///
/// Piecewise-linear over the visible band; wavelengths outside 380-780 nm come
/// back black, and the perceived intensity rolls off linearly toward both band
/// edges. Operates on whole nanometers, so fractional input is truncated.
pub fn wavelength_to_rgb(nm: f64) -> Rgba {
    let w = nm.trunc();

    let (r, g, b) = if w >= 380.0 && w < 440.0 {
        (-(w - 440.0) / (440.0 - 350.0), 0.0, 1.0)
    } else if w >= 440.0 && w < 490.0 {
        (0.0, (w - 440.0) / (490.0 - 440.0), 1.0)
    } else if w >= 490.0 && w < 510.0 {
        (0.0, 1.0, -(w - 510.0) / (510.0 - 490.0))
    } else if w >= 510.0 && w < 580.0 {
        ((w - 510.0) / (580.0 - 510.0), 1.0, 0.0)
    } else if w >= 580.0 && w < 645.0 {
        (1.0, -(w - 645.0) / (645.0 - 580.0), 0.0)
    } else if w >= 645.0 && w <= 780.0 {
        (1.0, 0.0, 0.0)
    } else {
        (0.0, 0.0, 0.0)
    };

    // Intensity correction near the band edges.
    let intensity = if w >= 380.0 && w < 420.0 {
        0.3 + 0.7 * (w - 350.0) / (420.0 - 350.0)
    } else if w >= 420.0 && w <= 700.0 {
        1.0
    } else if w > 700.0 && w <= 780.0 {
        0.3 + 0.7 * (780.0 - w) / (780.0 - 700.0)
    } else {
        0.0
    };
    let sss = intensity * 255.0;

    Rgba::from_u8([(sss * r) as u8, (sss * g) as u8, (sss * b) as u8])
}

/// [`wavelength_to_rgb`] formatted as a `"#rrggbb"` string.
pub fn wavelength_to_hex(nm: f64) -> String {
    wavelength_to_rgb(nm).to_hex()
}

/// Color a whole wavelength grid.
pub fn spectrum_colors(wavelengths: &[f64]) -> Vec<Rgba> {
    wavelengths.iter().map(|&w| wavelength_to_rgb(w)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_band_is_black() {
        assert_eq!(wavelength_to_hex(300.0), "#000000");
        assert_eq!(wavelength_to_hex(800.0), "#000000");
        assert_eq!(wavelength_to_hex(-1.0), "#000000");
    }

    #[test]
    fn green_peak_at_550_nm() {
        let c = wavelength_to_rgb(550.0);
        assert_eq!(c.g, 1.0);
        assert!(c.r < c.g && c.b < c.r);
        assert_eq!(c.to_hex(), "#91ff00");
    }

    #[test]
    fn violet_edge_is_dimmed() {
        // At 400 nm the intensity ramp sits at 0.8 of full scale.
        assert_eq!(wavelength_to_hex(400.0), "#5a00cc");
    }

    #[test]
    fn deep_red_tail_fades_out() {
        let mid = wavelength_to_rgb(660.0);
        let tail = wavelength_to_rgb(770.0);
        assert_eq!(mid.to_hex(), "#ff0000");
        assert!(tail.r < mid.r);
        assert_eq!(tail.g, 0.0);
        assert_eq!(tail.b, 0.0);
    }

    #[test]
    fn fractional_wavelengths_truncate() {
        assert_eq!(wavelength_to_rgb(550.9), wavelength_to_rgb(550.0));
    }

    #[test]
    fn slice_helper_preserves_order_and_length() {
        let wl = [400.0, 550.0, 700.0];
        let colors = spectrum_colors(&wl);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[1], wavelength_to_rgb(550.0));
    }
}
