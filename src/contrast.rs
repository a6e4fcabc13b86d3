//! Black-or-white text selection over a colored background.

use crate::colorize::Rgba;

/// Luminance cutoff on the 0-255 grey scale. Backgrounds brighter than this
/// take black text, everything else takes white.
pub const TEXT_LUMINANCE_THRESHOLD: f64 = 186.0;

pub const BLACK_TEXT: &str = "#000000";
pub const WHITE_TEXT: &str = "#ffffff";

/// Pick a legible text color for the given background. Alpha is ignored.
pub fn contrasting_text_color(color: Rgba) -> &'static str {
    let grey = 255.0 * (0.299 * color.r + 0.587 * color.g + 0.114 * color.b);
    if grey > TEXT_LUMINANCE_THRESHOLD {
        BLACK_TEXT
    } else {
        WHITE_TEXT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_background_takes_black_text() {
        assert_eq!(contrasting_text_color(Rgba::new(1.0, 1.0, 1.0, 1.0)), BLACK_TEXT);
    }

    #[test]
    fn black_background_takes_white_text() {
        assert_eq!(contrasting_text_color(Rgba::new(0.0, 0.0, 0.0, 1.0)), WHITE_TEXT);
    }

    #[test]
    fn switches_at_the_documented_threshold() {
        // For an achromatic color the grey value is just 255 * channel.
        let below = Rgba::new(0.7, 0.7, 0.7, 1.0); // grey = 178.5
        let above = Rgba::new(0.75, 0.75, 0.75, 1.0); // grey = 191.25
        assert_eq!(contrasting_text_color(below), WHITE_TEXT);
        assert_eq!(contrasting_text_color(above), BLACK_TEXT);
    }

    #[test]
    fn green_dominates_the_luminance_weighting() {
        // Pure green reads far brighter than pure blue at the same channel value.
        assert_eq!(contrasting_text_color(Rgba::new(0.0, 1.0, 0.0, 1.0)), WHITE_TEXT);
        // grey(green) = 149.7, grey(blue) = 29.1; both still below the cutoff.
        assert_eq!(contrasting_text_color(Rgba::new(0.0, 0.0, 1.0, 1.0)), WHITE_TEXT);
        // Green plus red crosses it.
        assert_eq!(contrasting_text_color(Rgba::new(1.0, 1.0, 0.0, 1.0)), BLACK_TEXT);
    }
}
