//! Built-in colormap registry.
//!
//! Each gradient is an ordered table of anchor colors; sampling interpolates
//! linearly between the two nearest anchors. Names follow the matplotlib
//! convention, including the `_r` suffix for reversed gradients.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::colorize::Rgba;

/// Requested colormap name is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown colormap `{0}`")]
pub struct UnknownColormap(pub String);

/// A gradient from the built-in registry, optionally reversed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colormap {
    gradient: Gradient,
    reversed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Gradient {
    Viridis,
    Plasma,
    Blues,
    Greys,
    Spectral,
}

impl Colormap {
    pub const VIRIDIS: Self = Self::new(Gradient::Viridis);
    pub const PLASMA: Self = Self::new(Gradient::Plasma);
    pub const BLUES: Self = Self::new(Gradient::Blues);
    pub const GREYS: Self = Self::new(Gradient::Greys);
    pub const SPECTRAL: Self = Self::new(Gradient::Spectral);

    const fn new(gradient: Gradient) -> Self {
        Self {
            gradient,
            reversed: false,
        }
    }

    /// The same gradient traversed in the opposite direction.
    pub fn reversed(self) -> Self {
        Self {
            reversed: !self.reversed,
            ..self
        }
    }

    /// Sample the gradient at `t`, clamped to `[0, 1]`.
    pub fn sample(&self, t: f64) -> Rgba {
        debug_assert!(t.is_finite());

        let t = t.clamp(0.0, 1.0);
        let t = if self.reversed { 1.0 - t } else { t };
        let anchors = self.gradient.anchors();
        let last = anchors.len() - 1;

        let pos = t * last as f64;
        let i = pos.floor() as usize;
        if i >= last {
            return Rgba::from_u8(anchors[last]);
        }

        let f = pos - i as f64;
        let lo = anchors[i];
        let hi = anchors[i + 1];
        let lerp = |a: u8, b: u8| (a as f64 + f * (b as f64 - a as f64)) / 255.0;
        Rgba::new(
            lerp(lo[0], hi[0]),
            lerp(lo[1], hi[1]),
            lerp(lo[2], hi[2]),
            1.0,
        )
    }
}

impl FromStr for Colormap {
    type Err = UnknownColormap;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, reversed) = match s.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (s, false),
        };

        let gradient = match base.to_ascii_lowercase().as_str() {
            "viridis" => Gradient::Viridis,
            "plasma" => Gradient::Plasma,
            "blues" => Gradient::Blues,
            "greys" => Gradient::Greys,
            "spectral" => Gradient::Spectral,
            _ => return Err(UnknownColormap(s.to_string())),
        };

        Ok(Self { gradient, reversed })
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.gradient.name())?;
        if self.reversed {
            write!(f, "_r")?;
        }
        Ok(())
    }
}

impl Gradient {
    fn name(&self) -> &'static str {
        match self {
            Self::Viridis => "viridis",
            Self::Plasma => "plasma",
            Self::Blues => "Blues",
            Self::Greys => "Greys",
            Self::Spectral => "Spectral",
        }
    }

    fn anchors(&self) -> &'static [[u8; 3]] {
        match self {
            Self::Viridis => &VIRIDIS,
            Self::Plasma => &PLASMA,
            Self::Blues => &BLUES,
            Self::Greys => &GREYS,
            Self::Spectral => &SPECTRAL,
        }
    }
}

// Anchor tables. Viridis/plasma are the standard 10-stop reductions of the
// matplotlib gradients; Blues/Greys/Spectral are the ColorBrewer classes the
// matplotlib maps are built from.

const VIRIDIS: [[u8; 3]; 10] = [
    [0x44, 0x01, 0x54],
    [0x48, 0x28, 0x78],
    [0x3e, 0x49, 0x89],
    [0x31, 0x68, 0x8e],
    [0x26, 0x82, 0x8e],
    [0x1f, 0x9e, 0x89],
    [0x35, 0xb7, 0x79],
    [0x6e, 0xce, 0x58],
    [0xb5, 0xde, 0x2b],
    [0xfd, 0xe7, 0x25],
];

const PLASMA: [[u8; 3]; 10] = [
    [0x0d, 0x08, 0x87],
    [0x46, 0x03, 0x9f],
    [0x72, 0x01, 0xa8],
    [0x9c, 0x17, 0x9e],
    [0xbd, 0x37, 0x86],
    [0xd8, 0x57, 0x6b],
    [0xed, 0x79, 0x53],
    [0xfb, 0x9f, 0x3a],
    [0xfd, 0xca, 0x26],
    [0xf0, 0xf9, 0x21],
];

const BLUES: [[u8; 3]; 9] = [
    [0xf7, 0xfb, 0xff],
    [0xde, 0xeb, 0xf7],
    [0xc6, 0xdb, 0xef],
    [0x9e, 0xca, 0xe1],
    [0x6b, 0xae, 0xd6],
    [0x42, 0x92, 0xc6],
    [0x21, 0x71, 0xb5],
    [0x08, 0x51, 0x9c],
    [0x08, 0x30, 0x6b],
];

const GREYS: [[u8; 3]; 9] = [
    [0xff, 0xff, 0xff],
    [0xf0, 0xf0, 0xf0],
    [0xd9, 0xd9, 0xd9],
    [0xbd, 0xbd, 0xbd],
    [0x96, 0x96, 0x96],
    [0x73, 0x73, 0x73],
    [0x52, 0x52, 0x52],
    [0x25, 0x25, 0x25],
    [0x00, 0x00, 0x00],
];

const SPECTRAL: [[u8; 3]; 11] = [
    [0x9e, 0x01, 0x42],
    [0xd5, 0x3e, 0x4f],
    [0xf4, 0x6d, 0x43],
    [0xfd, 0xae, 0x61],
    [0xfe, 0xe0, 0x8b],
    [0xff, 0xff, 0xbf],
    [0xe6, 0xf5, 0x98],
    [0xab, 0xdd, 0xa4],
    [0x66, 0xc2, 0xa5],
    [0x32, 0x88, 0xbd],
    [0x5e, 0x4f, 0xa2],
];
