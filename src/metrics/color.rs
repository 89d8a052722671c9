// Uptime -> color: clamp to [75, 100], then interpolate hue from red (0) to green (120).

use serde::{Serialize, Serializer};

const LOWER_BOUND: f64 = 75.0;
const UPPER_BOUND: f64 = 100.0;
const MAX_HUE: f64 = 120.0;
const SATURATION: u8 = 85;
const LIGHTNESS: u8 = 45;

/// HSL color; displays and serializes as `hsl(H, S%, L%)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

impl Serialize for Hsl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Maps an uptime percentage to a severity color. NaN counts as the worst uptime.
pub fn uptime_to_color(uptime: f64) -> Hsl {
    let clamped = if uptime.is_nan() {
        LOWER_BOUND
    } else {
        uptime.clamp(LOWER_BOUND, UPPER_BOUND)
    };
    let fraction = (clamped - LOWER_BOUND) / (UPPER_BOUND - LOWER_BOUND);
    Hsl {
        hue: (fraction * MAX_HUE).round() as u16,
        saturation: SATURATION,
        lightness: LIGHTNESS,
    }
}
