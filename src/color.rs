//! Floating point components used for intermediate math, and [`ColorInfo`],
//! the full description of a single color.

use serde::Serialize;

use crate::{Cmyk, HexColor, Hsl, Result, Rgb};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that intermediate components are computed
/// with.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that intermediate components are computed
/// with.
pub type Component = f64;

/// Three components of a color in a unit-less floating point form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// The largest of the three components.
    pub fn max(&self) -> Component {
        self.0.max(self.1).max(self.2)
    }

    /// The smallest of the three components.
    pub fn min(&self) -> Component {
        self.0.min(self.1).min(self.2)
    }
}

/// A color in every notation the engine knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ColorInfo {
    /// The color as a hex string.
    pub hex: HexColor,
    /// The red, green and blue channels.
    pub rgb: Rgb,
    /// Hue, saturation and lightness.
    pub hsl: Hsl,
    /// Cyan, magenta, yellow and key percentages.
    pub cmyk: Cmyk,
}

impl From<HexColor> for ColorInfo {
    fn from(hex: HexColor) -> Self {
        let rgb = hex.to_rgb();
        Self {
            hex,
            rgb,
            hsl: rgb.to_hsl(),
            cmyk: rgb.to_cmyk(),
        }
    }
}

/// Describe the color given as a hex string in every supported notation.
pub fn identify(hex: &str) -> Result<ColorInfo> {
    Ok(hex.parse::<HexColor>()?.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn components_min_max() {
        let c = Components(0.2, 0.9, 0.4);
        assert_eq!(c.max(), 0.9);
        assert_eq!(c.min(), 0.2);
        assert_eq!(c.map(|v| v * 2.0).max(), 1.8);
    }

    #[test]
    fn identify_chocolate() {
        let info = identify("D2691E").unwrap();
        assert_eq!(info.hex.to_string(), "#d2691e");
        assert_eq!(info.rgb, Rgb::new(210, 105, 30));
        assert_eq!(info.hsl, Hsl::new(25, 75, 47));
        assert_eq!(info.cmyk, Cmyk::new(0, 50, 86, 18));
    }

    #[test]
    fn identify_rejects_bad_input() {
        assert_eq!(
            identify("#12G456"),
            Err(Error::InvalidFormat("#12G456".to_owned()))
        );
    }

    #[test]
    fn readouts() {
        let info = identify("#3366cc").unwrap();
        assert_eq!(info.rgb.to_string(), "R: 51 G: 102 B: 204");
        assert_eq!(info.hsl.to_string(), "H: 220° S: 60% L: 50%");
        assert_eq!(info.cmyk.to_string(), "C: 75% M: 50% Y: 0% K: 20%");
    }
}
