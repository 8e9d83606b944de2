//! Model a color with the HSL notation using whole degrees and percentages.

use crate::{color::Components, Component, Result};

paletta_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    #[readout = "H: {hue}° S: {saturation}% L: {lightness}%"]
    pub struct Hsl {
        /// The hue in degrees, in `[0, 360)`.
        hue: u16,
        /// The saturation as a percentage.
        saturation: u8,
        /// The lightness as a percentage.
        lightness: u8,
    }
}

impl Hsl {
    /// Create a new color, failing when the hue is outside `[0, 360)` or the
    /// saturation or lightness is outside `[0, 100]`.
    pub fn try_new(hue: i64, saturation: i64, lightness: i64) -> Result<Self> {
        Ok(Self::new(
            super::checked("hue", hue, 0, 359)?,
            super::checked("saturation", saturation, 0, 100)?,
            super::checked("lightness", lightness, 0, 100)?,
        ))
    }

    /// The hue in degrees with saturation and lightness in `[0, 1]`.
    pub fn to_components(&self) -> Components {
        Components(
            Component::from(self.hue),
            Component::from(self.saturation) / 100.0,
            Component::from(self.lightness) / 100.0,
        )
    }
}
