//! Model a color in the sRGB color space with 8 bits per channel.

use crate::{color::Components, Component, Result};

paletta_macros::gen_model! {
    /// A color specified in the sRGB color space.
    #[readout = "R: {red} G: {green} B: {blue}"]
    pub struct Rgb {
        /// The red channel of the color.
        red: u8,
        /// The green channel of the color.
        green: u8,
        /// The blue channel of the color.
        blue: u8,
    }
}

impl Rgb {
    /// Create a new color, failing when a channel is outside `[0, 255]`.
    pub fn try_new(red: i64, green: i64, blue: i64) -> Result<Self> {
        Ok(Self::new(
            super::checked("red", red, 0, 255)?,
            super::checked("green", green, 0, 255)?,
            super::checked("blue", blue, 0, 255)?,
        ))
    }

    /// The channels normalized to `[0, 1]`.
    pub fn to_components(&self) -> Components {
        Components(
            Component::from(self.red),
            Component::from(self.green),
            Component::from(self.blue),
        )
        .map(|v| v / 255.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_component_eq;
    use crate::Error;

    #[test]
    fn checked_construction() {
        assert_eq!(Rgb::try_new(0, 128, 255), Ok(Rgb::new(0, 128, 255)));
        assert_eq!(
            Rgb::try_new(256, 0, 0),
            Err(Error::OutOfRange {
                component: "red",
                value: 256
            })
        );
        assert_eq!(
            Rgb::try_new(0, 0, -1),
            Err(Error::OutOfRange {
                component: "blue",
                value: -1
            })
        );
    }

    #[test]
    fn normalized_components() {
        let Components(red, green, blue) = Rgb::new(255, 51, 0).to_components();
        assert_component_eq!(red, 1.0);
        assert_component_eq!(green, 0.2);
        assert_component_eq!(blue, 0.0);
    }
}
