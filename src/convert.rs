//! Conversions between the hex, RGB, HSL and CMYK notations.
//!
//! The math runs on floating point [`Components`] and is rounded half away
//! from zero into the integer models at the end. Hue arithmetic wraps into
//! `[0, 360)`, while saturation and lightness are never wrapped.
//!
//! ```rust
//! use paletta::{hex_to_rgb, rgb_to_hsl, Hsl};
//! let hsl = rgb_to_hsl(hex_to_rgb("#d2691e").unwrap());
//! assert_eq!(hsl, Hsl::new(25, 75, 47));
//! ```

use crate::{
    color::Components,
    math::{round_hue, round_scaled, wrap_hue},
    models::{Cmyk, Hsl, Rgb},
    HexColor, Result,
};

impl Rgb {
    /// Convert a color specified in the sRGB color space to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) = util::rgb_to_hsl(&self.to_components());
        Hsl::new(
            round_hue(hue),
            round_scaled(saturation, 100.0, 100),
            round_scaled(lightness, 100.0, 100),
        )
    }

    /// Estimate the CMYK percentages of this color.
    pub fn to_cmyk(&self) -> Cmyk {
        let [cyan, magenta, yellow, key] = util::rgb_to_cmyk(&self.to_components());
        Cmyk::new(
            round_scaled(cyan, 100.0, 100),
            round_scaled(magenta, 100.0, 100),
            round_scaled(yellow, 100.0, 100),
            round_scaled(key, 100.0, 100),
        )
    }

    /// The hex form of this color.
    pub fn to_hex(&self) -> HexColor {
        HexColor::from(*self)
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the sRGB color space.
    pub fn to_rgb(&self) -> Rgb {
        let Components(red, green, blue) = util::hsl_to_rgb(&self.to_components());
        Rgb::new(
            round_scaled(red, 255.0, 255),
            round_scaled(green, 255.0, 255),
            round_scaled(blue, 255.0, 255),
        )
    }

    /// The hex form of this color.
    pub fn to_hex(&self) -> HexColor {
        self.to_rgb().to_hex()
    }
}

/// Decode a hex string into its RGB channels.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    Ok(hex.parse::<HexColor>()?.to_rgb())
}

/// Encode RGB channels as a lowercase hex color.
pub fn rgb_to_hex(rgb: Rgb) -> HexColor {
    rgb.to_hex()
}

/// Convert RGB channels to whole-degree, whole-percent HSL.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    rgb.to_hsl()
}

/// Convert HSL to a hex color. The hue may be any number of degrees and
/// wraps around the color wheel; saturation and lightness must be within
/// `[0, 100]`.
pub fn hsl_to_hex(hue: i64, saturation: i64, lightness: i64) -> Result<HexColor> {
    let hsl = Hsl::try_new(i64::from(wrap_hue(hue)), saturation, lightness)?;
    Ok(hsl.to_hex())
}

/// Estimate the CMYK percentages of an RGB color. Pure black has a key of
/// 100% and no cyan, magenta or yellow.
pub fn rgb_to_cmyk(red: u8, green: u8, blue: u8) -> Cmyk {
    Rgb::new(red, green, blue).to_cmyk()
}

mod util {
    use crate::{
        color::{Component, Components},
        math::wrap,
    };

    /// Calculate the hue in degrees from RGB components and return it along
    /// with the min and max RGB values. Achromatic colors get a hue of zero.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = from.max();
        let min = from.min();
        let delta = max - min;

        let hue = if delta != 0.0 {
            let sixths = if max == red {
                (green - blue) / delta
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };
            wrap(sixths / 6.0, 1.0) * 360.0
        } else {
            0.0
        };

        (hue, min, max)
    }

    /// Convert from RGB notation to HSL notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation = if delta == 0.0 {
            0.0
        } else if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        Components(hue, saturation, lightness)
    }

    /// Convert from HSL notation to RGB notation.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        if saturation <= 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let hue = wrap(hue, 360.0);

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 30.0) % 12.0;
                let a = saturation * lightness.min(1.0 - lightness);
                lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
            }};
        }

        Components(f!(0.0), f!(8.0), f!(4.0))
    }

    /// Convert from RGB notation to CMYK fractions.
    pub fn rgb_to_cmyk(from: &Components) -> [Component; 4] {
        let key = 1.0 - from.max();

        if key >= 1.0 {
            return [0.0, 0.0, 0.0, 1.0];
        }

        let Components(cyan, magenta, yellow) = from.map(|v| (1.0 - v - key) / (1.0 - key));
        [cyan, magenta, yellow, key]
    }
}
