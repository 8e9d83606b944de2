//! A [`HexColor`] is the textual `#rrggbb` form of an 8-bit RGB color.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Error, Rgb};

/// A color written as 6 hexadecimal digits.
///
/// Parsing is case-insensitive and accepts an optional leading `#`. The
/// canonical form, used by `Display` and serialization, is `#` followed by 6
/// lowercase digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor([u8; 3]);

impl HexColor {
    /// Create a hex color from its red, green and blue bytes.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self([red, green, blue])
    }

    /// Pick a uniformly distributed color.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let [_, red, green, blue] = rng.random_range(0..=0x00ff_ffff_u32).to_be_bytes();
        Self::new(red, green, blue)
    }

    /// The RGB channels of this color.
    pub fn to_rgb(&self) -> Rgb {
        let [red, green, blue] = self.0;
        Rgb::new(red, green, blue)
    }

    /// The 6 lowercase digits without the leading `#`.
    pub fn digits(&self) -> String {
        let [red, green, blue] = self.0;
        format!("{red:02x}{green:02x}{blue:02x}")
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb.red, rgb.green, rgb.blue)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.digits())
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();

        let invalid = || Error::InvalidFormat(s.to_owned());

        if digits.len() != 6 {
            return Err(invalid());
        }

        let nibble = |c: u8| -> Option<u8> {
            match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'a'..=b'f' => Some(c - b'a' + 10),
                b'A'..=b'F' => Some(c - b'A' + 10),
                _ => None,
            }
        };
        let byte = |hi: u8, lo: u8| -> Option<u8> { Some(nibble(hi)? << 4 | nibble(lo)?) };

        match (
            byte(digits[0], digits[1]),
            byte(digits[2], digits[3]),
            byte(digits[4], digits[5]),
        ) {
            (Some(red), Some(green), Some(blue)) => Ok(Self::new(red, green, blue)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for HexColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.to_string()
    }
}
