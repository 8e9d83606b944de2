//! Model a color in the subtractive CMYK notation.

use crate::Result;

paletta_macros::gen_model! {
    /// Cyan, magenta, yellow and key (black) percentages, as estimated for
    /// print. Only ever derived from RGB.
    #[readout = "C: {cyan}% M: {magenta}% Y: {yellow}% K: {key}%"]
    pub struct Cmyk {
        /// The cyan percentage.
        cyan: u8,
        /// The magenta percentage.
        magenta: u8,
        /// The yellow percentage.
        yellow: u8,
        /// The key (black) percentage.
        key: u8,
    }
}

impl Cmyk {
    /// Create a new color, failing when any percentage is outside `[0, 100]`.
    pub fn try_new(cyan: i64, magenta: i64, yellow: i64, key: i64) -> Result<Self> {
        Ok(Self::new(
            super::checked("cyan", cyan, 0, 100)?,
            super::checked("magenta", magenta, 0, 100)?,
            super::checked("yellow", yellow, 0, 100)?,
            super::checked("key", key, 0, 100)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn checked_construction() {
        assert_eq!(Cmyk::try_new(0, 50, 86, 18), Ok(Cmyk::new(0, 50, 86, 18)));
        assert_eq!(
            Cmyk::try_new(0, 0, 0, 120),
            Err(Error::OutOfRange {
                component: "key",
                value: 120
            })
        );
    }

    #[test]
    fn serializes_as_a_record() {
        assert_eq!(
            serde_json::to_string(&Cmyk::new(75, 50, 0, 20)).unwrap(),
            r#"{"cyan":75,"magenta":50,"yellow":0,"key":20}"#
        );
    }
}
