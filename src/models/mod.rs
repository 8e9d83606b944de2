//! Integer color models as they are shown to users.

mod cmyk;
mod hsl;
mod rgb;

pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use rgb::Rgb;

use crate::{Error, Result};

/// Check that `value` lies in `min..=max` and narrow it to the component type.
fn checked<T: TryFrom<i64>>(component: &'static str, value: i64, min: i64, max: i64) -> Result<T> {
    if (min..=max).contains(&value) {
        T::try_from(value).map_err(|_| Error::OutOfRange { component, value })
    } else {
        Err(Error::OutOfRange { component, value })
    }
}
