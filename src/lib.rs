//! paletta derives color schemes from a base color and converts colors
//! between the hex, RGB, HSL and CMYK notations.
//!
//! ```rust
//! use paletta::{generate_scheme, HexColor};
//!
//! let palette = generate_scheme("#3366cc", "triadic").unwrap();
//! assert_eq!(palette.anchor(), "#3366CC".parse::<HexColor>().unwrap());
//! assert_eq!(palette.colors()[1].to_string(), "#cc3366");
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod hex;
mod math;
mod models;
pub mod remote;
mod scheme;


pub use color::{identify, ColorInfo, Component, Components};
pub use convert::{hex_to_rgb, hsl_to_hex, rgb_to_cmyk, rgb_to_hex, rgb_to_hsl};
pub use error::{Error, Result};
pub use hex::HexColor;
pub use models::{Cmyk, Hsl, Rgb};
pub use scheme::{
    generate_scheme, Adjustments, Offset, Palette, SchemeMode, Slot, Swatch, PALETTE_SIZE,
};
