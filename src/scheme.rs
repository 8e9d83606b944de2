//! Derive a palette of related colors from a base color.
//!
//! Every [`SchemeMode`] is a table of five [`Slot`]s. One slot is the anchor
//! and holds the base color exactly as it was given; the others shift the
//! base color's hue, saturation and lightness by a fixed [`Offset`].

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::{
    math::{clamp_percent, wrap_hue},
    Error, HexColor, Hsl, Result,
};

/// Number of colors in every palette.
pub const PALETTE_SIZE: usize = 5;

bitflags! {
    /// Records what happened to a swatch while it was derived.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
    pub struct Adjustments : u8 {
        /// The swatch is the base color, copied verbatim.
        const ANCHOR = 1 << 0;
        /// Shifting the hue crossed 0° or 360° and wrapped around.
        const HUE_WRAPPED = 1 << 1;
        /// Shifting the saturation went past 0% or 100% and was clamped.
        const SATURATION_CLAMPED = 1 << 2;
        /// Shifting the lightness went past 0% or 100% and was clamped.
        const LIGHTNESS_CLAMPED = 1 << 3;
    }
}

/// A shift applied to the HSL components of the base color. Hue is in
/// degrees, saturation and lightness in percentage points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    /// Degrees added to the hue.
    pub hue: i16,
    /// Percentage points added to the saturation.
    pub saturation: i8,
    /// Percentage points added to the lightness.
    pub lightness: i8,
}

impl Offset {
    /// An offset that only rotates the hue.
    pub const fn hue(degrees: i16) -> Self {
        Self {
            hue: degrees,
            saturation: 0,
            lightness: 0,
        }
    }

    /// An offset that only changes the saturation.
    pub const fn saturation(points: i8) -> Self {
        Self {
            hue: 0,
            saturation: points,
            lightness: 0,
        }
    }

    /// An offset that only changes the lightness.
    pub const fn lightness(points: i8) -> Self {
        Self {
            hue: 0,
            saturation: 0,
            lightness: points,
        }
    }

    /// Add a lightness change to this offset.
    pub const fn with_lightness(self, points: i8) -> Self {
        Self {
            lightness: points,
            ..self
        }
    }

    /// Shift `hsl` by this offset, wrapping the hue and clamping saturation
    /// and lightness.
    pub fn apply(&self, hsl: &Hsl) -> (Hsl, Adjustments) {
        let mut adjustments = Adjustments::empty();

        let hue = i64::from(hsl.hue) + i64::from(self.hue);
        let saturation = i64::from(hsl.saturation) + i64::from(self.saturation);
        let lightness = i64::from(hsl.lightness) + i64::from(self.lightness);

        adjustments.set(Adjustments::HUE_WRAPPED, !(0..360).contains(&hue));
        adjustments.set(
            Adjustments::SATURATION_CLAMPED,
            !(0..=100).contains(&saturation),
        );
        adjustments.set(
            Adjustments::LIGHTNESS_CLAMPED,
            !(0..=100).contains(&lightness),
        );

        let shifted = Hsl::new(
            wrap_hue(hue),
            clamp_percent(saturation),
            clamp_percent(lightness),
        );

        (shifted, adjustments)
    }
}

/// One position in a scheme table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The base color itself.
    Anchor,
    /// The base color shifted by an offset.
    Derived(Offset),
}

use Slot::{Anchor, Derived};

const ANALOGOUS: [Slot; PALETTE_SIZE] = [
    Derived(Offset::hue(-30)),
    Derived(Offset::hue(-15)),
    Anchor,
    Derived(Offset::hue(15)),
    Derived(Offset::hue(30)),
];

const MONOCHROMATIC: [Slot; PALETTE_SIZE] = [
    Derived(Offset::lightness(-30)),
    Derived(Offset::lightness(-15)),
    Anchor,
    Derived(Offset::lightness(15)),
    Derived(Offset::lightness(30)),
];

const COMPLEMENTARY: [Slot; PALETTE_SIZE] = [
    Derived(Offset::lightness(-15)),
    Anchor,
    Derived(Offset::saturation(-30)),
    Derived(Offset::hue(180)),
    Derived(Offset::hue(180).with_lightness(15)),
];

const TRIADIC: [Slot; PALETTE_SIZE] = [
    Anchor,
    Derived(Offset::hue(120)),
    Derived(Offset::hue(120).with_lightness(15)),
    Derived(Offset::hue(240)),
    Derived(Offset::hue(240).with_lightness(15)),
];

const SPLIT_COMPLEMENTARY: [Slot; PALETTE_SIZE] = [
    Anchor,
    Derived(Offset::hue(150)),
    Derived(Offset::hue(150).with_lightness(15)),
    Derived(Offset::hue(210)),
    Derived(Offset::hue(210).with_lightness(15)),
];

/// A named rule for deriving related colors from a base color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchemeMode {
    /// Neighbouring hues, 15° and 30° to either side.
    Analogous,
    /// The same hue at lower and higher lightness.
    Monochromatic,
    /// The base color and the hue opposite to it.
    Complementary,
    /// Three hues 120° apart.
    Triadic,
    /// The base color and the two hues 30° to either side of its complement.
    SplitComplementary,
}

impl SchemeMode {
    /// Every mode, in a stable order.
    pub const ALL: [SchemeMode; 5] = [
        Self::Analogous,
        Self::Monochromatic,
        Self::Complementary,
        Self::Triadic,
        Self::SplitComplementary,
    ];

    /// The canonical name of the mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Monochromatic => "monochromatic",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::SplitComplementary => "split-complementary",
        }
    }

    /// The slot table of the mode.
    pub fn slots(&self) -> &'static [Slot; PALETTE_SIZE] {
        match self {
            Self::Analogous => &ANALOGOUS,
            Self::Monochromatic => &MONOCHROMATIC,
            Self::Complementary => &COMPLEMENTARY,
            Self::Triadic => &TRIADIC,
            Self::SplitComplementary => &SPLIT_COMPLEMENTARY,
        }
    }

    /// The palette position that holds the base color.
    pub fn anchor(&self) -> usize {
        self.slots()
            .iter()
            .position(|slot| *slot == Anchor)
            .unwrap_or_default()
    }

    /// Derive the palette for `base`.
    pub fn palette(&self, base: HexColor) -> Palette {
        let hsl = base.to_rgb().to_hsl();

        tracing::debug!(%base, mode = %self, %hsl, "generating palette");

        let slots = *self.slots();
        let swatches = slots.map(|slot| match slot {
            Anchor => Swatch {
                color: base,
                adjustments: Adjustments::ANCHOR,
            },
            Derived(offset) => {
                let (shifted, adjustments) = offset.apply(&hsl);
                if adjustments.intersects(
                    Adjustments::SATURATION_CLAMPED | Adjustments::LIGHTNESS_CLAMPED,
                ) {
                    tracing::trace!(?offset, ?adjustments, "clamped derived swatch");
                }
                Swatch {
                    color: shifted.to_hex(),
                    adjustments,
                }
            }
        });

        Palette {
            mode: *self,
            swatches,
        }
    }
}

impl fmt::Display for SchemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mode = match s.trim().to_ascii_lowercase().as_str() {
            "analogous" | "analogic" => Self::Analogous,
            "monochromatic" | "monochrome" => Self::Monochromatic,
            "complementary" | "complement" => Self::Complementary,
            "triadic" | "triad" => Self::Triadic,
            "split-complementary" | "split_complementary" => Self::SplitComplementary,
            _ => return Err(Error::UnknownMode(s.to_owned())),
        };
        Ok(mode)
    }
}

/// One color of a palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Swatch {
    /// The color of the swatch.
    pub color: HexColor,
    /// How the color was derived.
    pub adjustments: Adjustments,
}

impl Swatch {
    /// Whether this swatch is the unmodified base color.
    pub fn is_anchor(&self) -> bool {
        self.adjustments.contains(Adjustments::ANCHOR)
    }
}

/// Five related colors derived from a base color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Palette {
    mode: SchemeMode,
    swatches: [Swatch; PALETTE_SIZE],
}

impl Palette {
    /// The mode the palette was generated with.
    pub fn mode(&self) -> SchemeMode {
        self.mode
    }

    /// The swatches in palette order.
    pub fn swatches(&self) -> &[Swatch; PALETTE_SIZE] {
        &self.swatches
    }

    /// The colors in palette order.
    pub fn colors(&self) -> [HexColor; PALETTE_SIZE] {
        self.swatches.map(|swatch| swatch.color)
    }

    /// The color at `index`, if there is one.
    pub fn get(&self, index: usize) -> Option<HexColor> {
        self.swatches.get(index).map(|swatch| swatch.color)
    }

    /// The base color the palette was generated from.
    pub fn anchor(&self) -> HexColor {
        self.swatches[self.mode.anchor()].color
    }

    /// Iterate over the colors in palette order.
    pub fn iter(&self) -> impl Iterator<Item = HexColor> + '_ {
        self.swatches.iter().map(|swatch| swatch.color)
    }
}

/// Generate the palette for a base color given as a hex string and a mode
/// given by name.
pub fn generate_scheme(base: &str, mode: &str) -> Result<Palette> {
    let base = base.parse::<HexColor>()?;
    let mode = mode.parse::<SchemeMode>()?;
    Ok(mode.palette(base))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(palette: &Palette) -> Vec<String> {
        palette.iter().map(|color| color.to_string()).collect()
    }

    #[test]
    fn palettes_for_a_saturated_color() {
        #[rustfmt::skip]
        const TESTS: &[(SchemeMode, [&str; PALETTE_SIZE])] = &[
            (SchemeMode::Analogous,          ["#33b3cc", "#338ccc", "#3366cc", "#3340cc", "#4d33cc"]),
            (SchemeMode::Monochromatic,      ["#142952", "#24478f", "#3366cc", "#7094db", "#adc2eb"]),
            (SchemeMode::Complementary,      ["#24478f", "#3366cc", "#5973a6", "#cc9933", "#dbb870"]),
            (SchemeMode::Triadic,            ["#3366cc", "#cc3366", "#db7094", "#66cc33", "#94db70"]),
            (SchemeMode::SplitComplementary, ["#3366cc", "#cc4d33", "#db8270", "#b3cc33", "#c9db70"]),
        ];

        for (mode, expected) in TESTS {
            let palette = generate_scheme("#3366cc", mode.name()).unwrap();
            assert_eq!(colors(&palette), expected.to_vec(), "{mode}");
        }
    }

    #[test]
    fn palettes_for_pure_red() {
        let palette = SchemeMode::Complementary.palette(HexColor::new(255, 0, 0));
        assert_eq!(
            colors(&palette),
            ["#b30000", "#ff0000", "#d92626", "#00ffff", "#4dffff"]
        );

        let palette = SchemeMode::Analogous.palette(HexColor::new(255, 0, 0));
        assert_eq!(
            colors(&palette),
            ["#ff0080", "#ff0040", "#ff0000", "#ff4000", "#ff8000"]
        );
        assert!(palette.swatches()[0]
            .adjustments
            .contains(Adjustments::HUE_WRAPPED));
        assert!(!palette.swatches()[4]
            .adjustments
            .contains(Adjustments::HUE_WRAPPED));
    }

    #[test]
    fn anchor_is_the_base_color_verbatim() {
        let base = "#D2691E".parse::<HexColor>().unwrap();
        for mode in SchemeMode::ALL {
            let palette = mode.palette(base);
            let anchor = mode.anchor();
            assert_eq!(palette.get(anchor), Some(base), "{mode}");
            assert_eq!(palette.anchor(), base);
            assert!(palette.swatches()[anchor].is_anchor());
            assert_eq!(
                palette.swatches().iter().filter(|s| s.is_anchor()).count(),
                1
            );
        }
    }

    #[test]
    fn anchor_positions() {
        assert_eq!(SchemeMode::Analogous.anchor(), 2);
        assert_eq!(SchemeMode::Monochromatic.anchor(), 2);
        assert_eq!(SchemeMode::Complementary.anchor(), 1);
        assert_eq!(SchemeMode::Triadic.anchor(), 0);
        assert_eq!(SchemeMode::SplitComplementary.anchor(), 0);
    }

    #[test]
    fn monochromatic_black_clamps_lightness() {
        let palette = generate_scheme("#000000", "monochromatic").unwrap();
        assert_eq!(
            colors(&palette),
            ["#000000", "#000000", "#000000", "#262626", "#4d4d4d"]
        );
        for swatch in &palette.swatches()[..2] {
            assert!(swatch
                .adjustments
                .contains(Adjustments::LIGHTNESS_CLAMPED));
        }
        assert_eq!(palette.swatches()[3].adjustments, Adjustments::empty());
    }

    #[test]
    fn white_collapses_to_equal_entries() {
        let palette = generate_scheme("ffffff", "triadic").unwrap();
        assert!(palette.iter().all(|c| c == HexColor::new(255, 255, 255)));
    }

    #[test]
    fn errors() {
        assert_eq!(
            generate_scheme("#000000", "octagonal"),
            Err(Error::UnknownMode("octagonal".to_owned()))
        );
        assert_eq!(
            generate_scheme("#12G456", "triadic"),
            Err(Error::InvalidFormat("#12G456".to_owned()))
        );
        assert_eq!(
            generate_scheme(" #000000 ", "monochromatic"),
            Err(Error::InvalidFormat(" #000000 ".to_owned()))
        );
    }

    #[test]
    fn mode_names() {
        for mode in SchemeMode::ALL {
            assert_eq!(mode.name().parse::<SchemeMode>(), Ok(mode));
            assert_eq!(mode.to_string(), mode.name());
        }
        assert_eq!(" Triad ".parse::<SchemeMode>(), Ok(SchemeMode::Triadic));
        assert_eq!("monochrome".parse::<SchemeMode>(), Ok(SchemeMode::Monochromatic));
        assert_eq!("analogic".parse::<SchemeMode>(), Ok(SchemeMode::Analogous));
        assert_eq!("complement".parse::<SchemeMode>(), Ok(SchemeMode::Complementary));
        assert_eq!(
            "SPLIT_COMPLEMENTARY".parse::<SchemeMode>(),
            Ok(SchemeMode::SplitComplementary)
        );
    }

    #[test]
    fn offsets_clamp_and_wrap() {
        let hsl = Hsl::new(350, 95, 5);
        let (shifted, adjustments) = Offset::hue(30).with_lightness(-15).apply(&hsl);
        assert_eq!(shifted, Hsl::new(20, 95, 0));
        assert_eq!(
            adjustments,
            Adjustments::HUE_WRAPPED | Adjustments::LIGHTNESS_CLAMPED
        );

        let (shifted, adjustments) = Offset::saturation(-30).apply(&Hsl::new(0, 10, 50));
        assert_eq!(shifted, Hsl::new(0, 0, 50));
        assert_eq!(adjustments, Adjustments::SATURATION_CLAMPED);
    }

    #[test]
    fn serializes_swatches_with_their_adjustments() {
        let palette = SchemeMode::Triadic.palette(HexColor::new(0x33, 0x66, 0xcc));
        let json = serde_json::to_value(palette).unwrap();
        assert_eq!(json["mode"], "triadic");
        assert_eq!(json["swatches"][0]["color"], "#3366cc");
        assert_eq!(json["swatches"].as_array().map(Vec::len), Some(PALETTE_SIZE));
    }
}
