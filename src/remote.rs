//! Boundary types for the remote color API (`https://www.thecolorapi.com`),
//! the network alternative to the local engine.
//!
//! No HTTP client lives here. This module builds the query part of the two
//! endpoints and validates their JSON payloads into the crate's own types, so
//! a response that is missing a field or carries a bad value is reported as
//! [`Error::MalformedResponse`] instead of leaking half-filled colors.

use serde::Deserialize;

use crate::{ColorInfo, Error, HexColor, Hsl, Result, Rgb, SchemeMode};

/// Base URL of the public color API.
pub const BASE_URL: &str = "https://www.thecolorapi.com";

#[derive(Deserialize)]
struct Value<T> {
    value: T,
}

#[derive(Deserialize)]
struct RawRgb {
    r: i64,
    g: i64,
    b: i64,
}

#[derive(Deserialize)]
struct RawHsl {
    h: i64,
    s: i64,
    l: i64,
}

#[derive(Deserialize)]
struct IdResponse {
    hex: Value<String>,
    rgb: RawRgb,
    hsl: RawHsl,
}

#[derive(Deserialize)]
struct SchemeColor {
    hex: Value<String>,
}

#[derive(Deserialize)]
struct SchemeResponse {
    colors: Vec<SchemeColor>,
}

/// The name the remote API uses for a mode. The API has no split
/// complementary scheme; `analogic-complement` is its closest relative.
fn remote_mode(mode: SchemeMode) -> &'static str {
    match mode {
        SchemeMode::Analogous => "analogic",
        SchemeMode::Monochromatic => "monochrome",
        SchemeMode::Complementary => "complement",
        SchemeMode::Triadic => "triad",
        SchemeMode::SplitComplementary => "analogic-complement",
    }
}

/// The path and query identifying a single color.
pub fn id_query(hex: HexColor) -> String {
    format!("id?hex={}", hex.digits())
}

/// The path and query requesting `count` colors of a scheme.
pub fn scheme_query(hex: HexColor, mode: SchemeMode, count: usize) -> String {
    format!(
        "scheme?hex={}&mode={}&count={count}",
        hex.digits(),
        remote_mode(mode)
    )
}

fn malformed(reason: impl std::fmt::Display) -> Error {
    let error = Error::MalformedResponse(reason.to_string());
    tracing::debug!(%error, "rejected remote response");
    error
}

fn parse<'a, T: Deserialize<'a>>(json: &'a str) -> Result<T> {
    serde_json::from_str(json).map_err(malformed)
}

fn hex_field(field: &str, value: &str) -> Result<HexColor> {
    value
        .parse()
        .map_err(|_| malformed(format!("{field} is not a hex color: {value:?}")))
}

/// Validate the body of an `id` response.
///
/// The hex value and the RGB channels must agree. The HSL values are taken
/// as given, with the hue wrapped onto the color wheel. CMYK is recomputed
/// from RGB.
pub fn decode_id(json: &str) -> Result<ColorInfo> {
    let response: IdResponse = parse(json)?;

    let hex = hex_field("hex.value", &response.hex.value)?;
    let RawRgb { r, g, b } = response.rgb;
    let rgb = Rgb::try_new(r, g, b).map_err(|err| malformed(format!("rgb: {err}")))?;
    if hex.to_rgb() != rgb {
        return Err(malformed(format!(
            "hex.value {hex} does not match rgb({r}, {g}, {b})"
        )));
    }

    let RawHsl { h, s, l } = response.hsl;
    let hsl = Hsl::try_new(h.rem_euclid(360), s, l)
        .map_err(|err| malformed(format!("hsl: {err}")))?;

    Ok(ColorInfo {
        hex,
        rgb,
        hsl,
        cmyk: rgb.to_cmyk(),
    })
}

/// Validate the body of a `scheme` response into its colors, in order.
pub fn decode_scheme(json: &str) -> Result<Vec<HexColor>> {
    let response: SchemeResponse = parse(json)?;

    if response.colors.is_empty() {
        return Err(malformed("scheme has no colors"));
    }

    response
        .colors
        .iter()
        .enumerate()
        .map(|(i, color)| hex_field(&format!("colors[{i}].hex.value"), &color.hex.value))
        .collect()
}
