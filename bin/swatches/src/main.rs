use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use image::RgbImage;
use paletta::{ColorInfo, HexColor, Palette, SchemeMode, Swatch, PALETTE_SIZE};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const SWATCH_SIZE: u32 = 100;

/// Explore color schemes built around a base color.
#[derive(Parser, Debug)]
#[command(name = "paletta-swatches", version, about)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Base color as 6 hex digits, with or without a leading '#'. A random
    /// color is picked when omitted.
    #[arg(value_parser = parse_color)]
    color: Option<HexColor>,

    /// Scheme mode: analogous, monochromatic, complementary, triadic or
    /// split-complementary.
    #[arg(short, long, default_value = "analogous")]
    mode: SchemeMode,

    /// Write the palette as a PNG strip to this path.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a JSON document instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate and print a saved response of the remote color API.
    Decode {
        /// Which endpoint produced the response.
        #[arg(long, value_enum)]
        kind: ResponseKind,

        /// File holding the JSON body, or '-' for stdin.
        file: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ResponseKind {
    Id,
    Scheme,
}

#[derive(Serialize)]
struct Report<'a> {
    base: ColorInfo,
    mode: SchemeMode,
    palette: &'a [Swatch; PALETTE_SIZE],
}

impl<'a> Report<'a> {
    fn new(base: HexColor, palette: &'a Palette) -> Self {
        Self {
            base: ColorInfo::from(base),
            mode: palette.mode(),
            palette: palette.swatches(),
        }
    }
}

/// Colors typed on the command line may carry stray whitespace.
fn parse_color(value: &str) -> paletta::Result<HexColor> {
    value.trim().parse()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Some(Command::Decode { kind, file }) => decode(kind, &file),
        None => {
            let base = args
                .color
                .unwrap_or_else(|| HexColor::random(&mut rand::rng()));
            explore(base, args.mode, args.output.as_deref(), args.json)
        }
    }
}

fn explore(base: HexColor, mode: SchemeMode, output: Option<&Path>, json: bool) -> Result<()> {
    let palette = mode.palette(base);

    if json {
        let report = Report::new(base, &palette);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{mode} palette for {base}");
        for swatch in palette.swatches() {
            if swatch.is_anchor() {
                println!("  {}  (base)", swatch.color);
            } else {
                println!("  {}", swatch.color);
            }
        }
        print_info(&ColorInfo::from(base));
    }

    if let Some(path) = output {
        render(&palette)
            .save(path)
            .with_context(|| format!("could not write image to {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote palette image");
    }

    Ok(())
}

fn print_info(info: &ColorInfo) {
    println!("HSL   {}", info.hsl);
    println!("RGB   {}", info.rgb);
    println!("CMYK  {}", info.cmyk);
}

fn read_body(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .context("could not read stdin")?;
        Ok(body)
    } else {
        std::fs::read_to_string(file).with_context(|| format!("could not read {}", file.display()))
    }
}

/// Validate a saved response and return the lines to print.
fn decoded_lines(kind: ResponseKind, body: &str) -> Result<Vec<String>> {
    let lines = match kind {
        ResponseKind::Id => {
            let info = paletta::remote::decode_id(body)?;
            vec![
                info.hex.to_string(),
                format!("HSL   {}", info.hsl),
                format!("RGB   {}", info.rgb),
                format!("CMYK  {}", info.cmyk),
            ]
        }
        ResponseKind::Scheme => paletta::remote::decode_scheme(body)?
            .iter()
            .map(HexColor::to_string)
            .collect(),
    };
    Ok(lines)
}

fn decode(kind: ResponseKind, file: &Path) -> Result<()> {
    let body = read_body(file)?;
    for line in decoded_lines(kind, &body)? {
        println!("{line}");
    }
    Ok(())
}

/// Paint one square block per swatch, left to right.
fn render(palette: &Palette) -> RgbImage {
    let colors = palette.colors().map(|color| color.to_rgb());

    let mut img = RgbImage::new(SWATCH_SIZE * PALETTE_SIZE as u32, SWATCH_SIZE);
    for (x, _, pixel) in img.enumerate_pixels_mut() {
        let rgb = colors[(x / SWATCH_SIZE) as usize];
        *pixel = image::Rgb([rgb.red, rgb.green, rgb.blue]);
    }

    img
}
