use crate::config::{Config, load_config};
use crate::layout::compute_layout;
use crate::render::render_layout_svg;
use crate::segment::segment_into_columns;
use crate::sink::{DocumentSink, SvgFileSink, WriterSink};
use crate::style::{Direction, FontWeight, Rgb};
use crate::weight::detect_font_weight;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "vtext", version, about = "Vertical text layout to SVG")]
pub struct Args {
    /// Input text file or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (camelCase style fields)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Font size in pixels
    #[arg(long = "font-size")]
    pub font_size: Option<f32>,

    /// Column pitch as a multiple of the font size
    #[arg(long = "line-spacing")]
    pub line_spacing: Option<f32>,

    /// Character pitch as a multiple of the font size
    #[arg(long = "char-spacing")]
    pub char_spacing: Option<f32>,

    /// Characters per column before wrapping
    #[arg(short = 'n', long = "max-chars")]
    pub max_chars: Option<usize>,

    /// Font family, comma separated fallbacks allowed
    #[arg(short = 'f', long = "font-family")]
    pub font_family: Option<String>,

    /// Font weight (100-900)
    #[arg(short = 'W', long = "font-weight")]
    pub font_weight: Option<u16>,

    /// Text colour as #rrggbb
    #[arg(long = "color")]
    pub color: Option<String>,

    /// Force tabular (monospace) numerals
    #[arg(long = "monospace-numerals")]
    pub monospace_numerals: bool,

    /// Column order: rtl or ltr
    #[arg(short = 'd', long = "direction")]
    pub direction: Option<String>,

    /// PNG scale factor
    #[arg(short = 's', long = "scale")]
    pub scale: Option<f32>,

    /// Log progress to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = load_config(args.config.as_deref())?;
    if let Some(path) = &args.config {
        info!(path = %path.display(), "loaded config");
    }
    apply_overrides(&mut config, &args)?;
    config.style.validate()?;
    config.render.validate()?;

    let input = read_input(args.input.as_deref())?;
    let columns = segment_into_columns(&input, config.style.max_column_chars)?;
    info!(
        chars = input.chars().count(),
        columns = columns.len(),
        direction = %config.style.direction,
        "segmented text"
    );
    let layout = compute_layout(&columns, &config.style);
    info!(width = layout.width, height = layout.height, "canvas");
    let svg = render_layout_svg(&layout, &config.style);
    debug!(bytes = svg.len(), "rendered svg");

    let mut sink = select_sink(args.output_format, args.output.as_deref(), &config)?;
    sink.insert(&svg)?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn apply_overrides(config: &mut Config, args: &Args) -> Result<()> {
    let style = &mut config.style;
    if let Some(v) = args.font_size {
        style.font_size = v;
    }
    if let Some(v) = args.line_spacing {
        style.line_spacing = v;
    }
    if let Some(v) = args.char_spacing {
        style.char_spacing = v;
    }
    if let Some(v) = args.max_chars {
        style.max_column_chars = v;
    }
    if let Some(v) = &args.font_family {
        style.font_family = v.clone();
        if args.font_weight.is_none() {
            if let Some(weight) = detect_font_weight(v) {
                debug!(family = %v, weight = weight.name(), "weight inferred from family");
                style.font_weight = weight;
            }
        }
    }
    if let Some(v) = args.font_weight {
        style.font_weight = FontWeight::new(v)?;
    }
    if let Some(v) = &args.color {
        style.text_color = v.parse::<Rgb>()?;
    }
    if args.monospace_numerals {
        style.monospace_numerals = true;
    }
    if let Some(v) = &args.direction {
        style.direction = v.parse::<Direction>()?;
    }
    if let Some(v) = args.scale {
        config.render.scale = v;
    }
    Ok(())
}

fn select_sink(format: OutputFormat, output: Option<&Path>, config: &Config) -> Result<Box<dyn DocumentSink>> {
    match (format, output) {
        (OutputFormat::Svg, Some(path)) => {
            let sink = SvgFileSink::new(path);
            info!(path = %sink.path().display(), "writing svg");
            Ok(Box::new(sink))
        }
        (OutputFormat::Svg, None) => Ok(Box::new(WriterSink::stdout())),
        (OutputFormat::Png, Some(path)) => png_sink(path, config),
        (OutputFormat::Png, None) => Err(anyhow::anyhow!("Output path required for png output")),
    }
}

#[cfg(feature = "png")]
fn png_sink(path: &Path, config: &Config) -> Result<Box<dyn DocumentSink>> {
    info!(path = %path.display(), scale = config.render.scale, "writing png");
    Ok(Box::new(crate::sink::PngFileSink::new(path, &config.render)?))
}

#[cfg(not(feature = "png"))]
fn png_sink(_path: &Path, _config: &Config) -> Result<Box<dyn DocumentSink>> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return Ok(std::fs::read_to_string(path)?);
        }
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
