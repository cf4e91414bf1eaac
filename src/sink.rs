//! Destinations for rendered markup.
//!
//! Embedding applications pick exactly one [`DocumentSink`]; the renderer
//! itself never touches files or streams.

#[cfg(feature = "png")]
use crate::config::RenderConfig;
#[cfg(feature = "png")]
use crate::error::ConfigurationError;
#[cfg(feature = "png")]
use crate::style::Rgb;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[cfg(feature = "png")]
    #[error(transparent)]
    Svg(#[from] usvg::Error),

    #[error("rasterization failed: {0}")]
    Raster(String),
}

/// Something that accepts a finished SVG document.
pub trait DocumentSink {
    fn insert(&mut self, svg: &str) -> Result<(), SinkError>;
}

/// Writes the markup verbatim to a file.
#[derive(Debug, Clone)]
pub struct SvgFileSink {
    path: PathBuf,
}

impl SvgFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSink for SvgFileSink {
    fn insert(&mut self, svg: &str) -> Result<(), SinkError> {
        std::fs::write(&self.path, svg)?;
        Ok(())
    }
}

/// Writes the markup to any byte stream, stdout by default.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DocumentSink for WriterSink<W> {
    fn insert(&mut self, svg: &str) -> Result<(), SinkError> {
        self.writer.write_all(svg.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Rasterizes the markup with resvg and writes a PNG.
#[cfg(feature = "png")]
#[derive(Debug, Clone)]
pub struct PngFileSink {
    path: PathBuf,
    scale: f32,
    background: Option<Rgb>,
}

#[cfg(feature = "png")]
impl PngFileSink {
    pub fn new(path: impl Into<PathBuf>, render: &RenderConfig) -> Result<Self, ConfigurationError> {
        render.validate()?;
        let background = render.background.as_deref().map(str::parse::<Rgb>).transpose()?;
        Ok(Self {
            path: path.into(),
            scale: render.scale,
            background,
        })
    }

    /// Render `svg` into an in-memory pixmap.
    pub fn rasterize(&self, svg: &str) -> Result<resvg::tiny_skia::Pixmap, SinkError> {
        let mut opt = usvg::Options::default();
        opt.fontdb_mut().load_system_fonts();

        let tree = usvg::Tree::from_str(svg, &opt)?;
        let size = tree.size();
        let width = (size.width() * self.scale).ceil().max(1.0) as u32;
        let height = (size.height() * self.scale).ceil().max(1.0) as u32;
        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| SinkError::Raster(format!("cannot allocate {width}x{height} pixmap")))?;

        if let Some(bg) = self.background {
            pixmap.fill(resvg::tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, 255));
        }
        let transform = resvg::tiny_skia::Transform::from_scale(self.scale, self.scale);
        resvg::render(&tree, transform, &mut pixmap.as_mut());
        Ok(pixmap)
    }
}

#[cfg(feature = "png")]
impl DocumentSink for PngFileSink {
    fn insert(&mut self, svg: &str) -> Result<(), SinkError> {
        let pixmap = self.rasterize(svg)?;
        pixmap
            .save_png(&self.path)
            .map_err(|err| SinkError::Raster(err.to_string()))?;
        Ok(())
    }
}
