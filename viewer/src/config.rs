use circle_intersect_core::scene::{Mode, Parameter, SceneParams, Viewport};
use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("Failed to read scene {path}: {source}")]
    ReadScene {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse scene {path}: {source}")]
    ParseScene {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to encode frame: {0}")]
    EncodeFrame(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

pub type ViewerResult<T> = Result<T, ViewerError>;

#[derive(Debug, Clone, Parser)]
#[command(name = "viewer")]
#[command(about = "Render a line or ray crossing a circle to SVG, marking the intersections")]
pub struct Args {
    /// Scene file (JSON); missing fields take their defaults
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Output SVG file (defaults to stdout)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Also write the frame summary and draw commands as JSON
    #[arg(long)]
    pub frame_json: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 800.0, value_parser = parse_dimension)]
    pub width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 600.0, value_parser = parse_dimension)]
    pub height: f64,

    /// Theme preset: light, dark or high-contrast
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Shape to intersect: line or ray
    #[arg(short, long, value_parser = parse_mode)]
    pub mode: Option<Mode>,

    /// Draw the x and y axes
    #[arg(long)]
    pub axes: bool,

    /// Override a scene parameter, e.g. `--set r=50` (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_override)]
    pub overrides: Vec<(Parameter, String)>,
}

impl Args {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Load the scene file, or the default scene when none was given.
    pub fn load_scene(&self) -> ViewerResult<SceneParams> {
        let Some(path) = &self.scene else {
            return Ok(SceneParams::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| ViewerError::ReadScene {
            path: path.clone(),
            source,
        })?;
        SceneParams::from_json(&text).map_err(|source| ViewerError::ParseScene {
            path: path.clone(),
            source,
        })
    }
}

fn parse_dimension(text: &str) -> Result<f64, String> {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(format!("must be a positive number, got '{}'", text)),
    }
}

fn parse_mode(text: &str) -> Result<Mode, String> {
    text.parse()
}

fn parse_override(text: &str) -> Result<(Parameter, String), String> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{}'", text))?;
    let param = Parameter::from_field_name(name.trim())
        .ok_or_else(|| format!("unknown parameter '{}'", name))?;
    Ok((param, value.to_string()))
}
