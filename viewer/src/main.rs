mod config;
mod svg;

use circle_intersect_core::scene::{DrawCommand, Frame, ParameterStore, RecordingCanvas, Renderer, SceneParams};
use clap::Parser;
use config::{Args, ViewerResult};
use serde::Serialize;
use std::io::Write;
use svg::SvgCanvas;
use tracing::{debug, error, info, warn};

/// Frame summary plus every canvas call, as written by `--frame-json`.
#[derive(Debug, Serialize)]
struct FrameDump<'a> {
    frame: &'a Frame,
    commands: &'a [DrawCommand],
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "viewer=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> ViewerResult<()> {
    debug!("Viewer args: {:?}", args);

    let mut store = ParameterStore::new(args.load_scene()?);
    if let Some(mode) = args.mode {
        store.set_mode(mode);
    }
    if let Some(theme) = &args.theme {
        store.set_theme(theme);
    }
    if args.axes {
        store.set_show_axes(true);
    }
    for (param, text) in &args.overrides {
        if store.apply_input(*param, text) {
            info!("Set {} = {}", param.field_name(), store.params().get(*param));
        }
    }

    let Some(params) = store.take_redraw() else {
        return Ok(());
    };

    let renderer = Renderer::new(args.viewport());
    let mut canvas = SvgCanvas::new(args.viewport());
    let frame = renderer.redraw(&mut canvas, &params);

    if let Some(reason) = &frame.degenerate {
        warn!("No intersections drawn: {}", reason);
    }
    info!(
        "Rendered {:?} frame (revision {}) with {} intersection(s)",
        frame.mode,
        store.revision(),
        frame.intersections.len()
    );
    for (i, point) in frame.intersections.iter().enumerate() {
        info!("  #{}: ({:.4}, {:.4})", i + 1, point.x, point.y);
    }

    if let Some(path) = &args.frame_json {
        std::fs::write(path, frame_json(&renderer, &params)?)?;
        info!("Wrote frame dump {}", path.display());
    }

    let document = canvas.finish();
    match &args.out {
        Some(path) => {
            std::fs::write(path, document)?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Redraw onto a recording canvas and encode the result. Solvers are pure,
/// so this matches the frame written to SVG.
fn frame_json(renderer: &Renderer, params: &SceneParams) -> ViewerResult<String> {
    let mut recording = RecordingCanvas::new();
    let frame = renderer.redraw(&mut recording, params);
    let dump = FrameDump { frame: &frame, commands: &recording.commands };
    Ok(serde_json::to_string_pretty(&dump)?)
}
