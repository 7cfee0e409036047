use anyhow::Context;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use videoink::config::{CanvasPreset, Config};
use videoink::draw::{RasterSurface, RecordingSurface, Surface};
use videoink::export;
use videoink::input::InputState;
use videoink::script::EventScript;

#[derive(Parser, Debug)]
#[command(name = "videoink")]
#[command(version, about = "Freehand annotation layer for video frames")]
struct Cli {
    /// TOML event script to play back
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// PNG output path (default: videoink_<timestamp>.png)
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/videoink/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Surface size (720p or 1080p), overrides the config file
    #[arg(long, value_name = "PRESET", value_parser = parse_preset)]
    size: Option<CanvasPreset>,

    /// Print the final command log as JSON on stdout
    #[arg(long, action = ArgAction::SetTrue)]
    dump_log: bool,

    /// Play the script without rasterizing or writing anything
    #[arg(long, action = ArgAction::SetTrue)]
    dry_run: bool,
}

fn parse_preset(value: &str) -> Result<CanvasPreset, String> {
    CanvasPreset::parse(value).ok_or_else(|| format!("unknown size '{value}' (use 720p or 1080p)"))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script.as_deref() else {
        println!("videoink: Freehand annotation layer for video frames");
        println!();
        println!("Usage:");
        println!("  videoink --script events.toml              Render to videoink_<timestamp>.png");
        println!("  videoink --script events.toml -o out.png   Render to a chosen file");
        println!("  videoink --script events.toml --dry-run    Play back without writing");
        println!("  videoink --help                            Show all options");
        println!();
        println!("Controls recorded in scripts:");
        println!("  - Freehand: pointer-down, pointer-move..., pointer-up");
        println!("  - Small ring: hold Ctrl + pointer-down");
        println!("  - Large ring: hold Ctrl+Shift + pointer-down");
        println!("  - Undo: Ctrl+Z");
        println!("  - Clear all: Backspace");
        println!("  - Palette: 0-8");
        return Ok(());
    };

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let preset = cli.size.unwrap_or(config.canvas.size);
    let (width, height) = preset.dimensions();

    let script = EventScript::load(script_path)?;

    if cli.dry_run {
        let state = play(&config, &script, RecordingSurface::new(width, height))?;
        let surface = state.canvas.surface();
        if cli.dump_log {
            println!("{}", export::log_to_json(state.canvas.log())?);
        } else {
            println!(
                "Dry-run: {} stroke(s), {} primitive(s), {} surface operation(s) on {}x{}; nothing written",
                state.canvas.log().len(),
                state.canvas.log().primitive_count(),
                surface.ops.len(),
                surface.width(),
                surface.height()
            );
        }
        return Ok(());
    }

    let surface = RasterSurface::new(width, height).context("Failed to create drawing surface")?;
    let state = play(&config, &script, surface)?;

    let output = cli.output.unwrap_or_else(|| {
        PathBuf::from(export::generate_filename(
            export::DEFAULT_FILENAME_TEMPLATE,
            "png",
        ))
    });
    let output = export::expand_tilde(&output.to_string_lossy());
    let written = export::save_png(state.canvas.surface(), &output)?;

    if cli.dump_log {
        println!("{}", export::log_to_json(state.canvas.log())?);
    } else {
        println!("Saved annotation layer to {}", written.display());
    }

    Ok(())
}

fn play<S: Surface>(
    config: &Config,
    script: &EventScript,
    surface: S,
) -> anyhow::Result<InputState<S>> {
    let mut state = InputState::from_config(config, surface)?;
    script.apply(&mut state)?;
    if state.canvas.cancel_stroke() {
        log::warn!("Script ended mid-stroke; the unfinished stroke was discarded");
    }
    log::info!(
        "Played {} event(s): {} stroke(s) in history",
        script.events.len(),
        state.canvas.log().len()
    );
    Ok(state)
}
