use std::path::PathBuf;
use std::process;

use clap::Parser;
use icon_assets::constants::{
    DEFAULT_BACKGROUND_THRESHOLD, DEFAULT_RESOURCES_DIR, DEFAULT_STROKE_OPACITY,
};
use icon_assets::{GeneratorConfig, SourceCandidates, generate, resolve_source};

#[derive(Parser)]
#[command(name = "icon-assets")]
#[command(about = "Generate application and tray icons from a single source image")]
#[command(version)]
struct Cli {
    /// Source image path (PNG recommended)
    #[arg(long)]
    source: Option<PathBuf>,

    /// Output resources directory
    #[arg(long, default_value = DEFAULT_RESOURCES_DIR)]
    resources_dir: PathBuf,

    /// Only generate tray icons (does not overwrite icon.ico/icon.png/icon.icns)
    #[arg(long)]
    only_tray: bool,

    /// Pixels with R, G and B all above this value become transparent
    #[arg(long, default_value_t = DEFAULT_BACKGROUND_THRESHOLD)]
    threshold: u8,

    /// Keep the source background instead of keying out white
    #[arg(long)]
    keep_background: bool,

    /// Opacity of the tray icon outline, in (0, 1]
    #[arg(long, default_value_t = DEFAULT_STROKE_OPACITY, value_parser = parse_stroke_opacity)]
    stroke_opacity: f32,

    /// Override the legacy fallback source location
    #[arg(long)]
    legacy_source: Option<PathBuf>,
}

fn parse_stroke_opacity(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|e| format!("{}", e))?;
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(format!("{} is not in (0, 1]", value))
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let candidates = SourceCandidates::from_env(cli.source, cli.legacy_source, &cli.resources_dir);
    let source = match resolve_source(&candidates) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let config = GeneratorConfig {
        resources_dir: cli.resources_dir,
        only_tray: cli.only_tray,
        background_threshold: (!cli.keep_background).then_some(cli.threshold),
        stroke_opacity: cli.stroke_opacity,
    };

    match generate(&source, &config) {
        Ok(report) => {
            log::info!(
                "wrote {} file(s), skipped {}",
                report.written.len(),
                report.skipped.len()
            );
        }
        // Partial output is left in place and the run still counts as done.
        Err(e) => {
            println!("An error occurred: {}", e);
            log::error!("generation failed: {:?}", e);
        }
    }
}
