//! Floppy Bird entry point
//!
//! Native build runs a headless session flown by the autopilot.
//!
//! Usage: `floppy-bird [settings.json] [seed]`

use std::path::Path;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use floppy_bird::platform::{
    AssetLoader, Autopilot, FixedRatePacer, ManifestLoader, RecordingCanvas, StockAssets,
};
use floppy_bird::{Game, GameConfig, SetupError};

const ASSET_MANIFEST: &str = "assets/assets.json";
/// Longest demo run (two minutes at 30 ticks/s)
const DEMO_FRAMES: u64 = 30 * 120;
/// Frames to keep showing the game-over screen
const LINGER_FRAMES: u64 = 30 * 2;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Floppy Bird (native) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("floppy-bird: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), SetupError> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load(Path::new(&path))?,
        None => GameConfig::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(clock_seed);

    let manifest = Path::new(ASSET_MANIFEST);
    let mut loader: Box<dyn AssetLoader> = if manifest.exists() {
        Box::new(ManifestLoader::open(manifest)?)
    } else {
        log::warn!("No {ASSET_MANIFEST}, using stock sprite sizes");
        Box::new(StockAssets)
    };

    let game = Game::setup(
        &config,
        &mut loader,
        seed,
        RecordingCanvas::new(),
        Autopilot::new(DEMO_FRAMES, LINGER_FRAMES),
        FixedRatePacer::new(config.window.ticks_per_second),
    )?;
    let outcome = game.run();

    println!(
        "score {} | {} ticks alive | {} frames | {}",
        outcome.score,
        outcome.ticks_alive,
        outcome.frames,
        if outcome.survived { "survived" } else { "crashed" }
    );
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
