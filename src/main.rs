//! Spin Wheel headless driver
//!
//! Runs the wheel against a synthetic frame clock so a session can be
//! replayed and inspected without a display.
//!
//! Usage:
//!   spin-wheel [OPTIONS]
//!
//! Example:
//!   RUST_LOG=debug spin-wheel --frames 300 --spin-at 60 --json
//!   spin-wheel --frames 3600 --respin

use std::fs;
use std::process::ExitCode;

use clap::Parser;

use spin_wheel::sim::Event;
use spin_wheel::{Settings, Store};

#[derive(Parser)]
#[command(name = "spin-wheel")]
#[command(version, about = "Simulate the spin wheel without a display")]
struct Cli {
    /// Settings JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Number of frames to simulate
    #[arg(short, long, default_value = "180")]
    frames: u32,

    /// Override the configured RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Trigger a spin during this frame, after its tick (repeatable)
    #[arg(long)]
    spin_at: Vec<u32>,

    /// JSON-lines file of events dispatched before the first frame
    #[arg(long)]
    script: Option<String>,

    /// Spin again whenever the wheel comes to rest
    #[arg(long)]
    respin: bool,

    /// Print every frame's state as a JSON line
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };
    if let Some(seed) = cli.seed {
        settings.seed = seed;
    }

    let mut store = Store::new(&settings)?;

    if let Some(path) = &cli.script {
        let events = load_script(path)?;
        log::info!("Replaying {} scripted events", events.len());
        for event in events {
            store.dispatch(event)?;
        }
    }

    let frame_ms = settings.frame_ms();
    for frame in 0..cli.frames {
        if cli.spin_at.contains(&frame) {
            log::debug!("Spin triggered at frame {}", frame);
            store.defer(Event::Spin)?;
        }

        let now_ms = frame as f64 * frame_ms;
        let state = if cli.respin {
            *store.frame_with(now_ms, |event, state, raised| {
                if matches!(event, Event::Tick { .. }) && state.is_at_rest() {
                    log::debug!("Wheel at rest, respinning");
                    raised.raise(Event::Spin);
                }
            })?
        } else {
            *store.frame(now_ms)?
        };
        if cli.json {
            println!("{}", serde_json::to_string(&state)?);
        } else if frame % settings.fps == 0 {
            println!(
                "t={:>6.2}s rot={:>10.2} avel={:>9.3}",
                frame as f64 * frame_ms / 1000.0,
                state.rot,
                state.avel
            );
        }
    }

    let state = store.state();
    log::info!(
        "Finished {} frames: rot={:.2} avel={:.3}{}",
        cli.frames,
        state.rot,
        state.avel,
        if state.is_at_rest() { " (at rest)" } else { "" }
    );
    Ok(())
}

/// Parse a JSON-lines event script, skipping blank lines
fn load_script(path: &str) -> Result<Vec<Event>, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    let mut events = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let event: Event = serde_json::from_str(line)
            .map_err(|e| format!("{}:{}: {}", path, line_no + 1, e))?;
        events.push(event);
    }
    Ok(events)
}
