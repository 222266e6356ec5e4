//! Headless frame loop

use anyhow::{Context, Result};
use clap::Args;
use cubeman_anim::{CameraMode, FrameDriver, ManualClock, RecordingRenderer};
use log::{debug, info, warn};
use serde::Serialize;

use super::OutputFormat;
use crate::config::ViewerConfig;
use crate::utils::{add_table_row, create_table, format_seconds};

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Number of frames to run
    #[arg(short = 'n', long, default_value_t = 60)]
    pub frames: u32,

    /// Wall-clock milliseconds between frames
    #[arg(short, long, default_value_t = 16)]
    pub step_ms: u64,

    /// Camera mode to switch to before the first frame
    #[arg(short, long)]
    pub camera: Option<u32>,

    /// Start paused
    #[arg(long)]
    pub paused: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct FrameRecord {
    pub frame: u32,
    pub time: f64,
    pub phase: f32,
    pub camera: CameraMode,
    pub draws: usize,
}

/// Drive the frame loop against a stepped clock and recording renderer
pub fn run(args: &SimulateArgs, config: &ViewerConfig) -> Result<Vec<FrameRecord>> {
    let rig = config.rig()?;
    let settings = config.driver_settings()?;
    let mut driver = FrameDriver::new(rig, settings, ManualClock::new(0))
        .context("Failed to start frame driver")?;
    let mut renderer = RecordingRenderer::new();
    driver.init(&mut renderer);

    if let Some(mode) = args.camera {
        if !CameraMode::is_known(mode) {
            warn!("Unknown camera mode {mode}, using front view");
        }
        driver.state_mut().set_camera(CameraMode::from_index(mode));
    }
    if args.paused {
        driver.state_mut().toggle_pause();
    }

    let mut records = Vec::with_capacity(args.frames as usize);
    for frame in 1..=args.frames {
        driver.clock_mut().advance(args.step_ms);
        renderer.clear_draws();
        let redrawn = driver.frame(&mut renderer);

        let time = driver.state().clock.seconds();
        let record = FrameRecord {
            frame,
            time,
            phase: driver.rig().clip().phase_at(time),
            camera: driver.state().camera_mode,
            draws: renderer.draws.len(),
        };
        debug!(
            "Frame {frame}: t={time:.3}s redraw={redrawn} draws={}",
            record.draws
        );
        records.push(record);
    }

    info!(
        "Simulated {} frames, {} uploads",
        records.len(),
        renderer.uploads.len()
    );
    Ok(records)
}

pub fn execute(args: SimulateArgs, config: &ViewerConfig) -> Result<()> {
    let records = run(&args, config)?;

    match args.format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&records).context("Failed to serialize frames")?;
            println!("{json}");
        }
        OutputFormat::Table => {
            let mut table = create_table(&["Frame", "Time", "Phase", "Camera", "Draws"]);
            for record in &records {
                add_table_row(
                    &mut table,
                    vec![
                        record.frame.to_string(),
                        format_seconds(record.time),
                        format!("{:.4}", record.phase),
                        record.camera.to_string(),
                        record.draws.to_string(),
                    ],
                );
            }
            table.printstd();

            let total: usize = records.iter().map(|r| r.draws).sum();
            println!();
            println!("Frames: {}  Draw calls: {}", records.len(), total);
        }
    }

    Ok(())
}
