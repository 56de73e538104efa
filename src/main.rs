//! Headless command-line driver that replays a fixed input script through the
//! controller and optionally writes the per-step trace as JSON.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use drakewalk::{
    init_logging, Axis, Button, GroundState, InputFrame, InputSource, KinematicBody,
    PlatformerConfig, PlatformerController, FIXED_DELTA_TIME,
};
use glam::Vec2;
use log::{debug, info};
use serde::Serialize;

/// Headless run of the drakewalk platformer controller
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// JSON file with controller tuning
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of fixed steps to simulate
    #[arg(short, long, default_value_t = 100)]
    ticks: u32,
    /// Starting rotation in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    rotation: f32,
    /// Starting speed along +x
    #[arg(long, default_value_t = 3.0)]
    speed: f32,
    /// Horizontal axis held for the whole run
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    horizontal: f32,
    /// Step on which the jump button is pressed
    #[arg(long)]
    jump_at: Option<u32>,
    /// Hold the drop button for the whole run
    #[arg(long)]
    drop: bool,
    /// Start standing on flat ground
    #[arg(long)]
    grounded: bool,
    /// Write the per-step trace to this JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Fixed input script replayed each step.
struct Script {
    horizontal: f32,
    jump: bool,
    drop: bool,
}

impl InputSource for Script {
    fn axis_raw(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.horizontal,
        }
    }

    fn button_held(&self, button: Button) -> bool {
        match button {
            Button::Jump => self.jump,
            Button::Drop => self.drop,
        }
    }
}

#[derive(Serialize)]
struct TraceRow {
    tick: u32,
    rotation: f32,
    position: Vec2,
    velocity: Vec2,
    ground: GroundState,
    jumping: bool,
}

fn simulate(args: &Args, config: PlatformerConfig) -> Result<Vec<TraceRow>> {
    let mut controller = PlatformerController::new(config)?;
    let mut body =
        KinematicBody::new(Vec2::ZERO, args.rotation).with_velocity(Vec2::new(args.speed, 0.0));
    if args.grounded {
        controller.collision_enter([drakewalk::Contact::new(Vec2::Y)]);
    }

    let mut trace = Vec::new();
    for tick in 0..args.ticks {
        let script = Script {
            horizontal: args.horizontal,
            jump: args.jump_at == Some(tick),
            drop: args.drop,
        };
        let input = InputFrame::sample(&script);
        if controller.update(&input, FIXED_DELTA_TIME) {
            info!("jump at step {tick}");
        }
        let velocity = controller.fixed_update(&mut body, &input, FIXED_DELTA_TIME);
        body.integrate(FIXED_DELTA_TIME);
        debug!(
            "step {tick}: rotation {:.1} position {:?} velocity {velocity:?}",
            body.rotation, body.position
        );
        trace.push(TraceRow {
            tick,
            rotation: body.rotation,
            position: body.position,
            velocity,
            ground: controller.ground_state(),
            jumping: controller.is_jumping(),
        });
    }
    Ok(trace)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    ensure!(args.rotation.is_finite(), "rotation must be finite");
    ensure!(
        args.speed.is_finite() && args.speed >= 0.0,
        "speed must be finite and non-negative"
    );

    let config = match &args.config {
        Some(path) => PlatformerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PlatformerConfig::default(),
    };

    let trace = simulate(&args, config)?;
    if let Some(last) = trace.last() {
        info!(
            "finished {} steps at {:?} moving {:?}",
            trace.len(),
            last.position,
            last.velocity
        );
    }

    if let Some(path) = &args.output {
        let file =
            File::create(path).with_context(|| format!("creating trace {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &trace)
            .with_context(|| format!("writing trace {}", path.display()))?;
        info!("trace written to {}", path.display());
    }
    Ok(())
}
