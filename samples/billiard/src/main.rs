use clap::Parser;

mod cli;
mod scene;
mod strike;

use cli::Cli;
use scene::Scene;
use strike::Strike;

pub fn main() -> Result<(), tessel::Error> {
    let cli = Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);

    let scene = Scene::new(cli.ball_radius, cli.ball_divisions)?;
    tracing::debug!(
        color = ?scene.light.color,
        direction = ?scene.light.direction,
        ball_normals = scene.ball_normals.len(),
        "scene lighting"
    );

    let strike = Strike::default();
    tracing::info!(
        ball_start = strike.ball_start(),
        end = strike.end(),
        "sampling strike"
    );
    for frame in strike.frames(cli.steps) {
        let ball = scene
            .ball
            .bounds()
            .map(|b| b.center().z + frame.ball_z)
            .unwrap_or(frame.ball_z);
        println!(
            "t={:5.2}s  cue_z={:6.3}  ball_z={:6.3}",
            frame.time, frame.cue_z, ball
        );
    }
    Ok(())
}
