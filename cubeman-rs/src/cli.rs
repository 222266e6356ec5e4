//! Root CLI structure for cubeman-rs

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{camera, export, mesh, pose, simulate};

#[derive(Parser)]
#[command(name = "cubeman-rs")]
#[command(about = "Drive the swimming cubeman from the command line", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// YAML viewer configuration (cycle, speed, camera, viewport, projection)
    #[arg(long, global = true, env = "CUBEMAN_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show joint values and part positions at a time
    Pose(pose::PoseArgs),

    /// Show camera presets
    Camera(camera::CameraArgs),

    /// Show statistics for a generated primitive
    Mesh(mesh::MeshArgs),

    /// Run the frame loop headlessly against a stepped clock
    Simulate(simulate::SimulateArgs),

    /// Bake the posed cubeman into a Wavefront OBJ file
    ExportObj(export::ExportArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
