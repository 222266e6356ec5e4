//! Command implementations

pub mod camera;
pub mod export;
pub mod mesh;
pub mod pose;
pub mod simulate;

/// Output format shared by the reporting commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
