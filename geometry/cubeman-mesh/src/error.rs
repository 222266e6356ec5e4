use std::io;
use thiserror::Error;

/// Error types for procedural mesh generation and export
#[derive(Error, Debug)]
pub enum MeshError {
    /// I/O error while writing an exported mesh
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A sphere needs at least one longitude and one latitude segment
    #[error("Invalid tessellation: {longitude} longitude x {latitude} latitude segments")]
    InvalidTessellation { longitude: u32, latitude: u32 },
}

/// Result type using MeshError
pub type Result<T> = std::result::Result<T, MeshError>;
