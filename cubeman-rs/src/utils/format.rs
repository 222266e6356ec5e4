//! Formatting utilities

use glam::Vec3;
use humansize::{DECIMAL, format_size};

/// Format file size in human-readable format
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, DECIMAL)
}

/// Format a vector as `(x, y, z)` with three decimals
pub fn format_vec3(v: Vec3) -> String {
    format!("({:.3}, {:.3}, {:.3})", v.x, v.y, v.z)
}

/// Format a joint value: angles in degrees, offsets in world units
pub fn format_joint_value(value: f32, is_angle: bool) -> String {
    if is_angle {
        format!("{value:.2}°")
    } else {
        format!("{value:.4}")
    }
}

/// Format simulated time
pub fn format_seconds(seconds: f64) -> String {
    format!("{seconds:.3}s")
}
