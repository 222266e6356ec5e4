//! Camera presets

use glam::{Mat4, Vec3};

/// Eye position, look-at target and up vector
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraConfig {
    pub eye: Vec3,
    pub center: Vec3,
    pub up: Vec3,
}

impl CameraConfig {
    pub const fn new(eye: Vec3, center: Vec3) -> Self {
        Self {
            eye,
            center,
            up: Vec3::Y,
        }
    }

    /// Right-handed look-at view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.center, self.up)
    }
}

/// Three-quarter view shown before any camera mode has been applied
pub const STARTUP_CAMERA: CameraConfig =
    CameraConfig::new(Vec3::new(3.0, 0.6, 1.2), Vec3::ZERO);

/// Selectable camera presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CameraMode {
    /// Looking at the swimmer's right side along -X
    #[default]
    Side,
    /// Slightly above and behind, looking down the body
    OverShoulder,
    /// Head-on from the front
    Front,
}

impl CameraMode {
    pub const ALL: [Self; 3] = [Self::Side, Self::OverShoulder, Self::Front];

    /// Map a 1-based mode number to a preset; unknown numbers give the front view
    ///
    /// Pure: callers that want to report an unknown mode check [`CameraMode::is_known`].
    pub fn from_index(mode: u32) -> Self {
        match mode {
            1 => Self::Side,
            2 => Self::OverShoulder,
            _ => Self::Front,
        }
    }

    /// Whether a mode number names a preset rather than the fallback
    pub fn is_known(mode: u32) -> bool {
        (1..=3).contains(&mode)
    }

    /// 1-based mode number
    pub fn index(self) -> u32 {
        match self {
            Self::Side => 1,
            Self::OverShoulder => 2,
            Self::Front => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Side => "side",
            Self::OverShoulder => "over-the-shoulder",
            Self::Front => "front",
        }
    }

    pub fn config(self) -> CameraConfig {
        match self {
            Self::Side => CameraConfig::new(Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO),
            Self::OverShoulder => {
                CameraConfig::new(Vec3::new(0.5, 1.5, 3.0), Vec3::new(0.0, 0.1, 0.0))
            }
            Self::Front => CameraConfig::new(Vec3::new(0.0, 0.5, -3.2), Vec3::ZERO),
        }
    }
}

impl std::fmt::Display for CameraMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Eye/center/up for a 1-based mode number
pub fn select_camera(mode: u32) -> CameraConfig {
    CameraMode::from_index(mode).config()
}
