//! Viewer configuration loaded from YAML

use std::fs;
use std::path::{Path, PathBuf};

use cubeman_anim::{
    CameraMode, DEFAULT_CYCLE_SECONDS, Dimensions, DriverSettings, Perspective, Rig, SwimClip,
    Viewport,
};
use cubeman_mesh::SphereParams;
use cubeman_mesh::sphere::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error(transparent)]
    Anim(#[from] cubeman_anim::AnimError),

    #[error(transparent)]
    Mesh(#[from] cubeman_mesh::MeshError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Everything the viewer can be tuned with; missing keys keep their defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Seconds per swim cycle
    pub cycle_seconds: f32,
    /// Playback speed multiplier
    pub speed: f32,
    /// Initial camera mode (1 side, 2 over-the-shoulder, 3 front)
    pub camera: u32,
    pub width: u32,
    pub height: u32,
    /// Vertical field of view in degrees
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
    pub sphere_longitude: u32,
    pub sphere_latitude: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let perspective = Perspective::default();
        let viewport = Viewport::default();
        Self {
            cycle_seconds: DEFAULT_CYCLE_SECONDS,
            speed: 1.0,
            camera: CameraMode::Side.index(),
            width: viewport.width,
            height: viewport.height,
            fov_y_deg: perspective.fov_y_deg,
            near: perspective.near,
            far: perspective.far,
            sphere_longitude: DEFAULT_LONGITUDE,
            sphere_latitude: DEFAULT_LATITUDE,
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&text)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load a file when given, otherwise fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=3).contains(&self.camera) {
            return Err(ConfigError::Invalid(format!(
                "camera must be 1, 2 or 3, got {}",
                self.camera
            )));
        }
        if !(self.fov_y_deg > 0.0 && self.fov_y_deg < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "fov_y_deg must be between 0 and 180, got {}",
                self.fov_y_deg
            )));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(ConfigError::Invalid(format!(
                "clip planes must satisfy 0 < near < far, got {} / {}",
                self.near, self.far
            )));
        }
        self.clip()?;
        self.sphere()?;
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(cubeman_anim::AnimError::InvalidSpeed(self.speed).into());
        }
        Ok(())
    }

    pub fn clip(&self) -> Result<SwimClip> {
        Ok(SwimClip::freestyle().with_cycle_seconds(self.cycle_seconds)?)
    }

    pub fn rig(&self) -> Result<Rig> {
        Ok(Rig::new(self.clip()?, Dimensions::default()))
    }

    pub fn sphere(&self) -> Result<SphereParams> {
        Ok(SphereParams::new(
            self.sphere_longitude,
            self.sphere_latitude,
        )?)
    }

    pub fn driver_settings(&self) -> Result<DriverSettings> {
        Ok(DriverSettings {
            camera_mode: CameraMode::from_index(self.camera),
            speed: self.speed,
            viewport: Viewport::new(self.width, self.height),
            perspective: Perspective {
                fov_y_deg: self.fov_y_deg,
                near: self.near,
                far: self.far,
            },
            sphere: self.sphere()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_viewer() {
        let config = ViewerConfig::default();
        assert_eq!(config.cycle_seconds, 2.0);
        assert_eq!((config.width, config.height), (512, 512));
        assert_eq!(config.fov_y_deg, 65.0);
        assert_eq!((config.near, config.far), (0.1, 100.0));
        assert_eq!(config.camera, 1);
        assert_eq!(
            (config.sphere_longitude, config.sphere_latitude),
            (24, 12)
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ViewerConfig::from_yaml("cycle_seconds: 4.0\ncamera: 3\n").unwrap();
        assert_eq!(config.cycle_seconds, 4.0);
        assert_eq!(config.camera, 3);
        assert_eq!(config.width, 512);

        let settings = config.driver_settings().unwrap();
        assert_eq!(settings.camera_mode, CameraMode::Front);
        assert_eq!(config.rig().unwrap().clip().cycle_seconds(), 4.0);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            ViewerConfig::from_yaml("cycle_seconds: 0.0"),
            Err(ConfigError::Anim(_))
        ));
        assert!(matches!(
            ViewerConfig::from_yaml("sphere_latitude: 0"),
            Err(ConfigError::Mesh(_))
        ));
        assert!(matches!(
            ViewerConfig::from_yaml("camera: 7"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ViewerConfig::from_yaml("near: 5.0\nfar: 1.0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            ViewerConfig::from_yaml("speed: -1.0"),
            Err(ConfigError::Anim(_))
        ));
        assert!(matches!(
            ViewerConfig::from_yaml("width: [1, 2]"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = ViewerConfig::load(Path::new("/nonexistent/cubeman.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/cubeman.yaml"));
    }
}
