//! Skeletal animation for the swimming cubeman
//!
//! This crate turns a handful of keyframed joint curves into world transforms
//! for a ten-part rigid hierarchy, every frame:
//! - Joint tracks sampled by cycle phase with linear interpolation
//! - The freestyle swim clip (nine tracks, one shared cycle duration)
//! - Hierarchical composition from the prone torso down each limb
//! - Camera presets
//! - A frame driver advancing simulated time and issuing draw calls
//!
//! # Example
//!
//! ```rust
//! use cubeman_anim::{PartId, Rig, select_camera};
//!
//! let rig = Rig::cubeman();
//!
//! // Joint values one second into the 2 second cycle
//! let pose = rig.pose_at(1.0);
//! assert_eq!(pose.shoulder_r, 225.0);
//!
//! // World transforms for every part, in draw order
//! let parts = rig.evaluate_pose(1.0);
//! assert_eq!(parts[0].part, PartId::Torso);
//!
//! let view = select_camera(2).view_matrix();
//! # let _ = view;
//! ```

pub mod camera;
pub mod clip;
pub mod driver;
pub mod error;
pub mod pose;
pub mod rig;
pub mod state;
pub mod track;
pub mod transform;

pub use camera::{CameraConfig, CameraMode, STARTUP_CAMERA, select_camera};
pub use clip::{DEFAULT_CYCLE_SECONDS, SwimClip};
pub use driver::{
    DrawCall, DriverSettings, FrameClock, FrameDriver, KeyAction, ManualClock, Perspective,
    RecordingRenderer, Renderer, SystemClock, Viewport,
};
pub use error::{AnimError, Result};
pub use pose::{Joint, Pose};
pub use rig::{Dimensions, JointFrames, LimbFrames, PART_COUNT, PartId, PartTransform, Rig, Side};
pub use state::{AnimationClock, AnimationState};
pub use track::{JointTrack, SAMPLE_COUNT, SEGMENTS, sample};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
