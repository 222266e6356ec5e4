//! Playback state carried from frame to frame

use log::info;

use crate::camera::CameraMode;
use crate::error::{AnimError, Result};

/// Accumulated simulated time in seconds
///
/// Only ever moves forward: negative deltas are floored to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationClock {
    seconds: f64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary time; negative times start at zero
    pub fn starting_at(seconds: f64) -> Self {
        Self {
            seconds: seconds.max(0.0),
        }
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Advance by a delta in seconds, ignoring negative or NaN deltas
    pub fn advance(&mut self, delta_seconds: f64) {
        if delta_seconds > 0.0 {
            self.seconds += delta_seconds;
        }
    }

    /// Advance by a wall-clock delta in milliseconds
    pub fn advance_ms(&mut self, delta_ms: u64) {
        self.advance(delta_ms as f64 * 0.001);
    }

    /// Reset the clock to the beginning of the cycle
    pub fn reset(&mut self) {
        self.seconds = 0.0;
    }
}

/// Everything the frame driver mutates between frames
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawAnimationState"))]
pub struct AnimationState {
    /// Simulated time
    pub clock: AnimationClock,
    /// Active camera preset
    pub camera_mode: CameraMode,
    /// Whether the clock is frozen
    pub paused: bool,
    /// Multiplier applied to wall-clock deltas
    speed: f32,
}

impl AnimationState {
    pub fn new(camera_mode: CameraMode) -> Self {
        Self {
            clock: AnimationClock::new(),
            camera_mode,
            paused: false,
            speed: 1.0,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Set the playback speed; must be finite and non-negative
    pub fn set_speed(&mut self, speed: f32) -> Result<()> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(AnimError::InvalidSpeed(speed));
        }
        self.speed = speed;
        Ok(())
    }

    /// Apply one frame's wall-clock delta to the clock
    pub fn advance_ms(&mut self, delta_ms: u64) {
        if self.paused {
            return;
        }
        self.clock
            .advance(delta_ms as f64 * 0.001 * f64::from(self.speed));
    }

    /// Switch camera preset, returning whether it changed
    pub fn set_camera(&mut self, mode: CameraMode) -> bool {
        if self.camera_mode == mode {
            return false;
        }
        info!("Camera: {} -> {}", self.camera_mode, mode);
        self.camera_mode = mode;
        true
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        info!("Playback {}", if self.paused { "paused" } else { "resumed" });
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawAnimationState {
    clock: AnimationClock,
    camera_mode: CameraMode,
    paused: bool,
    speed: f32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawAnimationState> for AnimationState {
    type Error = AnimError;

    fn try_from(raw: RawAnimationState) -> Result<Self> {
        let mut state = Self::new(raw.camera_mode);
        state.set_speed(raw.speed)?;
        state.clock = AnimationClock::starting_at(raw.clock.seconds());
        state.paused = raw.paused;
        Ok(state)
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(CameraMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_floors_negative_deltas() {
        let mut clock = AnimationClock::new();
        clock.advance(0.5);
        clock.advance(-1.0);
        clock.advance(f64::NAN);
        assert_eq!(clock.seconds(), 0.5);

        clock.advance_ms(250);
        assert!((clock.seconds() - 0.75).abs() < 1e-12);

        clock.reset();
        assert_eq!(clock.seconds(), 0.0);
        assert_eq!(AnimationClock::starting_at(-3.0).seconds(), 0.0);
    }

    #[test]
    fn test_state_defaults() {
        let state = AnimationState::default();
        assert_eq!(state.camera_mode, CameraMode::Side);
        assert_eq!(state.clock.seconds(), 0.0);
        assert!(!state.paused);
        assert_eq!(state.speed(), 1.0);
    }

    #[test]
    fn test_pause_freezes_clock() {
        let mut state = AnimationState::default();
        state.advance_ms(100);
        state.toggle_pause();
        state.advance_ms(1000);
        assert!((state.clock.seconds() - 0.1).abs() < 1e-12);

        state.toggle_pause();
        state.advance_ms(100);
        assert!((state.clock.seconds() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_speed_scales_deltas() {
        let mut state = AnimationState::default();
        state.set_speed(2.0).unwrap();
        state.advance_ms(500);
        assert!((state.clock.seconds() - 1.0).abs() < 1e-12);

        assert_eq!(state.set_speed(-1.0), Err(AnimError::InvalidSpeed(-1.0)));
        assert!(state.set_speed(f32::INFINITY).is_err());
        assert_eq!(state.speed(), 2.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_checks_speed() {
        let json = r#"{"clock":{"seconds":1.5},"camera_mode":"front","paused":true,"speed":2.0}"#;
        let state: AnimationState = serde_json::from_str(json).unwrap();
        assert_eq!(state.speed(), 2.0);
        assert_eq!(state.camera_mode, CameraMode::Front);
        assert_eq!(state.clock.seconds(), 1.5);
        assert!(state.paused);

        let negative = r#"{"clock":{"seconds":0.0},"camera_mode":"side","paused":false,"speed":-1.0}"#;
        let err = serde_json::from_str::<AnimationState>(negative).unwrap_err();
        assert!(err.to_string().contains("Invalid playback speed"), "{err}");

        // Round trip through the checked path
        let text = serde_json::to_string(&state).unwrap();
        assert_eq!(serde_json::from_str::<AnimationState>(&text).unwrap(), state);
    }

    #[test]
    fn test_set_camera_reports_change() {
        let mut state = AnimationState::default();
        assert!(!state.set_camera(CameraMode::Side));
        assert!(state.set_camera(CameraMode::Front));
        assert_eq!(state.camera_mode, CameraMode::Front);
    }
}
