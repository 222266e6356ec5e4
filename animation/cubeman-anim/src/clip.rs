//! The freestyle swim cycle: nine joint tracks sharing one cycle duration

use crate::error::{AnimError, Result};
use crate::pose::{Joint, Pose};
use crate::track::JointTrack;

/// Default length of one stroke cycle in seconds
pub const DEFAULT_CYCLE_SECONDS: f32 = 2.0;

// Degrees. The right shoulder turns monotonically 360 -> 0 so the stroke never
// reverses; the left shoulder runs the same sweep phase-shifted.
const SHOULDER_R: JointTrack = JointTrack::new([360.0, 315.0, 270.0, 225.0, 180.0, 90.0, 0.0]);
const SHOULDER_L: JointTrack =
    JointTrack::new([225.0, 135.0, 45.0, 0.0, -45.0, -90.0, -135.0]);

// Elbow flex, aligned with the matching shoulder
const ELBOW_R: JointTrack = JointTrack::new([45.0, 180.0, 270.0, 345.0, 420.0, 360.0, 405.0]);
const ELBOW_L: JointTrack = JointTrack::new([30.0, 0.0, 15.0, 45.0, 180.0, 270.0, 390.0]);

// Flutter kick; knees follow with a different phase and amplitude
const HIP_R: JointTrack = JointTrack::new([5.0, 15.0, 30.0, 5.0, 15.0, 30.0, 5.0]);
const HIP_L: JointTrack = JointTrack::new([30.0, 20.0, 5.0, 30.0, 20.0, 5.0, 30.0]);
const KNEE_R: JointTrack = JointTrack::new([-20.0, 0.0, 0.0, -20.0, -0.0, 0.0, -20.0]);
const KNEE_L: JointTrack = JointTrack::new([0.0, 0.0, -20.0, 0.0, 0.0, -20.0, 0.0]);

// Torso bob along +Y, world units
const TORSO_BOB_Y: JointTrack = JointTrack::new([0.04, 0.02, 0.00, -0.02, -0.01, 0.02, 0.04]);

/// A looping set of joint tracks
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwimClip {
    /// Tracks in [`Joint::ALL`] order
    tracks: [JointTrack; 9],
    /// Length of one cycle in seconds
    cycle_seconds: f32,
}

impl SwimClip {
    /// Build a clip from tracks in [`Joint::ALL`] order
    pub fn new(tracks: [JointTrack; 9], cycle_seconds: f32) -> Result<Self> {
        validate_cycle(cycle_seconds)?;
        Ok(Self {
            tracks,
            cycle_seconds,
        })
    }

    /// The hand-tuned freestyle stroke with a 2 second cycle
    pub fn freestyle() -> Self {
        Self {
            tracks: [
                SHOULDER_R,
                SHOULDER_L,
                ELBOW_R,
                ELBOW_L,
                HIP_R,
                HIP_L,
                KNEE_R,
                KNEE_L,
                TORSO_BOB_Y,
            ],
            cycle_seconds: DEFAULT_CYCLE_SECONDS,
        }
    }

    /// Same tracks with a different cycle duration
    pub fn with_cycle_seconds(mut self, cycle_seconds: f32) -> Result<Self> {
        validate_cycle(cycle_seconds)?;
        self.cycle_seconds = cycle_seconds;
        Ok(self)
    }

    pub fn cycle_seconds(&self) -> f32 {
        self.cycle_seconds
    }

    /// Track driving a joint
    pub fn track(&self, joint: Joint) -> &JointTrack {
        &self.tracks[joint as usize]
    }

    /// Wrap a time in seconds into a cycle phase in `[0, 1)`
    ///
    /// Negative times wrap around rather than truncating toward zero.
    pub fn phase_at(&self, time_seconds: f64) -> f32 {
        let phase = (time_seconds / f64::from(self.cycle_seconds)).rem_euclid(1.0) as f32;
        // rem_euclid can land on 1.0 after rounding tiny negative inputs
        if phase >= 1.0 { 0.0 } else { phase }
    }

    /// Sample every track at a phase
    pub fn pose_at_phase(&self, phase: f32) -> Pose {
        let mut pose = Pose::default();
        for joint in Joint::ALL {
            pose.set(joint, self.track(joint).sample(phase));
        }
        pose
    }

    /// Sample every track at a time in seconds
    pub fn pose_at(&self, time_seconds: f64) -> Pose {
        self.pose_at_phase(self.phase_at(time_seconds))
    }
}

impl Default for SwimClip {
    fn default() -> Self {
        Self::freestyle()
    }
}

fn validate_cycle(cycle_seconds: f32) -> Result<()> {
    if cycle_seconds.is_finite() && cycle_seconds > 0.0 {
        Ok(())
    } else {
        Err(AnimError::InvalidCycleDuration(cycle_seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_track_order_matches_joints() {
        let clip = SwimClip::freestyle();
        assert_eq!(clip.track(Joint::ShoulderR).samples()[0], 360.0);
        assert_eq!(clip.track(Joint::ShoulderL).samples()[0], 225.0);
        assert_eq!(clip.track(Joint::ElbowR).samples()[4], 420.0);
        assert_eq!(clip.track(Joint::KneeL).samples()[2], -20.0);
        assert_eq!(clip.track(Joint::TorsoBob).samples()[0], 0.04);
    }

    #[test]
    fn test_pose_at_start() {
        let pose = SwimClip::freestyle().pose_at(0.0);
        assert_eq!(pose.shoulder_r, 360.0);
        assert_eq!(pose.shoulder_l, 225.0);
        assert_eq!(pose.elbow_r, 45.0);
        assert_eq!(pose.elbow_l, 30.0);
        assert_eq!(pose.hip_r, 5.0);
        assert_eq!(pose.hip_l, 30.0);
        assert_eq!(pose.knee_r, -20.0);
        assert_eq!(pose.knee_l, 0.0);
        assert_eq!(pose.bob_y, 0.04);
    }

    #[test]
    fn test_half_cycle() {
        let clip = SwimClip::freestyle();
        assert_eq!(clip.phase_at(1.0), 0.5);

        let pose = clip.pose_at(1.0);
        assert_eq!(pose.shoulder_r, 225.0);
        assert_eq!(pose.shoulder_l, 0.0);
    }

    #[test]
    fn test_phase_wraps_negative_time() {
        let clip = SwimClip::freestyle();
        assert!((clip.phase_at(-0.5) - 0.75).abs() < 1e-6);
        assert_eq!(clip.phase_at(-2.0), 0.0);
        assert_eq!(clip.phase_at(4.0), 0.0);

        let phase = clip.phase_at(-1e-12);
        assert!((0.0..1.0).contains(&phase));
    }

    #[test]
    fn test_cycle_validation() {
        assert_eq!(
            SwimClip::freestyle().with_cycle_seconds(0.0),
            Err(AnimError::InvalidCycleDuration(0.0))
        );
        assert!(SwimClip::freestyle().with_cycle_seconds(-1.0).is_err());
        assert!(SwimClip::freestyle().with_cycle_seconds(f32::NAN).is_err());
        assert!(SwimClip::freestyle().with_cycle_seconds(f32::INFINITY).is_err());

        let clip = SwimClip::freestyle().with_cycle_seconds(4.0).unwrap();
        assert_eq!(clip.phase_at(1.0), 0.25);
    }

    #[test]
    fn test_custom_clip() {
        let flat = JointTrack::new([1.0; 7]);
        let clip = SwimClip::new([flat; 9], 1.0).unwrap();
        let pose = clip.pose_at(0.3);
        for (_, value) in pose.iter() {
            assert!((value - 1.0).abs() < 1e-6);
        }
    }
}
