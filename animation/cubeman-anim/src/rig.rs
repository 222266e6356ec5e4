//! Rigid-part hierarchy and pose evaluation
//!
//! The cubeman is a tree of ten rigid parts rooted at the torso. Every part's
//! world transform is composed from the prone base transform down through its
//! limb chain:
//!
//! ```text
//! base = T(0, bob, 0) * Rx(-90)
//! upper = base * T(pivot) * Rx(root) * T(0, -drop * upper.y, 0) * S(upper)
//! lower = base * T(pivot) * Rx(root) * T(0, -upper.y, 0) * Rx(joint)
//!              * T(0, -drop * lower.y, 0) * S(lower)
//! ```
//!
//! All limb rotations are about X, keeping the stroke in the sagittal plane.

use cubeman_mesh::PrimitiveKind;
use glam::{Mat4, Vec3};
use log::trace;

use crate::clip::SwimClip;
use crate::pose::Pose;
use crate::transform::{origin, rotate_x_deg, scale, translate};

/// Number of rigid parts drawn per frame
pub const PART_COUNT: usize = 10;

/// Rotation about X that lays the upright body face down
pub const PRONE_ANGLE_DEG: f32 = -90.0;

// Pivot placement as fractions of the torso extents
const SHOULDER_X: f32 = 0.67;
const SHOULDER_Y: f32 = 0.55;
const HIP_X: f32 = 0.33;
const HIP_Y: f32 = -0.55;

// Drop from a joint to the center of the segment below it, as a fraction of
// the segment length
const UPPER_ARM_DROP: f32 = 0.55;
const FOREARM_DROP: f32 = 0.55;
const UPPER_LEG_DROP: f32 = 0.5;
// The left lower leg sits slightly lower than the right in the tuned model
const LOWER_LEG_DROP_R: f32 = 0.55;
const LOWER_LEG_DROP_L: f32 = 0.56;

/// Body side of a limb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Right,
    Left,
}

impl Side {
    /// Sign of the pivot's X offset: right is +X
    pub fn sign(self) -> f32 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }
}

/// Rigid body segments, in draw order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartId {
    Torso,
    Head,
    UpperArmR,
    ForearmR,
    UpperArmL,
    ForearmL,
    UpperLegR,
    LowerLegR,
    UpperLegL,
    LowerLegL,
}

impl PartId {
    /// All parts in draw order
    pub const ALL: [Self; PART_COUNT] = [
        Self::Torso,
        Self::Head,
        Self::UpperArmR,
        Self::ForearmR,
        Self::UpperArmL,
        Self::ForearmL,
        Self::UpperLegR,
        Self::LowerLegR,
        Self::UpperLegL,
        Self::LowerLegL,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Torso => "torso",
            Self::Head => "head",
            Self::UpperArmR => "upper_arm_r",
            Self::ForearmR => "forearm_r",
            Self::UpperArmL => "upper_arm_l",
            Self::ForearmL => "forearm_l",
            Self::UpperLegR => "upper_leg_r",
            Self::LowerLegR => "lower_leg_r",
            Self::UpperLegL => "upper_leg_l",
            Self::LowerLegL => "lower_leg_l",
        }
    }

    /// Parent in the hierarchy, `None` for the torso
    pub fn parent(self) -> Option<Self> {
        match self {
            Self::Torso => None,
            Self::Head | Self::UpperArmR | Self::UpperArmL | Self::UpperLegR | Self::UpperLegL => {
                Some(Self::Torso)
            }
            Self::ForearmR => Some(Self::UpperArmR),
            Self::ForearmL => Some(Self::UpperArmL),
            Self::LowerLegR => Some(Self::UpperLegR),
            Self::LowerLegL => Some(Self::UpperLegL),
        }
    }

    /// Primitive drawn for this part
    pub fn primitive(self) -> PrimitiveKind {
        match self {
            Self::Head => PrimitiveKind::Sphere,
            _ => PrimitiveKind::Cube,
        }
    }

    pub fn side(self) -> Option<Side> {
        match self {
            Self::Torso | Self::Head => None,
            Self::UpperArmR | Self::ForearmR | Self::UpperLegR | Self::LowerLegR => {
                Some(Side::Right)
            }
            Self::UpperArmL | Self::ForearmL | Self::UpperLegL | Self::LowerLegL => {
                Some(Side::Left)
            }
        }
    }
}

impl std::fmt::Display for PartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Extents of every part, in unit-cube scale space
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub torso: Vec3,
    pub head: Vec3,
    pub upper_arm: Vec3,
    pub forearm: Vec3,
    pub upper_leg: Vec3,
    pub lower_leg: Vec3,
}

impl Dimensions {
    /// Scale applied to a part's unit primitive
    pub fn extents(&self, part: PartId) -> Vec3 {
        match part {
            PartId::Torso => self.torso,
            PartId::Head => self.head,
            PartId::UpperArmR | PartId::UpperArmL => self.upper_arm,
            PartId::ForearmR | PartId::ForearmL => self.forearm,
            PartId::UpperLegR | PartId::UpperLegL => self.upper_leg,
            PartId::LowerLegR | PartId::LowerLegL => self.lower_leg,
        }
    }

    /// Shoulder pivot in torso space
    pub fn shoulder_pivot(&self, side: Side) -> Vec3 {
        Vec3::new(
            side.sign() * self.torso.x * SHOULDER_X,
            self.torso.y * SHOULDER_Y,
            0.0,
        )
    }

    /// Hip pivot in torso space
    pub fn hip_pivot(&self, side: Side) -> Vec3 {
        Vec3::new(side.sign() * self.torso.x * HIP_X, self.torso.y * HIP_Y, 0.0)
    }

    /// Head center in torso space
    pub fn neck_offset(&self) -> Vec3 {
        Vec3::new(0.0, self.torso.y * 0.5 + self.head.y * 0.5, 0.0)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            torso: Vec3::new(0.7, 1.0, 0.3),
            head: Vec3::new(0.3, 0.3, 0.3),
            upper_arm: Vec3::new(0.2, 0.5, 0.2),
            forearm: Vec3::new(0.2, 0.6, 0.2),
            upper_leg: Vec3::new(0.2, 0.8, 0.2),
            lower_leg: Vec3::new(0.2, 0.8, 0.2),
        }
    }
}

/// World transform of one part, ready to hand to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartTransform {
    pub part: PartId,
    pub kind: PrimitiveKind,
    pub transform: Mat4,
}

impl PartTransform {
    /// World-space center of the part
    pub fn center(&self) -> Vec3 {
        origin(&self.transform)
    }
}

/// Unscaled frames of a two-segment limb
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimbFrames {
    /// Frame at the root pivot (shoulder or hip) after its rotation
    pub root: Mat4,
    /// Frame at the middle joint (elbow or knee) after its rotation
    pub joint: Mat4,
}

/// Unscaled joint frames for a whole pose
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointFrames {
    pub base: Mat4,
    pub arm_r: LimbFrames,
    pub arm_l: LimbFrames,
    pub leg_r: LimbFrames,
    pub leg_l: LimbFrames,
}

struct LimbChain {
    pivot: Vec3,
    root_angle: f32,
    upper: Vec3,
    upper_drop: f32,
    joint_angle: f32,
    lower: Vec3,
    lower_drop: f32,
}

impl LimbChain {
    fn frames(&self, base: Mat4) -> LimbFrames {
        let root = rotate_x_deg(translate(base, self.pivot), self.root_angle);
        let joint = rotate_x_deg(
            translate(root, Vec3::new(0.0, -self.upper.y, 0.0)),
            self.joint_angle,
        );
        LimbFrames { root, joint }
    }

    fn part_transforms(&self, base: Mat4) -> (Mat4, Mat4) {
        let frames = self.frames(base);
        let upper = scale(
            translate(
                frames.root,
                Vec3::new(0.0, -self.upper.y * self.upper_drop, 0.0),
            ),
            self.upper,
        );
        let lower = scale(
            translate(
                frames.joint,
                Vec3::new(0.0, -self.lower.y * self.lower_drop, 0.0),
            ),
            self.lower,
        );
        (upper, lower)
    }
}

/// Swim clip plus body dimensions: everything needed to pose the cubeman
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rig {
    clip: SwimClip,
    dimensions: Dimensions,
}

impl Rig {
    pub fn new(clip: SwimClip, dimensions: Dimensions) -> Self {
        Self { clip, dimensions }
    }

    /// The freestyle swimmer with default proportions
    pub fn cubeman() -> Self {
        Self::default()
    }

    pub fn clip(&self) -> &SwimClip {
        &self.clip
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Joint values at a time in seconds
    pub fn pose_at(&self, time_seconds: f64) -> Pose {
        self.clip.pose_at(time_seconds)
    }

    /// World transforms of all parts at a time in seconds
    pub fn evaluate_pose(&self, time_seconds: f64) -> [PartTransform; PART_COUNT] {
        let phase = self.clip.phase_at(time_seconds);
        trace!("Evaluating pose at t={time_seconds:.3}s (phase {phase:.4})");
        self.evaluate(&self.clip.pose_at_phase(phase))
    }

    /// Prone base transform all parts compose against
    pub fn base_transform(pose: &Pose) -> Mat4 {
        rotate_x_deg(
            translate(Mat4::IDENTITY, Vec3::new(0.0, pose.bob_y, 0.0)),
            PRONE_ANGLE_DEG,
        )
    }

    /// Unscaled joint frames for a pose
    pub fn joint_frames(&self, pose: &Pose) -> JointFrames {
        let base = Self::base_transform(pose);
        JointFrames {
            base,
            arm_r: self.arm(pose, Side::Right).frames(base),
            arm_l: self.arm(pose, Side::Left).frames(base),
            leg_r: self.leg(pose, Side::Right).frames(base),
            leg_l: self.leg(pose, Side::Left).frames(base),
        }
    }

    /// World transforms of all parts for an explicit pose, in draw order
    pub fn evaluate(&self, pose: &Pose) -> [PartTransform; PART_COUNT] {
        let dims = &self.dimensions;
        let base = Self::base_transform(pose);

        let torso = scale(base, dims.torso);
        let head = scale(translate(base, dims.neck_offset()), dims.head);
        let (upper_arm_r, forearm_r) = self.arm(pose, Side::Right).part_transforms(base);
        let (upper_arm_l, forearm_l) = self.arm(pose, Side::Left).part_transforms(base);
        let (upper_leg_r, lower_leg_r) = self.leg(pose, Side::Right).part_transforms(base);
        let (upper_leg_l, lower_leg_l) = self.leg(pose, Side::Left).part_transforms(base);

        let transforms = [
            torso,
            head,
            upper_arm_r,
            forearm_r,
            upper_arm_l,
            forearm_l,
            upper_leg_r,
            lower_leg_r,
            upper_leg_l,
            lower_leg_l,
        ];

        std::array::from_fn(|i| {
            let part = PartId::ALL[i];
            PartTransform {
                part,
                kind: part.primitive(),
                transform: transforms[i],
            }
        })
    }

    fn arm(&self, pose: &Pose, side: Side) -> LimbChain {
        let (root_angle, joint_angle) = match side {
            Side::Right => (pose.shoulder_r, pose.elbow_r),
            Side::Left => (pose.shoulder_l, pose.elbow_l),
        };
        LimbChain {
            pivot: self.dimensions.shoulder_pivot(side),
            root_angle,
            upper: self.dimensions.upper_arm,
            upper_drop: UPPER_ARM_DROP,
            joint_angle,
            lower: self.dimensions.forearm,
            lower_drop: FOREARM_DROP,
        }
    }

    fn leg(&self, pose: &Pose, side: Side) -> LimbChain {
        let (root_angle, joint_angle, lower_drop) = match side {
            Side::Right => (pose.hip_r, pose.knee_r, LOWER_LEG_DROP_R),
            Side::Left => (pose.hip_l, pose.knee_l, LOWER_LEG_DROP_L),
        };
        LimbChain {
            pivot: self.dimensions.hip_pivot(side),
            root_angle,
            upper: self.dimensions.upper_leg,
            upper_drop: UPPER_LEG_DROP,
            joint_angle,
            lower: self.dimensions.lower_leg,
            lower_drop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat3;
    use pretty_assertions::assert_eq;

    const EPS: f32 = 1e-5;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn test_part_table() {
        assert_eq!(PartId::ALL.len(), PART_COUNT);
        assert_eq!(PartId::Head.primitive(), PrimitiveKind::Sphere);
        let cubes = PartId::ALL
            .iter()
            .filter(|p| p.primitive() == PrimitiveKind::Cube)
            .count();
        assert_eq!(cubes, 9);

        assert_eq!(PartId::Torso.parent(), None);
        assert_eq!(PartId::ForearmL.parent(), Some(PartId::UpperArmL));
        assert_eq!(PartId::LowerLegR.parent(), Some(PartId::UpperLegR));
        assert_eq!(PartId::LowerLegR.side(), Some(Side::Right));
        assert_eq!(PartId::Head.side(), None);
    }

    #[test]
    fn test_pivots() {
        let dims = Dimensions::default();
        assert!(approx(
            dims.shoulder_pivot(Side::Right),
            Vec3::new(0.469, 0.55, 0.0)
        ));
        assert!(approx(
            dims.shoulder_pivot(Side::Left),
            Vec3::new(-0.469, 0.55, 0.0)
        ));
        assert!(approx(dims.hip_pivot(Side::Right), Vec3::new(0.231, -0.55, 0.0)));
        assert!(approx(dims.hip_pivot(Side::Left), Vec3::new(-0.231, -0.55, 0.0)));
        assert!(approx(dims.neck_offset(), Vec3::new(0.0, 0.65, 0.0)));
    }

    #[test]
    fn test_base_lies_prone() {
        let pose = Pose {
            bob_y: 0.04,
            ..Pose::default()
        };
        let base = Rig::base_transform(&pose);

        // Torso +Y (head direction) points along world -Z
        let up = base.transform_vector3(Vec3::Y);
        assert!(approx(up, Vec3::NEG_Z));
        assert!(approx(origin(&base), Vec3::new(0.0, 0.04, 0.0)));
    }

    #[test]
    fn test_evaluate_order_and_kinds() {
        let parts = Rig::cubeman().evaluate_pose(0.0);
        for (transform, part) in parts.iter().zip(PartId::ALL) {
            assert_eq!(transform.part, part);
            assert_eq!(transform.kind, part.primitive());
        }
    }

    #[test]
    fn test_torso_and_head_at_start() {
        let parts = Rig::cubeman().evaluate_pose(0.0);

        let torso = parts[0].transform;
        assert!(approx(origin(&torso), Vec3::new(0.0, 0.04, 0.0)));
        // Torso height (1.0) now runs along -Z, depth (0.3) along +Y
        assert!(approx(torso.transform_vector3(Vec3::Y), Vec3::new(0.0, 0.0, -1.0)));
        assert!(approx(torso.transform_vector3(Vec3::Z), Vec3::new(0.0, 0.3, 0.0)));

        // Head sits 0.65 ahead of the torso center
        assert!(approx(parts[1].center(), Vec3::new(0.0, 0.04, -0.65)));
    }

    #[test]
    fn test_upper_arm_at_full_turn_hangs_from_shoulder() {
        // shoulder_r = 360 at t = 0: the arm hangs straight along torso -Y
        let parts = Rig::cubeman().evaluate_pose(0.0);
        let upper_arm_r = parts[2].center();

        // torso (x, y, z) maps to world (x, bob + z, -y)
        let expected = Vec3::new(0.469, 0.04, -(0.55 - 0.5 * 0.55));
        assert!(
            approx(upper_arm_r, expected),
            "expected {expected}, got {upper_arm_r}"
        );
    }

    #[test]
    fn test_lower_leg_drop_asymmetry() {
        // Identical joint angles on both sides isolate the drop constants
        let pose = Pose::default();
        let parts = Rig::cubeman().evaluate(&pose);
        let right = parts[7].center();
        let left = parts[9].center();

        assert!((right.x + left.x).abs() < EPS);
        // Lower legs extend along torso -Y, which is world +Z
        let difference = left.z - right.z;
        assert!((difference - 0.01 * 0.8).abs() < EPS, "got {difference}");
    }

    #[test]
    fn test_joint_frames_match_part_chain() {
        let rig = Rig::cubeman();
        let pose = rig.pose_at(0.7);
        let frames = rig.joint_frames(&pose);
        let parts = rig.evaluate(&pose);

        // Forearm center is the elbow frame dropped by 0.55 of its length
        let expected = frames
            .arm_r
            .joint
            .transform_point3(Vec3::new(0.0, -0.6 * 0.55, 0.0));
        assert!(approx(parts[3].center(), expected));

        // Elbow sits one upper-arm length below the shoulder frame
        let elbow = origin(&frames.arm_l.joint);
        let expected = frames.arm_l.root.transform_point3(Vec3::new(0.0, -0.5, 0.0));
        assert!(approx(elbow, expected));
    }

    #[test]
    fn test_bob_shift_moves_every_part() {
        let rig = Rig::cubeman();
        let pose = rig.pose_at(0.3);
        let lifted = Pose {
            bob_y: pose.bob_y + 0.25,
            ..pose
        };

        let a = rig.evaluate(&pose);
        let b = rig.evaluate(&lifted);
        for (before, after) in a.iter().zip(b.iter()) {
            let delta = after.center() - before.center();
            assert!(
                approx(delta, Vec3::new(0.0, 0.25, 0.0)),
                "{}: {delta}",
                before.part
            );
            assert!(
                Mat3::from_mat4(after.transform)
                    .abs_diff_eq(Mat3::from_mat4(before.transform), EPS)
            );
        }
    }
}
