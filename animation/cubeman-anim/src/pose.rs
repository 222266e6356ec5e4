//! Joint values sampled from a clip at one phase

/// Current joint values of the cubeman
///
/// Angles are in degrees about the X axis; `bob_y` is the torso's vertical
/// offset in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub shoulder_r: f32,
    pub shoulder_l: f32,
    pub elbow_r: f32,
    pub elbow_l: f32,
    pub hip_r: f32,
    pub hip_l: f32,
    pub knee_r: f32,
    pub knee_l: f32,
    pub bob_y: f32,
}

/// Joint identifiers, one per clip track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Joint {
    ShoulderR,
    ShoulderL,
    ElbowR,
    ElbowL,
    HipR,
    HipL,
    KneeR,
    KneeL,
    TorsoBob,
}

impl Joint {
    /// All joints in track order
    pub const ALL: [Self; 9] = [
        Self::ShoulderR,
        Self::ShoulderL,
        Self::ElbowR,
        Self::ElbowL,
        Self::HipR,
        Self::HipL,
        Self::KneeR,
        Self::KneeL,
        Self::TorsoBob,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::ShoulderR => "shoulder_r",
            Self::ShoulderL => "shoulder_l",
            Self::ElbowR => "elbow_r",
            Self::ElbowL => "elbow_l",
            Self::HipR => "hip_r",
            Self::HipL => "hip_l",
            Self::KneeR => "knee_r",
            Self::KneeL => "knee_l",
            Self::TorsoBob => "torso_bob_y",
        }
    }

    /// Whether the joint value is an angle in degrees (the bob is a distance)
    pub fn is_angle(self) -> bool {
        !matches!(self, Self::TorsoBob)
    }
}

impl Pose {
    /// Value of a single joint
    pub fn get(&self, joint: Joint) -> f32 {
        match joint {
            Joint::ShoulderR => self.shoulder_r,
            Joint::ShoulderL => self.shoulder_l,
            Joint::ElbowR => self.elbow_r,
            Joint::ElbowL => self.elbow_l,
            Joint::HipR => self.hip_r,
            Joint::HipL => self.hip_l,
            Joint::KneeR => self.knee_r,
            Joint::KneeL => self.knee_l,
            Joint::TorsoBob => self.bob_y,
        }
    }

    /// Set a single joint
    pub fn set(&mut self, joint: Joint, value: f32) {
        let slot = match joint {
            Joint::ShoulderR => &mut self.shoulder_r,
            Joint::ShoulderL => &mut self.shoulder_l,
            Joint::ElbowR => &mut self.elbow_r,
            Joint::ElbowL => &mut self.elbow_l,
            Joint::HipR => &mut self.hip_r,
            Joint::HipL => &mut self.hip_l,
            Joint::KneeR => &mut self.knee_r,
            Joint::KneeL => &mut self.knee_l,
            Joint::TorsoBob => &mut self.bob_y,
        };
        *slot = value;
    }

    /// Iterate over `(joint, value)` pairs in track order
    pub fn iter(&self) -> impl Iterator<Item = (Joint, f32)> + '_ {
        Joint::ALL.iter().map(move |&joint| (joint, self.get(joint)))
    }
}
