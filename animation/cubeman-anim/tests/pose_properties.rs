//! Property tests for keyframe sampling and pose evaluation

use cubeman_anim::{Joint, JointTrack, Pose, Rig, SEGMENTS, SwimClip, sample};
use proptest::prelude::*;

fn track_strategy() -> impl Strategy<Value = JointTrack> {
    prop::array::uniform7(-720.0f32..720.0).prop_map(JointTrack::new)
}

fn pose_strategy() -> impl Strategy<Value = Pose> {
    (
        prop::array::uniform8(-720.0f32..720.0),
        -1.0f32..1.0,
    )
        .prop_map(|(angles, bob_y)| Pose {
            shoulder_r: angles[0],
            shoulder_l: angles[1],
            elbow_r: angles[2],
            elbow_l: angles[3],
            hip_r: angles[4],
            hip_l: angles[5],
            knee_r: angles[6],
            knee_l: angles[7],
            bob_y,
        })
}

proptest! {
    #[test]
    fn sample_at_zero_is_first_sample(track in track_strategy()) {
        prop_assert_eq!(sample(&track, 0.0), track.samples()[0]);
    }

    #[test]
    fn sample_is_piecewise_linear(track in track_strategy(), phase in 0.0f32..1.0) {
        let seg = phase * SEGMENTS as f32;
        let i = (seg.floor() as usize).min(SEGMENTS - 1);
        let u = seg - i as f32;
        let a = track.samples()[i];
        let b = track.samples()[i + 1];

        let value = sample(&track, phase);
        prop_assert!((value - (a + (b - a) * u)).abs() < 1e-2);
        // Within a segment the value stays between its end samples
        prop_assert!(value >= a.min(b) - 1e-3 && value <= a.max(b) + 1e-3);
    }

    #[test]
    fn sample_is_continuous_at_breakpoints(track in track_strategy(), k in 1usize..SEGMENTS) {
        let at = k as f32 / SEGMENTS as f32;
        let before = sample(&track, at - 1e-6);
        let after = sample(&track, at);
        prop_assert!((after - before).abs() < 0.05, "jump of {} at {}", after - before, at);
        prop_assert!((after - track.samples()[k]).abs() < 1e-2);
    }

    #[test]
    fn joint_values_repeat_every_cycle(t in 0.0f64..100.0, n in 0u32..50) {
        let clip = SwimClip::freestyle();
        let shifted = t + f64::from(n) * f64::from(clip.cycle_seconds());

        let a = clip.pose_at(t);
        let b = clip.pose_at(shifted);
        for ((joint, x), (_, y)) in a.iter().zip(b.iter()) {
            prop_assert!((x - y).abs() < 1e-2, "{}: {} vs {}", joint.name(), x, y);
        }
    }

    #[test]
    fn right_shoulder_never_reverses(p in 0.0f32..1.0, q in 0.0f32..1.0) {
        let track = SwimClip::freestyle();
        let track = track.track(Joint::ShoulderR);
        let (lo, hi) = if p <= q { (p, q) } else { (q, p) };
        prop_assert!(sample(track, lo) >= sample(track, hi) - 1e-3);
    }

    #[test]
    fn bob_offset_moves_every_part_rigidly(pose in pose_strategy(), dy in -1.0f32..1.0) {
        let rig = Rig::cubeman();
        let lifted = Pose { bob_y: pose.bob_y + dy, ..pose };

        let before = rig.evaluate(&pose);
        let after = rig.evaluate(&lifted);
        for (a, b) in before.iter().zip(after.iter()) {
            let delta = b.center() - a.center();
            prop_assert!((delta.y - dy).abs() < 1e-4, "{}: dy {} vs {}", a.part, delta.y, dy);
            prop_assert!(delta.x.abs() < 1e-4);
            prop_assert!(delta.z.abs() < 1e-4);
        }
    }

    #[test]
    fn negative_time_wraps_into_cycle(t in -1000.0f64..0.0) {
        let phase = SwimClip::freestyle().phase_at(t);
        prop_assert!((0.0..1.0).contains(&phase));
    }
}

#[test]
fn scenario_two_second_cycle() {
    let rig = Rig::cubeman();

    let start = rig.pose_at(0.0);
    assert_eq!(start.shoulder_r, 360.0);
    assert_eq!(start.shoulder_l, 225.0);
    assert_eq!(start.bob_y, 0.04);

    let half = rig.pose_at(1.0);
    assert_eq!(half.shoulder_r, 225.0);
}

#[test]
fn wrap_tracks_are_preserved() {
    let clip = SwimClip::freestyle();
    assert_eq!(clip.track(Joint::ShoulderR).wrap_offset(), -360.0);
    assert_eq!(clip.track(Joint::ShoulderL).wrap_offset(), -360.0);
    assert_eq!(clip.track(Joint::ElbowR).wrap_offset(), 360.0);
    assert_eq!(clip.track(Joint::ElbowL).wrap_offset(), 360.0);
    for joint in [
        Joint::HipR,
        Joint::HipL,
        Joint::KneeR,
        Joint::KneeL,
        Joint::TorsoBob,
    ] {
        assert!(clip.track(joint).is_periodic(), "{}", joint.name());
    }

    // Just before the wrap the right shoulder is nearly back at 0, not 360
    let late = clip.pose_at_phase(0.9999);
    assert!(late.shoulder_r < 1.0);
}
