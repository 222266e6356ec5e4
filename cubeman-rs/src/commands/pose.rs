//! Pose inspection

use anyhow::{Context, Result};
use clap::Args;
use cubeman_anim::transform::origin;
use cubeman_anim::{Joint, PartId, Pose, Rig};
use cubeman_mesh::PrimitiveKind;
use glam::Vec3;
use serde::Serialize;

use super::OutputFormat;
use crate::config::ViewerConfig;
use crate::utils::{add_table_row, create_table, format_joint_value, format_seconds, format_vec3};

#[derive(Args, Debug)]
pub struct PoseArgs {
    /// Simulated time in seconds
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub time: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Also list the unscaled shoulder, elbow, hip and knee frames
    #[arg(short, long)]
    pub joints: bool,
}

#[derive(Debug, Serialize)]
struct PartReport {
    part: PartId,
    kind: PrimitiveKind,
    center: Vec3,
}

#[derive(Debug, Serialize)]
struct JointReport {
    name: &'static str,
    origin: Vec3,
}

#[derive(Debug, Serialize)]
struct PoseReport {
    time: f64,
    phase: f32,
    cycle_seconds: f32,
    pose: Pose,
    parts: Vec<PartReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    joints: Option<Vec<JointReport>>,
}

fn joint_report(rig: &Rig, pose: &Pose) -> Vec<JointReport> {
    let frames = rig.joint_frames(pose);
    [
        ("base", frames.base),
        ("shoulder_r", frames.arm_r.root),
        ("elbow_r", frames.arm_r.joint),
        ("shoulder_l", frames.arm_l.root),
        ("elbow_l", frames.arm_l.joint),
        ("hip_r", frames.leg_r.root),
        ("knee_r", frames.leg_r.joint),
        ("hip_l", frames.leg_l.root),
        ("knee_l", frames.leg_l.joint),
    ]
    .into_iter()
    .map(|(name, frame)| JointReport {
        name,
        origin: origin(&frame),
    })
    .collect()
}

fn build_report(rig: &Rig, time: f64, with_joints: bool) -> PoseReport {
    let phase = rig.clip().phase_at(time);
    let pose = rig.clip().pose_at_phase(phase);
    let parts = rig
        .evaluate(&pose)
        .iter()
        .map(|p| PartReport {
            part: p.part,
            kind: p.kind,
            center: p.center(),
        })
        .collect();

    PoseReport {
        time,
        phase,
        cycle_seconds: rig.clip().cycle_seconds(),
        pose,
        parts,
        joints: with_joints.then(|| joint_report(rig, &pose)),
    }
}

pub fn execute(args: PoseArgs, config: &ViewerConfig) -> Result<()> {
    let rig = config.rig()?;
    let report = build_report(&rig, args.time, args.joints);

    match args.format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize pose")?;
            println!("{json}");
        }
        OutputFormat::Table => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &PoseReport) {
    println!(
        "Pose at t={} (phase {:.4} of a {:.2}s cycle)",
        format_seconds(report.time),
        report.phase,
        report.cycle_seconds
    );
    println!();

    let mut joints = create_table(&["Joint", "Value"]);
    for joint in Joint::ALL {
        add_table_row(
            &mut joints,
            vec![
                joint.name().to_string(),
                format_joint_value(report.pose.get(joint), joint.is_angle()),
            ],
        );
    }
    joints.printstd();
    println!();

    let mut parts = create_table(&["Part", "Primitive", "Center"]);
    for part in &report.parts {
        add_table_row(
            &mut parts,
            vec![
                part.part.to_string(),
                part.kind.to_string(),
                format_vec3(part.center),
            ],
        );
    }
    parts.printstd();

    if let Some(frames) = &report.joints {
        println!();
        let mut table = create_table(&["Frame", "Origin"]);
        for frame in frames {
            add_table_row(&mut table, vec![frame.name.to_string(), format_vec3(frame.origin)]);
        }
        table.printstd();
    }
}
