//! OBJ export of a posed cubeman

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use cubeman_anim::{PartTransform, Rig};
use cubeman_mesh::{Mesh, ObjObject, PrimitiveKind, generate_cube, generate_sphere, write_obj};
use log::info;

use crate::config::ViewerConfig;
use crate::utils::{format_bytes, format_seconds};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Simulated time in seconds
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub time: f64,

    /// Output OBJ file
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Every part's primitive baked under its world transform, in draw order
pub fn bake_parts(parts: &[PartTransform], cube: &Mesh, sphere: &Mesh) -> Vec<Mesh> {
    parts
        .iter()
        .map(|part| {
            let mesh = match part.kind {
                PrimitiveKind::Cube => cube,
                PrimitiveKind::Sphere => sphere,
            };
            mesh.transformed(&part.transform)
        })
        .collect()
}

fn write_posed_obj(rig: &Rig, config: &ViewerConfig, time: f64, output: &Path) -> Result<usize> {
    let parts = rig.evaluate_pose(time);
    let baked = bake_parts(&parts, &generate_cube(), &generate_sphere(config.sphere()?));
    let objects: Vec<ObjObject<'_>> = parts
        .iter()
        .zip(&baked)
        .map(|(part, mesh)| ObjObject {
            name: part.part.name(),
            mesh,
        })
        .collect();

    let file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    write_obj(&mut writer, &objects)
        .with_context(|| format!("Failed to write OBJ: {}", output.display()))?;
    writer.flush()?;

    Ok(objects.len())
}

pub fn execute(args: ExportArgs, config: &ViewerConfig) -> Result<()> {
    let rig = config.rig()?;
    let count = write_posed_obj(&rig, config, args.time, &args.output)?;

    let size = fs::metadata(&args.output).map(|m| m.len()).unwrap_or(0);
    info!("Exported {count} parts to {}", args.output.display());
    println!(
        "✓ Wrote {} parts at t={} to {} ({})",
        count,
        format_seconds(args.time),
        style(args.output.display()).cyan(),
        format_bytes(size)
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_bake_moves_torso_to_bob_height() {
        let rig = Rig::cubeman();
        let parts = rig.evaluate_pose(0.0);
        let baked = bake_parts(&parts, &generate_cube(), &generate_sphere(Default::default()));
        assert_eq!(baked.len(), 10);

        // Prone torso: 0.7 wide, 0.3 tall, 1.0 long, lifted by the 0.04 bob
        let (min, max) = baked[0].bounds().unwrap();
        assert!((max.x - min.x - 0.7).abs() < 1e-5);
        assert!((max.y - min.y - 0.3).abs() < 1e-5);
        assert!((max.z - min.z - 1.0).abs() < 1e-5);
        assert!(((min.y + max.y) * 0.5 - 0.04).abs() < 1e-5);
    }

    #[test]
    fn test_writes_one_object_per_part() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cubeman.obj");
        let config = ViewerConfig::default();

        let count = write_posed_obj(&config.rig().unwrap(), &config, 0.5, &path).unwrap();
        assert_eq!(count, 10);

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("o ")).count(), 10);
        assert!(text.contains("o head"));
        assert!(text.contains("o lower_leg_l"));
    }
}
