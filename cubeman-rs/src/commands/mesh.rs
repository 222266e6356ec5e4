//! Primitive mesh statistics

use anyhow::Result;
use clap::{Args, ValueEnum};
use cubeman_mesh::{Mesh, SphereParams, generate_cube, generate_sphere};

use crate::config::ViewerConfig;
use crate::utils::{format_vec3, key_value_table};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MeshKind {
    Cube,
    Sphere,
}

#[derive(Args, Debug)]
pub struct MeshArgs {
    /// Primitive to generate
    #[arg(value_enum)]
    pub kind: MeshKind,

    /// Sphere segments around the pole axis (defaults to the config value)
    #[arg(long)]
    pub longitude: Option<u32>,

    /// Sphere segments from pole to pole (defaults to the config value)
    #[arg(long)]
    pub latitude: Option<u32>,
}

fn build_mesh(args: &MeshArgs, config: &ViewerConfig) -> Result<Mesh> {
    Ok(match args.kind {
        MeshKind::Cube => generate_cube(),
        MeshKind::Sphere => {
            let params = SphereParams::new(
                args.longitude.unwrap_or(config.sphere_longitude),
                args.latitude.unwrap_or(config.sphere_latitude),
            )?;
            generate_sphere(params)
        }
    })
}

pub fn execute(args: MeshArgs, config: &ViewerConfig) -> Result<()> {
    let mesh = build_mesh(&args, config)?;

    let mut rows = vec![
        ("Primitive", format!("{:?}", args.kind).to_lowercase()),
        ("Vertices", mesh.vertex_count().to_string()),
        ("Triangles", mesh.triangle_count().to_string()),
        ("Colors", mesh.has_colors().to_string()),
        ("Texture coords", mesh.has_tex_coords().to_string()),
    ];
    if let Some((min, max)) = mesh.bounds() {
        rows.push(("Bounds min", format_vec3(min)));
        rows.push(("Bounds max", format_vec3(max)));
    }

    key_value_table(&rows).printstd();
    Ok(())
}
