//! UV sphere with radial normals and texture coordinates

use std::f32::consts::PI;

use glam::{Vec2, Vec4};
use log::debug;

use crate::error::{MeshError, Result};
use crate::mesh::Mesh;

/// Tessellation used for the cubeman's head
pub const DEFAULT_LONGITUDE: u32 = 24;
pub const DEFAULT_LATITUDE: u32 = 12;

/// Sphere tessellation parameters
///
/// Both segment counts are at least 1; the only way in is through
/// [`SphereParams::new`], deserialization included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSphereParams"))]
pub struct SphereParams {
    longitude: u32,
    latitude: u32,
}

impl SphereParams {
    pub fn new(longitude: u32, latitude: u32) -> Result<Self> {
        if longitude == 0 || latitude == 0 {
            return Err(MeshError::InvalidTessellation {
                longitude,
                latitude,
            });
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Segments around the pole axis
    pub fn longitude(&self) -> u32 {
        self.longitude
    }

    /// Segments from pole to pole
    pub fn latitude(&self) -> u32 {
        self.latitude
    }

    /// Triangles produced: two per grid cell
    pub fn triangle_count(&self) -> usize {
        self.longitude as usize * self.latitude as usize * 2
    }

    pub fn vertex_count(&self) -> usize {
        self.triangle_count() * 3
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSphereParams {
    longitude: u32,
    latitude: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSphereParams> for SphereParams {
    type Error = MeshError;

    fn try_from(raw: RawSphereParams) -> Result<Self> {
        Self::new(raw.longitude, raw.latitude)
    }
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            longitude: DEFAULT_LONGITUDE,
            latitude: DEFAULT_LATITUDE,
        }
    }
}

/// Build a unit UV sphere centered at the origin
///
/// The grid has `latitude + 1` rings of `longitude` points; the seam wraps
/// back to column 0 instead of duplicating it.
pub fn generate_sphere(params: SphereParams) -> Mesh {
    let n_longi = params.longitude as usize;
    let n_lati = params.latitude as usize;

    let grid = grid_points(n_longi, n_lati);

    let count = params.vertex_count();
    let mut mesh = Mesh {
        positions: Vec::with_capacity(count),
        normals: Vec::with_capacity(count),
        colors: Vec::new(),
        tex_coords: Vec::with_capacity(count),
    };

    for v in 0..n_lati {
        for u in 0..n_longi {
            let u2 = (u + 1) % n_longi;
            let v2 = v + 1;

            for (cu, cv) in [(u, v), (u, v2), (u2, v2), (u, v), (u2, v2), (u2, v)] {
                mesh.positions.push(grid[cu + cv * n_longi]);
                mesh.tex_coords.push(tex_coord(cu, cv, n_longi, n_lati));
            }
        }
    }

    // Unit radius around the origin: the normal is the position direction
    mesh.normals = mesh
        .positions
        .iter()
        .map(|p| p.truncate().normalize_or_zero().extend(0.0))
        .collect();

    debug!(
        "Generated sphere {}x{}: {} vertices, {} triangles",
        params.longitude,
        params.latitude,
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    mesh
}

fn grid_points(n_longi: usize, n_lati: usize) -> Vec<Vec4> {
    let mut points = Vec::with_capacity(n_longi * (n_lati + 1));
    for v in 0..=n_lati {
        for u in 0..n_longi {
            let theta = 2.0 * PI * u as f32 / n_longi as f32;
            let phi = PI * v as f32 / n_lati as f32;
            points.push(Vec4::new(
                phi.sin() * theta.cos(),
                phi.sin() * theta.sin(),
                phi.cos(),
                1.0,
            ));
        }
    }
    points
}

fn tex_coord(u: usize, v: usize, n_longi: usize, n_lati: usize) -> Vec2 {
    Vec2::new(
        u as f32 / n_longi as f32,
        1.0 - v as f32 / n_lati as f32,
    )
}
