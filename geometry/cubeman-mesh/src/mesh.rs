//! Static triangle mesh data shared by the generators

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Primitive a rigid part is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PrimitiveKind {
    /// Unit cube centered at the origin
    Cube,
    /// Unit sphere centered at the origin
    Sphere,
}

impl PrimitiveKind {
    /// Lowercase name used in logs and exports
    pub fn name(self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Sphere => "sphere",
        }
    }
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Non-indexed triangle list
///
/// Every attribute vector that is present has one entry per vertex, and
/// three consecutive vertices form a triangle.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mesh {
    /// Homogeneous positions (w = 1)
    pub positions: Vec<Vec4>,
    /// Unit normals (w = 0)
    pub normals: Vec<Vec4>,
    /// RGBA vertex colors, empty when the mesh is uncolored
    pub colors: Vec<Vec4>,
    /// Texture coordinates, empty when the mesh is untextured
    pub tex_coords: Vec<Vec2>,
}

impl Mesh {
    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn has_colors(&self) -> bool {
        !self.colors.is_empty()
    }

    pub fn has_tex_coords(&self) -> bool {
        !self.tex_coords.is_empty()
    }

    /// Bake the mesh under a world transform
    ///
    /// Positions go through the full matrix. Normals go through the
    /// inverse-transpose so non-uniform part scales keep them perpendicular.
    pub fn transformed(&self, transform: &Mat4) -> Self {
        let normal_matrix = transform.inverse().transpose();

        let positions = self
            .positions
            .iter()
            .map(|p| *transform * *p)
            .collect();
        let normals = self
            .normals
            .iter()
            .map(|n| {
                let n = normal_matrix.transform_vector3(n.truncate());
                n.normalize_or_zero().extend(0.0)
            })
            .collect();

        Self {
            positions,
            normals,
            colors: self.colors.clone(),
            tex_coords: self.tex_coords.clone(),
        }
    }

    /// Axis-aligned bounds of the positions, `None` for an empty mesh
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = self.positions.first()?.truncate();
        Some(
            self.positions
                .iter()
                .skip(1)
                .fold((first, first), |(min, max), p| {
                    let p = p.truncate();
                    (min.min(p), max.max(p))
                }),
        )
    }
}
