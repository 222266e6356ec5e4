//! Flat-shaded, vertex-colored unit cube

use glam::{Vec3, Vec4};
use log::debug;

use crate::mesh::Mesh;

/// Vertices per cube: 6 faces, 2 triangles per face, 3 vertices per triangle
pub const CUBE_VERTEX_COUNT: usize = 36;

/// Corners of a unit cube centered at the origin
pub const CORNERS: [Vec4; 8] = [
    Vec4::new(-0.5, -0.5, 0.5, 1.0),
    Vec4::new(-0.5, 0.5, 0.5, 1.0),
    Vec4::new(0.5, 0.5, 0.5, 1.0),
    Vec4::new(0.5, -0.5, 0.5, 1.0),
    Vec4::new(-0.5, -0.5, -0.5, 1.0),
    Vec4::new(-0.5, 0.5, -0.5, 1.0),
    Vec4::new(0.5, 0.5, -0.5, 1.0),
    Vec4::new(0.5, -0.5, -0.5, 1.0),
];

/// RGBA color of each corner, indexed like [`CORNERS`]
pub const CORNER_COLORS: [Vec4; 8] = [
    Vec4::new(0.0, 0.0, 0.0, 1.0), // black
    Vec4::new(0.0, 1.0, 1.0, 1.0), // cyan
    Vec4::new(1.0, 0.0, 1.0, 1.0), // magenta
    Vec4::new(1.0, 1.0, 0.0, 1.0), // yellow
    Vec4::new(1.0, 0.0, 0.0, 1.0), // red
    Vec4::new(0.0, 1.0, 0.0, 1.0), // green
    Vec4::new(0.0, 0.0, 1.0, 1.0), // blue
    Vec4::new(1.0, 1.0, 1.0, 1.0), // white
];

/// Face quads as corner indices: front, right, bottom, top, back, left
pub const FACES: [[usize; 4]; 6] = [
    [1, 0, 3, 2],
    [2, 3, 7, 6],
    [3, 0, 4, 7],
    [6, 5, 1, 2],
    [4, 5, 6, 7],
    [5, 4, 0, 1],
];

/// Build the 36-vertex unit cube
///
/// Each quad `a, b, c, d` becomes triangles `a-b-c` and `a-c-d`. All six
/// vertices of a face share the normal of its first triangle; colors follow
/// the corner a vertex came from.
pub fn generate_cube() -> Mesh {
    let mut mesh = Mesh {
        positions: Vec::with_capacity(CUBE_VERTEX_COUNT),
        normals: Vec::with_capacity(CUBE_VERTEX_COUNT),
        colors: Vec::with_capacity(CUBE_VERTEX_COUNT),
        tex_coords: Vec::new(),
    };

    for face in &FACES {
        push_quad(&mut mesh, *face);
    }

    debug!(
        "Generated cube: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    mesh
}

fn push_quad(mesh: &mut Mesh, [a, b, c, d]: [usize; 4]) {
    let normal = face_normal(CORNERS[a], CORNERS[b], CORNERS[c]).extend(0.0);

    for corner in [a, b, c, a, c, d] {
        mesh.positions.push(CORNERS[corner]);
        mesh.normals.push(normal);
        mesh.colors.push(CORNER_COLORS[corner]);
    }
}

fn face_normal(a: Vec4, b: Vec4, c: Vec4) -> Vec3 {
    let e1 = (b - a).truncate();
    let e2 = (c - a).truncate();
    e1.cross(e2).normalize()
}
