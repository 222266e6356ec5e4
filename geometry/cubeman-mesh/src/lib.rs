//! Procedural geometry for the swimming cubeman
//!
//! Both primitives are generated once at startup and handed to the renderer
//! as immutable triangle lists:
//! - a 36-vertex unit cube with flat face normals and per-corner colors
//! - a UV sphere with radial normals and texture coordinates
//!
//! # Example
//!
//! ```rust
//! use cubeman_mesh::{SphereParams, generate_cube, generate_sphere};
//!
//! let cube = generate_cube();
//! assert_eq!(cube.vertex_count(), 36);
//!
//! let sphere = generate_sphere(SphereParams::new(4, 2)?);
//! assert_eq!(sphere.triangle_count(), 16);
//! # Ok::<(), cubeman_mesh::MeshError>(())
//! ```

pub mod cube;
pub mod error;
pub mod mesh;
pub mod obj;
pub mod sphere;

pub use cube::{CUBE_VERTEX_COUNT, generate_cube};
pub use error::{MeshError, Result};
pub use mesh::{Mesh, PrimitiveKind};
pub use obj::{ObjObject, export_to_obj, write_obj};
pub use sphere::{SphereParams, generate_sphere};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
