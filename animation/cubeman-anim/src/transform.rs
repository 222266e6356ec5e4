//! Pure transform composition helpers
//!
//! Each helper returns `parent * local`, so a chain of calls reads in the
//! same order the transforms are applied from the parent down to the part.

use glam::{Mat4, Vec3};

/// `parent * T(offset)`
pub fn translate(parent: Mat4, offset: Vec3) -> Mat4 {
    parent * Mat4::from_translation(offset)
}

/// `parent * Rx(degrees)`
pub fn rotate_x_deg(parent: Mat4, degrees: f32) -> Mat4 {
    parent * Mat4::from_rotation_x(degrees.to_radians())
}

/// `parent * S(extents)`
pub fn scale(parent: Mat4, extents: Vec3) -> Mat4 {
    parent * Mat4::from_scale(extents)
}

/// World-space origin of a transform
pub fn origin(transform: &Mat4) -> Vec3 {
    transform.w_axis.truncate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_then_rotate_order() {
        // Rotation applies in the translated frame: the pivot stays put
        let m = rotate_x_deg(translate(Mat4::IDENTITY, Vec3::new(0.0, 1.0, 0.0)), 90.0);
        let p = m.transform_point3(Vec3::ZERO);
        assert!((p - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-6);

        // +Y in the rotated frame maps to +Z
        let p = m.transform_point3(Vec3::Y);
        assert!((p - Vec3::new(0.0, 1.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_rotate_negative_quarter_turn() {
        // The prone base: -90 degrees about X takes +Y to -Z
        let m = rotate_x_deg(Mat4::IDENTITY, -90.0);
        let p = m.transform_point3(Vec3::Y);
        assert!((p - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_full_turn_is_identity() {
        let m = rotate_x_deg(Mat4::IDENTITY, 360.0);
        assert!(m.abs_diff_eq(Mat4::IDENTITY, 1e-5));
    }

    #[test]
    fn test_scale_is_innermost() {
        let m = scale(translate(Mat4::IDENTITY, Vec3::X), Vec3::splat(2.0));
        let p = m.transform_point3(Vec3::ONE);
        assert!((p - Vec3::new(3.0, 2.0, 2.0)).length() < 1e-6);
        assert_eq!(origin(&m), Vec3::X);
    }
}
