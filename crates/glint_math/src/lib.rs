//! Glint math - vector and ray types for the Whitted tracer.
//!
//! Vectors are double precision throughout: positions, directions and
//! RGB colors all share [`Vec3`].

// Re-export glam for convenience
pub use glam::*;

mod ray;
mod vector;

pub use ray::Ray;
pub use vector::{mix, Vec3Ext};

/// Double precision 3D vector used for points, directions and colors.
pub type Vec3 = glam::DVec3;

/// RGB color (channels nominally 0-1, but unbounded).
pub type Color = Vec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        // Component-wise product, used for tinting colors
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(a.length_squared(), 14.0);
        assert!((a.length() - 14.0_f64.sqrt()).abs() < 1e-12);
    }
}
