//! Vector helpers glam does not provide in the form the tracer needs.

use crate::Vec3;

/// Extra operations on [`Vec3`].
pub trait Vec3Ext {
    /// Normalize in place.
    ///
    /// A zero-length vector is left unchanged rather than turning into NaN,
    /// which is what `glam::DVec3::normalize` would do.
    fn normalize_in_place(&mut self);

    /// By-value form of [`Vec3Ext::normalize_in_place`].
    fn normalized(self) -> Self;
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn normalize_in_place(&mut self) {
        let len2 = self.length_squared();
        if len2 > 0.0 {
            let inv_len = 1.0 / len2.sqrt();
            self.x *= inv_len;
            self.y *= inv_len;
            self.z *= inv_len;
        }
    }

    #[inline]
    fn normalized(mut self) -> Self {
        self.normalize_in_place();
        self
    }
}

/// Linear blend: returns `a` at `t = 0` and `b` at `t = 1`.
#[inline]
pub fn mix(a: f64, b: f64, t: f64) -> f64 {
    b * t + a * (1.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_zero_is_noop() {
        let mut v = Vec3::ZERO;
        v.normalize_in_place();
        assert_eq!(v, Vec3::ZERO);
        assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
    }

    #[test]
    fn test_normalize_unit_length() {
        let samples = [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-1.0, 2.0, -3.0),
            Vec3::new(1e-3, 0.0, 0.0),
            Vec3::new(1e4, -2e4, 5e3),
        ];

        for v in samples {
            let n = v.normalized();
            assert!((n.length() - 1.0).abs() < 1e-12, "{v:?} -> {n:?}");
            // Direction is preserved
            assert!(n.dot(v) > 0.0);
        }
    }

    #[test]
    fn test_normalize_in_place_matches_by_value() {
        let v = Vec3::new(0.2, -0.7, 1.3);
        let mut w = v;
        w.normalize_in_place();
        assert_eq!(w, v.normalized());
    }

    #[test]
    fn test_mix_endpoints() {
        for (a, b) in [(0.0, 1.0), (-3.5, 7.25), (0.125, 0.125), (1e6, -1e-6)] {
            assert_eq!(mix(a, b, 0.0), a);
            assert_eq!(mix(a, b, 1.0), b);
        }
    }

    #[test]
    fn test_mix_midpoint() {
        assert_eq!(mix(0.0, 1.0, 0.1), 0.1);
        assert!((mix(2.0, 4.0, 0.5) - 3.0).abs() < 1e-12);
    }
}
