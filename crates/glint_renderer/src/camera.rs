//! Pinhole camera for primary ray generation.
//!
//! The camera sits at the origin looking down -Z with +Y up. There is no
//! jitter: each pixel gets exactly one ray through its center.

use glint_math::{Ray, Vec3, Vec3Ext};

/// Maps pixel coordinates to primary rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    /// Field of view in degrees, applied vertically
    fov: f64,

    // Cached values
    inv_width: f64,
    inv_height: f64,
    aspect_ratio: f64,
    angle: f64,
}

impl Camera {
    /// Create a camera for the given resolution and field of view.
    pub fn new(image_width: u32, image_height: u32, fov: f64) -> Self {
        Self {
            image_width,
            image_height,
            fov,
            inv_width: 1.0 / image_width as f64,
            inv_height: 1.0 / image_height as f64,
            aspect_ratio: image_width as f64 / image_height as f64,
            angle: (std::f64::consts::PI * 0.5 * fov / 180.0).tan(),
        }
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Generate the primary ray through the center of pixel (x, y).
    ///
    /// (0, 0) is the top-left pixel.
    pub fn ray(&self, x: u32, y: u32) -> Ray {
        let xx = (2.0 * ((x as f64 + 0.5) * self.inv_width) - 1.0) * self.angle * self.aspect_ratio;
        let yy = (1.0 - 2.0 * ((y as f64 + 0.5) * self.inv_height)) * self.angle;

        Ray::new(Vec3::ZERO, Vec3::new(xx, yy, -1.0).normalized())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(640, 480, 30.0)
    }
}
