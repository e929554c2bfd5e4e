//! Sphere primitive for ray tracing.

use glint_core::SphereDesc;
use glint_math::{Color, Ray, Vec3};

/// A sphere together with its material coefficients.
///
/// There is no separate light type: a sphere whose emission has a positive
/// red channel is treated as a light by the diffuse shading pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    radius2: f64,
    surface_color: Color,
    reflection: f64,
    transparency: f64,
    emission_color: Color,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(
        center: Vec3,
        radius: f64,
        surface_color: Color,
        reflection: f64,
        transparency: f64,
        emission_color: Color,
    ) -> Self {
        Self {
            center,
            radius,
            radius2: radius * radius,
            surface_color,
            reflection,
            transparency,
            emission_color,
        }
    }

    /// Build a sphere from its scene description.
    pub fn from_desc(desc: &SphereDesc) -> Self {
        Self::new(
            desc.center(),
            desc.radius,
            desc.surface_color(),
            desc.reflection,
            desc.transparency,
            desc.emission_color(),
        )
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn surface_color(&self) -> Color {
        self.surface_color
    }

    pub fn reflection(&self) -> f64 {
        self.reflection
    }

    pub fn transparency(&self) -> f64 {
        self.transparency
    }

    pub fn emission_color(&self) -> Color {
        self.emission_color
    }

    /// Check if this sphere lights the scene (positive red emission).
    #[inline]
    pub fn is_light(&self) -> bool {
        self.emission_color.x > 0.0
    }

    /// Check if hits on this sphere spawn reflection/refraction rays.
    #[inline]
    pub fn is_specular(&self) -> bool {
        self.transparency > 0.0 || self.reflection > 0.0
    }

    /// Geometric ray-sphere test.
    ///
    /// Returns both roots `(t0, t1)` with `t0 <= t1`. `t0` is negative when the
    /// ray starts inside the sphere. A sphere whose center projects behind
    /// the origin is always a miss, even if the origin is inside it.
    ///
    /// `ray.direction` must be unit length.
    #[inline]
    pub fn intersect(&self, ray: &Ray) -> Option<(f64, f64)> {
        let l = self.center - ray.origin;
        let tca = l.dot(ray.direction);
        if tca < 0.0 {
            return None;
        }

        let d2 = l.dot(l) - tca * tca;
        if d2 > self.radius2 {
            return None;
        }

        let thc = (self.radius2 - d2).sqrt();
        Some((tca - thc, tca + thc))
    }
}

/// Build the tracer's sphere list from a scene description, preserving order.
pub fn spheres_from_scene(scene: &glint_core::SceneDesc) -> Vec<Sphere> {
    scene.spheres.iter().map(Sphere::from_desc).collect()
}
