//! Recursive Whitted-style tracer.
//!
//! Each hit is shaded one of two ways:
//! - Specular spheres (reflective or transparent) spawn a reflection ray and,
//!   if transparent, a refraction ray, blended by a Fresnel-like term
//! - Everything else gets direct lighting from every light sphere with a
//!   binary shadow test
//!
//! The specular path is cut off at `max_depth`, after which a hit falls back
//! to the diffuse path, so recursion always terminates.

use glint_core::TracerSettings;
use glint_math::{mix, Color, Ray, Vec3, Vec3Ext};

use crate::Sphere;

/// Hits at or beyond this distance are ignored.
pub const FAR_T: f64 = 1e8;

/// Tracer configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracerOptions {
    /// Depth at which reflection/refraction stops recursing
    pub max_depth: u32,
    /// Offset along the normal for secondary ray origins
    pub bias: f64,
    /// Index of refraction of transparent spheres
    pub ior: f64,
    /// Color returned in every channel when nothing is hit
    pub background: f64,
    /// Skip the refraction ray on total internal reflection
    pub guard_total_internal_reflection: bool,
}

impl Default for TracerOptions {
    fn default() -> Self {
        Self::from(&TracerSettings::default())
    }
}

impl From<&TracerSettings> for TracerOptions {
    fn from(settings: &TracerSettings) -> Self {
        Self {
            max_depth: settings.max_depth,
            bias: settings.bias,
            ior: settings.ior,
            background: settings.background,
            guard_total_internal_reflection: settings.guard_total_internal_reflection,
        }
    }
}

/// Traces rays against a read-only list of spheres.
///
/// Holds only shared references, so one tracer can be used from many
/// threads at once.
#[derive(Debug, Clone, Copy)]
pub struct Tracer<'a> {
    spheres: &'a [Sphere],
    options: TracerOptions,
}

impl<'a> Tracer<'a> {
    pub fn new(spheres: &'a [Sphere], options: TracerOptions) -> Self {
        Self { spheres, options }
    }

    pub fn spheres(&self) -> &'a [Sphere] {
        self.spheres
    }

    pub fn options(&self) -> &TracerOptions {
        &self.options
    }

    /// Find the nearest sphere along the ray.
    ///
    /// When the origin is inside a sphere the far root stands in for the near
    /// one. Candidates are compared with a strict `<` in scene order, so the
    /// first sphere wins a tie.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<(&'a Sphere, f64)> {
        let mut t_near = FAR_T;
        let mut nearest = None;

        for sphere in self.spheres {
            if let Some((mut t0, t1)) = sphere.intersect(ray) {
                if t0 < 0.0 {
                    t0 = t1;
                }
                if t0 < t_near {
                    t_near = t0;
                    nearest = Some(sphere);
                }
            }
        }

        nearest.map(|sphere| (sphere, t_near))
    }

    /// Compute the color seen along `ray`.
    ///
    /// `depth` is 0 for primary rays and grows by one per bounce.
    /// `ray.direction` must be unit length.
    pub fn trace(&self, ray: &Ray, depth: u32) -> Color {
        let Some((sphere, t_near)) = self.nearest_hit(ray) else {
            return Color::splat(self.options.background);
        };

        let p_hit = ray.at(t_near);
        let mut n_hit = (p_hit - sphere.center()).normalized();

        // Normal facing along the ray means we are inside the sphere
        let mut inside = false;
        if ray.direction.dot(n_hit) > 0.0 {
            n_hit = -n_hit;
            inside = true;
        }

        let surface_color = if sphere.is_specular() && depth < self.options.max_depth {
            self.shade_specular(ray, sphere, p_hit, n_hit, inside, depth)
        } else {
            self.shade_diffuse(sphere, p_hit, n_hit)
        };

        surface_color + sphere.emission_color()
    }

    fn shade_specular(
        &self,
        ray: &Ray,
        sphere: &Sphere,
        p_hit: Vec3,
        n_hit: Vec3,
        inside: bool,
        depth: u32,
    ) -> Color {
        let dir = ray.direction;
        let kr = fresnel(-dir.dot(n_hit));

        let reflection = self.trace(&self.reflection_ray(dir, p_hit, n_hit), depth + 1);

        let mut refraction = Color::ZERO;
        if sphere.transparency() > 0.0 {
            let ior = self.options.ior;
            let eta = if inside { ior } else { 1.0 / ior };
            if let Some(refracted) = self.refraction_ray(dir, p_hit, n_hit, eta) {
                refraction = self.trace(&refracted, depth + 1);
            }
        }

        (reflection * kr + refraction * (1.0 - kr) * sphere.transparency())
            * sphere.surface_color()
    }

    /// Mirror ray, started just outside the surface.
    fn reflection_ray(&self, dir: Vec3, p_hit: Vec3, n_hit: Vec3) -> Ray {
        Ray::new(p_hit + n_hit * self.options.bias, reflect(dir, n_hit))
    }

    /// Transmitted ray, started just inside the surface.
    ///
    /// `None` only when the guard is on and the ray is totally internally
    /// reflected.
    fn refraction_ray(&self, dir: Vec3, p_hit: Vec3, n_hit: Vec3, eta: f64) -> Option<Ray> {
        let (refr_dir, k) = refract(dir, n_hit, eta);
        if self.options.guard_total_internal_reflection && k < 0.0 {
            return None;
        }
        Some(Ray::new(p_hit - n_hit * self.options.bias, refr_dir))
    }

    fn shade_diffuse(&self, sphere: &Sphere, p_hit: Vec3, n_hit: Vec3) -> Color {
        let shadow_origin = p_hit + n_hit * self.options.bias;
        let mut surface_color = Color::ZERO;

        for (i, light) in self.spheres.iter().enumerate() {
            if !light.is_light() {
                continue;
            }

            let light_dir = (light.center() - p_hit).normalized();
            let shadow_ray = Ray::new(shadow_origin, light_dir);

            // Any other sphere on the way blocks the light entirely
            let occluded = self
                .spheres
                .iter()
                .enumerate()
                .any(|(j, other)| i != j && other.intersect(&shadow_ray).is_some());
            let transmission = if occluded { Color::ZERO } else { Color::ONE };

            surface_color += sphere.surface_color()
                * transmission
                * n_hit.dot(light_dir).max(0.0)
                * light.emission_color();
        }

        surface_color
    }
}

/// Reflectance weight for a hit with the given facing ratio (cosine between
/// the reversed ray and the normal). 0.1 head-on, rising to 1 at grazing.
#[inline]
pub fn fresnel(facing_ratio: f64) -> f64 {
    mix((1.0 - facing_ratio).powf(3.0), 1.0, 0.1)
}

/// Mirror `dir` about `normal`, normalized.
#[inline]
pub fn reflect(dir: Vec3, normal: Vec3) -> Vec3 {
    (dir - normal * 2.0 * dir.dot(normal)).normalized()
}

/// Bend unit `dir` through a surface whose unit `normal` faces against it.
///
/// `eta` is the ratio of refractive indices (incident over transmitted).
/// Also returns `k`, the squared cosine of the transmitted angle: negative
/// means total internal reflection, and the direction is then NaN.
#[inline]
pub fn refract(dir: Vec3, normal: Vec3, eta: f64) -> (Vec3, f64) {
    let cosi = -normal.dot(dir);
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    let refr_dir = (dir * eta + normal * (eta * cosi - k.sqrt())).normalized();
    (refr_dir, k)
}
