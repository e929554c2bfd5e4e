//! Frame rendering.
//!
//! One primary ray per pixel, traced from depth 0. Pixels are independent, so
//! the parallel path splits the frame into rows on the rayon pool and
//! produces exactly the same buffer as the sequential one.

use glint_math::Color;
use rayon::prelude::*;

use crate::{Camera, Tracer};

/// Convert a color to 8-bit RGB.
///
/// Channels are clamped to 1 at the top and truncated, so 1.0 and above map
/// to 255. Negative and NaN channels saturate to 0.
#[inline]
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [channel_to_u8(color.x), channel_to_u8(color.y), channel_to_u8(color.z)]
}

#[inline]
fn channel_to_u8(c: f64) -> u8 {
    // Not f64::min, which would turn NaN into 1.0
    let c = if c > 1.0 { 1.0 } else { c };
    // `as` saturates negatives and maps NaN to 0
    (c * 255.0) as u8
}

/// Image buffer holding unclamped render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    /// Row-major, top row first
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert to packed RGB bytes, three per pixel.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Render a single pixel.
#[inline]
pub fn render_pixel(camera: &Camera, tracer: &Tracer, x: u32, y: u32) -> Color {
    tracer.trace(&camera.ray(x, y), 0)
}

/// Render the entire frame on the calling thread.
pub fn render(camera: &Camera, tracer: &Tracer) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            image.set(x, y, render_pixel(camera, tracer, x, y));
        }
    }

    image
}

/// Render the entire frame with rows spread across the rayon pool.
pub fn render_parallel(camera: &Camera, tracer: &Tracer) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    let width = camera.image_width as usize;

    if width == 0 {
        return image;
    }

    image
        .pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = render_pixel(camera, tracer, x as u32, y as u32);
            }
        });

    image
}
