//! Image output.
//!
//! `.ppm` paths get a binary P6 file written directly; any other extension
//! goes through the `image` crate.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::ImageBuffer;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Write a binary PPM: `P6\n<w> <h>\n255\n` then RGB bytes, top row first.
pub fn write_ppm<W: Write>(image: &ImageBuffer, mut writer: W) -> io::Result<()> {
    write!(writer, "P6\n{} {}\n255\n", image.width, image.height)?;
    writer.write_all(&image.to_rgb())?;
    writer.flush()
}

/// Encode an image as binary PPM in memory.
pub fn encode_ppm(image: &ImageBuffer) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(32 + image.pixels.len() * 3);
    write_ppm(image, &mut bytes).expect("writing to a Vec cannot fail");
    bytes
}

/// Save an image, picking the format from the file extension.
pub fn save<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> RenderResult<()> {
    let path = path.as_ref();
    let is_ppm = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let file = File::create(path)?;
        write_ppm(image, BufWriter::new(file))?;
    } else {
        image::save_buffer(
            path,
            &image.to_rgb(),
            image.width,
            image.height,
            image::ColorType::Rgb8,
        )?;
    }

    log::debug!("Wrote {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color_to_rgb, render, render_parallel, spheres_from_scene, Camera, Tracer, TracerOptions};
    use glint_core::SceneDesc;
    use glint_math::Color;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("glint_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_ppm_layout() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::new(1.0, 0.0, 0.5));
        image.set(1, 0, Color::splat(2.0));

        let bytes = encode_ppm(&image);
        assert_eq!(&bytes[..11], b"P6\n2 1\n255\n");
        assert_eq!(&bytes[11..], &[255, 0, 127, 255, 255, 255]);
    }

    #[test]
    fn test_save_ppm() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(2, 1, Color::new(0.2, 0.4, 0.6));

        let path = temp_path("save.ppm");
        save(&image, &path).unwrap();
        let written = std::fs::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(written, encode_ppm(&image));
    }

    #[test]
    fn test_save_png() {
        let mut image = ImageBuffer::new(4, 2);
        image.set(1, 1, Color::new(1.0, 0.5, 0.0));

        let path = temp_path("save.png");
        save(&image, &path).unwrap();
        let decoded = image::open(&path).unwrap().to_rgb8();
        let _ = std::fs::remove_file(&path);

        assert_eq!(decoded.dimensions(), (4, 2));
        assert_eq!(decoded.get_pixel(1, 1).0, [255, 127, 0]);
        assert_eq!(decoded.into_raw(), image.to_rgb());
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let image = ImageBuffer::new(1, 1);
        let err = save(&image, "/nonexistent/glint/out.ppm").unwrap_err();
        assert!(matches!(err, RenderError::Io(_)));
    }

    #[test]
    fn test_reference_render_is_deterministic() {
        let spheres = spheres_from_scene(&SceneDesc::reference());
        let tracer = Tracer::new(&spheres, TracerOptions::default());
        let camera = Camera::new(640, 480, 30.0);

        let image = render(&camera, &tracer);
        let first = encode_ppm(&image);
        let second = encode_ppm(&render_parallel(&camera, &tracer));

        assert_eq!(&first[..15], b"P6\n640 480\n255\n");
        assert_eq!(first.len(), 15 + 640 * 480 * 3);
        assert!(first == second, "renders differ");

        let pixel = |x: u32, y: u32| {
            let offset = 15 + (y as usize * 640 + x as usize) * 3;
            [first[offset], first[offset + 1], first[offset + 2]]
        };

        // Sky
        assert_eq!(pixel(320, 0), [255, 255, 255]);
        // Lit ground, bottom-left corner
        assert_eq!(pixel(0, 440), [132, 132, 132]);
        // Ground in the shadow of the glass sphere
        assert_eq!(pixel(320, 440), [0, 0, 0]);
        // Glass sphere, reflection and refraction blended
        assert_eq!(pixel(320, 200), [155, 26, 31]);
        // Yellow and blue mirrors
        assert_eq!(pixel(576, 240), [49, 41, 25]);
        assert_eq!(pixel(512, 200), [33, 39, 49]);

        assert_eq!(color_to_rgb(image.get(320, 200)), pixel(320, 200));
    }
}
