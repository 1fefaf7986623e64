//! PNG preview of a generated solid
//!
//! Projects the mesh orthographically from a camera placed at a given
//! azimuth and elevation, scales the projection to fit the image and draws
//! every face edge as a wireframe.

use image::{Rgb, RgbImage};
use log::{debug, info};

use crate::coordinate::{CoordinateSystem, Point3D};
use crate::errors::{CoordError, CoordResult};
use crate::geometry::Geometry;
use crate::utils::progress::ProgressTracker;

pub const DEFAULT_IMAGE_SIZE: u32 = 512;
const MIN_IMAGE_SIZE: u32 = 16;
pub const MAX_IMAGE_SIZE: u32 = 8192;
const MARGIN: f64 = 16.0;
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Wireframe color used for each coordinate system's solid
pub fn system_color(system: CoordinateSystem) -> Rgb<u8> {
    match system {
        CoordinateSystem::Cartesian => Rgb([200, 30, 30]),
        CoordinateSystem::Spherical => Rgb([30, 60, 200]),
        CoordinateSystem::Cylindrical => Rgb([30, 150, 60]),
    }
}

/// Orthographic camera, angles in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub azimuth: f64,
    pub elevation: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            azimuth: -60.0,
            elevation: 30.0,
        }
    }
}

impl Camera {
    /// Screen coordinates of a point, y pointing up
    pub fn project(&self, p: &Point3D) -> (f64, f64) {
        let (sa, ca) = self.azimuth.to_radians().sin_cos();
        let (se, ce) = self.elevation.to_radians().sin_cos();

        let screen_x = -p.x * sa + p.y * ca;
        let screen_y = -p.x * ca * se - p.y * sa * se + p.z * ce;
        (screen_x, screen_y)
    }
}

/// Renders wireframe previews of solids
pub struct PreviewRenderer {
    size: u32,
    camera: Camera,
    show_progress: bool,
}

impl PreviewRenderer {
    pub fn new(size: u32) -> Self {
        PreviewRenderer {
            size,
            camera: Camera::default(),
            show_progress: false,
        }
    }

    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Draw the solid into a new square image
    pub fn render(&self, geometry: &Geometry) -> CoordResult<RgbImage> {
        if !(MIN_IMAGE_SIZE..=MAX_IMAGE_SIZE).contains(&self.size) {
            return Err(CoordError::ImageError(format!(
                "Preview size must be between {} and {} pixels, got {}",
                MIN_IMAGE_SIZE, MAX_IMAGE_SIZE, self.size
            )));
        }

        let mesh = geometry.mesh();
        let projected: Vec<(f64, f64)> = mesh.vertices().iter().map(|p| self.camera.project(p)).collect();
        if projected.is_empty() {
            return Err(CoordError::ImageError("Cannot render an empty mesh".to_string()));
        }

        let to_pixel = self.fit_to_image(&projected);
        let pixels: Vec<(i64, i64)> = projected.iter().map(|&p| to_pixel(p)).collect();

        let color = system_color(geometry.system());
        let mut picture = RgbImage::from_pixel(self.size, self.size, BACKGROUND);

        let quads = mesh.quads();
        let progress = if self.show_progress {
            ProgressTracker::new(quads.len() as u64, "Rendering preview")
        } else {
            ProgressTracker::hidden(quads.len() as u64)
        };

        for quad in quads.iter() {
            for k in 0..4 {
                let from = pixels[quad[k]];
                let to = pixels[quad[(k + 1) % 4]];
                draw_line(&mut picture, from, to, color);
            }
            progress.increment(1);
        }
        progress.finish();

        debug!("Rendered {} faces into {}x{} preview", quads.len(), self.size, self.size);
        Ok(picture)
    }

    /// Render and save as PNG
    pub fn save(&self, geometry: &Geometry, path: &str) -> CoordResult<()> {
        let picture = self.render(geometry)?;
        picture.save_with_format(path, image::ImageFormat::Png)?;
        info!("Saved preview to {}", path);
        Ok(())
    }

    /// Build the mapping from screen coordinates to pixels, keeping the
    /// aspect ratio and centering the drawing
    fn fit_to_image(&self, projected: &[(f64, f64)]) -> impl Fn((f64, f64)) -> (i64, i64) {
        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for &(x, y) in projected {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        let extent = self.size as f64 - 1.0;
        let drawable = extent - 2.0 * MARGIN;
        let span = (max_x - min_x).max(max_y - min_y);
        let scale = if span > 0.0 { drawable / span } else { 1.0 };

        let offset_x = MARGIN + (drawable - (max_x - min_x) * scale) / 2.0;
        let offset_y = MARGIN + (drawable - (max_y - min_y) * scale) / 2.0;

        move |(x, y)| {
            let px = offset_x + (x - min_x) * scale;
            let py = extent - (offset_y + (y - min_y) * scale);
            (px.round() as i64, py.round() as i64)
        }
    }
}

/// Bresenham line, clipped to the image
fn draw_line(image: &mut RgbImage, from: (i64, i64), to: (i64, i64), color: Rgb<u8>) {
    let (mut x0, mut y0) = from;
    let (x1, y1) = to;
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let (width, height) = (image.width() as i64, image.height() as i64);
    loop {
        if x0 >= 0 && x0 < width && y0 >= 0 && y0 < height {
            image.put_pixel(x0 as u32, y0 as u32, color);
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
