use std::error::Error;
use std::fmt;
use std::path::Path;

use resvg::{tiny_skia, usvg};

/// A rasterized preview, RGBA8, sized to the framebuffer.
pub struct RasterImage {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvgError {
    Read { path: String, message: String },
    Parse { path: String, message: String },
    ZeroTarget,
}

impl fmt::Display for SvgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, message } => write!(f, "cannot read preview '{path}': {message}"),
            Self::Parse { path, message } => {
                write!(f, "preview '{path}' is not a valid SVG: {message}")
            }
            Self::ZeroTarget => write!(f, "preview target size is zero"),
        }
    }
}

impl Error for SvgError {}

/// Rasterizes the SVG at `path` into a `width` x `height` image, scaled to
/// fit while preserving aspect ratio and centered on a white background.
pub fn rasterize(path: &Path, width: u32, height: u32) -> Result<RasterImage, SvgError> {
    let path_display = path.display().to_string();

    let data = std::fs::read(path).map_err(|error| SvgError::Read {
        path: path_display.clone(),
        message: error.to_string(),
    })?;

    let tree =
        usvg::Tree::from_data(&data, &usvg::Options::default()).map_err(|error| SvgError::Parse {
            path: path_display,
            message: error.to_string(),
        })?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or(SvgError::ZeroTarget)?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let size = tree.size();
    let scale = (width as f32 / size.width()).min(height as f32 / size.height());
    let offset_x = (width as f32 - size.width() * scale) / 2.0;
    let offset_y = (height as f32 - size.height() * scale) / 2.0;
    let transform = tiny_skia::Transform::from_scale(scale, scale).post_translate(offset_x, offset_y);

    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(RasterImage {
        rgba: pixmap.take(),
        width,
        height,
    })
}
