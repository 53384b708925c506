// SPDX-License-Identifier: MPL-2.0
use crate::error::{Error, Result};
use iced::widget::image;
use iced::Size;
use image_rs::GenericImageView;
use std::fmt;
use std::fs;
use std::path::Path;

/// A decoded raster image ready for rendering.
#[derive(Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageData")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Pixel dimensions as a float size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

/// Reads and decodes the image at `path`.
///
/// Unreadable files map to [`Error::Io`]; data that is not a supported
/// image or has no pixels maps to [`Error::Decode`].
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let img = image_rs::load_from_memory(&bytes)?;

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Decode(format!(
            "{} has empty dimensions",
            path.display()
        )));
    }

    Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
}
