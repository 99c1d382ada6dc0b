use std::path::Path;

use anyhow::{Context, Result};
use image::GrayImage;
use log::debug;

use crate::types::{ArrayName, DERIVED_PREFIX};

/// Greyscale pixel bytes in row-major order.
pub struct Pixels {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Pixels {
    pub fn from_gray(img: GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

pub fn load(path: &Path) -> Result<Pixels> {
    let img = image::open(path)
        .with_context(|| format!("failed to load image {}", path.display()))?
        .to_luma8();
    let pixels = Pixels::from_gray(img);
    debug!(
        "{}: {}x{} ({} bytes)",
        path.display(),
        pixels.width,
        pixels.height,
        pixels.len()
    );
    Ok(pixels)
}

pub fn array_name(name: &ArrayName, path: &Path) -> Result<String> {
    match name {
        ArrayName::Splash => Ok("splash".to_string()),
        ArrayName::Custom(s) => Ok(s.clone()),
        ArrayName::Derived => {
            let stem = path
                .file_stem()
                .with_context(|| format!("no file name in {}", path.display()))?;
            Ok(format!("{DERIVED_PREFIX}{}", stem.to_string_lossy()))
        }
    }
}
