//! Image file output: binary PPM (P6) and PNG.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::renderer::{color_to_rgb, ImageBuffer};

/// Errors from writing a rendered image.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write image")]
    Io(#[from] io::Error),

    #[error("failed to encode image")]
    Encode(#[from] image::ImageError),

    #[error("unsupported output format {extension:?} (expected ppm or png)")]
    UnsupportedFormat { extension: String },
}

/// Write a binary P6 PPM.
///
/// One header line each for the format tag, the dimensions, and the max
/// channel value, followed by raw RGB bytes in row-major order.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;
    writer.write_all(&image.to_rgb())
}

/// Save the image as a binary P6 PPM file.
pub fn save_ppm(image: &ImageBuffer, path: &Path) -> Result<(), OutputError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Save the image as a PNG file.
pub fn save_png(image: &ImageBuffer, path: &Path) -> Result<(), OutputError> {
    let mut out = image::RgbImage::new(image.width, image.height);
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        *pixel = image::Rgb(color_to_rgb(image.get(x, y)));
    }
    out.save(path)?;
    Ok(())
}

/// Save the image, dispatching on the path's extension.
pub fn save(image: &ImageBuffer, path: &Path) -> Result<(), OutputError> {
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match extension.as_str() {
        "ppm" => save_ppm(image, path),
        "png" => save_png(image, path),
        _ => Err(OutputError::UnsupportedFormat { extension }),
    }
}
