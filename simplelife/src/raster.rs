// raster.rs - One pixel per cell: black for alive, white for dead

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::RgbImage;
use tracing::debug;

use crate::{Board, LifeError};

pub const ALIVE_RGB: [u8; 3] = [0, 0, 0];
pub const DEAD_RGB: [u8; 3] = [255, 255, 255];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterFormat {
    Ppm,
    Png,
}

impl RasterFormat {
    pub fn extension(self) -> &'static str {
        match self {
            RasterFormat::Ppm => "ppm",
            RasterFormat::Png => "png",
        }
    }

    pub fn save(self, board: &Board, path: impl AsRef<Path>) -> Result<(), LifeError> {
        match self {
            RasterFormat::Ppm => save_ppm(board, path),
            RasterFormat::Png => save_png(board, path),
        }
    }
}

/// RGB bytes for every cell in storage order (`x` outer, `y` inner).
pub fn pixels(board: &Board) -> Vec<u8> {
    let mut buf = Vec::with_capacity(board.cells().len() * 3);
    for cell in board.cells() {
        buf.extend_from_slice(if cell.alive { &ALIVE_RGB } else { &DEAD_RGB });
    }
    buf
}

/// Writes `board` as a binary PPM (P6).
///
/// Pixels stream column by column, so each image row is one board column:
/// the image is `size_y` wide and `size_x` tall, and cell `(x, y)` is pixel
/// `(y, x)`.
pub fn write_ppm<W: Write>(board: &Board, mut out: W) -> Result<(), LifeError> {
    writeln!(out, "P6")?;
    writeln!(out, "# File generated by simplelife.")?;
    writeln!(out, "{} {}", board.size_y(), board.size_x())?;
    writeln!(out, "255")?;
    out.write_all(&pixels(board))?;
    out.flush()?;
    Ok(())
}

pub fn save_ppm(board: &Board, path: impl AsRef<Path>) -> Result<(), LifeError> {
    let path = path.as_ref();
    write_ppm(board, BufWriter::new(File::create(path)?))?;
    debug!(path = %path.display(), "wrote ppm");
    Ok(())
}

/// The same pixels as the PPM output, as an `RgbImage` `size_y` wide and
/// `size_x` tall.
pub fn to_image(board: &Board) -> Result<RgbImage, LifeError> {
    let too_large = || LifeError::ImageDimensions {
        size_x: board.size_x(),
        size_y: board.size_y(),
    };
    let width = u32::try_from(board.size_y()).map_err(|_| too_large())?;
    let height = u32::try_from(board.size_x()).map_err(|_| too_large())?;
    RgbImage::from_raw(width, height, pixels(board)).ok_or_else(too_large)
}

pub fn save_png(board: &Board, path: impl AsRef<Path>) -> Result<(), LifeError> {
    let path = path.as_ref();
    to_image(board)?.save_with_format(path, image::ImageFormat::Png)?;
    debug!(path = %path.display(), "wrote png");
    Ok(())
}
