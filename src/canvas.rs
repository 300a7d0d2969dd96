use std::path::Path;

use image::{ImageBuffer, ImageFormat, Rgb};

use crate::error::CanvasError;

pub const CHANNELS: usize = 3;

/// Converts a `[0, 1]` sample to a byte, truncating.
///
/// Out-of-range samples saturate and NaN maps to black.
#[inline]
pub fn to_byte(sample: f64) -> u8 {
    (sample * 255.0) as u8
}

/// Packed, row-major RGB8 pixel buffer, top row first.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let len = Self::buffer_len(width, height)?;

        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, CanvasError> {
        let expected = Self::buffer_len(width, height)?;
        if pixels.len() != expected {
            return Err(CanvasError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    fn buffer_len(width: u32, height: u32) -> Result<usize, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::EmptyDimensions { width, height });
        }

        Ok(width as usize * height as usize * CHANNELS)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Raw access for filling the buffer in `CHANNELS`-sized chunks.
    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) is outside the {}x{} canvas",
            x,
            y,
            self.width,
            self.height
        );

        CHANNELS * (y as usize * self.width as usize + x as usize)
    }

    /// Writes a grey sample to all three channels of pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the canvas.
    pub fn put_pixel(&mut self, x: u32, y: u32, sample: f64) {
        let offset = self.offset(x, y);
        let value = to_byte(sample);

        self.pixels[offset..offset + CHANNELS].copy_from_slice(&[value; CHANNELS]);
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the canvas.
    pub fn get_pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        let offset = self.offset(x, y);

        Rgb([self.pixels[offset], self.pixels[offset + 1], self.pixels[offset + 2]])
    }

    /// Encodes the canvas as a 24-bit BMP.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), CanvasError> {
        let image: ImageBuffer<Rgb<u8>, &[u8]> =
            ImageBuffer::from_raw(self.width, self.height, &self.pixels[..]).ok_or_else(|| {
                CanvasError::BufferSize {
                    expected: CHANNELS * self.width as usize * self.height as usize,
                    actual: self.pixels.len(),
                }
            })?;

        image.save_with_format(path, ImageFormat::Bmp)?;

        Ok(())
    }
}
