//! Pixel reads and writes
//!
//! In an 8-bit row, pixel `x` lives in word `x / 4`, byte `x % 4`
//! counted from the most significant end.

use super::{Pix, PixMut, PixelDepth};
use crate::color;
use crate::error::{Error, Result};

impl Pix {
    /// Pixel at (x, y), or `None` outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        (x < self.width() && y < self.height()).then(|| self.get_pixel_unchecked(x, y))
    }

    /// Pixel at (x, y) without the bounds check.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height` or `x` falls outside the row's words.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        read_pixel(self.row_data(y), x, self.depth())
    }

    /// RGB channels at (x, y); `None` for 8-bit images or outside.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if self.depth() != PixelDepth::Bit32 {
            return None;
        }
        self.get_pixel(x, y).map(color::extract_rgb)
    }
}

impl PixMut {
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        (x < self.width() && y < self.height()).then(|| self.get_pixel_unchecked(x, y))
    }

    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        read_pixel(self.row_data(y), x, self.depth())
    }

    /// Store `val` at (x, y); 8-bit images keep only the low byte.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] naming the offending coordinate.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        for (index, len) in [(x, self.width()), (y, self.height())] {
            if index >= len {
                return Err(Error::IndexOutOfBounds {
                    index: index as usize,
                    len: len as usize,
                });
            }
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Store `val` at (x, y) without the bounds check.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height` or `x` falls outside the row's words.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let depth = self.depth();
        let line = self.row_data_mut(y);
        match depth {
            PixelDepth::Bit8 => set_data_byte(line, x, val),
            PixelDepth::Bit32 => line[x as usize] = val,
        }
    }

    /// Store an opaque RGB pixel; 32-bit images only.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        if self.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        self.set_pixel(x, y, color::compose_rgb(r, g, b))
    }
}

#[inline]
fn read_pixel(line: &[u32], x: u32, depth: PixelDepth) -> u32 {
    match depth {
        PixelDepth::Bit8 => get_data_byte(line, x),
        PixelDepth::Bit32 => line[x as usize],
    }
}

#[inline]
fn byte_shift(x: u32) -> u32 {
    24 - 8 * (x & 3)
}

/// 8-bit pixel `x` of a packed row.
#[inline]
pub fn get_data_byte(line: &[u32], x: u32) -> u32 {
    (line[(x >> 2) as usize] >> byte_shift(x)) & 0xff
}

/// Overwrite 8-bit pixel `x` of a packed row with the low byte of `val`.
#[inline]
pub fn set_data_byte(line: &mut [u32], x: u32, val: u32) {
    let shift = byte_shift(x);
    let word = &mut line[(x >> 2) as usize];
    *word = (*word & !(0xff << shift)) | ((val & 0xff) << shift);
}
