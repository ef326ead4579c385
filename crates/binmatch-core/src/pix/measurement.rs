//! Pixel counting for 8-bit images

use super::{Pix, PixelDepth};
use crate::error::{Error, Result};

impl Pix {
    /// Count the pixels of an 8-bit image that equal `val` exactly.
    ///
    /// The result is always within `[0, width * height]`.
    pub fn count_pixels_with_value(&self, val: u8) -> Result<u64> {
        if self.depth() != PixelDepth::Bit8 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        let target = u32::from(val);
        let count = (0..self.height())
            .map(|y| {
                let line = self.row_data(y);
                (0..self.width())
                    .filter(|&x| super::get_data_byte(line, x) == target)
                    .count() as u64
            })
            .sum();
        Ok(count)
    }

    /// Check that every pixel of an 8-bit image is one of `values`.
    pub fn only_values(&self, values: &[u8]) -> Result<bool> {
        let bins = self.gray_histogram(1)?;
        Ok((0..=u8::MAX).all(|v| bins[v as usize] == 0 || values.contains(&v)))
    }
}
