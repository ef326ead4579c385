//! Intensity histograms

use super::{Pix, PixelDepth};
use crate::error::{Error, Result};

impl Pix {
    /// 256-bin intensity histogram of an 8-bit image, visiting every
    /// `factor`-th row and column.
    ///
    /// ```
    /// use binmatch_core::{Pix, PixelDepth};
    ///
    /// let pix = Pix::new(100, 100, PixelDepth::Bit8).unwrap();
    /// let hist = pix.gray_histogram(1).unwrap();
    /// assert_eq!(hist[0], 10_000);
    /// ```
    pub fn gray_histogram(&self, factor: u32) -> Result<Vec<u32>> {
        if self.depth() != PixelDepth::Bit8 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        let step = match factor {
            0 => return Err(Error::InvalidParameter("histogram factor is 0".into())),
            f => f as usize,
        };

        let mut bins = vec![0u32; 256];
        for line in (0..self.height()).step_by(step).map(|y| self.row_data(y)) {
            (0..self.width())
                .step_by(step)
                .for_each(|x| bins[super::get_data_byte(line, x) as usize] += 1);
        }
        Ok(bins)
    }
}
