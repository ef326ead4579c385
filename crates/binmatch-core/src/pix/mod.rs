//! PIX - The image container
//!
//! A `Pix` is what the decoders produce and what the binarizer and the
//! matcher consume: either 8-bit intensity or packed 32-bit RGB(A).
//!
//! # Pixel layout
//!
//! Rows are arrays of 32-bit words and always start on a word boundary.
//! Within a word, pixels run from the most significant byte down, so an
//! 8-bit row holds four pixels per word. A 32-bit pixel is `0xRRGGBBAA`.
//!
//! # Ownership
//!
//! `Pix` is an `Arc` handle, so clones share storage and a decoded image
//! is never copied on its way through the pipeline. Building an image
//! goes through [`PixMut`], obtained with [`Pix::try_into_mut`] (no copy
//! when the handle is unique) or [`Pix::to_mut`] (always copies).

mod access;
mod histogram;
mod measurement;

pub use access::*;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Bits per pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelDepth {
    /// Single-channel intensity
    Bit8 = 8,
    /// Packed RGB or RGBA
    Bit32 = 32,
}

impl PixelDepth {
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Samples per pixel a fresh image of this depth starts with.
    fn default_spp(self) -> u32 {
        match self {
            PixelDepth::Bit8 => 1,
            PixelDepth::Bit32 => 3,
        }
    }
}

/// Container format an image was decoded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Built in memory, or format not recorded
    #[default]
    Unknown,
    Jpeg,
    Png,
}

/// Geometry, metadata and word storage shared by `Pix` and `PixMut`
#[derive(Debug, Clone)]
struct Raster {
    width: u32,
    height: u32,
    depth: PixelDepth,
    /// 1 for gray, 3 for RGB, 4 for RGBA
    spp: u32,
    /// Words per row
    wpl: u32,
    informat: ImageFormat,
    words: Vec<u32>,
}

impl Raster {
    fn row(&self, y: u32) -> &[u32] {
        let start = y as usize * self.wpl as usize;
        &self.words[start..start + self.wpl as usize]
    }

    fn row_mut(&mut self, y: u32) -> &mut [u32] {
        let start = y as usize * self.wpl as usize;
        &mut self.words[start..start + self.wpl as usize]
    }
}

/// Words needed for one row of `width` pixels at `depth`.
fn words_per_row(width: u32, depth: PixelDepth) -> Result<u32> {
    let bits = u64::from(width) * u64::from(depth.bits());
    u32::try_from(bits.div_ceil(32)).map_err(|_| Error::InvalidDimension { width, height: 1 })
}

/// Immutable, shareable image
///
/// ```
/// use binmatch_core::{Pix, PixelDepth};
///
/// let pix = Pix::new(640, 480, PixelDepth::Bit8).unwrap();
/// assert_eq!((pix.width(), pix.height()), (640, 480));
/// assert_eq!(pix.get_pixel(10, 10), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<Raster>,
}

impl Pix {
    /// Create a zero-filled image.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] if either side is 0 or a row would not
    /// fit in `u32::MAX` words.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let wpl = words_per_row(width, depth)?;
        let raster = Raster {
            width,
            height,
            depth,
            spp: depth.default_spp(),
            wpl,
            informat: ImageFormat::Unknown,
            words: vec![0; wpl as usize * height as usize],
        };
        Ok(Pix {
            inner: Arc::new(raster),
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Samples per pixel.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    /// Words per row.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Format the image was decoded from.
    #[inline]
    pub fn informat(&self) -> ImageFormat {
        self.inner.informat
    }

    /// `width * height`
    #[inline]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.inner.width) * u64::from(self.inner.height)
    }

    /// All words, row after row.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.words
    }

    /// Number of handles sharing this image's storage.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Words of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        self.inner.row(y)
    }

    /// Same width, height and depth.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        (self.width(), self.height(), self.depth())
            == (other.width(), other.height(), other.depth())
    }

    /// Copy into storage not shared with any other handle.
    pub fn deep_clone(&self) -> Self {
        Pix {
            inner: Arc::new(Raster::clone(&self.inner)),
        }
    }

    /// Take the storage for writing if this is the only handle.
    ///
    /// On failure the handle is given back unchanged.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        Arc::try_unwrap(self.inner)
            .map(|inner| PixMut { inner })
            .map_err(|inner| Pix { inner })
    }

    /// Writable copy of this image.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: Raster::clone(&self.inner),
        }
    }
}

/// Image under construction
///
/// Freeze it with `Pix::from` / `.into()`.
#[derive(Debug)]
pub struct PixMut {
    inner: Raster,
}

impl PixMut {
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    pub fn set_informat(&mut self, format: ImageFormat) {
        self.inner.informat = format;
    }

    /// Record the sample count (3 = RGB, 4 = RGBA for 32-bit images).
    pub fn set_spp(&mut self, spp: u32) {
        self.inner.spp = spp;
    }

    /// Words of row `y`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        self.inner.row(y)
    }

    /// Writable words of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        self.inner.row_mut(y)
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix_mut.inner),
        }
    }
}
