//! binmatch Core - Images and the reference collection
//!
//! Everything the other binmatch crates pass between each other:
//!
//! - [`Pix`] / [`PixMut`] - shared image and its writable builder
//! - [`PixelDepth`] - 8-bit gray or 32-bit RGB(A)
//! - [`ImageFormat`] - which decoder produced an image
//! - [`ImageDatabase`] - named reference images in enumeration order
//! - [`color`] - `0xRRGGBBAA` packing helpers

pub mod database;
pub mod error;
pub mod pix;

pub use database::{DatabaseEntry, ImageDatabase};
pub use error::{Error, Result};
pub use pix::{ImageFormat, Pix, PixMut, PixelDepth};

/// Packing and unpacking of `0xRRGGBBAA` pixels
pub mod color {
    const SHIFTS: [u32; 4] = [24, 16, 8, 0];

    #[inline]
    fn channel(pixel: u32, i: usize) -> u8 {
        (pixel >> SHIFTS[i]) as u8
    }

    #[inline]
    pub fn red(pixel: u32) -> u8 {
        channel(pixel, 0)
    }

    #[inline]
    pub fn green(pixel: u32) -> u8 {
        channel(pixel, 1)
    }

    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        channel(pixel, 2)
    }

    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        channel(pixel, 3)
    }

    /// Opaque pixel from RGB.
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 0xff)
    }

    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        u32::from_be_bytes([r, g, b, a])
    }

    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        let [r, g, b, a] = pixel.to_be_bytes();
        (r, g, b, a)
    }

}
