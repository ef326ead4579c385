//! PNG reading and writing

use crate::{IoError, IoResult};
use binmatch_core::{ImageFormat, Pix, PixelDepth, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

fn decode_err(e: png::DecodingError) -> IoError {
    IoError::DecodeError(format!("PNG: {}", e))
}

fn encode_err(e: png::EncodingError) -> IoError {
    IoError::EncodeError(format!("PNG: {}", e))
}

/// Decode a PNG stream.
///
/// Palettes are expanded, sub-byte gray is widened and 16-bit samples are
/// cut to 8 bits, so gray comes back as an 8-bit image and everything else
/// as 32-bit RGB(A). Gray+alpha becomes RGBA with equal color channels.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut frames = decoder.read_info().map_err(decode_err)?;

    let (color_type, bit_depth) = frames.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "PNG output depth {:?}",
            bit_depth
        )));
    }
    let (depth, spp) = match color_type {
        ColorType::Grayscale => (PixelDepth::Bit8, 1),
        ColorType::Rgb => (PixelDepth::Bit32, 3),
        ColorType::GrayscaleAlpha | ColorType::Rgba => (PixelDepth::Bit32, 4),
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat("PNG palette left indexed".into()));
        }
    };

    let size = frames
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("PNG frame too large".into()))?;
    let mut buf = vec![0; size];
    let frame = frames.next_frame(&mut buf).map_err(decode_err)?;

    let mut pm = Pix::new(frame.width, frame.height, depth)?.to_mut();
    pm.set_spp(spp);
    pm.set_informat(ImageFormat::Png);

    let samples = color_type.samples();
    let rows = buf[..frame.buffer_size()].chunks(frame.line_size);
    for (y, row) in (0..frame.height).zip(rows) {
        for (x, px) in (0..frame.width).zip(row.chunks_exact(samples)) {
            let val = match *px {
                [v] => u32::from(v),
                [v, a] => color::compose_rgba(v, v, v, a),
                [r, g, b] => color::compose_rgb(r, g, b),
                [r, g, b, a, ..] => color::compose_rgba(r, g, b, a),
                [] => 0,
            };
            pm.set_pixel_unchecked(x, y, val);
        }
    }

    Ok(pm.into())
}

/// Encode `pix` as an 8-bit PNG: gray for 8-bit images, RGB for 32-bit
/// ones, RGBA when the image carries four samples.
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let color_type = match (pix.depth(), pix.spp()) {
        (PixelDepth::Bit8, _) => ColorType::Grayscale,
        (PixelDepth::Bit32, 4) => ColorType::Rgba,
        (PixelDepth::Bit32, _) => ColorType::Rgb,
    };

    let mut encoder = Encoder::new(writer, pix.width(), pix.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);
    let mut out = encoder.write_header().map_err(encode_err)?;

    let mut data = Vec::with_capacity(pix.pixel_count() as usize * color_type.samples());
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            let val = pix.get_pixel_unchecked(x, y);
            let rgba = color::extract_rgba(val);
            match color_type {
                ColorType::Grayscale => data.push(val as u8),
                ColorType::Rgb => data.extend_from_slice(&[rgba.0, rgba.1, rgba.2]),
                _ => data.extend_from_slice(&[rgba.0, rgba.1, rgba.2, rgba.3]),
            }
        }
    }

    out.write_image_data(&data).map_err(encode_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_png_roundtrip_grayscale() {
        let pix = Pix::new(10, 10, PixelDepth::Bit8).unwrap();
        let mut pix_mut = pix.try_into_mut().unwrap();

        for y in 0..10 {
            for x in 0..10 {
                pix_mut.set_pixel(x, y, (x + y) * 10).unwrap();
            }
        }

        let pix: Pix = pix_mut.into();

        let mut buffer = Vec::new();
        write_png(&pix, &mut buffer).unwrap();

        let pix2 = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(pix2.width(), 10);
        assert_eq!(pix2.height(), 10);
        assert_eq!(pix2.depth(), PixelDepth::Bit8);
        assert_eq!(pix2.informat(), ImageFormat::Png);

        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(pix2.get_pixel(x, y), pix.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn test_png_roundtrip_rgb() {
        let pix = Pix::new(5, 5, PixelDepth::Bit32).unwrap();
        let mut pix_mut = pix.try_into_mut().unwrap();

        pix_mut.set_rgb(0, 0, 255, 0, 0).unwrap();
        pix_mut.set_rgb(1, 1, 0, 255, 0).unwrap();
        pix_mut.set_rgb(2, 2, 0, 0, 255).unwrap();

        let pix: Pix = pix_mut.into();

        let mut buffer = Vec::new();
        write_png(&pix, &mut buffer).unwrap();

        let pix2 = read_png(Cursor::new(buffer)).unwrap();

        assert_eq!(pix2.spp(), 3);
        assert_eq!(pix2.get_rgb(0, 0), Some((255, 0, 0)));
        assert_eq!(pix2.get_rgb(1, 1), Some((0, 255, 0)));
        assert_eq!(pix2.get_rgb(2, 2), Some((0, 0, 255)));
    }

    #[test]
    fn test_png_expands_palette() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::Indexed);
            encoder.set_depth(BitDepth::Eight);
            encoder.set_palette(vec![10, 20, 30, 200, 210, 220]);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[1, 0]).unwrap();
        }

        let pix = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(pix.depth(), PixelDepth::Bit32);
        assert_eq!(pix.get_rgb(0, 0), Some((200, 210, 220)));
        assert_eq!(pix.get_rgb(1, 0), Some((10, 20, 30)));
    }

    #[test]
    fn test_png_rejects_garbage() {
        let data = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 1, 2, 3];
        assert!(read_png(Cursor::new(data)).is_err());
    }
}
