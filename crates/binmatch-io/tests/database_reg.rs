//! Database loading regression test
//!
//! Builds a throwaway directory of PNG and JPEG files (plus a few files
//! that must be skipped) and checks what the loader keeps and in which order.
//!
//! Run with:
//! ```
//! cargo test -p binmatch-io --test database_reg
//! ```

use binmatch_io::{load_database, write_png};
use binmatch_test::RegParams;
use binmatch_core::PixelDepth;
use binmatch_test::fixtures::{make_two_level_gray, make_uniform_rgb};
use jpeg_encoder::{ColorType, Encoder};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

fn save_png(dir: &Path, name: &str, pix: &binmatch_core::Pix) {
    let file = File::create(dir.join(name)).expect("create");
    write_png(pix, BufWriter::new(file)).expect("write png");
}

fn save_gray_jpeg(dir: &Path, name: &str, val: u8, w: u16, h: u16) {
    let data = vec![val; usize::from(w) * usize::from(h)];
    let mut buf = Vec::new();
    Encoder::new(&mut buf, 95)
        .encode(&data, w, h, ColorType::Luma)
        .expect("encode jpeg");
    fs::write(dir.join(name), buf).expect("write jpeg");
}

#[test]
fn database_reg() {
    let mut rp = RegParams::new("database");
    let tmp = tempfile::tempdir().expect("tempdir");
    let dir = tmp.path();

    let gray = make_two_level_gray(0, 255, 10, 8, 4).expect("gray");
    let rgb = make_uniform_rgb(200, 10, 10, 5, 5).expect("rgb");

    // Written out of lexical order on purpose
    save_png(dir, "zeta.png", &gray);
    save_png(dir, "alpha.PNG", &rgb);
    save_png(dir, "mid.png", &gray);
    save_gray_jpeg(dir, "Mouse.JPG", 240, 17, 9);
    fs::write(dir.join("broken.jpg"), b"\xFF\xD8 not really a jpeg").expect("write");
    fs::write(dir.join("readme.txt"), b"ignored").expect("write");
    fs::create_dir(dir.join("folder.png")).expect("mkdir");

    let db = load_database(dir).expect("load");

    // --- Only decodable regular image files are kept ---
    rp.compare_values(4.0, db.len() as f64, 0.0);
    rp.check(db.get("broken.jpg").is_none(), "undecodable file skipped");
    rp.check(db.get("readme.txt").is_none(), "text file skipped");
    rp.check(db.get("folder.png").is_none(), "directory skipped");

    // --- Byte-wise filename order, uppercase first ---
    let names: Vec<&str> = db.names().collect();
    rp.compare_strings("Mouse.JPG,alpha.PNG,mid.png,zeta.png", &names.join(","));

    // --- Decoded content survives ---
    if let Some(pix) = db.get("mid.png") {
        rp.compare_pix(&gray, pix);
        rp.compare_values(10.0, pix.count_pixels_with_value(255).unwrap_or(0) as f64, 0.0);
    } else {
        rp.check(false, "mid.png present");
    }
    if let Some(pix) = db.get("alpha.PNG") {
        rp.compare_values(32.0, pix.depth().bits() as f64, 0.0);
        rp.compare_pix(&rgb, pix);
    } else {
        rp.check(false, "alpha.PNG present");
    }

    if let Some(pix) = db.get("Mouse.JPG") {
        rp.compare_values(17.0, pix.width() as f64, 0.0);
        rp.compare_values(9.0, pix.height() as f64, 0.0);
        rp.check(pix.depth() == PixelDepth::Bit8, "gray JPEG decodes to 8 bpp");
        rp.compare_values(240.0, pix.get_pixel(0, 0).unwrap_or(0) as f64, 2.0);
    } else {
        rp.check(false, "Mouse.JPG present");
    }

    // --- Missing directory is created and yields an empty database ---
    let fresh = dir.join("database_images");
    let empty = load_database(&fresh).expect("load missing");
    rp.check(empty.is_empty(), "missing directory gives empty database");
    rp.check(fresh.is_dir(), "missing directory created");

    assert!(rp.cleanup(), "database regression test failed");
}
