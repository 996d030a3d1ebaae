//! Test fixtures: PNG images and palette files written to temp directories.

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use tempfile::TempDir;

/// Catalog colors used across tests
pub mod colors {
    pub const WHITE: &str = "#ffffff";
    pub const BLACK: &str = "#05131d";
    pub const RED: &str = "#c91a09";
    pub const BLUE: &str = "#0055bf";
}

/// A temp directory holding fixture files; removed on drop
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write an RGBA8 PNG built from a pixel closure
    pub fn png(&self, name: &str, width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> PathBuf {
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        self.write(name, &encode_png(width, height, png::ColorType::Rgba, &data))
    }

    /// Write an RGB8 PNG filled with one color
    pub fn solid_rgb_png(&self, name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
        let data = rgb.repeat((width * height) as usize);
        self.write(name, &encode_png(width, height, png::ColorType::Rgb, &data))
    }

    pub fn write(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(&path, content).expect("write fixture");
        path
    }
}

/// Encode 8-bit pixel data as a PNG
pub fn encode_png(width: u32, height: u32, color_type: png::ColorType, data: &[u8]) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("png header");
        writer.write_image_data(data).expect("png data");
    }
    buf.into_inner()
}

/// A four-color catalog in YAML
pub fn basic_palette_yaml() -> String {
    format!(
        "colors:\n  - {{ name: White, hex: \"{}\" }}\n  - {{ name: Black, hex: \"{}\" }}\n  - {{ name: Red, hex: \"{}\" }}\n  - {{ name: Blue, hex: \"{}\" }}\n",
        colors::WHITE,
        colors::BLACK,
        colors::RED,
        colors::BLUE
    )
}

/// Four 2x2-tile quadrants: red, green / blue, white
pub fn quadrant_pixel(size: u32) -> impl Fn(u32, u32) -> [u8; 4] {
    move |x, y| match (y < size / 2, x < size / 2) {
        (true, true) => [255, 0, 0, 255],
        (true, false) => [0, 255, 0, 255],
        (false, true) => [0, 0, 255, 255],
        (false, false) => [255, 255, 255, 255],
    }
}
