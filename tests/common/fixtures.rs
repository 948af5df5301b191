//! Test fixtures: images synthesized in memory and written to temp dirs.

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};

/// Exact colors of the built-in six-color palette
pub mod six_color {
    pub const BLACK: [u8; 3] = [0, 0, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const YELLOW: [u8; 3] = [255, 255, 0];
    pub const RED: [u8; 3] = [200, 80, 50];
    pub const BLUE: [u8; 3] = [100, 120, 180];
    pub const GREEN: [u8; 3] = [200, 200, 80];
}

/// Landscape image split into four solid quadrants (TL, TR, BL, BR)
pub fn quadrants(width: u32, height: u32, colors: [[u8; 3]; 4]) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let right = x >= width / 2;
        let bottom = y >= height / 2;
        Rgb(colors[(bottom as usize) * 2 + right as usize])
    })
}

/// Horizontal gray ramp from black to white
pub fn gray_ramp(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        let v = (x * 255 / (width - 1).max(1)) as u8;
        Rgb([v, v, v])
    })
}

/// Save `img` as PNG under `dir` and return its path
pub fn write_png(dir: &Path, name: &str, img: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).expect("Failed to write test image");
    path
}

/// Write a YAML config file under `dir` and return its path
pub fn write_config(dir: &Path, yaml: &str) -> PathBuf {
    let path = dir.join("epaper.yaml");
    std::fs::write(&path, yaml).expect("Failed to write config");
    path
}

/// Small panel and two-color palette to keep integration tests fast
pub const SMALL_CONFIG: &str = r##"
panels:
  tiny:
    width: 80
    height: 48
  odd:
    width: 81
    height: 48
palettes:
  duo:
    - { name: black, color: "#000000", code: 0 }
    - { name: white, color: "#FFFFFF", code: 1 }
defaults:
  panel: tiny
  palette: duo
  fit: crop
  dither: true
"##;
