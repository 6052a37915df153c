#![cfg(feature = "host")]
//! Host-side PNG previews of [`MonoFrame`]s, handy for eyeballing scenes.

use crate::frame::MonoFrame;
use png::{BitDepth, ColorType, Encoder};
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const LIT_LEVEL: u8 = 0xFF;
const UNLIT_LEVEL: u8 = 0x10;

/// Render a `MonoFrame` into a grayscale PNG no larger than `target_max_dimension` on either side.
///
/// Each panel pixel becomes a square cell; lit pixels are white, unlit ones near-black.
pub fn write_frame_png<const W: usize, const H: usize>(
    frame: &MonoFrame<W, H>,
    output_path: impl AsRef<Path>,
    target_max_dimension: u32,
) -> Result<(), Box<dyn Error>> {
    let output_path = output_path.as_ref();
    let cell_size = select_cell_size(W as u32, H as u32, target_max_dimension);
    let (width, height, pixels) = frame_pixels(frame, cell_size);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(output_path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixels)?;
    writer.finish()?;
    println!("wrote PNG to {}", output_path.display());
    Ok(())
}

/// Largest whole cell size that keeps the image within `target_max_dimension` (at least 1).
fn select_cell_size(panel_width: u32, panel_height: u32, target_max_dimension: u32) -> u32 {
    assert!(target_max_dimension > 0, "target_max_dimension must be positive");
    let longest_side = panel_width.max(panel_height).max(1);
    (target_max_dimension / longest_side).max(1)
}

fn frame_pixels<const W: usize, const H: usize>(
    frame: &MonoFrame<W, H>,
    cell_size: u32,
) -> (u32, u32, Vec<u8>) {
    assert!(cell_size > 0, "cell_size must be positive");
    let width = (W as u32) * cell_size;
    let height = (H as u32) * cell_size;
    let mut bytes = Vec::with_capacity((width * height) as usize);

    for row in &frame.0 {
        let mut scanline = Vec::with_capacity(width as usize);
        for pixel in row {
            let level = if pixel.is_on() { LIT_LEVEL } else { UNLIT_LEVEL };
            scanline.extend(std::iter::repeat_n(level, cell_size as usize));
        }
        for _ in 0..cell_size {
            bytes.extend_from_slice(&scanline);
        }
    }

    (width, height, bytes)
}
