#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

use std::path::Path;

use image::{Rgb, RgbImage};

use grid::Grid2;
use report::Report;

pub mod grid;
pub mod report;

/// Grid dimensions in tiles.
pub const GRID: Grid2 = Grid2([10, 10]);

/// Tile edge in pixels.
pub const TILE_SIZE: u32 = 30;

/// Number of boards in the generated sequence.
pub const SEQUENCE_LEN: u32 = 100;

/// Background color of unfilled tiles.
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Fill color of filled tiles.
pub const FILL: Rgb<u8> = Rgb([0, 0, 0]);

/// Gets the pixel size of a rendered board as `[width, height]`.
pub fn board_size() -> [u32; 2] {
    [GRID.0[0] * TILE_SIZE, GRID.0[1] * TILE_SIZE]
}

/// Caps a requested fill count to the tiles available in the grid.
///
/// Negative counts yield zero fills, counts above the grid fill every tile.
pub fn fill_limit(filled_count: i64) -> u32 {
    filled_count.clamp(0, GRID.len() as i64) as u32
}

/// Renders a board into an existing image.
///
/// A pixel takes the fill color when its tile has a row-major index
/// below `filled_count`, otherwise the background color.
/// Pixels outside the grid stay background.
pub fn render_to_image(filled_count: i64, img: &mut RgbImage) {
    let fills = fill_limit(filled_count);
    let (w, h) = img.dimensions();
    for y in 0..h {
        for x in 0..w {
            let pixel = img.get_pixel_mut(x, y);
            let filled = match GRID.index([x / TILE_SIZE, y / TILE_SIZE]) {
                Some(i) => i < fills,
                None => false,
            };
            *pixel = if filled {FILL} else {BACKGROUND};
        }
    }
}

/// Renders a fresh board image with the first `filled_count` tiles filled.
pub fn render_board(filled_count: i64) -> RgbImage {
    let size = board_size();
    let mut img = RgbImage::new(size[0], size[1]);
    render_to_image(filled_count, &mut img);
    img
}

/// Gets the output file name for a sequence number.
pub fn board_filename(file_number: u32) -> String {
    format!("board_{}.jpg", file_number)
}

/// Renders the board for `file_number` and writes it under `dir`.
pub fn gen_board(dir: &Path, file_number: u32) -> anyhow::Result<()> {
    let img = render_board(file_number as i64);
    img.save(dir.join(board_filename(file_number)))?;
    Ok(())
}

/// Generates the full board sequence using a single thread.
///
/// Writes `board_1.jpg` through `board_100.jpg` into `dir`, stopping
/// at the first save error.
pub fn gen_sequence(dir: &Path, r: Report) -> anyhow::Result<()> {
    let ref mut rs = r.start();
    for file_number in 1..=SEQUENCE_LEN {
        gen_board(dir, file_number)?;
        if r.update(rs, file_number) {
            eprintln!("{:.2} %", 100.0 * file_number as f64 / SEQUENCE_LEN as f64);
        }
    }
    Ok(())
}

/// Generates the full board sequence using Rayon.
///
/// Boards are independent, so rendering and saving run across threads.
/// The first save error stops the remaining work.
pub fn par_gen_sequence(dir: &Path) -> anyhow::Result<()> {
    use rayon::iter::ParallelIterator;
    use rayon::iter::IntoParallelIterator;

    (1..=SEQUENCE_LEN).into_par_iter()
        .try_for_each(|file_number| gen_board(dir, file_number))
}
