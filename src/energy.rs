// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the magnitude of the Sobel gradient of the
//! luma map around it.  Nothing fancier: no forward energy, no masks.
//!
//! Every output cell depends only on the (read-only) luma map, so the
//! output can be broken up by `chunks_mut` into bands of rows and each
//! band handed to its own thread.  That's what the `threaded` feature
//! does; without it the bands are filled one after another.

use crate::luma::padded_luma;
use crate::twodmap::TwoDimensionalMap;
use image::{Pixel, Primitive};
use log::debug;

/// Per-pixel gradient magnitudes, the same size as the image.
pub type EnergyMap = TwoDimensionalMap<f64>;

// Row-major over the 3x3 neighborhood, top-left first.
const SOBEL_X: [f64; 9] = [-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0];
const SOBEL_Y: [f64; 9] = [-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0];

/// Gradient magnitude of the cell whose neighborhood in the padded
/// map is centered at `(x + 1, y + 1)`.
#[inline]
fn sobel_at(luma: &TwoDimensionalMap<f64>, x: u32, y: u32) -> f64 {
    let (mut gx, mut gy) = (0.0, 0.0);
    for (k, (sx, sy)) in SOBEL_X.iter().zip(SOBEL_Y.iter()).enumerate() {
        let n = luma[(x + (k % 3) as u32, y + (k / 3) as u32)];
        gx += sx * n;
        gy += sy * n;
    }
    (gx * gx + gy * gy).sqrt()
}

// Fill a band of output rows.  `first_row` is the band's first row in
// the unpadded image.
fn fill_band(luma: &TwoDimensionalMap<f64>, band: &mut [f64], width: usize, first_row: u32) {
    for (dy, row) in band.chunks_mut(width).enumerate() {
        let y = first_row + dy as u32;
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = sobel_at(luma, x as u32, y);
        }
    }
}

#[cfg(not(feature = "threaded"))]
fn fill_rows(luma: &TwoDimensionalMap<f64>, out: &mut [f64], width: usize) {
    fill_band(luma, out, width, 0);
}

#[cfg(feature = "threaded")]
fn fill_rows(luma: &TwoDimensionalMap<f64>, out: &mut [f64], width: usize) {
    let height = out.len() / width;
    let rows_per_band = (height + num_cpus::get() - 1) / num_cpus::get();
    crossbeam::scope(|scope| {
        for (i, band) in out.chunks_mut(rows_per_band * width).enumerate() {
            let first_row = (i * rows_per_band) as u32;
            scope.spawn(move |_| fill_band(luma, band, width, first_row));
        }
    })
    .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
}

/// (R + 2) x (C + 2) padded luma in, R x C gradient magnitudes out.
pub fn sobel_energy(luma: &TwoDimensionalMap<f64>) -> EnergyMap {
    let (width, height) = (
        luma.width().saturating_sub(2),
        luma.height().saturating_sub(2),
    );
    let mut energy = EnergyMap::new(width, height);
    let out = energy.packed_cells_mut();
    if !out.is_empty() {
        fill_rows(luma, out, width as usize);
    }
    debug!("computed {}x{} energy map", width, height);
    energy
}

/// Compute the energy of every pixel in an image.
pub fn calculate_energy<P, S>(image: &TwoDimensionalMap<P>) -> EnergyMap
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    sobel_energy(&padded_luma(image))
}
