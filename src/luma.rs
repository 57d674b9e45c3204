// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Convert a color map into a padded luma map
//!
//! The luma map is one cell larger than the source on every side, and
//! those border cells are zero.  The edge detector can then evaluate a
//! full 3x3 neighborhood at every source pixel without special cases.

use crate::twodmap::TwoDimensionalMap;
use image::{Pixel, Primitive, Rgb};

/// Intensity on the 16-bit scale, reduced to 8 bits and widened back
/// to a real.  Channels are first stretched to the full 16-bit range,
/// so `u8` channels are multiplied by 257.
#[inline]
pub fn luma_of_pixel<P, S>(p: &P) -> f64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    #[inline]
    fn widen<S: Primitive>(c: S) -> f64 {
        let max = num_traits::cast::cast::<_, f64>(S::DEFAULT_MAX_VALUE).unwrap_or(1.0);
        let c = num_traits::cast::cast::<_, f64>(c).unwrap_or(0.0);
        c * (65535.0 / max)
    }

    let Rgb([r, g, b]) = p.to_rgb();
    let y = (0.299 * widen(r) + 0.587 * widen(g) + 0.114 * widen(b)) / 256.0;
    f64::from(y.floor().max(0.0).min(255.0) as u8)
}

/// R x C colors in, (R + 2) x (C + 2) intensities out.
pub fn padded_luma<P, S>(image: &TwoDimensionalMap<P>) -> TwoDimensionalMap<f64>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    TwoDimensionalMap::from_fn(width + 2, height + 2, |x, y| {
        if x == 0 || y == 0 || x > width || y > height {
            0.0
        } else {
            luma_of_pixel(&image[(x - 1, y - 1)])
        }
    })
}
