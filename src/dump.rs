// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render intermediate maps as grayscale images, for looking at.

use crate::energy::calculate_energy;
use crate::error::CarveError;
use crate::seamfinder::accumulate_cost;
use crate::twodmap::TwoDimensionalMap;
use image::{GrayImage, Luma, Pixel, Primitive};

/// Scale a map of non-negative reals so its largest cell is 255.  An
/// all-zero map comes out all black.
pub fn map_to_image(map: &TwoDimensionalMap<f64>) -> GrayImage {
    let (width, height) = map.dimensions();
    let mut factor = 0.0f64;
    map.for_each(|_, _, c| factor = factor.max(c));

    let mut out = GrayImage::new(width, height);
    map.for_each(|x, y, c| {
        let v = if factor > 0.0 {
            (c / factor * 255.0).round().max(0.0).min(255.0) as u8
        } else {
            0
        };
        out.put_pixel(x, y, Luma([v]));
    });
    out
}

/// The energy map of an image, as an image.
pub fn compute_edge_map<P, S>(image: &TwoDimensionalMap<P>) -> GrayImage
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    map_to_image(&calculate_energy(image))
}

/// The cost map of an image's first seam search, as an image.
pub fn compute_cost_map<P, S>(image: &TwoDimensionalMap<P>) -> Result<GrayImage, CarveError>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    Ok(map_to_image(&accumulate_cost(&calculate_energy(image))?))
}
