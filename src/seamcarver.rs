// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The main seamcarver routine, with the seam remover it drives.
//!
//! The energy map is computed once, from the source image, and is then
//! carved in lockstep with the image: when a seam goes, the energies
//! to its right slide over just like the pixels do.  The energies are
//! never recomputed from the carved pixels, so the map goes a little
//! stale as the run goes on.  Only the cost map is rebuilt per seam.
//!
//! Height is carved by turning both maps a quarter turn to the right,
//! carving "width", and turning the image back.

use crate::energy::{calculate_energy, EnergyMap};
use crate::error::CarveError;
use crate::flipper::Rotate;
use crate::seamfinder::SeamFinder;
use crate::twodmap::TwoDimensionalMap;
use image::{Pixel, Primitive};
use log::{debug, trace};
use std::convert::TryFrom;

/// Take a vertical seam out of both the image and its energy map.
/// Everything right of the seam moves one cell left, and both maps
/// lose their last column.
pub fn remove_vertical_seam<P: Copy>(
    seam: &[u32],
    energy: &mut EnergyMap,
    image: &mut TwoDimensionalMap<P>,
) -> Result<(), CarveError> {
    let (width, height) = image.dimensions();
    if energy.dimensions() != (width, height)
        || seam.len() != height as usize
        || seam.iter().any(|x| *x >= width)
    {
        return Err(CarveError::SeamMismatch {
            length: seam.len(),
            width,
            height,
        });
    }

    // Rows don't depend on each other; the seam pixel rotates out to
    // the garbage end of the logical row.
    for ((erow, irow), x) in energy.rows_mut().zip(image.rows_mut()).zip(seam) {
        erow[*x as usize..].rotate_left(1);
        irow[*x as usize..].rotate_left(1);
    }
    energy.shrink_width();
    image.shrink_width();
    Ok(())
}

/// Validate a requested size against the source.  Targets must be at
/// least one pixel and no larger than the source: seam carving cannot
/// upscale, and a request to do so is an error, not a no-op.
pub fn check_target(
    (width, height): (u32, u32),
    target_width: i64,
    target_height: i64,
) -> Result<(u32, u32), CarveError> {
    let fits = |target: i64, limit: u32| {
        u32::try_from(target)
            .ok()
            .filter(|t| *t >= 1 && *t <= limit)
    };
    match (fits(target_width, width), fits(target_height, height)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(CarveError::InvalidTarget {
            width,
            height,
            target_width,
            target_height,
        }),
    }
}

/// A struct for holding the image being carved, along with its
/// (progressively staler) energy map.
pub struct SeamCarver<P: Copy> {
    image: TwoDimensionalMap<P>,
    energy: EnergyMap,
}

impl<P, S> SeamCarver<P>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Creates a new SeamCarver, computing the energy map up front.
    pub fn new(image: TwoDimensionalMap<P>) -> Self {
        let energy = calculate_energy(&image);
        SeamCarver { image, energy }
    }

    pub fn image(&self) -> &TwoDimensionalMap<P> {
        &self.image
    }

    pub fn energy(&self) -> &EnergyMap {
        &self.energy
    }

    /// Remove `count` vertical seams.
    pub fn carve_width(&mut self, count: u32) -> Result<(), CarveError> {
        for n in 0..count {
            let seam = self.energy.find_vertical_seam()?;
            trace!("seam {}/{}: starts at x = {}", n + 1, count, seam[0]);
            remove_vertical_seam(&seam, &mut self.energy, &mut self.image)?;
        }
        Ok(())
    }

    /// Remove `count` horizontal seams, by way of a quarter turn.
    pub fn carve_height(&mut self, count: u32) -> Result<(), CarveError> {
        if count == 0 {
            return Ok(());
        }
        self.image.rotate_right();
        self.energy.rotate_right();
        let carved = self.carve_width(count);
        self.image.rotate_left();
        self.energy.rotate_left();
        carved
    }

    /// Given a desired new width and height, carve away vertical seams
    /// until the width fits, then horizontal ones until the height
    /// does.
    pub fn carve(
        mut self,
        newwidth: u32,
        newheight: u32,
    ) -> Result<TwoDimensionalMap<P>, CarveError> {
        let (width, height) = self.image.dimensions();
        let (newwidth, newheight) =
            check_target((width, height), i64::from(newwidth), i64::from(newheight))?;
        debug!(
            "carving {}x{} to {}x{}: {} vertical, {} horizontal seams",
            width,
            height,
            newwidth,
            newheight,
            width - newwidth,
            height - newheight
        );
        self.carve_width(width - newwidth)?;
        self.carve_height(height - newheight)?;
        Ok(self.image)
    }
}

/// Given an image and a desired new width and height, repeatedly carve
/// seams out of the image.
pub fn seamcarve<P, S>(
    image: TwoDimensionalMap<P>,
    newwidth: u32,
    newheight: u32,
) -> Result<TwoDimensionalMap<P>, CarveError>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    SeamCarver::new(image).carve(newwidth, newheight)
}
