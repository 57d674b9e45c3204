// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong while carving.

use failure::Fail;

#[derive(Debug, Fail)]
pub enum CarveError {
    /// The source bytes were not an image we could read.
    #[fail(display = "could not decode source image: {}", _0)]
    Decode(#[cause] image::ImageError),

    /// The carved image could not be written back out.
    #[fail(display = "could not encode carved image: {}", _0)]
    Encode(#[cause] image::ImageError),

    /// Seam carving only shrinks, and never to nothing.
    #[fail(
        display = "cannot carve a {}x{} image to {}x{}: targets must be between 1 and the source size",
        width, height, target_width, target_height
    )]
    InvalidTarget {
        width: u32,
        height: u32,
        target_width: i64,
        target_height: i64,
    },

    /// A stage was handed a map with no cells in it.
    #[fail(display = "cannot find a seam in a {}x{} map", width, height)]
    DegenerateGrid { width: u32, height: u32 },

    /// A seam that does not describe one cell per row of the map.
    #[fail(
        display = "seam of length {} does not fit a {}x{} map",
        length, width, height
    )]
    SeamMismatch { length: usize, width: u32, height: u32 },
}
