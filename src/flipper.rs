// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Map dimensional flipper
//!
//! Rotating a map a quarter turn makes every horizontal seam a
//! vertical one, so the carver only ever needs to know how to find
//! and remove seams that run top to bottom.  Turn right, carve, turn
//! left again.

use crate::twodmap::TwoDimensionalMap;

pub trait Rotate {
    /// A quarter turn clockwise: the bottom-left cell becomes the
    /// top-left one.
    fn rotate_right(&mut self);

    /// A quarter turn counter-clockwise; undoes `rotate_right`.
    fn rotate_left(&mut self);
}

impl<P: Copy> Rotate for TwoDimensionalMap<P> {
    fn rotate_right(&mut self) {
        self.flip_vertical();
        self.transpose();
    }

    fn rotate_left(&mut self) {
        self.transpose();
        self.flip_vertical();
    }
}
