// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The two-dimensional map
//!
//! An addressable two-dimensional field holding one of the several
//! kinds of cell the carver works with: a pixel for the image being
//! carved, an `f64` for the luma, edge and cost maps.
//!
//! The map remembers the row stride it was allocated with.  Removing
//! a seam only narrows the logical width; the trailing cells of each
//! row stay in the buffer as garbage, unreachable through `width`.
//! Only a transpose reallocates, and it packs the rows as it goes.

use itertools::iproduct;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone)]
pub struct TwoDimensionalMap<P: Copy> {
    width: u32,
    height: u32,
    stride: u32,
    data: Vec<P>,
}

impl<P: Copy + Default> TwoDimensionalMap<P> {
    /// Define a new map filled with the content type's default.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, P::default())
    }
}

impl<P: Copy> TwoDimensionalMap<P> {
    /// Define a new map with every cell set to `value`.
    pub fn filled(width: u32, height: u32, value: P) -> Self {
        TwoDimensionalMap {
            width,
            height,
            stride: width,
            data: vec![value; width as usize * height as usize],
        }
    }

    /// Wrap a row-major buffer.  Returns `None` if the buffer is not
    /// exactly `width * height` long.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            stride: width,
            data,
        })
    }

    /// Build a map by calling `f(x, y)` for every cell, row-major.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> P,
    {
        let data = iproduct!(0..height, 0..width)
            .map(|(y, x)| f(x, y))
            .collect();
        TwoDimensionalMap {
            width,
            height,
            stride: width,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The allocated row length.  Never less than `width`.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "({}, {}) outside {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * (self.stride as usize) + (x as usize)
    }

    /// Get the value at a single cell's address
    pub fn get(&self, x: u32, y: u32) -> P {
        self.data[self.get_index(x, y)]
    }

    /// Set a value at a single cell's address
    pub fn set(&mut self, x: u32, y: u32, value: P) {
        let index = self.get_index(x, y);
        self.data[index] = value;
    }

    /// Visit every logical cell in row-major order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(u32, u32, P),
    {
        iproduct!(0..self.height, 0..self.width).for_each(|(y, x)| f(x, y, self.get(x, y)))
    }

    /// The logical cells of row `y`.
    pub fn row(&self, y: u32) -> &[P] {
        let start = (y as usize) * (self.stride as usize);
        &self.data[start..start + self.width as usize]
    }

    /// Every logical row, top to bottom.  Garbage past `width` is
    /// never exposed.
    pub fn rows(&self) -> impl Iterator<Item = &[P]> {
        let width = self.width as usize;
        self.data
            .chunks(self.stride.max(1) as usize)
            .take(self.height as usize)
            .map(move |row| &row[..width])
    }

    /// Mutable access to every logical row, top to bottom.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [P]> {
        let width = self.width as usize;
        self.data
            .chunks_mut(self.stride.max(1) as usize)
            .take(self.height as usize)
            .map(move |row| &mut row[..width])
    }

    /// The whole buffer, row-major, for a map that has never been
    /// shrunk.  Lets a producer fill a fresh map in bands.
    pub(crate) fn packed_cells_mut(&mut self) -> &mut [P] {
        debug_assert_eq!(self.width, self.stride, "map has been shrunk");
        &mut self.data[..]
    }

    /// Drop the last logical column.  The buffer is untouched; whoever
    /// calls this is responsible for having shifted the survivors
    /// left first.
    pub fn shrink_width(&mut self) {
        debug_assert!(self.width > 0, "cannot shrink an empty map");
        self.width -= 1;
    }

    /// Reallocate with rows and columns exchanged.  The new stride is
    /// the new width, so any garbage left by shrinking is discarded.
    pub fn transpose(&mut self) {
        let (width, height) = (self.width, self.height);
        let data = iproduct!(0..width, 0..height)
            .map(|(x, y)| self.get(x, y))
            .collect();
        self.data = data;
        self.width = height;
        self.height = width;
        self.stride = height;
    }

    /// Swap row `y` with row `height - 1 - y`, in place.
    pub fn flip_vertical(&mut self) {
        let (width, stride) = (self.width as usize, self.stride as usize);
        let height = self.height as usize;
        for y in 0..height / 2 {
            let mirror = height - 1 - y;
            let (upper, lower) = self.data.split_at_mut(mirror * stride);
            upper[y * stride..y * stride + width].swap_with_slice(&mut lower[..width]);
        }
    }
}

impl<P: Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}
