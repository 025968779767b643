// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Owned two-dimensional grids.

use crate::error::{CarveError, Result};
use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field holding one of the values we
/// need during processing: an `f64` for the energy map, or an energy
/// plus a back pointer for the DP table.  Storage is one contiguous
/// row-major `Vec`.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: usize,
    height: usize,
    cells: Vec<P>,
}

/// Per-pixel importance, same extent as the image it came from.
pub type EnergyMap = TwoDimensionalMap<f64>;

fn cell_count(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .ok_or(CarveError::InvalidImage("map extent overflows"))
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// A map of the given extent with every cell at `P::default()`.
    /// Only called with the extent of a grid that already exists, so
    /// the cell count is known to fit.
    pub(crate) fn new(width: usize, height: usize) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![P::default(); width * height],
        }
    }

    /// A map of the given extent with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: P) -> Result<Self> {
        Ok(TwoDimensionalMap {
            width,
            height,
            cells: vec![value; cell_count(width, height)?],
        })
    }

    /// Wrap an existing row-major buffer.  The buffer must hold exactly
    /// `width * height` cells.
    pub fn from_vec(width: usize, height: usize, cells: Vec<P>) -> Result<Self> {
        if cells.len() != cell_count(width, height)? {
            return Err(CarveError::InvalidImage(
                "buffer length does not match width * height",
            ));
        }
        Ok(TwoDimensionalMap {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The cells, row by row.
    pub fn as_slice(&self) -> &[P] {
        &self.cells
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [P] {
        &mut self.cells
    }

    // The index math lives here and nowhere else.  Checking x against
    // the width matters: a too-large x would otherwise silently wrap
    // onto the next row.
    fn get_index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// The value at (x, y), or `None` outside the map.
    pub fn get(&self, x: usize, y: usize) -> Option<&P> {
        self.get_index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut P> {
        match self.get_index(x, y) {
            Some(i) => Some(&mut self.cells[i]),
            None => None,
        }
    }

    /// One full row.
    pub fn row(&self, y: usize) -> Option<&[P]> {
        if y < self.height {
            let start = y * self.width;
            Some(&self.cells[start..start + self.width])
        } else {
            None
        }
    }
}

impl<P: Default + Copy> Index<(usize, usize)> for TwoDimensionalMap<P> {
    type Output = P;

    /// Panics when (x, y) lies outside the map.
    fn index(&self, (x, y): (usize, usize)) -> &P {
        match self.get_index(x, y) {
            Some(i) => &self.cells[i],
            None => panic!(
                "({}, {}) is outside a {}x{} map",
                x, y, self.width, self.height
            ),
        }
    }
}

impl<P: Default + Copy> IndexMut<(usize, usize)> for TwoDimensionalMap<P> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut P {
        let (width, height) = (self.width, self.height);
        match self.get_index(x, y) {
            Some(i) => &mut self.cells[i],
            None => panic!("({}, {}) is outside a {}x{} map", x, y, width, height),
        }
    }
}

/// One cell of the DP table: the cheapest cumulative energy of any
/// seam ending here, and which position in the previous step it came
/// from.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub(crate) struct EnergyAndBackPointer {
    pub energy: f64,
    pub parent: usize,
}
