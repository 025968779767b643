// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Map dimensional flipper
//!
//! A read-only view of a `TwoDimensionalMap` addressed in seam terms:
//! a *step* is one entry of the seam (a row for a vertical seam, a
//! column for a horizontal one), and a *position* is where along that
//! step the seam sits.  Under a horizontal axis the view swaps x and
//! y, so the seam searches are written once, top to bottom, and the
//! horizontal case falls out for free.

use crate::axis::Axis;
use crate::twodmap::TwoDimensionalMap;

pub(crate) struct Flipper<'a, P: Default + Copy> {
    map: &'a TwoDimensionalMap<P>,
    axis: Axis,
}

impl<'a, P: Default + Copy> Flipper<'a, P> {
    pub fn new(map: &'a TwoDimensionalMap<P>, axis: Axis) -> Self {
        Flipper { map, axis }
    }

    /// How many entries a seam has.
    pub fn steps(&self) -> usize {
        self.axis.seam_len(self.map.width(), self.map.height())
    }

    /// How many positions each step offers.
    pub fn span(&self) -> usize {
        self.axis.span(self.map.width(), self.map.height())
    }

    pub fn get(&self, pos: usize, step: usize) -> P {
        self.map[self.axis.to_xy(pos, step)]
    }
}

/// The up-to-three positions a seam may move to from `pos`, in
/// tie-break order: straight on, then the lower index, then the
/// higher.  Clipped to `[0, span)`.
pub(crate) fn neighbors(pos: usize, span: usize) -> impl Iterator<Item = usize> {
    let lower = pos.checked_sub(1);
    let upper = if pos + 1 < span { Some(pos + 1) } else { None };
    std::iter::once(pos).chain(lower).chain(upper)
}
