// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam search front door.
//!
//! A seam is returned as a plain `Vec<usize>`: for a vertical seam,
//! the x coordinate in each row (so its length is the image height);
//! for a horizontal seam, the y coordinate in each column.  Successive
//! entries never differ by more than one.

use crate::axis::Axis;
use crate::error::{CarveError, Result};
use crate::greedy::Greedy;
use crate::optimal::Optimal;
use crate::twodmap::EnergyMap;
use itertools::Itertools;

pub use crate::greedy::find_seam_greedy;
pub use crate::optimal::find_seam_optimal;

/// This trait defines how we get seams out of an energy map.  It's a
/// primitive interface, just enough to make room for more than one
/// search strategy.
pub trait SeamFinder {
    /// Request a seam along `axis`.
    fn find_seam(&self, energy: &EnergyMap, axis: Axis) -> Result<Vec<usize>>;
}

/// Which finder a carving session uses.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Strategy {
    Optimal,
    Greedy,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Optimal
    }
}

impl Strategy {
    pub fn toggle(self) -> Self {
        match self {
            Strategy::Optimal => Strategy::Greedy,
            Strategy::Greedy => Strategy::Optimal,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Optimal => "optimal",
            Strategy::Greedy => "greedy",
        }
    }
}

impl SeamFinder for Strategy {
    fn find_seam(&self, energy: &EnergyMap, axis: Axis) -> Result<Vec<usize>> {
        match self {
            Strategy::Optimal => Optimal.find_seam(energy, axis),
            Strategy::Greedy => Greedy.find_seam(energy, axis),
        }
    }
}

pub(crate) fn check_energy(energy: &EnergyMap) -> Result<()> {
    if energy.is_empty() {
        let (width, height) = energy.dimensions();
        return Err(CarveError::EmptyEnergyMap { width, height });
    }
    Ok(())
}

/// Check that `path` is a well-formed seam along `axis` for a grid of
/// the given extent: one entry per step, each inside the span.
pub fn validate_seam(path: &[usize], axis: Axis, width: usize, height: usize) -> Result<()> {
    let expected = axis.seam_len(width, height);
    if path.len() != expected {
        return Err(CarveError::SeamMismatch {
            expected,
            found: path.len(),
        });
    }
    let bound = axis.span(width, height);
    match path.iter().position(|pos| *pos >= bound) {
        Some(step) => Err(CarveError::SeamOutOfRange {
            step,
            index: path[step],
            bound,
        }),
        None => Ok(()),
    }
}

/// Total energy under a seam.  Used to compare the strategies.
pub fn seam_energy(energy: &EnergyMap, path: &[usize], axis: Axis) -> Result<f64> {
    let (width, height) = energy.dimensions();
    validate_seam(path, axis, width, height)?;
    Ok(path
        .iter()
        .enumerate()
        .map(|(step, pos)| energy[axis.to_xy(*pos, step)])
        .sum())
}

/// True when no two successive entries are more than one apart.
pub fn is_connected(path: &[usize]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| if a > b { a - b <= 1 } else { b - a <= 1 })
}
