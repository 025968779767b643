// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The optimal seam: a shortest path through the energy map by
//! dynamic programming.
//!
//! The first step of the DP table holds the native energies.  Every
//! later cell holds its own energy plus the cheapest of the (up to)
//! three cells it can be reached from, and remembers which one that
//! was.  The cheapest cell of the last step is then walked back to
//! the first.  Costs accumulate in `f64`.

use crate::axis::Axis;
use crate::error::Result;
use crate::flipper::{neighbors, Flipper};
use crate::seamfinder::{check_energy, SeamFinder};
use crate::twodmap::{EnergyAndBackPointer, EnergyMap, TwoDimensionalMap};

/// Minimum-total-energy seam finder.
#[derive(Debug, Default, Copy, Clone)]
pub struct Optimal;

// The DP table is always laid out in seam terms (x = position,
// y = step) whatever the axis, so it is filled in row order.
fn fill_table(view: &Flipper<f64>) -> TwoDimensionalMap<EnergyAndBackPointer> {
    let (steps, span) = (view.steps(), view.span());
    let mut table: TwoDimensionalMap<EnergyAndBackPointer> = TwoDimensionalMap::new(span, steps);

    for pos in 0..span {
        table[(pos, 0)] = EnergyAndBackPointer {
            energy: view.get(pos, 0),
            parent: pos,
        };
    }

    for step in 1..steps {
        for pos in 0..span {
            // Straight on wins ties, then the lower index, then the
            // higher; only a strictly cheaper candidate displaces the
            // current best.
            let mut best = pos;
            for candidate in neighbors(pos, span).skip(1) {
                if table[(candidate, step - 1)].energy < table[(best, step - 1)].energy {
                    best = candidate;
                }
            }
            table[(pos, step)] = EnergyAndBackPointer {
                energy: view.get(pos, step) + table[(best, step - 1)].energy,
                parent: best,
            };
        }
    }
    table
}

fn backtrack(table: &TwoDimensionalMap<EnergyAndBackPointer>) -> Vec<usize> {
    let (span, steps) = table.dimensions();
    let last = steps - 1;

    // Lowest index wins ties on the last step.
    let mut seam_pos = (1..span).fold(0, |best, pos| {
        if table[(pos, last)].energy < table[(best, last)].energy {
            pos
        } else {
            best
        }
    });

    // Working backwards, collect the position at every step, then
    // flip the list round.
    let mut path = Vec::with_capacity(steps);
    for step in (0..steps).rev() {
        path.push(seam_pos);
        seam_pos = table[(seam_pos, step)].parent;
    }
    path.reverse();
    path
}

/// Find the seam with the least total energy along `axis`.  Fails with
/// `EmptyEnergyMap` when the map has no cells.
pub fn find_seam_optimal(energy: &EnergyMap, axis: Axis) -> Result<Vec<usize>> {
    check_energy(energy)?;
    let view = Flipper::new(energy, axis);
    Ok(backtrack(&fill_table(&view)))
}

impl SeamFinder for Optimal {
    fn find_seam(&self, energy: &EnergyMap, axis: Axis) -> Result<Vec<usize>> {
        find_seam_optimal(energy, axis)
    }
}
