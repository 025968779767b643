// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A fast, approximate seam: start at the cheapest cell of the first
//! step and walk forward, always taking the cheapest of the three
//! cells adjacent to the last one.  No table, no backtracking, and no
//! promise that the result is the cheapest seam.

use crate::axis::Axis;
use crate::error::Result;
use crate::flipper::{neighbors, Flipper};
use crate::seamfinder::{check_energy, SeamFinder};
use crate::twodmap::EnergyMap;

/// Greedy local-minimum seam finder.
#[derive(Debug, Default, Copy, Clone)]
pub struct Greedy;

/// Walk a seam along `axis` by local minima.  Fails with
/// `EmptyEnergyMap` when the map has no cells.
pub fn find_seam_greedy(energy: &EnergyMap, axis: Axis) -> Result<Vec<usize>> {
    check_energy(energy)?;
    let view = Flipper::new(energy, axis);
    let (steps, span) = (view.steps(), view.span());

    // Lowest index wins ties on the first step.
    let start = (1..span).fold(0, |best, pos| {
        if view.get(pos, 0) < view.get(best, 0) {
            pos
        } else {
            best
        }
    });

    let mut path = Vec::with_capacity(steps);
    path.push(start);
    for step in 1..steps {
        let prev = path[step - 1];
        // Keeping the previous position wins ties over moving.
        let next = neighbors(prev, span).fold(prev, |best, pos| {
            if view.get(pos, step) < view.get(best, step) {
                pos
            } else {
                best
            }
        });
        path.push(next);
    }
    Ok(path)
}

impl SeamFinder for Greedy {
    fn find_seam(&self, energy: &EnergyMap, axis: Axis) -> Result<Vec<usize>> {
        find_seam_greedy(energy, axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CarveError;
    use crate::seamfinder::is_connected;

    fn map(width: usize, height: usize, data: &[f64]) -> EnergyMap {
        EnergyMap::from_vec(width, height, data.to_vec()).unwrap()
    }

    #[test]
    fn follows_local_minima() {
        let energy = map(
            4,
            4,
            &[
                5.0, 1.0, 5.0, 5.0, //
                5.0, 5.0, 2.0, 5.0, //
                5.0, 5.0, 5.0, 0.0, //
                5.0, 5.0, 3.0, 5.0,
            ],
        );
        assert_eq!(find_seam_greedy(&energy, Axis::Vertical).unwrap(), vec![1, 2, 3, 2]);
    }

    #[test]
    fn right_neighbour_beats_left_when_strictly_cheaper() {
        // The left neighbour is cheaper than straight on, the right one
        // cheaper still: the walk has to end up on the right.
        let energy = map(3, 2, &[9.0, 0.0, 9.0, 2.0, 5.0, 1.0]);
        assert_eq!(find_seam_greedy(&energy, Axis::Vertical).unwrap(), vec![1, 2]);
    }

    #[test]
    fn staying_put_wins_ties() {
        let energy = map(3, 3, &[1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(find_seam_greedy(&energy, Axis::Vertical).unwrap(), vec![1, 1, 1]);
    }

    #[test]
    fn lower_index_wins_ties_when_moving() {
        let energy = map(3, 2, &[9.0, 0.0, 9.0, 1.0, 5.0, 1.0]);
        assert_eq!(find_seam_greedy(&energy, Axis::Vertical).unwrap(), vec![1, 0]);
    }

    #[test]
    fn horizontal_walk_runs_left_to_right() {
        let energy = map(
            4,
            3,
            &[
                5.0, 5.0, 5.0, 0.0, //
                0.0, 5.0, 0.0, 5.0, //
                5.0, 0.0, 5.0, 5.0,
            ],
        );
        let seam = find_seam_greedy(&energy, Axis::Horizontal).unwrap();
        assert_eq!(seam, vec![1, 2, 1, 0]);
        assert!(is_connected(&seam));
    }

    #[test]
    fn empty_map_is_rejected() {
        let energy = EnergyMap::new(4, 0);
        assert_eq!(
            find_seam_greedy(&energy, Axis::Horizontal),
            Err(CarveError::EmptyEnergyMap {
                width: 4,
                height: 0
            })
        );
    }
}
