// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam orientation.

use std::fmt;

/// Which way a seam runs.  A vertical seam has one entry per row and
/// removes a column; a horizontal seam has one entry per column and
/// removes a row.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    /// The other one.
    pub fn turn(self) -> Self {
        match self {
            Axis::Vertical => Axis::Horizontal,
            Axis::Horizontal => Axis::Vertical,
        }
    }

    /// Number of entries a seam along this axis must have for a grid
    /// of the given extent.
    pub fn seam_len(self, width: usize, height: usize) -> usize {
        match self {
            Axis::Vertical => height,
            Axis::Horizontal => width,
        }
    }

    /// Number of valid positions for each seam entry: every entry must
    /// lie in `[0, span)`.
    pub fn span(self, width: usize, height: usize) -> usize {
        match self {
            Axis::Vertical => width,
            Axis::Horizontal => height,
        }
    }

    // Seam entry `pos` at step `step` as an (x, y) address.
    pub(crate) fn to_xy(self, pos: usize, step: usize) -> (usize, usize) {
        match self {
            Axis::Vertical => (pos, step),
            Axis::Horizontal => (step, pos),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Vertical => write!(f, "vertical"),
            Axis::Horizontal => write!(f, "horizontal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turning_twice_is_identity() {
        assert_eq!(Axis::Vertical.turn(), Axis::Horizontal);
        assert_eq!(Axis::Vertical.turn().turn(), Axis::Vertical);
    }

    #[test]
    fn lengths_follow_orientation() {
        assert_eq!(Axis::Vertical.seam_len(7, 3), 3);
        assert_eq!(Axis::Vertical.span(7, 3), 7);
        assert_eq!(Axis::Horizontal.seam_len(7, 3), 7);
        assert_eq!(Axis::Horizontal.span(7, 3), 3);
        assert_eq!(Axis::Horizontal.to_xy(1, 5), (5, 1));
    }
}
