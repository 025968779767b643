// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving.
//!
//! Image → `compute_energy` → `EnergyMap` → `find_seam_optimal` or
//! `find_seam_greedy` → seam → `remove_seam` (a smaller image) or
//! `visualize_seam` (an annotated copy).  `SeamCarver` strings these
//! together into a session.

pub mod axis;
pub mod error;
mod flipper;
pub mod pixelgrid;
pub mod twodmap;

pub mod energy;
mod greedy;
mod optimal;
pub mod seamfinder;

pub mod remover;
pub mod visualize;

pub mod imageio;
pub mod seamcarver;

pub use axis::Axis;
pub use energy::compute_energy;
pub use error::{CarveError, Result};
pub use greedy::Greedy;
pub use optimal::Optimal;
pub use pixelgrid::{Channels, Color, Image};
pub use remover::remove_seam;
pub use seamcarver::{Energy, Seam, SeamCarver};
pub use seamfinder::{
    find_seam_greedy, find_seam_optimal, is_connected, seam_energy, validate_seam, SeamFinder,
    Strategy,
};
pub use twodmap::{EnergyMap, TwoDimensionalMap};
pub use visualize::visualize_seam;
