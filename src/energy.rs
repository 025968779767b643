// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The image is reduced to luminance, the two directional derivatives
//! are taken with the 3×3 Sobel kernels, and the energy of a pixel is
//! the gradient magnitude `sqrt(gx² + gy²)`.  Out-of-bounds neighbours
//! are replaced by the nearest edge pixel, so nothing is ever read
//! outside the image.
//!
//! With the `threaded` feature the rows of the output are split into
//! bands and each band is filled on its own thread.  Every cell
//! depends only on the fixed 3×3 neighbourhood of the luminance plane,
//! so the result is the same either way.

use crate::error::{CarveError, Result};
use crate::pixelgrid::Image;
use crate::twodmap::{EnergyMap, TwoDimensionalMap};

// Clamp a signed neighbour offset into [0, len).
#[inline]
fn replicate(i: usize, delta: isize, len: usize) -> usize {
    if delta < 0 {
        i.saturating_sub(1)
    } else if delta > 0 && i + 1 < len {
        i + 1
    } else {
        i
    }
}

fn luminance(image: &Image) -> TwoDimensionalMap<f64> {
    let (width, height) = image.dimensions();
    let mut plane = TwoDimensionalMap::new(width, height);
    for y in 0..height {
        for x in 0..width {
            plane[(x, y)] = image.luma_at(x, y);
        }
    }
    plane
}

// Sobel magnitude at (x, y).
//
//        [-1 0 1]          [-1 -2 -1]
//   gx = [-2 0 2]     gy = [ 0  0  0]
//        [-1 0 1]          [ 1  2  1]
#[inline]
fn gradient_magnitude(plane: &TwoDimensionalMap<f64>, x: usize, y: usize) -> f64 {
    let (width, height) = plane.dimensions();
    let (xl, xr) = (replicate(x, -1, width), replicate(x, 1, width));
    let (yu, yd) = (replicate(y, -1, height), replicate(y, 1, height));
    let p = |x, y| plane[(x, y)];

    let gx = (p(xr, yu) + 2.0 * p(xr, y) + p(xr, yd)) - (p(xl, yu) + 2.0 * p(xl, y) + p(xl, yd));
    let gy = (p(xl, yd) + 2.0 * p(x, yd) + p(xr, yd)) - (p(xl, yu) + 2.0 * p(x, yu) + p(xr, yu));
    (gx * gx + gy * gy).sqrt()
}

// Fill `rows`, which holds whole output rows starting at `first_row`.
fn fill_rows(plane: &TwoDimensionalMap<f64>, first_row: usize, rows: &mut [f64]) {
    let width = plane.width();
    for (offset, row) in rows.chunks_mut(width).enumerate() {
        let y = first_row + offset;
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = gradient_magnitude(plane, x, y);
        }
    }
}

#[cfg(not(feature = "threaded"))]
fn fill_energy(plane: &TwoDimensionalMap<f64>, energy: &mut EnergyMap) {
    fill_rows(plane, 0, energy.as_mut_slice());
}

#[cfg(feature = "threaded")]
fn fill_energy(plane: &TwoDimensionalMap<f64>, energy: &mut EnergyMap) {
    fill_bands(plane, energy, num_cpus::get());
}

// Split the output into at most `workers` bands of whole rows and fill
// each band on its own scoped thread.
#[cfg(feature = "threaded")]
fn fill_bands(plane: &TwoDimensionalMap<f64>, energy: &mut EnergyMap, workers: usize) {
    let (width, height) = plane.dimensions();
    let workers = workers.max(1).min(height);
    let band = (height + workers - 1) / workers;

    crossbeam::thread::scope(|scope| {
        for (i, rows) in energy.as_mut_slice().chunks_mut(band * width).enumerate() {
            scope.spawn(move |_| fill_rows(plane, i * band, rows));
        }
    })
    .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
}

/// Compute the energy of every pixel in an image.  Fails with
/// `InvalidImage` when the image has no pixels.
pub fn compute_energy(image: &Image) -> Result<EnergyMap> {
    if image.is_empty() {
        return Err(CarveError::InvalidImage("image has no pixels"));
    }
    let plane = luminance(image);
    let mut energy = EnergyMap::new(image.width(), image.height());
    fill_energy(&plane, &mut energy);
    Ok(energy)
}
