// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarver - a carving session
//!
//! A `SeamCarver` owns an image and carves it one seam at a time.  No
//! energy map is cached on the session.  Instead, `energy()` hands
//! out an `Energy` that remembers which version of the image it was
//! computed from, a `Seam` remembers the same, and every removal bumps
//! the version.  Searching with an old energy map, or removing an old
//! seam, fails with `StaleEnergy`, so a fresh energy map is always
//! computed between two removals.

use crate::axis::Axis;
use crate::energy::compute_energy;
use crate::error::{CarveError, Result};
use crate::pixelgrid::{Color, Image};
use crate::remover::remove_seam;
use crate::seamfinder::{SeamFinder, Strategy};
use crate::twodmap::EnergyMap;
use crate::visualize::visualize_seam;
use tracing::{debug, trace};

/// An energy map tied to the image version it describes.
#[derive(Debug, Clone)]
pub struct Energy {
    map: EnergyMap,
    generation: u64,
}

impl Energy {
    pub fn map(&self) -> &EnergyMap {
        &self.map
    }

    pub fn into_map(self) -> EnergyMap {
        self.map
    }
}

/// A seam tied to the image version it was found in.
#[derive(Debug, Clone, PartialEq)]
pub struct Seam {
    axis: Axis,
    path: Vec<usize>,
    generation: u64,
}

impl Seam {
    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }
}

/// A struct for holding the image being carved.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    original: Image,
    image: Image,
    strategy: Strategy,
    generation: u64,
    vertical_removed: usize,
    horizontal_removed: usize,
}

impl SeamCarver {
    /// Start a session on `image`, searching with the optimal finder.
    pub fn new(image: Image) -> Self {
        SeamCarver {
            original: image.clone(),
            image,
            strategy: Strategy::default(),
            generation: 0,
            vertical_removed: 0,
            horizontal_removed: 0,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The image as carved so far.
    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn into_image(self) -> Image {
        self.image
    }

    /// The image the session started from.
    pub fn original(&self) -> &Image {
        &self.original
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    pub fn toggle_strategy(&mut self) -> Strategy {
        self.strategy = self.strategy.toggle();
        self.strategy
    }

    /// How many seams have been taken out, as (vertical, horizontal).
    pub fn seams_removed(&self) -> (usize, usize) {
        (self.vertical_removed, self.horizontal_removed)
    }

    /// Go back to the original image and clear the counters.  Energy
    /// maps and seams from before the reset are stale.
    pub fn reset(&mut self) {
        self.image = self.original.clone();
        self.generation += 1;
        self.vertical_removed = 0;
        self.horizontal_removed = 0;
    }

    /// Compute the energy of the current image.
    pub fn energy(&self) -> Result<Energy> {
        Ok(Energy {
            map: compute_energy(&self.image)?,
            generation: self.generation,
        })
    }

    /// Find the next seam along `axis` with the session's strategy.
    pub fn find_seam(&self, energy: &Energy, axis: Axis) -> Result<Seam> {
        if energy.generation != self.generation {
            return Err(CarveError::StaleEnergy);
        }
        let path = self.strategy.find_seam(&energy.map, axis)?;
        Ok(Seam {
            axis,
            path,
            generation: self.generation,
        })
    }

    /// A copy of the current image with `seam` painted on it.
    pub fn visualize(&self, seam: &Seam, color: Color) -> Result<Image> {
        if seam.generation != self.generation {
            return Err(CarveError::StaleEnergy);
        }
        visualize_seam(&self.image, &seam.path, seam.axis, color)
    }

    /// Take `seam` out of the current image.  On failure the image is
    /// unchanged.
    pub fn remove(&mut self, seam: Seam) -> Result<()> {
        if seam.generation != self.generation {
            return Err(CarveError::StaleEnergy);
        }
        self.image = remove_seam(&self.image, &seam.path, seam.axis)?;
        self.generation += 1;
        match seam.axis {
            Axis::Vertical => self.vertical_removed += 1,
            Axis::Horizontal => self.horizontal_removed += 1,
        }
        trace!(axis = %seam.axis, seam = ?seam.path, "removed seam");
        Ok(())
    }

    /// Find and remove one seam along `axis`.
    pub fn carve_once(&mut self, axis: Axis) -> Result<()> {
        let (width, height) = self.image.dimensions();
        if axis.span(width, height) <= 1 {
            return Err(CarveError::DimensionExhausted(axis));
        }
        let energy = self.energy()?;
        let seam = self.find_seam(&energy, axis)?;
        self.remove(seam)
    }

    // This recomputes the whole energy map for every seam.  Only the
    // band of columns (or rows) next to the last seam actually changes.

    /// Repeatedly carve seams until the image is `width × height`.
    /// While both axes need shrinking the two alternate, starting with
    /// the width; then whichever axis is left is finished off.
    pub fn carve(&mut self, width: usize, height: usize) -> Result<()> {
        let (current_width, current_height) = self.image.dimensions();
        if width > current_width || height > current_height {
            return Err(CarveError::Upscale {
                width: current_width,
                height: current_height,
                target_width: width,
                target_height: height,
            });
        }
        if width == 0 {
            return Err(CarveError::DimensionExhausted(Axis::Vertical));
        }
        if height == 0 {
            return Err(CarveError::DimensionExhausted(Axis::Horizontal));
        }

        debug!(
            from = ?(current_width, current_height),
            to = ?(width, height),
            strategy = self.strategy.name(),
            "carving"
        );
        let mut axis = Axis::Vertical;
        while self.image.width() > width && self.image.height() > height {
            self.carve_once(axis)?;
            axis = axis.turn();
            debug!(width = self.image.width(), height = self.image.height(), "both");
        }
        while self.image.width() > width {
            self.carve_once(Axis::Vertical)?;
            debug!(width = self.image.width(), height = self.image.height(), "width");
        }
        while self.image.height() > height {
            self.carve_once(Axis::Horizontal)?;
            debug!(width = self.image.width(), height = self.image.height(), "height");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixelgrid::Channels;

    fn striped() -> Image {
        Image::from_fn(6, 5, Channels::Gray, |x, y| {
            vec![if x == 3 || y == 1 { 250 } else { 20 }]
        })
        .unwrap()
    }

    #[test]
    fn remove_needs_a_fresh_energy_map() {
        let mut carver = SeamCarver::new(striped());
        let energy = carver.energy().unwrap();
        let seam = carver.find_seam(&energy, Axis::Vertical).unwrap();
        let again = seam.clone();
        carver.remove(seam).unwrap();
        assert_eq!(carver.image().dimensions(), (5, 5));

        assert_eq!(carver.remove(again), Err(CarveError::StaleEnergy));
        assert_eq!(
            carver.find_seam(&energy, Axis::Vertical),
            Err(CarveError::StaleEnergy)
        );
        let fresh = carver.energy().unwrap();
        assert!(carver.find_seam(&fresh, Axis::Horizontal).is_ok());
    }

    #[test]
    fn visualizing_does_not_advance_the_session() {
        let carver = SeamCarver::new(striped());
        let energy = carver.energy().unwrap();
        let seam = carver.find_seam(&energy, Axis::Horizontal).unwrap();
        let shown = carver.visualize(&seam, Color::GREEN).unwrap();
        assert_eq!(shown.dimensions(), (6, 5));
        assert_eq!(carver.image(), &striped());
        assert!(carver.find_seam(&energy, Axis::Vertical).is_ok());
    }

    #[test]
    fn carve_counts_and_resets() {
        let mut carver = SeamCarver::new(striped());
        carver.carve(3, 3).unwrap();
        assert_eq!(carver.image().dimensions(), (3, 3));
        assert_eq!(carver.seams_removed(), (3, 2));

        carver.reset();
        assert_eq!(carver.image(), carver.original());
        assert_eq!(carver.seams_removed(), (0, 0));
    }

    #[test]
    fn carve_refuses_to_upscale_or_vanish() {
        let mut carver = SeamCarver::new(striped());
        assert!(matches!(carver.carve(7, 5), Err(CarveError::Upscale { .. })));
        assert_eq!(
            carver.carve(0, 5),
            Err(CarveError::DimensionExhausted(Axis::Vertical))
        );
        assert_eq!(carver.image().dimensions(), (6, 5));
    }

    #[test]
    fn carving_takes_the_flat_side_first() {
        // A ramp on the left, flat on the right.
        let ramp =
            Image::from_fn(6, 5, Channels::Gray, |x, _| vec![(x.min(2) * 100) as u8]).unwrap();
        for strategy in [Strategy::Optimal, Strategy::Greedy].iter().copied() {
            let mut carver = SeamCarver::new(ramp.clone()).with_strategy(strategy);
            carver.carve(4, 5).unwrap();
            for y in 0..5 {
                assert_eq!(
                    carver.image().row(y),
                    Some(&[0, 100, 200, 200][..]),
                    "{} cut into the ramp",
                    strategy.name()
                );
            }
        }
    }

    #[test]
    fn toggling_switches_finders() {
        let mut carver = SeamCarver::new(striped());
        assert_eq!(carver.strategy(), Strategy::Optimal);
        assert_eq!(carver.toggle_strategy(), Strategy::Greedy);
        carver.set_strategy(Strategy::Optimal);
        assert_eq!(carver.strategy(), Strategy::Optimal);
    }
}
