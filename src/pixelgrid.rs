// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The in-memory pixel grid the carver works on.
//!
//! Decoding and encoding belong elsewhere (see `imageio`); this is
//! just width, height, a channel count, and a row-major buffer of
//! eight-bit samples.

use crate::error::{CarveError, Result};

/// How many samples make up one pixel.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Channels {
    Gray,
    Rgb,
}

impl Channels {
    pub fn count(self) -> usize {
        match self {
            Channels::Gray => 1,
            Channels::Rgb => 3,
        }
    }
}

/// An RGB colour, used to paint seams.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// The samples this colour occupies in an image with the given
    /// channel layout.  Grayscale gets the colour's luma.
    pub(crate) fn samples(self, channels: Channels) -> Vec<u8> {
        match channels {
            Channels::Rgb => vec![self.r, self.g, self.b],
            Channels::Gray => vec![luma(self.r, self.g, self.b).round() as u8],
        }
    }
}

/// ITU-R BT.601 luma.
#[inline]
pub(crate) fn luma(r: u8, g: u8, b: u8) -> f64 {
    0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)
}

/// Samples needed for an image of the given extent, or
/// `InvalidImage` if that does not fit in memory addresses.
pub(crate) fn sample_count(width: usize, height: usize, channels: Channels) -> Result<usize> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels.count()))
        .ok_or(CarveError::InvalidImage("image extent overflows"))
}

/// A `height × width` grid of gray or RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    channels: Channels,
    data: Vec<u8>,
}

impl Image {
    /// Wrap decoded pixel data.  The buffer must hold exactly
    /// `width * height * channels` samples.  A zero-sized image is
    /// accepted here; energy and seam removal refuse it with
    /// `InvalidImage`.
    pub fn new(width: usize, height: usize, channels: Channels, data: Vec<u8>) -> Result<Self> {
        if data.len() != sample_count(width, height, channels)? {
            return Err(CarveError::InvalidImage(
                "buffer length does not match width * height * channels",
            ));
        }
        Ok(Image {
            width,
            height,
            channels,
            data,
        })
    }

    /// An image with every pixel set to `pixel`, which must have one
    /// sample per channel.
    pub fn filled(width: usize, height: usize, channels: Channels, pixel: &[u8]) -> Result<Self> {
        if pixel.len() != channels.count() {
            return Err(CarveError::InvalidImage("fill pixel has wrong channel count"));
        }
        let data = pixel
            .iter()
            .copied()
            .cycle()
            .take(sample_count(width, height, channels)?)
            .collect();
        Image::new(width, height, channels, data)
    }

    /// Build an image by asking `f` for each pixel.  `f` must return
    /// one sample per channel.
    pub fn from_fn<F>(width: usize, height: usize, channels: Channels, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Vec<u8>,
    {
        let mut data = Vec::with_capacity(sample_count(width, height, channels)?);
        for y in 0..height {
            for x in 0..width {
                let pixel = f(x, y);
                if pixel.len() != channels.count() {
                    return Err(CarveError::InvalidImage("pixel has wrong channel count"));
                }
                data.extend_from_slice(&pixel);
            }
        }
        Image::new(width, height, channels, data)
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

    pub fn channels(&self) -> Channels {
        self.channels
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The raw samples, row-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Bytes per row.
    pub(crate) fn stride(&self) -> usize {
        self.width * self.channels.count()
    }

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.stride() + x * self.channels.count())
        } else {
            None
        }
    }

    /// The samples of one pixel, or `None` outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        let n = self.channels.count();
        self.offset(x, y).map(|o| &self.data[o..o + n])
    }

    pub(crate) fn pixel_mut(&mut self, x: usize, y: usize) -> Option<&mut [u8]> {
        let n = self.channels.count();
        match self.offset(x, y) {
            Some(o) => Some(&mut self.data[o..o + n]),
            None => None,
        }
    }

    /// All samples of one row.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y < self.height {
            let stride = self.stride();
            Some(&self.data[y * stride..(y + 1) * stride])
        } else {
            None
        }
    }

    /// Luminance of the pixel at (x, y).  The caller keeps (x, y) in
    /// bounds.
    pub(crate) fn luma_at(&self, x: usize, y: usize) -> f64 {
        let o = y * self.stride() + x * self.channels.count();
        match self.channels {
            Channels::Gray => f64::from(self.data[o]),
            Channels::Rgb => luma(self.data[o], self.data[o + 1], self.data[o + 2]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_checks_buffer_length() {
        assert!(Image::new(2, 2, Channels::Rgb, vec![0; 12]).is_ok());
        assert_eq!(
            Image::new(2, 2, Channels::Rgb, vec![0; 11]),
            Err(CarveError::InvalidImage(
                "buffer length does not match width * height * channels"
            ))
        );
    }

    #[test]
    fn huge_extents_are_refused() {
        let overflow = Err(CarveError::InvalidImage("image extent overflows"));
        assert_eq!(Image::new(usize::MAX, 2, Channels::Rgb, vec![]), overflow);
        assert_eq!(Image::filled(usize::MAX, 2, Channels::Gray, &[0]), overflow);
        assert_eq!(
            Image::from_fn(usize::MAX / 2, 3, Channels::Gray, |_, _| vec![0]),
            overflow
        );
    }

    #[test]
    fn pixel_access_is_bounds_checked() {
        let image = Image::from_fn(3, 2, Channels::Rgb, |x, y| vec![x as u8, y as u8, 7]).unwrap();
        assert_eq!(image.pixel(2, 1), Some(&[2, 1, 7][..]));
        assert_eq!(image.pixel(3, 0), None);
        assert_eq!(image.pixel(0, 2), None);
        assert_eq!(image.row(1).map(|r| r.len()), Some(9));
    }

    #[test]
    fn gray_highlight_uses_luma() {
        assert_eq!(Color::RED.samples(Channels::Gray), vec![76]);
        assert_eq!(Color::GREEN.samples(Channels::Rgb), vec![0, 255, 0]);
    }

    #[test]
    fn filled_repeats_the_pixel() {
        let image = Image::filled(2, 3, Channels::Rgb, &[1, 2, 3]).unwrap();
        assert_eq!(image.as_raw().len(), 18);
        assert_eq!(image.pixel(1, 2), Some(&[1, 2, 3][..]));
        assert!(Image::filled(2, 3, Channels::Gray, &[1, 2]).is_err());
    }
}
