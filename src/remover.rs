// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam removal
//!
//! Removing a seam builds a new image one pixel narrower (or shorter)
//! and leaves the source alone.  The seam is checked in full before a
//! single sample is copied, so a bad seam can never produce a
//! half-carved image.

use crate::axis::Axis;
use crate::error::{CarveError, Result};
use crate::pixelgrid::Image;
use crate::seamfinder::validate_seam;

// Every row keeps its samples before the seam pixel, and the samples
// after it slide left by one pixel.  Source and destination are
// different buffers, so the two ranges are plain copies.
fn remove_vertical_seam(image: &Image, seam: &[usize]) -> Result<Image> {
    let (width, height) = image.dimensions();
    let n = image.channels().count();
    let stride = image.stride();
    let new_stride = stride - n;
    let src = image.as_raw();
    let mut data = vec![0u8; new_stride * height];

    for (y, dst) in data.chunks_mut(new_stride).enumerate() {
        let cut = seam[y] * n;
        let row = &src[y * stride..(y + 1) * stride];
        dst[..cut].copy_from_slice(&row[..cut]);
        dst[cut..].copy_from_slice(&row[cut + n..]);
    }
    Image::new(width - 1, height, image.channels(), data)
}

// The transpose: each column keeps its pixels above the seam, and the
// ones below it move up a row.  Row-major storage means this copies a
// pixel at a time.
fn remove_horizontal_seam(image: &Image, seam: &[usize]) -> Result<Image> {
    let (width, height) = image.dimensions();
    let n = image.channels().count();
    let stride = image.stride();
    let src = image.as_raw();
    let mut data = vec![0u8; stride * (height - 1)];

    for (y, dst) in data.chunks_mut(stride).enumerate() {
        for (x, cut) in seam.iter().enumerate() {
            let from = if y < *cut { y } else { y + 1 };
            let o = from * stride + x * n;
            dst[x * n..(x + 1) * n].copy_from_slice(&src[o..o + n]);
        }
    }
    Image::new(width, height - 1, image.channels(), data)
}

/// Remove `seam` from `image`, giving back an image with one column
/// (vertical) or one row (horizontal) fewer.
///
/// Fails without producing anything when the image has no pixels
/// (`InvalidImage`), when it is already one pixel across on that axis
/// (`DimensionExhausted`), when the seam has the wrong length
/// (`SeamMismatch`), or when an entry points outside the image
/// (`SeamOutOfRange`).  Any energy map derived from `image`
/// describes the old image, not the returned one.
pub fn remove_seam(image: &Image, seam: &[usize], axis: Axis) -> Result<Image> {
    if image.is_empty() {
        return Err(CarveError::InvalidImage("image has no pixels"));
    }
    let (width, height) = image.dimensions();
    if axis.span(width, height) <= 1 {
        return Err(CarveError::DimensionExhausted(axis));
    }
    validate_seam(seam, axis, width, height)?;
    match axis {
        Axis::Vertical => remove_vertical_seam(image, seam),
        Axis::Horizontal => remove_horizontal_seam(image, seam),
    }
}
