// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Paint a seam onto a copy of an image.

use crate::axis::Axis;
use crate::error::{CarveError, Result};
use crate::pixelgrid::{Color, Image};

#[inline]
fn blend(pixel: &mut [u8], color: &[u8]) {
    for (p, c) in pixel.iter_mut().zip(color) {
        *p = ((u16::from(*p) + u16::from(*c) + 1) / 2) as u8;
    }
}

/// Return a copy of `image` with the seam painted in `color` and the
/// pixels on either side of it (left and right for a vertical seam,
/// above and below for a horizontal one) mixed half and half with
/// `color`.  Everything else is copied untouched.
///
/// A seam of the wrong length is refused with `SeamMismatch`; entries
/// pointing outside the image are skipped.
pub fn visualize_seam(image: &Image, seam: &[usize], axis: Axis, color: Color) -> Result<Image> {
    let (width, height) = image.dimensions();
    let expected = axis.seam_len(width, height);
    if seam.len() != expected {
        return Err(CarveError::SeamMismatch {
            expected,
            found: seam.len(),
        });
    }

    let samples = color.samples(image.channels());
    let span = axis.span(width, height);
    let mut out = image.clone();

    for (step, pos) in seam.iter().copied().enumerate() {
        if pos >= span {
            continue;
        }
        let (x, y) = axis.to_xy(pos, step);
        if let Some(pixel) = out.pixel_mut(x, y) {
            pixel.copy_from_slice(&samples);
        }
        let sides = [pos.checked_sub(1), pos.checked_add(1).filter(|p| *p < span)];
        for side in sides.iter().flatten() {
            let (sx, sy) = axis.to_xy(*side, step);
            if let Some(pixel) = out.pixel_mut(sx, sy) {
                blend(pixel, &samples);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixelgrid::Channels;
    use itertools::iproduct;

    fn checker() -> Image {
        Image::from_fn(5, 4, Channels::Rgb, |x, y| {
            let v = if (x + y) % 2 == 0 { 200 } else { 10 };
            vec![v, v / 2, v / 4]
        })
        .unwrap()
    }

    #[test]
    fn only_the_seam_and_its_neighbours_change() {
        let image = checker();
        let seam = [0, 1, 2, 4];
        let shown = visualize_seam(&image, &seam, Axis::Vertical, Color::RED).unwrap();
        assert_eq!(shown.dimensions(), image.dimensions());

        for (y, x) in iproduct!(0..4, 0..5) {
            let pos = seam[y];
            let before = image.pixel(x, y).unwrap();
            let after = shown.pixel(x, y).unwrap();
            if x == pos {
                assert_eq!(after, &[255, 0, 0]);
            } else if x + 1 == pos || x == pos + 1 {
                let expected: Vec<u8> = before
                    .iter()
                    .zip(&[255u8, 0, 0])
                    .map(|(p, c)| ((u16::from(*p) + u16::from(*c) + 1) / 2) as u8)
                    .collect();
                assert_eq!(after, &expected[..]);
            } else {
                assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn horizontal_seam_blends_above_and_below() {
        let image = Image::filled(3, 3, Channels::Gray, &[100]).unwrap();
        let black = Color::new(0, 0, 0);
        let shown = visualize_seam(&image, &[1, 1, 0], Axis::Horizontal, black).unwrap();
        assert_eq!(
            shown.as_raw(),
            &[
                50, 50, 0, //
                0, 0, 50, //
                50, 50, 100,
            ]
        );
    }

    #[test]
    fn the_source_is_left_alone() {
        let image = checker();
        let copy = image.clone();
        let _ = visualize_seam(&image, &[2, 2, 2, 2], Axis::Vertical, Color::GREEN).unwrap();
        assert_eq!(image, copy);
    }

    #[test]
    fn wrong_length_is_refused() {
        let image = checker();
        assert_eq!(
            visualize_seam(&image, &[0, 0], Axis::Vertical, Color::RED),
            Err(CarveError::SeamMismatch {
                expected: 4,
                found: 2
            })
        );
    }

    #[test]
    fn out_of_range_entries_are_skipped() {
        let image = Image::filled(2, 2, Channels::Gray, &[10]).unwrap();
        let dark = Color::new(30, 30, 30);
        let shown = visualize_seam(&image, &[0, 9], Axis::Vertical, dark).unwrap();
        assert_eq!(shown.as_raw(), &[30, 20, 10, 10]);
    }
}
