// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Bridges to the `image` crate
//!
//! The carver works on its own eight-bit `Image`.  These helpers
//! convert from anything ImageRS can view, and back to a
//! `DynamicImage` for encoding.  Nothing here touches a file.

use crate::error::{CarveError, Result};
use crate::pixelgrid::{sample_count, Channels, Image};
use image::{DynamicImage, GenericImageView, GrayImage, ImageBuffer, Pixel, Primitive, RgbImage};
use num_traits::NumCast;

// Rescale one subpixel of any depth to eight bits, using the type's
// nominal maximum (255 for u8, 65535 for u16, 1.0 for f32).
#[inline]
fn to_u8<S: Primitive>(s: S) -> u8 {
    let value: f64 = NumCast::from(s).unwrap_or(0.0);
    let max: f64 = NumCast::from(S::DEFAULT_MAX_VALUE).unwrap_or(255.0);
    (value / max * 255.0).round().max(0.0).min(255.0) as u8
}

/// Copy any ImageRS view into an `Image`.  One- and two-channel pixels
/// become gray; everything else becomes RGB.  Alpha is dropped.
pub fn from_view<I, P, S>(view: &I) -> Result<Image>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = view.dimensions();
    let (width, height) = (width as usize, height as usize);
    let gray = P::CHANNEL_COUNT <= 2;
    let channels = if gray { Channels::Gray } else { Channels::Rgb };

    let mut data = Vec::with_capacity(sample_count(width, height, channels)?);
    for (_, _, pixel) in view.pixels() {
        if gray {
            data.push(to_u8(pixel.to_luma().0[0]));
        } else {
            data.extend(pixel.to_rgb().0.iter().map(|c| to_u8(*c)));
        }
    }
    Image::new(width, height, channels, data)
}

/// Convert a decoded image, keeping color if it has any.
pub fn from_dynamic(image: &DynamicImage) -> Result<Image> {
    let (width, height) = (image.width() as usize, image.height() as usize);
    if image.color().has_color() {
        Image::new(width, height, Channels::Rgb, image.to_rgb8().into_raw())
    } else {
        Image::new(width, height, Channels::Gray, image.to_luma8().into_raw())
    }
}

/// Convert back for encoding.
pub fn to_dynamic(image: &Image) -> Result<DynamicImage> {
    let (width, height) = (image.width() as u32, image.height() as u32);
    let data = image.as_raw().to_vec();
    let converted = match image.channels() {
        Channels::Gray => {
            let buf: Option<GrayImage> = ImageBuffer::from_raw(width, height, data);
            buf.map(DynamicImage::ImageLuma8)
        }
        Channels::Rgb => {
            let buf: Option<RgbImage> = ImageBuffer::from_raw(width, height, data);
            buf.map(DynamicImage::ImageRgb8)
        }
    };
    converted.ok_or(CarveError::InvalidImage("image too large to convert"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgba};

    #[test]
    fn sixteen_bit_gray_is_rescaled() {
        let buf: ImageBuffer<Luma<u16>, Vec<u16>> =
            ImageBuffer::from_raw(3, 1, vec![0, 32896, 65535]).unwrap();
        let image = from_view(&buf).unwrap();
        assert_eq!(image.channels(), Channels::Gray);
        assert_eq!(image.as_raw(), &[0, 128, 255]);
    }

    #[test]
    fn alpha_is_dropped() {
        let buf: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let image = from_view(&buf).unwrap();
        assert_eq!(image.channels(), Channels::Rgb);
        assert_eq!(image.as_raw(), &[1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn float_subpixels_are_rescaled() {
        let buf: ImageBuffer<Luma<f32>, Vec<f32>> =
            ImageBuffer::from_raw(3, 1, vec![0.0, 0.5, 1.0]).unwrap();
        assert_eq!(from_view(&buf).unwrap().as_raw(), &[0, 128, 255]);
    }

    #[test]
    fn dynamic_images_keep_their_color() {
        let buf = ImageBuffer::from_raw(1, 2, vec![9, 8, 7, 6, 5, 4]).unwrap();
        let rgb = DynamicImage::ImageRgb8(buf);
        let image = from_dynamic(&rgb).unwrap();
        assert_eq!((image.dimensions(), image.channels()), ((1, 2), Channels::Rgb));
        assert_eq!(to_dynamic(&image).unwrap().to_rgb8().into_raw(), vec![9, 8, 7, 6, 5, 4]);

        let buf = ImageBuffer::from_raw(2, 1, vec![3, 4]).unwrap();
        let gray = DynamicImage::ImageLuma8(buf);
        let image = from_dynamic(&gray).unwrap();
        assert_eq!(image.channels(), Channels::Gray);
        assert_eq!(to_dynamic(&image).unwrap().to_luma8().into_raw(), vec![3, 4]);
    }
}
