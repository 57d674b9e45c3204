// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Getting pixels in and out of the carver
//!
//! The carver works on `TwoDimensionalMap`s and knows nothing about
//! file formats.  These helpers move pixels between the `image`
//! crate's buffers and maps, and wrap the decode-carve-encode round
//! trip for callers that only have bytes.

use crate::error::CarveError;
use crate::seamcarver::seamcarve;
use crate::twodmap::TwoDimensionalMap;
use image::{
    DynamicImage, GenericImageView, ImageBuffer, ImageFormat, ImageOutputFormat, Pixel, Primitive,
    Rgba,
};
use log::debug;
use std::io::Cursor;

/// Copy any image view into a fresh map.
pub fn grid_from_image<I, P>(image: &I) -> TwoDimensionalMap<P>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel + 'static,
{
    let (width, height) = image.dimensions();
    TwoDimensionalMap::from_fn(width, height, |x, y| image.get_pixel(x, y))
}

/// Copy the logical cells of a map into an image buffer.
pub fn grid_to_image<P, S>(map: &TwoDimensionalMap<P>) -> ImageBuffer<P, Vec<S>>
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = map.dimensions();
    let mut imgbuf = ImageBuffer::new(width, height);
    map.for_each(|x, y, p| imgbuf.put_pixel(x, y, p));
    imgbuf
}

/// Decode an encoded image (any format the `image` crate can guess)
/// into an RGBA map.
pub fn decode(bytes: &[u8]) -> Result<TwoDimensionalMap<Rgba<u8>>, CarveError> {
    let image = image::load_from_memory(bytes).map_err(CarveError::Decode)?;
    Ok(grid_from_image(&image.to_rgba8()))
}

/// Encode an RGBA map.  JPEG has no alpha channel, so it is dropped.
pub fn encode(map: &TwoDimensionalMap<Rgba<u8>>, format: ImageFormat) -> Result<Vec<u8>, CarveError> {
    let image = DynamicImage::ImageRgba8(grid_to_image(map));
    let image = if format == ImageFormat::Jpeg {
        DynamicImage::ImageRgb8(image.to_rgb8())
    } else {
        image
    };
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, ImageOutputFormat::from(format))
        .map_err(CarveError::Encode)?;
    Ok(out.into_inner())
}

/// Bytes in, bytes out: decode, carve to the target size, and encode
/// the result in the same format as the source.
pub fn carve_encoded(bytes: &[u8], newwidth: u32, newheight: u32) -> Result<Vec<u8>, CarveError> {
    let format = image::guess_format(bytes).map_err(CarveError::Decode)?;
    let source = decode(bytes)?;
    debug!(
        "decoded {:?} source, {}x{}",
        format,
        source.width(),
        source.height()
    );
    encode(&seamcarve(source, newwidth, newheight)?, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn sample() -> RgbaImage {
        ImageBuffer::from_fn(12, 9, |x, y| {
            Rgba([(x * 20) as u8, (y * 25) as u8, ((x + y) * 10) as u8, 255])
        })
    }

    fn png_bytes(image: &RgbaImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(image.clone())
            .write_to(&mut out, ImageOutputFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn maps_and_buffers_hold_the_same_pixels() {
        let image = sample();
        let map = grid_from_image(&image);
        assert_eq!(map.dimensions(), (12, 9));
        assert_eq!(map[(5, 7)], *image.get_pixel(5, 7));
        assert_eq!(grid_to_image(&map), image);
    }

    #[test]
    fn carving_encoded_bytes_keeps_the_format() {
        let bytes = carve_encoded(&png_bytes(&sample()), 8, 6).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
        let carved = image::load_from_memory(&bytes).unwrap();
        assert_eq!(carved.dimensions(), (8, 6));
    }

    #[test]
    fn jpeg_output_drops_alpha() {
        let map = grid_from_image(&sample());
        let bytes = encode(&map, ImageFormat::Jpeg).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        match carve_encoded(b"definitely not an image", 1, 1) {
            Err(CarveError::Decode(_)) => (),
            other => panic!("expected a decode error, got {:?}", other.map(|b| b.len())),
        }
    }

    #[test]
    fn enlarging_encoded_bytes_is_refused() {
        match carve_encoded(&png_bytes(&sample()), 13, 9) {
            Err(CarveError::InvalidTarget { .. }) => (),
            other => panic!("expected InvalidTarget, got {:?}", other.map(|b| b.len())),
        }
    }
}
