// sprite.rs - Uploaded image decoding
//
// Any format the `image` crate knows is decoded and resampled once to the
// stamp size, so the frame loop only ever blits a small RGBA block.

use image::imageops::FilterType;

use crate::error::Result;

#[derive(Clone, Debug)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8
    pub rgba: Vec<u8>,
}

impl Sprite {
    /// Decode `bytes` and resize to `edge` x `edge`.
    pub fn decode(bytes: &[u8], edge: u32) -> Result<Self> {
        let img = image::load_from_memory(bytes)?;
        let edge = edge.max(1);
        let rgba = img.resize_exact(edge, edge, FilterType::Lanczos3).to_rgba8();
        Ok(Self {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png(w: u32, h: u32, px: [u8; 4]) -> Vec<u8> {
        let img = RgbaImage::from_pixel(w, h, Rgba(px));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn decodes_and_resizes_to_stamp() {
        let bytes = png(120, 64, [0, 128, 255, 255]);
        let sprite = Sprite::decode(&bytes, 40).unwrap();
        assert_eq!((sprite.width, sprite.height), (40, 40));
        assert_eq!(sprite.rgba.len(), 40 * 40 * 4);
        assert_eq!(&sprite.rgba[..4], &[0, 128, 255, 255]);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(Sprite::decode(b"definitely not an image", 40).is_err());
        assert!(Sprite::decode(&[], 40).is_err());
    }
}
