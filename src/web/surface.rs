// surface.rs - 2d canvas output
//
// Draws the encoder buffer: one red circle per point, or the sprite stamp
// when an image is loaded. The sprite lives on a small offscreen canvas so
// each stamp is a single drawImage call.

use std::f64::consts::TAU;

use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, ImageData};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::render::{Encoder, stamp_origin};
use crate::sprite::Sprite;

pub struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    stamp: Option<HtmlCanvasElement>,

    radius: f64,
    size: f32,
    color: String,
}

impl Surface {
    pub fn new(canvas: HtmlCanvasElement, cfg: &Config) -> Result<Self> {
        let ctx = context_2d(&canvas)?;
        Ok(Self {
            canvas,
            ctx,
            stamp: None,
            radius: cfg.sim.radius as f64,
            size: cfg.sim.size,
            color: cfg.ui.circle_color.clone(),
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn resize(&self, w: u32, h: u32) {
        self.canvas.set_width(w);
        self.canvas.set_height(h);
    }

    pub fn has_sprite(&self) -> bool {
        self.stamp.is_some()
    }

    pub fn set_sprite(&mut self, doc: &Document, sprite: &Sprite) -> Result<()> {
        let stamp = doc
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| Error::WrongElement { id: "sprite".into(), expected: "canvas" })?;
        stamp.set_width(sprite.width);
        stamp.set_height(sprite.height);

        let data = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(&sprite.rgba),
            sprite.width,
            sprite.height,
        )?;
        context_2d(&stamp)?.put_image_data(&data, 0.0, 0.0)?;

        self.stamp = Some(stamp);
        Ok(())
    }

    pub fn clear_sprite(&mut self) {
        self.stamp = None;
    }

    pub fn draw(&self, frame: &Encoder) -> Result<()> {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);

        match &self.stamp {
            Some(stamp) => {
                let size = self.size as f64;
                for (x, y) in frame.points() {
                    let (sx, sy) = stamp_origin(x, y, self.size);
                    self.ctx.draw_image_with_html_canvas_element_and_dw_and_dh(
                        stamp, sx as f64, sy as f64, size, size,
                    )?;
                }
            }
            None => {
                self.ctx.set_fill_style_str(&self.color);
                for (x, y) in frame.points() {
                    self.ctx.begin_path();
                    self.ctx.arc(x as f64, y as f64, self.radius, 0.0, TAU)?;
                    self.ctx.fill();
                }
            }
        }
        Ok(())
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")?
        .ok_or(Error::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| Error::NoContext)
}
