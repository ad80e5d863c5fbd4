//! Canvas 2D draw surface for the browser

use std::collections::HashMap;
use std::f64::consts::TAU;

use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::renderer::{Color, DrawSurface, TextAlign};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    /// Sprites by source URL, loaded on first use
    images: HashMap<String, HtmlImageElement>,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            images: HashMap::new(),
        }
    }

    /// Start loading sprites before the first frame needs them
    pub fn preload<'a>(&mut self, sources: impl IntoIterator<Item = &'a String>) {
        for source in sources {
            self.image(source);
        }
    }

    fn image(&mut self, source: &str) -> Option<&HtmlImageElement> {
        if !self.images.contains_key(source) {
            match HtmlImageElement::new() {
                Ok(img) => {
                    img.set_src(source);
                    self.images.insert(source.to_string(), img);
                }
                Err(e) => {
                    log::warn!("Could not create image for {}: {:?}", source, e);
                    return None;
                }
            }
        }
        self.images.get(source)
    }
}

impl DrawSurface for CanvasSurface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(cx as f64, cy as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
        self.ctx.close_path();
    }

    fn draw_sprite(&mut self, source: &str, x: f32, y: f32, w: f32, h: f32) {
        let ctx = self.ctx.clone();
        if let Some(img) = self.image(source) {
            // Not-yet-loaded images draw nothing
            if img.complete() {
                let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    img, x as f64, y as f64, w as f64, h as f64,
                );
            }
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign) {
        self.ctx.set_text_align(match align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        });
        let _ = self.ctx.fill_text(text, x as f64, y as f64);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_css());
    }
}
