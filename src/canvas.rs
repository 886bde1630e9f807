use anyhow::anyhow;
use stringz_core::Surface;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] over a canvas 2D context. Fallible context calls are
/// fire-and-forget.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext(2d) failed: {:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }
    fn save(&mut self) {
        self.ctx.save();
    }
    fn restore(&mut self) {
        self.ctx.restore();
    }
    fn translate(&mut self, x: f64, y: f64) {
        _ = self.ctx.translate(x, y);
    }
    fn rotate(&mut self, radians: f64) {
        _ = self.ctx.rotate(radians);
    }
    fn scale(&mut self, sx: f64, sy: f64) {
        _ = self.ctx.scale(sx, sy);
    }
    fn set_stroke_style(&mut self, css: &str) {
        self.ctx.set_stroke_style_str(css);
    }
    fn set_fill_style(&mut self, css: &str) {
        self.ctx.set_fill_style_str(css);
    }
    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }
    fn set_shadow(&mut self, css: &str, blur: f64) {
        self.ctx.set_shadow_color(css);
        self.ctx.set_shadow_blur(blur);
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }
    fn set_font(&mut self, css: &str) {
        self.ctx.set_font(css);
    }
    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }
    fn close_path(&mut self) {
        self.ctx.close_path();
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        _ = self.ctx.arc(x, y, radius, start, end);
    }
    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start: f64,
        end: f64,
    ) {
        _ = self
            .ctx
            .ellipse(x, y, radius_x, radius_y, rotation, start, end);
    }
    fn stroke(&mut self) {
        self.ctx.stroke();
    }
    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        _ = self.ctx.fill_text(text, x, y);
    }
}
