//! 2D drawing surface used by the actors.
//!
//! The method set mirrors the subset of `CanvasRenderingContext2d` the scene
//! needs, with infallible signatures: browser-side failures are ignored by
//! the web adapter. [`RecordingSurface`] keeps every call as a [`DrawCmd`] so
//! tests and headless hosts can inspect what a frame would have drawn.

pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, radians: f64);
    fn scale(&mut self, sx: f64, sy: f64);

    fn set_stroke_style(&mut self, css: &str);
    fn set_fill_style(&mut self, css: &str);
    fn set_line_width(&mut self, width: f64);
    /// Shadow used as a glow; a blur of 0 disables it.
    fn set_shadow(&mut self, css: &str, blur: f64);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_font(&mut self, css: &str);

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        rotation: f64,
        start: f64,
        end: f64,
    );
    fn stroke(&mut self);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Clear { width: f64, height: f64 },
    Save,
    Restore,
    Translate(f64, f64),
    Rotate(f64),
    Scale(f64, f64),
    StrokeStyle(String),
    FillStyle(String),
    LineWidth(f64),
    Shadow { color: String, blur: f64 },
    GlobalAlpha(f64),
    Font(String),
    BeginPath,
    ClosePath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc { x: f64, y: f64, radius: f64 },
    Ellipse { x: f64, y: f64, radius_x: f64, radius_y: f64 },
    Stroke,
    FillText { text: String, x: f64, y: f64 },
}

#[derive(Default, Debug, Clone)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.commands)
    }

    pub fn count(&self, pred: impl Fn(&DrawCmd) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    /// Blur values of every `Shadow` command, in call order.
    pub fn shadow_blurs(&self) -> Vec<f64> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Shadow { blur, .. } => Some(*blur),
                _ => None,
            })
            .collect()
    }

    /// Text passed to every `FillText` command, in call order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCmd::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.commands.push(DrawCmd::Clear { width, height });
    }
    fn save(&mut self) {
        self.commands.push(DrawCmd::Save);
    }
    fn restore(&mut self) {
        self.commands.push(DrawCmd::Restore);
    }
    fn translate(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCmd::Translate(x, y));
    }
    fn rotate(&mut self, radians: f64) {
        self.commands.push(DrawCmd::Rotate(radians));
    }
    fn scale(&mut self, sx: f64, sy: f64) {
        self.commands.push(DrawCmd::Scale(sx, sy));
    }
    fn set_stroke_style(&mut self, css: &str) {
        self.commands.push(DrawCmd::StrokeStyle(css.to_string()));
    }
    fn set_fill_style(&mut self, css: &str) {
        self.commands.push(DrawCmd::FillStyle(css.to_string()));
    }
    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCmd::LineWidth(width));
    }
    fn set_shadow(&mut self, css: &str, blur: f64) {
        self.commands.push(DrawCmd::Shadow {
            color: css.to_string(),
            blur,
        });
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        self.commands.push(DrawCmd::GlobalAlpha(alpha));
    }
    fn set_font(&mut self, css: &str) {
        self.commands.push(DrawCmd::Font(css.to_string()));
    }
    fn begin_path(&mut self) {
        self.commands.push(DrawCmd::BeginPath);
    }
    fn close_path(&mut self) {
        self.commands.push(DrawCmd::ClosePath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCmd::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCmd::LineTo(x, y));
    }
    fn arc(&mut self, x: f64, y: f64, radius: f64, _start: f64, _end: f64) {
        self.commands.push(DrawCmd::Arc { x, y, radius });
    }
    fn ellipse(
        &mut self,
        x: f64,
        y: f64,
        radius_x: f64,
        radius_y: f64,
        _rotation: f64,
        _start: f64,
        _end: f64,
    ) {
        self.commands.push(DrawCmd::Ellipse {
            x,
            y,
            radius_x,
            radius_y,
        });
    }
    fn stroke(&mut self) {
        self.commands.push(DrawCmd::Stroke);
    }
    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.commands.push(DrawCmd::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }
}
