use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

/// Primitive counts painted by the last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub bars_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can paint into a context owned by the host, such as a GTK
/// `DrawingArea` draw callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Offscreen Cairo surface with Pango text.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    background: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            background: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    /// Replaces the white fill painted under every frame.
    pub fn with_background(mut self, background: Color) -> ChartResult<Self> {
        background.validate()?;
        self.background = background;
        Ok(self)
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the offscreen surface as PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let mut file = std::fs::File::create(path.as_ref())
            .map_err(|err| ChartError::InvalidData(format!("failed to create png file: {err}")))?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::InvalidData(format!("failed to write png: {err}")))
    }

    fn paint(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        set_color(context, self.background);
        context
            .paint()
            .map_err(|err| backend_error("failed to clear surface", err))?;

        for line in &frame.lines {
            draw_line(context, line)?;
        }
        for bar in &frame.bars {
            draw_bar(context, bar)?;
        }
        for text in &frame.texts {
            draw_text(context, text);
        }

        self.last_stats = CairoRenderStats {
            lines_drawn: frame.lines.len(),
            bars_drawn: frame.bars.len(),
            texts_drawn: frame.texts.len(),
        };
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| backend_error("failed to create cairo context", err))?;
        self.paint(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.paint(context, frame)
    }
}

fn set_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn draw_line(context: &Context, line: &LinePrimitive) -> ChartResult<()> {
    set_color(context, line.color);
    context.set_line_width(line.stroke_width);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context
        .stroke()
        .map_err(|err| backend_error("failed to stroke grid line", err))
}

/// Fills the bar body, then strokes its left, top and right edges.
///
/// The baseline edge stays open so adjacent bars sit flush on the x-axis.
fn draw_bar(context: &Context, bar: &RectPrimitive) -> ChartResult<()> {
    context.rectangle(bar.x, bar.y, bar.width, bar.height);
    set_color(context, bar.fill_color);
    context
        .fill()
        .map_err(|err| backend_error("failed to fill bar", err))?;

    if bar.border_width <= 0.0 {
        return Ok(());
    }
    let right = bar.x + bar.width;
    let bottom = bar.y + bar.height;
    context.move_to(bar.x, bottom);
    context.line_to(bar.x, bar.y);
    context.line_to(right, bar.y);
    context.line_to(right, bottom);
    set_color(context, bar.border_color);
    context.set_line_width(bar.border_width);
    context
        .stroke()
        .map_err(|err| backend_error("failed to stroke bar", err))
}

/// Lays out a tick or category label; `text.y` is the vertical center.
fn draw_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let font = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
    layout.set_font_description(Some(&font));
    layout.set_text(&text.text);

    let (width, height) = layout.pixel_size();
    let left = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - f64::from(width) / 2.0,
        TextHAlign::Right => text.x - f64::from(width),
    };
    set_color(context, text.color);
    context.move_to(left, text.y - f64::from(height) / 2.0);
    pangocairo::functions::show_layout(context, &layout);
}

fn backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
