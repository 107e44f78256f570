use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk::glib;
use gtk::prelude::*;
use tracing::warn;

use crate::api::BarChart;
use crate::interaction::PointerEvent;
use crate::render::{CairoContextRenderer, Renderer};

/// Hosts a [`BarChart`] inside a GTK4 `DrawingArea`.
///
/// Pointer motion feeds the tooltip path, clicks toggle the bars under the
/// pointer and size changes reflow the scale.
pub struct GtkBarChartAdapter<R: Renderer + CairoContextRenderer + 'static> {
    chart: Rc<RefCell<BarChart<R>>>,
    progress: Rc<Cell<f64>>,
    area: gtk::DrawingArea,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkBarChartAdapter<R> {
    #[must_use]
    pub fn new(chart: BarChart<R>) -> Self {
        let viewport = chart.viewport();
        let chart = Rc::new(RefCell::new(chart));
        let progress = Rc::new(Cell::new(1.0));
        let area = gtk::DrawingArea::new();
        area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        {
            let chart = Rc::clone(&chart);
            let progress = Rc::clone(&progress);
            area.set_draw_func(move |_, context, _, _| {
                if let Err(err) = chart.borrow_mut().draw_on_cairo_context(context, progress.get()) {
                    warn!(error = %err, "bar chart draw failed");
                }
            });
        }

        {
            let chart = Rc::clone(&chart);
            area.connect_resize(move |_, width, height| {
                let width = u32::try_from(width).unwrap_or(0);
                let height = u32::try_from(height).unwrap_or(0);
                if let Err(err) = chart.borrow_mut().reflow(width, height) {
                    warn!(error = %err, width, height, "bar chart reflow rejected");
                }
            });
        }

        let motion = gtk::EventControllerMotion::new();
        {
            let chart = Rc::clone(&chart);
            let area = area.clone();
            motion.connect_motion(move |_, x, y| {
                chart.borrow_mut().handle_pointer_event(PointerEvent::moved(x, y));
                area.queue_draw();
            });
        }
        {
            let chart = Rc::clone(&chart);
            let area = area.clone();
            motion.connect_leave(move |_| {
                chart.borrow_mut().handle_pointer_event(PointerEvent::leave());
                area.queue_draw();
            });
        }
        area.add_controller(motion);

        let click = gtk::GestureClick::new();
        {
            let chart = Rc::clone(&chart);
            let area = area.clone();
            click.connect_pressed(move |_, _, x, y| {
                chart.borrow_mut().toggle_bars(PointerEvent::click(x, y));
                area.queue_draw();
            });
        }
        area.add_controller(click);

        Self {
            chart,
            progress,
            area,
        }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    #[must_use]
    pub fn chart(&self) -> Rc<RefCell<BarChart<R>>> {
        Rc::clone(&self.chart)
    }

    /// Plays the pending transition, one progress step per frame clock tick.
    pub fn animate(&self) {
        let mut frames = self.chart.borrow().animation_frames();
        let progress = Rc::clone(&self.progress);
        self.area.add_tick_callback(move |area, _| match frames.next() {
            Some(step) => {
                progress.set(step);
                area.queue_draw();
                glib::ControlFlow::Continue
            }
            None => glib::ControlFlow::Break,
        });
    }
}
