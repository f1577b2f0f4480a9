use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk::glib;
use gtk::prelude::*;
use tracing::warn;

use crate::api::{FrameOutcome, StackedAreaChart};
use crate::core::Viewport;
use crate::render::CairoRenderer;

pub type SharedChart = Rc<RefCell<StackedAreaChart<CairoRenderer>>>;

/// Hosts a chart inside a `gtk4::DrawingArea`.
///
/// Pointer motion, enter and leave come from an `EventControllerMotion`,
/// resizes from the widget's `resize` signal. Both only schedule work; the
/// widget tick callback flushes one frame per display refresh and queues a
/// redraw when something changed.
pub struct GtkStackedAreaAdapter {
    drawing_area: gtk::DrawingArea,
    chart: SharedChart,
}

impl GtkStackedAreaAdapter {
    #[must_use]
    pub fn new(chart: StackedAreaChart<CairoRenderer>) -> Self {
        let viewport = chart.viewport();
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));
        let chart: SharedChart = Rc::new(RefCell::new(chart));

        let draw_chart = Rc::clone(&chart);
        drawing_area.set_draw_func(move |_, context, _, _| {
            if let Err(err) = draw_chart.borrow_mut().render_on_cairo_context(context) {
                warn!(error = %err, "failed to paint stacked area chart");
            }
        });

        let resize_chart = Rc::clone(&chart);
        drawing_area.connect_resize(move |_, width, height| {
            let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
                return;
            };
            if let Err(err) = resize_chart.borrow_mut().resize(Viewport::new(width, height)) {
                warn!(error = %err, width, height, "ignoring chart resize");
            }
        });

        let motion = gtk::EventControllerMotion::new();
        let enter_chart = Rc::clone(&chart);
        motion.connect_enter(move |_, x, y| {
            if let Err(err) = enter_chart.borrow_mut().pointer_enter(x, y) {
                warn!(error = %err, "failed to handle pointer enter");
            }
        });
        let motion_chart = Rc::clone(&chart);
        motion.connect_motion(move |_, x, y| {
            if let Err(err) = motion_chart.borrow_mut().pointer_move(x, y) {
                warn!(error = %err, "failed to handle pointer motion");
            }
        });
        let leave_chart = Rc::clone(&chart);
        motion.connect_leave(move |_| {
            if let Err(err) = leave_chart.borrow_mut().pointer_leave() {
                warn!(error = %err, "failed to handle pointer leave");
            }
        });
        drawing_area.add_controller(motion);

        let tick_chart = Rc::clone(&chart);
        drawing_area.add_tick_callback(move |area, _| {
            match tick_chart.borrow_mut().flush_frame() {
                Ok(FrameOutcome::Idle) => {}
                Ok(_) => area.queue_draw(),
                Err(err) => {
                    warn!(error = %err, "stopping frame ticks");
                    return glib::ControlFlow::Break;
                }
            }
            glib::ControlFlow::Continue
        });

        Self {
            drawing_area,
            chart,
        }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    /// Shared handle for data updates from the host application.
    #[must_use]
    pub fn chart(&self) -> SharedChart {
        Rc::clone(&self.chart)
    }
}
