use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use gtk4 as gtk;
use gtk::glib;
use gtk::prelude::*;
use tracing::{debug, warn};

use crate::api::ScatterView;
use crate::error::{ChartError, ChartResult};
use crate::render::{CairoContextRenderer, Renderer};

type SharedView<R> = Rc<RefCell<ScatterView<R>>>;
type TickSlot = Rc<RefCell<Option<gtk::TickCallbackId>>>;

/// Hosts a `ScatterView` inside a GTK4 `DrawingArea`.
///
/// Pointer motion drives hover and tooltip state. While the view animates a
/// single tick callback feeds frame-clock deltas into `ScatterView::advance`;
/// it is removed once animation stops, on `unmount` and on drop.
pub struct GtkScatterAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    view: SharedView<R>,
    area: gtk::DrawingArea,
    tick: TickSlot,
}

impl<R> GtkScatterAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    #[must_use]
    pub fn new(view: ScatterView<R>) -> Self {
        let viewport = view.config().viewport;
        let view = Rc::new(RefCell::new(view));
        let tick: TickSlot = Rc::new(RefCell::new(None));

        let area = gtk::DrawingArea::new();
        area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        let weak_view = Rc::downgrade(&view);
        area.set_draw_func(move |_, context, _, _| {
            let Some(view) = weak_view.upgrade() else {
                return;
            };
            if let Err(err) = view.borrow_mut().render_on_cairo_context(context) {
                warn!(error = %err, "scatter view draw failed");
            }
        });

        let motion = gtk::EventControllerMotion::new();
        {
            let weak_view = Rc::downgrade(&view);
            let tick = Rc::clone(&tick);
            motion.connect_motion(move |controller, x, y| {
                let Some(view) = weak_view.upgrade() else {
                    return;
                };
                if let Err(err) = view.borrow_mut().pointer_move(x, y) {
                    warn!(error = %err, "pointer move rejected");
                }
                if let Some(widget) = controller.widget() {
                    widget.queue_draw();
                    ensure_ticking(&widget, &view, &tick);
                }
            });
        }
        {
            let weak_view = Rc::downgrade(&view);
            let tick = Rc::clone(&tick);
            motion.connect_leave(move |controller| {
                let Some(view) = weak_view.upgrade() else {
                    return;
                };
                if let Err(err) = view.borrow_mut().pointer_leave() {
                    warn!(error = %err, "pointer leave rejected");
                }
                if let Some(widget) = controller.widget() {
                    widget.queue_draw();
                    ensure_ticking(&widget, &view, &tick);
                }
            });
        }
        area.add_controller(motion);

        let adapter = Self { view, area, tick };
        adapter.sync();
        adapter
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Forwards the host's step signal and starts ticking if an entrance
    /// was scheduled.
    pub fn set_active_step(&self, step: i64) -> ChartResult<()> {
        self.view.borrow_mut().set_active_step(step)?;
        self.sync();
        Ok(())
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.tick.borrow().is_some()
    }

    /// Removes the tick callback and draw hook, then hands the view back.
    pub fn unmount(self) -> ChartResult<ScatterView<R>> {
        let view = Rc::clone(&self.view);
        drop(self);
        Rc::try_unwrap(view)
            .map(RefCell::into_inner)
            .map_err(|_| ChartError::Backend("scatter view is still borrowed".to_owned()))
    }

    fn sync(&self) {
        self.area.queue_draw();
        ensure_ticking(self.area.upcast_ref(), &self.view, &self.tick);
    }
}

impl<R> Drop for GtkScatterAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    fn drop(&mut self) {
        if let Some(id) = self.tick.borrow_mut().take() {
            id.remove();
            debug!("removed scatter view tick callback");
        }
        self.area.set_draw_func(|_, _, _, _| {});
    }
}

fn ensure_ticking<R>(widget: &gtk::Widget, view: &SharedView<R>, tick: &TickSlot)
where
    R: Renderer + CairoContextRenderer + 'static,
{
    if tick.borrow().is_some() || !view.borrow().is_animating() {
        return;
    }

    let weak_view: Weak<RefCell<ScatterView<R>>> = Rc::downgrade(view);
    let slot = Rc::clone(tick);
    let last_frame_us = Cell::new(None::<i64>);
    let id = widget.add_tick_callback(move |widget, clock| {
        let Some(view) = weak_view.upgrade() else {
            slot.borrow_mut().take();
            return glib::ControlFlow::Break;
        };
        let now_us = clock.frame_time();
        let delta_us = last_frame_us.replace(Some(now_us)).map_or(0, |last| now_us - last);
        let delta = Duration::from_micros(u64::try_from(delta_us).unwrap_or(0));

        let animating = match view.borrow_mut().advance(delta) {
            Ok(animating) => animating,
            Err(err) => {
                warn!(error = %err, "scatter view advance failed");
                false
            }
        };
        widget.queue_draw();
        if animating {
            glib::ControlFlow::Continue
        } else {
            slot.borrow_mut().take();
            glib::ControlFlow::Break
        }
    });
    *tick.borrow_mut() = Some(id);
}
