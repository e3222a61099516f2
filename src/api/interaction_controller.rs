use tracing::{debug, trace};

use crate::error::{ChartError, ChartResult};
use crate::extensions::ViewEvent;
use crate::interaction::TooltipContent;
use crate::render::Renderer;

use super::ScatterView;

impl<R: Renderer> ScatterView<R> {
    /// Pointer entered the mark of `term` at `(x, y)`.
    ///
    /// Grows the mark to the hover radius and shows the tooltip next to the
    /// pointer. Entering a different mark releases the previous one first.
    /// While no marks are drawn the term is still checked but nothing changes.
    pub fn pointer_enter_mark(&mut self, term: &str, x: f64, y: f64) -> ChartResult<()> {
        validate_pointer(x, y)?;
        let record = self
            .data
            .get(term)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown term `{term}`")))?;

        if !self.phase.shows_marks() {
            trace!(term, "pointer entered a mark that is not drawn yet");
            return Ok(());
        }

        if self.hover.hovered() == Some(term) {
            self.tooltip.move_to(x, y, &self.config.tooltip);
            return self.present();
        }

        let accent = self
            .config
            .tooltip
            .resolve_accent(self.theme.palette.color_for(term));
        let content = TooltipContent::from_record(record, accent);

        let style = &self.config.style;
        let previous = self.hover.enter(
            term,
            style.mark_radius,
            style.hover_radius,
            self.config.timing.hover_transition(),
        );
        self.tooltip.show(content, x, y, &self.config.tooltip);

        if let Some(previous) = previous {
            self.emit_plugin_event(ViewEvent::HoverLeft { term: previous });
        }
        debug!(term, x, y, "hover entered");
        self.emit_plugin_event(ViewEvent::HoverEntered {
            term: term.to_owned(),
        });
        self.present()
    }

    /// Pointer left the hovered mark: hide the tooltip, shrink the mark back.
    pub fn pointer_leave_mark(&mut self) -> ChartResult<()> {
        let style = &self.config.style;
        let Some(previous) = self
            .hover
            .leave(style.mark_radius, self.config.timing.hover_transition())
        else {
            return Ok(());
        };
        self.tooltip.hide();
        debug!(term = %previous, "hover left");
        self.emit_plugin_event(ViewEvent::HoverLeft { term: previous });
        self.present()
    }

    /// Hit-tests the pointer and dispatches enter/leave. Moving inside the
    /// hovered mark only repositions the tooltip.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<()> {
        validate_pointer(x, y)?;
        match self.hit_test(x, y).map(str::to_owned) {
            Some(term) => self.pointer_enter_mark(&term, x, y),
            None => self.pointer_leave_mark(),
        }
    }

    /// Pointer left the drawing surface.
    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        self.pointer_leave_mark()
    }
}

fn validate_pointer(x: f64, y: f64) -> ChartResult<()> {
    if !x.is_finite() || !y.is_finite() {
        return Err(ChartError::InvalidData(
            "pointer coordinates must be finite".to_owned(),
        ));
    }
    Ok(())
}
