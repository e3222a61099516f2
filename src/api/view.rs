use std::time::Duration;

use tracing::{debug, trace};

use crate::core::{ChartGeometry, DataSet};
use crate::error::ChartResult;
use crate::extensions::{ScatterPlugin, ViewEvent};
use crate::interaction::{
    AnimationPhase, AnimationState, EntranceTimeline, HoverState, TooltipState,
};
use crate::render::Renderer;

use super::scatter_layout::{ScatterLayout, ScatterScales, compute_scatter_layout};
use super::validation::validate_scatter_config;
use super::{ScatterTheme, ScatterViewConfig};

/// Logs the end of a view's lifetime, whether it was unmounted or dropped.
#[derive(Debug)]
struct MountGuard;

impl Drop for MountGuard {
    fn drop(&mut self) {
        debug!("scatter view released");
    }
}

/// One mounted scatterplot instance.
///
/// Owns its renderer, the entrance flag, the in-flight timeline and the
/// hover/tooltip state. Every state change re-renders a complete frame.
pub struct ScatterView<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ScatterViewConfig,
    pub(super) data: DataSet,
    pub(super) theme: ScatterTheme,
    pub(super) animation: AnimationState,
    pub(super) active_step: i64,
    pub(super) phase: AnimationPhase,
    pub(super) layout: ScatterLayout,
    pub(super) entrance: Option<EntranceTimeline>,
    pub(super) hover: HoverState,
    pub(super) tooltip: TooltipState,
    pub(super) plugins: Vec<Box<dyn ScatterPlugin>>,
    _guard: MountGuard,
}

impl<R: Renderer> ScatterView<R> {
    /// Validates the configuration, lays out the records and renders the
    /// first frame for `config.initial_step`.
    pub fn mount(
        renderer: R,
        config: ScatterViewConfig,
        data: DataSet,
        theme: ScatterTheme,
    ) -> ChartResult<Self> {
        validate_scatter_config(&config)?;
        let layout = compute_layout(&config, &data, &theme)?;

        let mut view = Self {
            renderer,
            active_step: config.initial_step,
            config,
            data,
            theme,
            animation: AnimationState::default(),
            phase: AnimationPhase::Dormant,
            layout,
            entrance: None,
            hover: HoverState::default(),
            tooltip: TooltipState::default(),
            plugins: Vec::new(),
            _guard: MountGuard,
        };
        debug!(
            records = view.data.len(),
            step = view.active_step,
            threshold = view.config.reveal_threshold,
            "mounting scatter view"
        );
        view.emit_plugin_event(ViewEvent::Mounted);
        view.redraw()?;
        Ok(view)
    }

    /// Mounts the bundled Iliad data set with the Homeric palette.
    pub fn mount_homeric(renderer: R, config: ScatterViewConfig) -> ChartResult<Self> {
        Self::mount(renderer, config, DataSet::homeric()?, ScatterTheme::homeric())
    }

    /// Full redraw cycle: recompute the layout, abandon any entrance in
    /// flight, resolve the phase and present a fresh frame.
    ///
    /// The entrance flag is set here, synchronously, on the first redraw
    /// that sees `active_step >= reveal_threshold`.
    pub fn redraw(&mut self) -> ChartResult<()> {
        self.layout = compute_layout(&self.config, &self.data, &self.theme)?;

        if self.entrance.take().is_some() {
            debug!(step = self.active_step, "abandoning in-flight entrance");
            self.emit_plugin_event(ViewEvent::EntranceAbandoned);
        }

        let revealed = self.active_step >= self.config.reveal_threshold;
        self.phase = if revealed && self.animation.begin_entrance() {
            let timeline = EntranceTimeline::new(self.config.timing);
            debug!(
                step = self.active_step,
                duration_ms = timeline.total_duration().as_millis() as u64,
                "scheduling entrance"
            );
            self.emit_plugin_event(ViewEvent::EntranceScheduled);
            if timeline.is_complete() {
                self.emit_plugin_event(ViewEvent::EntranceCompleted);
                AnimationPhase::Settled
            } else {
                self.entrance = Some(timeline);
                AnimationPhase::Revealing
            }
        } else if self.animation.has_played_entrance() {
            AnimationPhase::Settled
        } else {
            AnimationPhase::Dormant
        };

        self.present()?;
        debug!(
            step = self.active_step,
            phase = ?self.phase,
            marks = self.plugin_context().mark_count,
            "scatter view redrawn"
        );
        self.emit_plugin_event(ViewEvent::Redrawn {
            step: self.active_step,
            phase: self.phase,
        });
        Ok(())
    }

    /// Pushes a new step value. Redraws only when the value changed.
    pub fn set_active_step(&mut self, step: i64) -> ChartResult<()> {
        if step == self.active_step {
            trace!(step, "active step unchanged");
            return Ok(());
        }
        self.active_step = step;
        self.redraw()
    }

    /// Moves every running animation forward by `delta` and presents the
    /// sampled frame. Returns whether anything is still animating.
    pub fn advance(&mut self, delta: Duration) -> ChartResult<bool> {
        let mut changed = self.hover.is_animating();
        self.hover.advance(delta);

        if let Some(timeline) = self.entrance.as_mut() {
            timeline.advance(delta);
            changed = true;
            if timeline.is_complete() {
                self.entrance = None;
                self.phase = AnimationPhase::Settled;
                debug!(step = self.active_step, "entrance completed");
                self.emit_plugin_event(ViewEvent::EntranceCompleted);
            }
        }

        if changed {
            self.present()?;
        }
        Ok(self.is_animating())
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.entrance.is_some() || self.hover.is_animating()
    }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    #[must_use]
    pub fn active_step(&self) -> i64 {
        self.active_step
    }

    #[must_use]
    pub fn has_played_entrance(&self) -> bool {
        self.animation.has_played_entrance()
    }

    #[must_use]
    pub fn config(&self) -> &ScatterViewConfig {
        &self.config
    }

    #[must_use]
    pub fn data(&self) -> &DataSet {
        &self.data
    }

    #[must_use]
    pub fn layout(&self) -> &ScatterLayout {
        &self.layout
    }

    #[must_use]
    pub fn entrance(&self) -> Option<&EntranceTimeline> {
        self.entrance.as_ref()
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hover.hovered()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Topmost mark under `(x, y)` at its current radius. Later records
    /// draw over earlier ones, so they win ties.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<&str> {
        if !self.phase.shows_marks() {
            return None;
        }
        self.layout.marks.iter().rev().find_map(|mark| {
            let (cx, cy, radius) = self.resolve_mark_geometry(mark);
            let (dx, dy) = (x - cx, y - cy);
            (dx * dx + dy * dy <= radius * radius).then_some(mark.term.as_str())
        })
    }

    /// Drops every pending timeline and hands the renderer back.
    pub fn unmount(mut self) -> R {
        self.emit_plugin_event(ViewEvent::Unmounted);
        debug!(
            step = self.active_step,
            entrance_in_flight = self.entrance.is_some(),
            "unmounting scatter view"
        );
        self.renderer
    }

    pub(super) fn present(&mut self) -> ChartResult<()> {
        let frame = self.frame();
        trace!(
            lines = frame.line_count(),
            circles = frame.circle_count(),
            texts = frame.text_count(),
            "presenting frame"
        );
        self.renderer.render(&frame)
    }
}

fn compute_layout(
    config: &ScatterViewConfig,
    data: &DataSet,
    theme: &ScatterTheme,
) -> ChartResult<ScatterLayout> {
    let geometry = ChartGeometry::new(config.viewport, config.margins)?;
    let scales = ScatterScales::for_geometry(geometry, config.x_domain, config.y_domain)?;
    compute_scatter_layout(data, geometry, scales, theme, &config.style)
}
