use std::time::Duration;

use approx::assert_relative_eq;
use gleam_chart::api::{ScatterView, ScatterViewConfig};
use gleam_chart::interaction::{AnimationPhase, EntranceTiming};
use gleam_chart::render::NullRenderer;

fn mount(step: i64) -> ScatterView<NullRenderer> {
    let config = ScatterViewConfig::default().with_initial_step(step);
    ScatterView::mount_homeric(NullRenderer::default(), config).expect("mount")
}

#[test]
fn below_threshold_mount_renders_axes_only() {
    let view = mount(0);
    assert_eq!(view.phase(), AnimationPhase::Dormant);
    assert!(!view.has_played_entrance());
    assert!(!view.is_animating());

    let renderer = view.renderer();
    assert_eq!(renderer.render_count, 1);
    assert_eq!(renderer.last_circle_count, 0);
    // Gridlines, domain lines and ticks; category labels and titles.
    assert_eq!(renderer.last_line_count, 14);
    assert_eq!(renderer.last_text_count, 8);
}

#[test]
fn steps_zero_two_one_reveal_once_and_stay_settled() {
    let mut view = mount(0);
    assert!(view.snapshot().marks.is_empty());

    view.set_active_step(2).expect("step 2");
    assert_eq!(view.phase(), AnimationPhase::Revealing);
    assert!(view.has_played_entrance());
    assert!(view.is_animating());

    let snapshot = view.snapshot();
    assert_eq!(snapshot.marks.len(), 14);
    for mark in &snapshot.marks {
        assert_relative_eq!(mark.cx, 690.0);
        assert_relative_eq!(mark.cy, 40.0);
        assert_relative_eq!(mark.radius, 0.0);
    }
    assert!(snapshot.labels.iter().all(|label| label.opacity == 0.0));

    view.set_active_step(1).expect("step 1");
    assert_eq!(view.phase(), AnimationPhase::Settled);
    assert!(view.has_played_entrance());
    assert!(!view.is_animating());

    let settled = view.snapshot();
    assert_eq!(settled.marks.len(), 14);
    for (mark, final_mark) in settled.marks.iter().zip(&view.layout().marks) {
        assert_relative_eq!(mark.cx, final_mark.cx);
        assert_relative_eq!(mark.cy, final_mark.cy);
        assert_relative_eq!(mark.radius, 10.0);
    }
    assert!(settled.labels.iter().all(|label| label.opacity == 1.0));
    assert_eq!(view.renderer().last_circle_count, 14);
}

#[test]
fn entrance_follows_delay_fly_in_then_label_fade() {
    let mut view = mount(2);
    assert_eq!(view.phase(), AnimationPhase::Revealing);

    // Still inside the 500 ms delay.
    assert!(view.advance(Duration::from_millis(400)).expect("advance"));
    let melas_final = view.layout().mark("μέλας").expect("μέλας").clone();
    let snapshot = view.snapshot();
    let melas = snapshot.marks.iter().find(|m| m.term == "μέλας").expect("μέλας");
    assert_relative_eq!(melas.radius, 0.0);

    // Exponential ease-out covers most of the distance early.
    assert!(view.advance(Duration::from_millis(600)).expect("advance"));
    let snapshot = view.snapshot();
    let melas = snapshot.marks.iter().find(|m| m.term == "μέλας").expect("μέλας");
    assert!(melas.radius > 8.0 && melas.radius < 10.0);
    assert!(melas.cx < 690.0 && melas.cx > melas_final.cx);
    assert!(snapshot.labels.iter().all(|label| label.opacity == 0.0));

    // Marks done at 2500 ms, labels halfway at 3000 ms.
    assert!(view.advance(Duration::from_millis(2000)).expect("advance"));
    let snapshot = view.snapshot();
    let melas = snapshot.marks.iter().find(|m| m.term == "μέλας").expect("μέλας");
    assert_relative_eq!(melas.cx, melas_final.cx, epsilon = 1e-9);
    assert_relative_eq!(melas.cy, melas_final.cy, epsilon = 1e-9);
    assert_relative_eq!(snapshot.labels[0].opacity, 0.5, epsilon = 1e-9);

    assert!(!view.advance(Duration::from_millis(500)).expect("advance"));
    assert_eq!(view.phase(), AnimationPhase::Settled);
    assert!(view.entrance().is_none());
    assert!(view.snapshot().labels.iter().all(|label| label.opacity == 1.0));
}

#[test]
fn entrance_flag_flips_on_exactly_one_redraw() {
    let mut view = mount(0);
    let mut flips = 0;
    let mut previous = view.has_played_entrance();
    for step in [0, 1, 2, 3, 2, 1, 0, 5, 5, 9] {
        view.set_active_step(step).expect("step");
        view.redraw().expect("redraw");
        if view.has_played_entrance() != previous {
            flips += 1;
            previous = view.has_played_entrance();
        }
    }
    assert_eq!(flips, 1);
    assert!(view.has_played_entrance());
}

#[test]
fn redraw_abandons_in_flight_entrance_and_settles() {
    let mut view = mount(3);
    view.advance(Duration::from_millis(800)).expect("advance");
    assert!(view.entrance().is_some());

    view.redraw().expect("redraw");
    assert!(view.entrance().is_none());
    assert_eq!(view.phase(), AnimationPhase::Settled);
    let snapshot = view.snapshot();
    let final_marks = &view.layout().marks;
    for (mark, final_mark) in snapshot.marks.iter().zip(final_marks) {
        assert_relative_eq!(mark.cx, final_mark.cx);
        assert_relative_eq!(mark.radius, final_mark.radius);
    }
}

#[test]
fn redrawing_twice_with_unchanged_step_is_stable() {
    let mut view = mount(0);
    view.set_active_step(4).expect("step");
    view.redraw().expect("first redraw");
    let first = view.snapshot();
    view.redraw().expect("second redraw");
    assert_eq!(first, view.snapshot());
}

#[test]
fn unchanged_step_does_not_redraw() {
    let mut view = mount(1);
    let renders = view.renderer().render_count;
    view.set_active_step(1).expect("same step");
    assert_eq!(view.renderer().render_count, renders);
}

#[test]
fn zero_length_entrance_settles_immediately() {
    let timing = EntranceTiming {
        mark_delay_ms: 0,
        mark_duration_ms: 0,
        label_fade_ms: 0,
        hover_transition_ms: 0,
    };
    let config = ScatterViewConfig::default()
        .with_initial_step(2)
        .with_timing(timing);
    let view = ScatterView::mount_homeric(NullRenderer::default(), config).expect("mount");
    assert_eq!(view.phase(), AnimationPhase::Settled);
    assert!(view.has_played_entrance());
    assert!(!view.is_animating());
    assert_eq!(view.renderer().last_circle_count, 14);
}

#[test]
fn unmount_hands_back_the_renderer() {
    let mut view = mount(2);
    view.advance(Duration::from_millis(100)).expect("advance");
    let renderer = view.unmount();
    assert_eq!(renderer.render_count, 2);
}
