use std::time::Duration;

use approx::assert_relative_eq;
use gleam_chart::ChartError;
use gleam_chart::api::{ScatterTheme, ScatterView, ScatterViewConfig, TermPalette};
use gleam_chart::core::{ColorTermRecord, DataSet};
use gleam_chart::render::{CanvasLayerKind, Color, NullRenderer};

fn settled_view() -> ScatterView<NullRenderer> {
    let config = ScatterViewConfig::default().with_initial_step(2);
    let mut view = ScatterView::mount_homeric(NullRenderer::default(), config).expect("mount");
    while view.advance(Duration::from_millis(500)).expect("advance") {}
    view
}

fn mark_center(view: &ScatterView<NullRenderer>, term: &str) -> (f64, f64) {
    let mark = view.layout().mark(term).expect("mark");
    (mark.cx, mark.cy)
}

fn current_radius(view: &ScatterView<NullRenderer>, term: &str) -> f64 {
    view.snapshot()
        .marks
        .into_iter()
        .find(|mark| mark.term == term)
        .expect("mark")
        .radius
}

#[test]
fn hovering_leukos_uses_the_fallback_accent() {
    let mut view = settled_view();
    let (x, y) = mark_center(&view, "λευκός");
    view.pointer_move(x, y).expect("pointer move");

    assert_eq!(view.hovered(), Some("λευκός"));
    let tooltip = view.tooltip();
    assert!(tooltip.visible);
    assert_relative_eq!(tooltip.left, x + 30.0);
    assert_relative_eq!(tooltip.top, y - 10.0);
    let content = tooltip.content.as_ref().expect("content");
    assert_eq!(content.term, "λευκός");
    assert_eq!(content.accent_color, Color::BLACK);

    let html = tooltip.to_html().expect("html");
    assert!(html.contains("λευκός"));
    assert!(html.contains("color: #000000"));
    assert!(html.contains("opacity: 1"));
}

#[test]
fn legible_colours_keep_their_own_accent() {
    let mut view = settled_view();
    let (x, y) = mark_center(&view, "κυάνεος");
    view.pointer_enter_mark("κυάνεος", x, y).expect("enter");
    let content = view.tooltip().content.as_ref().expect("content");
    assert_eq!(
        content.accent_color,
        TermPalette::homeric().color_for("κυάνεος")
    );
}

#[test]
fn only_leukos_and_argos_fall_back_with_the_homeric_palette() {
    let config = ScatterViewConfig::default();
    let palette = TermPalette::homeric();
    let fallbacks: Vec<&str> = palette
        .iter()
        .filter(|(_, color)| config.tooltip.resolve_accent(*color) != *color)
        .map(|(term, _)| term)
        .collect();
    assert_eq!(fallbacks, vec!["λευκός", "ἀργός"]);
}

#[test]
fn hover_grows_the_mark_and_leaving_restores_it() {
    let mut view = settled_view();
    let (x, y) = mark_center(&view, "μέλας");
    view.pointer_move(x, y).expect("enter");
    assert!(view.is_animating());
    assert_relative_eq!(current_radius(&view, "μέλας"), 10.0);

    view.advance(Duration::from_millis(100)).expect("advance");
    assert_relative_eq!(current_radius(&view, "μέλας"), 11.0, epsilon = 1e-9);
    view.advance(Duration::from_millis(100)).expect("advance");
    assert_relative_eq!(current_radius(&view, "μέλας"), 12.0);
    assert!(!view.is_animating());

    view.pointer_move(780.0, 590.0).expect("leave");
    assert_eq!(view.hovered(), None);
    assert!(!view.tooltip().visible);
    view.advance(Duration::from_millis(200)).expect("advance");
    assert_relative_eq!(current_radius(&view, "μέλας"), 10.0);
    assert!(!view.is_animating());
}

#[test]
fn moving_within_a_mark_only_repositions_the_tooltip() {
    let mut view = settled_view();
    let (x, y) = mark_center(&view, "ξανθός");
    view.pointer_move(x, y).expect("enter");
    view.advance(Duration::from_millis(50)).expect("advance");
    let radius_before = current_radius(&view, "ξανθός");

    view.pointer_move(x + 2.0, y + 1.0).expect("move inside");
    assert_eq!(view.hovered(), Some("ξανθός"));
    assert_relative_eq!(view.tooltip().left, x + 32.0);
    assert_relative_eq!(view.tooltip().top, y - 9.0);
    assert_relative_eq!(current_radius(&view, "ξανθός"), radius_before);
}

#[test]
fn entering_another_mark_releases_the_previous_one() {
    let mut view = settled_view();
    let (x, y) = mark_center(&view, "λευκός");
    view.pointer_enter_mark("λευκός", x, y).expect("enter first");
    view.advance(Duration::from_millis(200)).expect("advance");

    let (x, y) = mark_center(&view, "μέλας");
    view.pointer_enter_mark("μέλας", x, y).expect("enter second");
    assert_eq!(view.hovered(), Some("μέλας"));
    assert_eq!(
        view.tooltip().content.as_ref().expect("content").term,
        "μέλας"
    );

    view.advance(Duration::from_millis(200)).expect("advance");
    assert_relative_eq!(current_radius(&view, "λευκός"), 10.0);
    assert_relative_eq!(current_radius(&view, "μέλας"), 12.0);
}

#[test]
fn unknown_term_is_rejected_even_while_dormant() {
    let mut view =
        ScatterView::mount_homeric(NullRenderer::default(), ScatterViewConfig::default())
            .expect("mount");
    let err = view
        .pointer_enter_mark("χρυσός", 10.0, 10.0)
        .expect_err("unknown term");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = view
        .pointer_move(f64::NAN, 10.0)
        .expect_err("non-finite pointer");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn entering_a_mark_while_dormant_shows_nothing() {
    let mut view =
        ScatterView::mount_homeric(NullRenderer::default(), ScatterViewConfig::default())
            .expect("mount");
    let renders = view.renderer().render_count;

    view.pointer_enter_mark("μέλας", 100.0, 100.0)
        .expect("known term is accepted");

    assert_eq!(view.hovered(), None);
    assert!(!view.tooltip().visible);
    assert_eq!(view.renderer().render_count, renders);
    let frame = view.frame();
    assert!(frame.layer(CanvasLayerKind::Overlay).expect("overlay").is_empty());
    assert!(frame.layer(CanvasLayerKind::Marks).expect("marks").circles.is_empty());
}

#[test]
fn dormant_view_has_nothing_to_hit() {
    let view = ScatterView::mount_homeric(NullRenderer::default(), ScatterViewConfig::default())
        .expect("mount");
    let (x, y) = mark_center(&view, "μέλας");
    assert_eq!(view.hit_test(x, y), None);
}

#[test]
fn hit_test_prefers_the_topmost_mark() {
    let data = DataSet::new(vec![
        ColorTermRecord::new("first", "a", "a", "a", 5.0, 5.0),
        ColorTermRecord::new("second", "b", "b", "b", 5.1, 5.0),
    ])
    .expect("data");
    let config = ScatterViewConfig::default().with_initial_step(5);
    let mut view = ScatterView::mount(NullRenderer::default(), config, data, ScatterTheme::homeric())
        .expect("mount");
    view.redraw().expect("settle");

    let (first_x, y) = mark_center(&view, "first");
    let (second_x, _) = mark_center(&view, "second");
    // Later records draw on top, so they win where marks overlap.
    assert_eq!(view.hit_test((first_x + second_x) / 2.0, y), Some("second"));
    assert_eq!(view.hit_test(first_x - 9.0, y), Some("first"));
    assert_eq!(view.hit_test(first_x - 11.0, y), None);
}

#[test]
fn visible_tooltip_is_drawn_into_the_overlay_layer() {
    let mut view = settled_view();
    let (x, y) = mark_center(&view, "λευκός");
    view.pointer_move(x, y).expect("enter");

    let frame = view.renderer().last_frame.clone().expect("frame");
    let overlay = frame.layer(CanvasLayerKind::Overlay).expect("overlay");
    assert_eq!(overlay.rects.len(), 1);
    assert_relative_eq!(overlay.rects[0].x, x + 30.0);
    assert_relative_eq!(overlay.rects[0].width, 300.0);
    assert!(overlay.texts.len() >= 4);
    let term = overlay
        .texts
        .iter()
        .find(|text| text.text == "λευκός")
        .expect("term line");
    assert_eq!(term.color, Color::BLACK);

    view.pointer_leave().expect("leave surface");
    let frame = view.renderer().last_frame.clone().expect("frame");
    assert!(frame.layer(CanvasLayerKind::Overlay).expect("overlay").is_empty());
}
