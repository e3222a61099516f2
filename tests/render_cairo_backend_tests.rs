#![cfg(feature = "cairo-backend")]

use std::time::Duration;

use cairo::{Context, Format, ImageSurface};
use gleam_chart::ChartError;
use gleam_chart::api::{ScatterView, ScatterViewConfig};
use gleam_chart::render::CairoRenderer;

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_settled_scatter() {
    let renderer = CairoRenderer::new(800, 600).expect("renderer");
    let mut view =
        ScatterView::mount_homeric(renderer, ScatterViewConfig::default()).expect("mount");
    view.set_active_step(2).expect("reveal");
    view.advance(Duration::from_millis(3_500)).expect("settle");

    let renderer = view.unmount();
    let stats = renderer.last_stats();
    assert_eq!(stats.lines_drawn, 14);
    assert_eq!(stats.circles_drawn, 14);
    assert_eq!(stats.texts_drawn, 8 + 14);
    assert_eq!(stats.rects_drawn, 0);

    let mut png = Vec::new();
    renderer.write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(800, 600).expect("renderer");
    let mut view =
        ScatterView::mount_homeric(renderer, ScatterViewConfig::default()).expect("mount");

    let surface = ImageSurface::create(Format::ARgb32, 800, 600).expect("surface");
    let context = Context::new(&surface).expect("context");
    view.render_on_cairo_context(&context).expect("external render");

    let stats = view.renderer().last_stats();
    assert_eq!(stats.circles_drawn, 0);
    assert_eq!(stats.texts_drawn, 8);
}
