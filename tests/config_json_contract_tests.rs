use std::time::Duration;

use gleam_chart::ChartError;
use gleam_chart::api::{
    SCATTER_CONFIG_JSON_SCHEMA_V1, ScatterSnapshot, ScatterStyle, ScatterView, ScatterViewConfig,
};
use gleam_chart::core::{Margins, Viewport};
use gleam_chart::interaction::{AnimationPhase, EntranceTiming};
use gleam_chart::render::NullRenderer;

#[test]
fn default_config_matches_the_published_chart() {
    let config = ScatterViewConfig::default();
    assert_eq!(config.viewport, Viewport::new(800, 600));
    assert_eq!(config.margins, Margins::new(40.0, 110.0, 90.0, 110.0));
    assert_eq!(config.x_domain, (0.0, 10.0));
    assert_eq!(config.y_domain, (0.0, 10.0));
    assert_eq!(config.reveal_threshold, 2);
    assert_eq!(config.timing, EntranceTiming::default());
    assert_eq!(config.timing.mark_delay_ms, 500);
    assert_eq!(config.timing.mark_duration_ms, 2000);
    assert_eq!(config.timing.label_fade_ms, 1000);
}

#[test]
fn contract_v1_round_trips_a_customized_config() {
    let config = ScatterViewConfig::new(Viewport::new(1024, 768), Margins::uniform(80.0))
        .with_reveal_threshold(4)
        .with_style(ScatterStyle {
            mark_radius: 8.0,
            hover_radius: 11.0,
            ..ScatterStyle::default()
        });

    let json = config.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {SCATTER_CONFIG_JSON_SCHEMA_V1}")));
    let parsed = ScatterViewConfig::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, config);
}

#[test]
fn bare_partial_config_fills_in_defaults() {
    let parsed = ScatterViewConfig::from_json_compat_str(
        r#"{"reveal_threshold": 3, "style": {"mark_radius": 6.0}, "timing": {"mark_delay_ms": 0}}"#,
    )
    .expect("parse bare");
    assert_eq!(parsed.reveal_threshold, 3);
    assert_eq!(parsed.style.mark_radius, 6.0);
    assert_eq!(parsed.style.hover_radius, 12.0);
    assert_eq!(parsed.timing.mark_delay_ms, 0);
    assert_eq!(parsed.timing.mark_duration_ms, 2000);
    assert_eq!(parsed.viewport, Viewport::new(800, 600));
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let err = ScatterViewConfig::from_json_compat_str(r#"{"schema_version": 9, "config": {}}"#)
        .expect_err("unsupported version");
    assert!(matches!(err, ChartError::InvalidData(message) if message.contains("9")));
}

#[test]
fn invalid_style_fails_on_mount() {
    let config = ScatterViewConfig::default().with_style(ScatterStyle {
        mark_opacity: 1.5,
        ..ScatterStyle::default()
    });
    let result = ScatterView::mount_homeric(NullRenderer::default(), config);
    assert!(matches!(result, Err(ChartError::InvalidData(_))));

    let config = ScatterViewConfig::default().with_domains((5.0, 5.0), (0.0, 10.0));
    let result = ScatterView::mount_homeric(NullRenderer::default(), config);
    assert!(matches!(result, Err(ChartError::DegenerateDomain { .. })));

    let config = ScatterViewConfig::new(Viewport::new(150, 100), Margins::uniform(80.0));
    let result = ScatterView::mount_homeric(NullRenderer::default(), config);
    assert!(matches!(result, Err(ChartError::DegenerateGeometry { .. })));
}

#[test]
fn oversized_entrance_timing_fails_on_mount() {
    let config = ScatterViewConfig::default()
        .with_initial_step(2)
        .with_timing(EntranceTiming {
            mark_delay_ms: u64::MAX,
            ..EntranceTiming::default()
        });
    let result = ScatterView::mount_homeric(NullRenderer::default(), config);
    assert!(matches!(result, Err(ChartError::InvalidData(message)) if message.contains("entrance timing")));

    let config = ScatterViewConfig::default().with_timing(EntranceTiming {
        hover_transition_ms: u64::MAX,
        ..EntranceTiming::default()
    });
    let result = ScatterView::mount_homeric(NullRenderer::default(), config);
    assert!(matches!(result, Err(ChartError::InvalidData(_))));

    let config = ScatterViewConfig::default().with_timing(EntranceTiming {
        mark_delay_ms: 1_000,
        mark_duration_ms: 60_000,
        label_fade_ms: 5_000,
        hover_transition_ms: 200,
    });
    assert!(ScatterView::mount_homeric(NullRenderer::default(), config).is_ok());
}

#[test]
fn empty_axis_title_is_named_in_the_error() {
    for style in [
        ScatterStyle {
            x_axis_title: String::new(),
            ..ScatterStyle::default()
        },
        ScatterStyle {
            y_axis_title: "  ".to_owned(),
            ..ScatterStyle::default()
        },
    ] {
        let config = ScatterViewConfig::default().with_style(style);
        let result = ScatterView::mount_homeric(NullRenderer::default(), config);
        assert!(matches!(result, Err(ChartError::InvalidData(message)) if message.contains("axis title")));
    }
}

#[test]
fn snapshot_contract_round_trips() {
    let config = ScatterViewConfig::default().with_initial_step(2);
    let mut view = ScatterView::mount_homeric(NullRenderer::default(), config).expect("mount");
    view.advance(Duration::from_millis(1200)).expect("advance");

    let snapshot = view.snapshot();
    assert_eq!(snapshot.phase, AnimationPhase::Revealing);
    assert_eq!(snapshot.marks.len(), 14);

    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");
    let parsed = ScatterSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, snapshot);

    let bare = view.snapshot_json_pretty().expect("bare json");
    let parsed = ScatterSnapshot::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed, snapshot);
}
