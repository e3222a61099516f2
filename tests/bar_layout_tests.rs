use approx::assert_relative_eq;
use gleam_chart::ChartError;
use gleam_chart::api::{
    BarChartConfig, BarRecord, FALLBACK_TERM_COLOR, TermPalette, bar_records_from_json_str,
    compute_bar_layout,
};
use gleam_chart::render::{Color, NullRenderer, Renderer, TextHAlign};

fn records() -> Vec<BarRecord> {
    bar_records_from_json_str(
        r#"[
            {"colours": "a", "number_of_times": 12},
            {"colours": "b", "number_of_times": 30},
            {"colours": "c", "number_of_times": 0},
            {"colours": "d", "number_of_times": 45}
        ]"#,
    )
    .expect("records")
}

fn palette() -> TermPalette {
    TermPalette::new()
        .with_color("a", Color::rgb8(0x1e, 0x3a, 0x5f))
        .with_color("b", Color::rgb8(0x6b, 0x9a, 0xa3))
}

#[test]
fn bars_sit_on_the_baseline_with_count_heights() {
    let layout = compute_bar_layout(&records(), &BarChartConfig::default(), &palette())
        .expect("layout");
    assert_eq!(layout.bars.len(), 4);

    // 1000x500 canvas, margins 40/30/50/40: plot 930x410 from (40, 40).
    let step = 930.0 / 4.2;
    let b = layout.bar("b").expect("b");
    assert_relative_eq!(b.x, 40.0 + step * 1.2, epsilon = 1e-9);
    assert_relative_eq!(b.width, step * 0.8, epsilon = 1e-9);
    assert_relative_eq!(b.y + b.height, 450.0, epsilon = 1e-9);
    assert_relative_eq!(b.height, 410.0 * 30.0 / 50.0, epsilon = 1e-9);

    let c = layout.bar("c").expect("c");
    assert_relative_eq!(c.height, 0.0);
    assert_eq!(c.fill, FALLBACK_TERM_COLOR);
    assert_eq!(layout.bar("a").expect("a").fill, Color::rgb8(0x1e, 0x3a, 0x5f));
}

#[test]
fn axes_have_category_and_numeric_ticks_plus_titles() {
    let layout = compute_bar_layout(&records(), &BarChartConfig::default(), &palette())
        .expect("layout");
    // Two domain lines, four category ticks, six value ticks (0..=50 by 10).
    assert_eq!(layout.axis_lines.len(), 2 + 4 + 6);

    let value_labels: Vec<&str> = layout
        .axis_texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Right)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(value_labels, vec!["0", "10", "20", "30", "40", "50"]);

    let titles: Vec<&str> = layout.titles.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Number of times mentioned in the book", "Colours a to g"]
    );

    let mut renderer = NullRenderer::default();
    renderer.render(&layout.to_frame()).expect("render");
    assert_eq!(renderer.last_line_count, 12);
    assert_eq!(renderer.last_text_count, 4 + 6 + 2);
}

#[test]
fn invalid_bar_data_is_rejected() {
    let config = BarChartConfig::default();
    let palette = TermPalette::new();

    let err = compute_bar_layout(&[BarRecord::new("a", -1.0)], &config, &palette)
        .expect_err("negative");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = compute_bar_layout(
        &[BarRecord::new("a", 1.0), BarRecord::new("a", 2.0)],
        &config,
        &palette,
    )
    .expect_err("duplicate");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = compute_bar_layout(&[], &config, &palette).expect_err("empty");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = bar_records_from_json_str("[{").expect_err("malformed");
    assert!(matches!(err, ChartError::DataLoad(_)));
}

#[test]
fn bar_config_rejects_unbounded_ticks_and_bad_sizes() {
    let palette = palette();
    let config = BarChartConfig {
        y_max: 1e12,
        y_tick_step: 1e-6,
        ..BarChartConfig::default()
    };
    let err = compute_bar_layout(&records(), &config, &palette).expect_err("too many ticks");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let config = BarChartConfig {
        y_max: 1000.0,
        y_tick_step: 1.0,
        ..BarChartConfig::default()
    };
    let layout = compute_bar_layout(&records(), &config, &palette).expect("1000 ticks is fine");
    assert_eq!(layout.axis_lines.len(), 2 + 4 + 1001);

    for config in [
        BarChartConfig {
            tick_font_size_px: 0.0,
            ..BarChartConfig::default()
        },
        BarChartConfig {
            title_font_size_px: f64::NAN,
            ..BarChartConfig::default()
        },
        BarChartConfig {
            x_title_font_size_px: -4.0,
            ..BarChartConfig::default()
        },
        BarChartConfig {
            band_padding: 1.0,
            ..BarChartConfig::default()
        },
    ] {
        let err = compute_bar_layout(&records(), &config, &palette).expect_err("invalid config");
        assert!(matches!(err, ChartError::InvalidData(message) if message.starts_with("bar chart")));
    }
}

#[test]
fn y_max_rescales_bar_heights() {
    let config = BarChartConfig::default().with_y_max(100.0);
    let layout = compute_bar_layout(&records(), &config, &palette()).expect("layout");
    let d = layout.bar("d").expect("d");
    assert_relative_eq!(d.height, 410.0 * 45.0 / 100.0, epsilon = 1e-9);
}
