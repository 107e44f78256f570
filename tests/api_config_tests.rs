use bar_chart_rs::ChartError;
use bar_chart_rs::api::{
    BarChart, BarChartConfig, BarChartData, DEFAULT_FILL_COLOR, DatasetInput,
};
use bar_chart_rs::core::{ScaleOverride, Viewport};
use bar_chart_rs::interaction::PointerEventKind;
use bar_chart_rs::render::{Color, NullRenderer};

fn data() -> BarChartData {
    BarChartData::new(["a", "b"]).with_dataset(DatasetInput::new(vec![1.0, 2.0]))
}

fn build(config: BarChartConfig) -> Result<BarChart<NullRenderer>, ChartError> {
    BarChart::new(NullRenderer::default(), data(), config)
}

#[test]
fn chart_data_parses_from_json_with_defaults() {
    let data = BarChartData::from_json_str(
        r#"{
            "labels": ["q1", "q2"],
            "datasets": [
                { "label": "sales", "data": [10.0, 12.5] },
                {
                    "data": [3.0, 4.0],
                    "fill_color": { "red": 1.0, "green": 0.0, "blue": 0.0, "alpha": 0.5 }
                }
            ]
        }"#,
    )
    .expect("parse data");

    assert_eq!(data.labels, vec!["q1", "q2"]);
    assert_eq!(data.datasets[0].resolved_fill(), DEFAULT_FILL_COLOR);
    let fill = Color::rgba(1.0, 0.0, 0.0, 0.5);
    assert_eq!(data.datasets[1].resolved_fill(), fill);
    assert_eq!(data.datasets[1].resolved_highlight_fill(), fill);
}

#[test]
fn malformed_chart_data_json_is_invalid_data() {
    let err = BarChartData::from_json_str("{\"labels\": 3}").expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn shorter_label_list_yields_empty_bar_labels() {
    let data = BarChartData::new(["only"]).with_dataset(DatasetInput::new(vec![1.0, 2.0]));
    let chart = BarChart::new(
        NullRenderer::default(),
        data,
        BarChartConfig::new(Viewport::new(400, 300)),
    )
    .expect("chart init");

    assert_eq!(chart.bar(0, 0).expect("bar").label, "only");
    assert_eq!(chart.bar(0, 1).expect("bar").label, "");
}

#[test]
fn zero_sized_viewport_is_rejected() {
    let err = build(BarChartConfig::new(Viewport::new(0, 200))).err().expect("must fail");
    assert!(matches!(err, ChartError::InvalidViewport { width: 0, height: 200 }));
}

#[test]
fn negative_spacing_is_rejected() {
    let config = BarChartConfig::new(Viewport::new(400, 300)).with_bar_spacing(-1.0, 1.0);
    let err = build(config).err().expect("must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn degenerate_scale_override_is_rejected() {
    let config = BarChartConfig::new(Viewport::new(400, 300)).with_scale_override(ScaleOverride {
        steps: 0,
        step_value: 1.0,
        start_value: 0.0,
    });
    let err = build(config).err().expect("must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn enabled_animation_needs_at_least_one_step() {
    let config = BarChartConfig::new(Viewport::new(400, 300)).with_animation(true, 0);
    let err = build(config).err().expect("must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn non_finite_input_values_are_rejected() {
    let data = BarChartData::new(["a"]).with_dataset(DatasetInput::new(vec![f64::INFINITY]));
    let err = BarChart::new(
        NullRenderer::default(),
        data,
        BarChartConfig::new(Viewport::new(400, 300)),
    )
    .err()
    .expect("must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn tooltip_events_can_be_narrowed() {
    let config = BarChartConfig::new(Viewport::new(400, 300))
        .with_tooltip_events(vec![PointerEventKind::TouchStart]);
    let chart = build(config).expect("chart init");

    assert_eq!(chart.config().tooltips.events, vec![PointerEventKind::TouchStart]);
}

#[test]
fn config_json_round_trip_keeps_layout_options() {
    let config = BarChartConfig::new(Viewport::new(800, 450))
        .with_begin_at_zero(false)
        .with_x_padding(24.0, 8.0)
        .with_bar_spacing(3.0, 2.0);

    let json = serde_json::to_string(&config).expect("serialize config");
    let parsed: BarChartConfig = serde_json::from_str(&json).expect("parse config");

    assert_eq!(parsed.viewport, config.viewport);
    assert_eq!(parsed.scale, config.scale);
    assert_eq!(parsed.bars, config.bars);
    assert_eq!(parsed.tooltips, config.tooltips);
}
