use approx::assert_relative_eq;
use bar_chart_rs::ChartError;
use bar_chart_rs::api::{
    BarChart, BarChartConfig, BarChartData, CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot,
    DatasetInput,
};
use bar_chart_rs::core::Viewport;
use bar_chart_rs::interaction::PointerEvent;
use bar_chart_rs::render::NullRenderer;

fn settled_chart() -> BarChart<NullRenderer> {
    let data = BarChartData::new(["a", "b", "c"])
        .with_dataset(DatasetInput::new(vec![2.0, 4.0, 8.0]).with_label("alpha"))
        .with_dataset(DatasetInput::new(vec![1.0, 3.0, 5.0]).with_label("beta"));
    let config = BarChartConfig::new(Viewport::new(640, 360)).with_animation(false, 1);
    let mut chart = BarChart::new(NullRenderer::default(), data, config).expect("chart init");
    chart.draw(1.0).expect("draw");
    chart
}

fn assert_same_snapshot(actual: &ChartSnapshot, expected: &ChartSnapshot) {
    assert_eq!(actual.viewport, expected.viewport);
    assert_eq!(actual.labels, expected.labels);
    assert_eq!(actual.range.steps, expected.range.steps);
    assert_relative_eq!(actual.end_point, expected.end_point);
    assert_eq!(actual.bars.len(), expected.bars.len());
    for (actual, expected) in actual.bars.iter().zip(&expected.bars) {
        assert_eq!(actual.key, expected.key);
        assert_eq!(actual.active, expected.active);
        assert_relative_eq!(actual.x, expected.x, epsilon = 1e-9);
        assert_relative_eq!(actual.y, expected.y, epsilon = 1e-9);
        assert_relative_eq!(actual.width, expected.width, epsilon = 1e-9);
    }
}

#[test]
fn snapshot_lists_bars_dataset_major_with_active_flags() {
    let mut chart = settled_chart();
    let bar = chart.bar(0, 2).expect("bar");
    let (top, bottom) = bar.vertical_extent();
    chart.activate_bars(PointerEvent::click(bar.x, (top + bottom) / 2.0));

    let snapshot = chart.snapshot();

    assert_eq!(snapshot.bars.len(), 6);
    assert_eq!(snapshot.labels, vec!["a", "b", "c"]);
    assert_eq!(snapshot.bars[3].dataset_index, 1);
    assert_eq!(snapshot.bars[3].bar_index, 0);
    let active: Vec<(usize, usize)> = snapshot
        .bars
        .iter()
        .filter(|bar| bar.active)
        .map(|bar| (bar.dataset_index, bar.bar_index))
        .collect();
    assert_eq!(active, vec![(0, 2), (1, 2)]);
}

#[test]
fn snapshot_json_round_trips_through_compat_parser() {
    let chart = settled_chart();

    let json = chart.snapshot_json_pretty().expect("snapshot json");
    let parsed = ChartSnapshot::from_json_compat_str(&json).expect("parse bare snapshot");

    assert_same_snapshot(&parsed, &chart.snapshot());
}

#[test]
fn versioned_contract_is_accepted_and_tagged() {
    let snapshot = settled_chart().snapshot();

    let json = snapshot.to_json_contract_v1_pretty().expect("contract json");
    assert!(json.contains(&format!("\"schema_version\": {CHART_SNAPSHOT_JSON_SCHEMA_V1}")));

    let parsed = ChartSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_same_snapshot(&parsed, &snapshot);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let snapshot = settled_chart().snapshot();
    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("contract json")
        .replace("\"schema_version\": 1", "\"schema_version\": 99");

    let err = ChartSnapshot::from_json_compat_str(&json).expect_err("v99 must fail");

    assert!(matches!(err, ChartError::InvalidData(_)));
}
