use approx::assert_relative_eq;
use bar_chart_rs::api::{BarChart, BarChartConfig, BarChartData, DatasetInput};
use bar_chart_rs::core::{Bar, ScaleOverride, Viewport};
use bar_chart_rs::interaction::PointerEvent;
use bar_chart_rs::render::{Color, NullRenderer};

const RED: Color = Color::rgb(0.9, 0.2, 0.2);
const DARK_RED: Color = Color::rgb(0.6, 0.1, 0.1);
const BLUE: Color = Color::rgb(0.2, 0.2, 0.9);
const DARK_BLUE: Color = Color::rgb(0.1, 0.1, 0.6);

fn drawn_chart(series: &[&[f64]]) -> BarChart<NullRenderer> {
    let palette = [(RED, DARK_RED), (BLUE, DARK_BLUE)];
    let data = series.iter().enumerate().fold(
        BarChartData::new(["a", "b", "c"]),
        |data, (index, values)| {
            let (fill, highlight) = palette[index % palette.len()];
            data.with_dataset(
                DatasetInput::new(values.to_vec())
                    .with_label(format!("series-{index}"))
                    .with_colors(fill, fill)
                    .with_highlight(highlight, highlight),
            )
        },
    );
    let config = BarChartConfig::new(Viewport::new(600, 300))
        .with_x_padding(0.0, 0.0)
        .with_animation(false, 1);
    let mut chart = BarChart::new(NullRenderer::default(), data, config).expect("chart init");
    chart.draw(1.0).expect("draw");
    chart
}

fn bar_center(bar: &Bar) -> (f64, f64) {
    let (top, bottom) = bar.vertical_extent();
    (bar.x, top + (bottom - top) / 2.0)
}

#[test]
fn settled_bars_match_grouped_layout() {
    let chart = drawn_chart(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);

    let first = chart.bar(0, 0).expect("bar");
    let second = chart.bar(1, 0).expect("bar");
    assert_relative_eq!(first.x, 52.25);
    assert_relative_eq!(second.x, 147.75);
    assert_relative_eq!(first.width, 94.5);
    assert_relative_eq!(first.base, 277.0);
    assert_relative_eq!(second.y, chart.scale().calculate_y(4.0));
}

#[test]
fn pointer_at_bar_center_returns_full_category_slice() {
    let chart = drawn_chart(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);

    for bar_index in 0..3 {
        let (x, y) = bar_center(chart.bar(0, bar_index).expect("bar"));
        let slice = chart.bars_at_position(x, y);

        assert_eq!(slice.len(), 2);
        assert!(slice.iter().all(|entry| entry.bar_index == bar_index));
        assert_eq!(slice[0].dataset_index, 0);
        assert_eq!(slice[1].dataset_index, 1);
    }
}

#[test]
fn pointer_outside_every_bar_returns_empty_slice() {
    let chart = drawn_chart(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);

    assert!(chart.bars_at_position(300.0, 270.0).is_empty());
    assert!(chart.bars_at_position(52.25, 150.0).is_empty());
    assert!(chart.bars_at_position(-10.0, 200.0).is_empty());
}

#[test]
fn hit_test_on_chart_without_datasets_is_empty() {
    let data = BarChartData::new(["a", "b"]);
    let mut chart = BarChart::new(
        NullRenderer::default(),
        data,
        BarChartConfig::new(Viewport::new(400, 200)),
    )
    .expect("chart init");
    chart.draw(1.0).expect("draw");

    assert!(chart.bars_at_position(100.0, 150.0).is_empty());
}

#[test]
fn bars_below_an_override_floor_hang_under_the_baseline() {
    let data = BarChartData::new(["a", "b"]).with_dataset(DatasetInput::new(vec![-3.0, 5.0]));
    let config = BarChartConfig::new(Viewport::new(400, 300))
        .with_scale_override(ScaleOverride {
            steps: 5,
            step_value: 2.0,
            start_value: 0.0,
        })
        .with_animation(false, 1);
    let mut chart = BarChart::new(NullRenderer::default(), data, config).expect("chart init");
    chart.draw(1.0).expect("draw");

    let bar = chart.bar(0, 0).expect("bar");
    assert!(bar.y > bar.base);
    let (x, y) = bar_center(bar);
    assert_eq!(chart.bars_at_position(x, y).len(), 1);
    assert!(chart.bars_at_position(x, bar.base - 1.0).is_empty());
}

#[test]
fn hover_highlight_is_reverted_on_leave() {
    let mut chart = drawn_chart(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    let before: Vec<(Color, Color)> = chart
        .datasets()
        .iter()
        .flat_map(|dataset| dataset.bars.iter())
        .map(|bar| (bar.fill_color, bar.stroke_color))
        .collect();

    let (x, y) = bar_center(chart.bar(1, 1).expect("bar"));
    let hovered = chart.handle_pointer_event(PointerEvent::moved(x, y));
    assert_eq!(hovered.len(), 2);
    assert_eq!(chart.bar(0, 1).expect("bar").fill_color, DARK_RED);
    assert_eq!(chart.bar(1, 1).expect("bar").fill_color, DARK_BLUE);
    assert_eq!(chart.bar(0, 0).expect("bar").fill_color, RED);

    chart.handle_pointer_event(PointerEvent::leave());
    let after: Vec<(Color, Color)> = chart
        .datasets()
        .iter()
        .flat_map(|dataset| dataset.bars.iter())
        .map(|bar| (bar.fill_color, bar.stroke_color))
        .collect();
    assert_eq!(after, before);
    assert!(chart.hovered_bars().is_empty());
}

#[test]
fn active_bars_stay_highlighted_after_hover_moves_away() {
    let mut chart = drawn_chart(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    let (x, y) = bar_center(chart.bar(0, 2).expect("bar"));
    chart.activate_bars(PointerEvent::click(x, y));

    let (hover_x, hover_y) = bar_center(chart.bar(0, 0).expect("bar"));
    chart.handle_pointer_event(PointerEvent::moved(hover_x, hover_y));
    chart.handle_pointer_event(PointerEvent::leave());

    assert_eq!(chart.bar(0, 2).expect("bar").fill_color, DARK_RED);
    assert_eq!(chart.bar(1, 2).expect("bar").fill_color, DARK_BLUE);
    assert_eq!(chart.bar(0, 0).expect("bar").fill_color, RED);
}

#[test]
fn disabled_tooltips_ignore_pointer_motion() {
    let data = BarChartData::new(["a"]).with_dataset(
        DatasetInput::new(vec![4.0])
            .with_colors(RED, RED)
            .with_highlight(DARK_RED, DARK_RED),
    );
    let config = BarChartConfig::new(Viewport::new(300, 200)).with_tooltips(false);
    let mut chart = BarChart::new(NullRenderer::default(), data, config).expect("chart init");
    chart.draw(1.0).expect("draw");

    let (x, y) = bar_center(chart.bar(0, 0).expect("bar"));
    assert!(chart.handle_pointer_event(PointerEvent::moved(x, y)).is_empty());
    assert_eq!(chart.bar(0, 0).expect("bar").fill_color, RED);
}

#[test]
fn toggling_the_same_bar_twice_returns_to_empty_selection() {
    let mut chart = drawn_chart(&[&[1.0, 2.0, 3.0]]);
    let (x, y) = bar_center(chart.bar(0, 1).expect("bar"));

    let hit = chart.toggle_bars(PointerEvent::click(x, y));
    assert_eq!(hit.len(), 1);
    assert_eq!(chart.active_bars().len(), 1);
    assert_eq!(chart.bar(0, 1).expect("bar").fill_color, DARK_RED);

    chart.toggle_bars(PointerEvent::click(x, y));
    assert!(chart.active_bars().is_empty());
    assert_eq!(chart.bar(0, 1).expect("bar").fill_color, RED);
}

#[test]
fn toggling_a_new_bar_replaces_the_selection() {
    let mut chart = drawn_chart(&[&[1.0, 2.0, 3.0]]);
    let (first_x, first_y) = bar_center(chart.bar(0, 0).expect("bar"));
    let (second_x, second_y) = bar_center(chart.bar(0, 2).expect("bar"));

    chart.toggle_bars(PointerEvent::click(first_x, first_y));
    chart.toggle_bars(PointerEvent::click(second_x, second_y));

    let active = chart.active_bars();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].bar_index, 2);
    assert_eq!(chart.bar(0, 0).expect("bar").fill_color, RED);
}

#[test]
fn toggling_a_multi_dataset_slice_keeps_only_the_last_bar() {
    let mut chart = drawn_chart(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
    let (x, y) = bar_center(chart.bar(1, 0).expect("bar"));

    chart.toggle_bars(PointerEvent::click(x, y));

    let active = chart.active_bars();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].dataset_index, 1);
    assert_eq!(active[0].bar_index, 0);
}

#[test]
fn clicking_empty_space_leaves_selection_untouched() {
    let mut chart = drawn_chart(&[&[1.0, 2.0, 3.0]]);
    let (x, y) = bar_center(chart.bar(0, 0).expect("bar"));
    chart.toggle_bars(PointerEvent::click(x, y));

    let hit = chart.toggle_bars(PointerEvent::click(5.0, 5.0));

    assert!(hit.is_empty());
    assert_eq!(chart.active_bars().len(), 1);
}

#[test]
fn clear_active_bars_restores_saved_colors() {
    let mut chart = drawn_chart(&[&[1.0, 2.0, 3.0]]);
    let (x, y) = bar_center(chart.bar(0, 0).expect("bar"));
    chart.activate_bars(PointerEvent::click(x, y));

    chart.clear_active_bars();

    assert!(chart.active_bars().is_empty());
    assert_eq!(chart.bar(0, 0).expect("bar").fill_color, RED);
}
