use anomview_core::{ChartKind, ChartSpec};
use leptos::prelude::*;
use plotly::{
    common::{Font, Marker, Mode, Title},
    layout::{Axis, BarMode, Margin, RangeMode},
    Bar, Configuration, Histogram, Layout, Plot, Scatter,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(root: &JsValue, data: &JsValue, layout: &JsValue, config: &JsValue);
}

/// Build the plotly figure for one chart.
pub fn to_plot(spec: &ChartSpec) -> Plot {
    let mut p = Plot::new();

    let mut y_axis = Axis::new()
        .title(Title::from(spec.y_title.as_str()))
        .show_grid(true)
        .grid_color("#1e293b");
    if spec.y_from_zero {
        y_axis = y_axis.range_mode(RangeMode::ToZero);
    }

    let mut layout = Layout::new()
        .title(Title::from(spec.title.as_str()))
        .margin(Margin::new().left(60).right(30).top(50).bottom(60))
        .show_legend(true)
        .paper_background_color("rgba(0,0,0,0)")
        .plot_background_color("rgba(0,0,0,0)")
        .font(Font::new().color("#94a3b8"))
        .x_axis(
            Axis::new()
                .title(Title::from(spec.x_title.as_str()))
                .show_grid(true)
                .grid_color("#1e293b"),
        )
        .y_axis(y_axis);
    match spec.kind {
        ChartKind::Histogram => layout = layout.bar_mode(BarMode::Overlay),
        ChartKind::Bar => layout = layout.bar_mode(BarMode::Group),
        _ => {}
    }
    p.set_layout(layout);
    p.set_configuration(Configuration::new().responsive(true).display_logo(false));

    for s in &spec.series {
        let marker = Marker::new()
            .color(s.color.clone())
            .size(s.marker_size.unwrap_or(6) as usize);
        match spec.kind {
            ChartKind::Scatter => p.add_trace(
                Scatter::new(s.x.clone(), s.y.clone())
                    .name(s.label.as_str())
                    .mode(Mode::Markers)
                    .marker(marker),
            ),
            ChartKind::Line => p.add_trace(
                Scatter::new(s.x.clone(), s.y.clone())
                    .name(s.label.as_str())
                    .mode(Mode::LinesMarkers)
                    .connect_gaps(false)
                    .marker(marker),
            ),
            ChartKind::Bar => p.add_trace(
                Bar::new(s.x.clone(), s.y.clone())
                    .name(s.label.as_str())
                    .marker(marker),
            ),
            ChartKind::Histogram => p.add_trace(
                Histogram::new(s.x.clone())
                    .name(s.label.as_str())
                    .opacity(0.75)
                    .marker(marker),
            ),
        }
    }
    p
}

#[component]
pub fn PlotlyChart(chart: ChartSpec) -> impl IntoView {
    let div_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move |_| {
        if let Some(div) = div_ref.get() {
            let json_str = to_plot(&chart).to_json();

            if let Ok(js_value) = js_sys::JSON::parse(&json_str) {
                let data =
                    js_sys::Reflect::get(&js_value, &"data".into()).unwrap_or(JsValue::UNDEFINED);
                let layout =
                    js_sys::Reflect::get(&js_value, &"layout".into()).unwrap_or(JsValue::UNDEFINED);
                let config =
                    js_sys::Reflect::get(&js_value, &"config".into()).unwrap_or(JsValue::UNDEFINED);

                let div_element: &web_sys::HtmlElement = &div;
                new_plot(&div_element.into(), &data, &layout, &config);
            } else {
                log::error!("Failed to parse Plotly JSON for '{}'", chart.title);
            }
        }
    });

    view! {
        <div class="w-full h-full p-2">
            <div node_ref=div_ref class="w-full h-full"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anomview_core::ChartSeries;

    #[test]
    fn test_scatter_traces_keep_labels_and_colors() {
        let mut series = ChartSeries::new("Cluster 2", "#FFCE56");
        series.push(1.0, Some(3.0));
        let spec = ChartSpec::new(ChartKind::Scatter, "K-Means Clustering Results", "kwh", "cost")
            .with_series(series);

        let json = to_plot(&spec).to_json();
        assert!(json.contains("\"Cluster 2\""));
        assert!(json.contains("#FFCE56"));
        assert!(json.contains("\"markers\""));
    }

    #[test]
    fn test_line_gaps_serialize_as_null() {
        let mut series = ChartSeries::new("Anomalies", "red");
        series.push("Point 1".to_string(), None);
        series.push("Point 2".to_string(), Some(4.0));
        let spec = ChartSpec::new(ChartKind::Line, "Anomaly Data Points", "Data Points", "Values")
            .with_series(series);

        let json = to_plot(&spec).to_json();
        assert!(json.contains("[null,4.0]"));
    }
}
