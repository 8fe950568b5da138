use anomview_core::routes::algorithm_from_query;
use anomview_core::{AlgorithmChoice, FileIdentifier, Route, Statistics, ViewState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_params_map, use_query_map};
use lucide_leptos::{FileDown, TriangleAlert};

use crate::api;
use crate::charts::PlotlyChart;
use crate::export;

#[component]
pub fn ResultsPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();

    view! {
        {move || {
            let file_id = FileIdentifier::new(params.read().get("file_id").unwrap_or_default());
            match algorithm_from_query(query.read().get("algorithm").as_deref()) {
                Ok(algorithm) => view! { <ResultsView file_id=file_id algorithm=algorithm /> }.into_any(),
                Err(e) => {
                    let back = Route::SelectAlgorithm { file_id }.path();
                    view! {
                        <div class="flex flex-col items-center justify-center h-full space-y-4">
                            <div class="text-amber-400"><TriangleAlert size=32 /></div>
                            <p class="text-slate-300">{e.to_string()}</p>
                            <A href=back attr:class="text-blue-400 hover:underline">"Choose an algorithm"</A>
                        </div>
                    }
                    .into_any()
                }
            }
        }}
    }
}

/// One results view: a single fetch, settled once.
#[component]
fn ResultsView(file_id: FileIdentifier, algorithm: AlgorithmChoice) -> impl IntoView {
    let state = RwSignal::new(ViewState::default());
    state.update(ViewState::mount);

    spawn_local(async move {
        let outcome = api::fetch_results(file_id, algorithm).await;
        // The signal is gone once the view unmounts.
        if state.try_update(|s| s.resolve(outcome)).is_none() {
            log::debug!("dropping {} results for an unmounted view", algorithm);
        }
    });

    let charts_ref = NodeRef::<leptos::html::Div>::new();
    let save_pdf = move |_| {
        let Some(div) = charts_ref.get_untracked() else {
            return;
        };
        let container: web_sys::HtmlElement = div.into();
        spawn_local(async move {
            if let Err(e) = export::save_as_pdf(container, algorithm).await {
                log::error!("PDF export failed: {:?}", e);
            }
        });
    };

    view! {
        <div class="max-w-6xl mx-auto space-y-6">
            {move || state.with(|s| s.headline(algorithm)).map(|headline| view! {
                <h1 class="text-3xl font-bold text-white">{headline}</h1>
            })}
            {move || state.with(|s| match s {
                ViewState::Idle | ViewState::Loading => view! {
                    <div class="p-12 text-center text-slate-500 animate-pulse">"Loading charts..."</div>
                }.into_any(),
                ViewState::ErrorShown(_) => view! {
                    <div class="p-6 bg-red-950/40 border border-red-900 rounded-xl text-red-300">
                        {s.error_text()}
                    </div>
                }.into_any(),
                ViewState::Displayed(result) => {
                    let statistics = result.statistics.clone();
                    let charts = result.charts.clone();
                    view! {
                        <div class="grid grid-cols-1 lg:grid-cols-4 gap-6">
                            <StatisticsPanel statistics=statistics />
                            <div class="lg:col-span-3 space-y-4">
                                <div node_ref=charts_ref class="space-y-6 bg-slate-900 border border-slate-800 rounded-xl p-4">
                                    {charts.into_iter().map(|chart| view! {
                                        <div class="h-96">
                                            <PlotlyChart chart=chart />
                                        </div>
                                    }).collect_view()}
                                </div>
                                <button
                                    on:click=save_pdf
                                    class="flex items-center gap-2 px-5 py-2.5 bg-blue-600 hover:bg-blue-500 rounded-xl font-medium text-white transition-colors"
                                >
                                    <FileDown size=18 />
                                    "Save charts as PDF"
                                </button>
                            </div>
                        </div>
                    }.into_any()
                }
            })}
        </div>
    }
}

#[component]
fn StatisticsPanel(statistics: Statistics) -> impl IntoView {
    let indices = statistics.joined_indices();

    view! {
        <div class="bg-slate-900 border border-slate-800 rounded-xl p-6 space-y-3 h-fit">
            <h2 class="text-lg font-semibold text-white">"Statistics:"</h2>
            <StatRow label="Number of anomalies" value=statistics.num_anomalies.to_string() />
            <StatRow label="Anomaly Percentage" value=format!("{}%", statistics.anomaly_percentage) />
            <StatRow label="Average Anomaly Score" value=statistics.avg_anomaly_score />
            <StatRow label="Max Anomaly Score" value=statistics.max_anomaly_score />
            <StatRow label="Min Anomaly Score" value=statistics.min_anomaly_score />
            {statistics.threshold.map(|t| view! { <StatRow label="Threshold" value=t /> })}
            <div class="pt-3 border-t border-slate-800">
                <p class="text-sm text-slate-400">"Indexes of anomalies:"</p>
                <p class="text-sm font-mono text-slate-200 max-h-48 overflow-auto break-words">{indices}</p>
            </div>
        </div>
    }
}

#[component]
fn StatRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <p class="text-sm text-slate-400">
            {label} ": " <span class="font-mono text-white">{value}</span>
        </p>
    }
}
