use anomview_core::{AlgorithmChoice, FileIdentifier, Route};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use lucide_leptos::{Brain, Search, TreePine};

#[component]
fn AlgorithmIcon(algorithm: AlgorithmChoice) -> impl IntoView {
    match algorithm {
        AlgorithmChoice::KMeans => view! { <Search size=32 /> }.into_any(),
        AlgorithmChoice::IsolationForest => view! { <TreePine size=32 /> }.into_any(),
        AlgorithmChoice::OneClassSvm => view! { <Brain size=32 /> }.into_any(),
    }
}

#[component]
pub fn AlgorithmSelection() -> impl IntoView {
    let params = use_params_map();
    let file_id = move || FileIdentifier::new(params.read().get("file_id").unwrap_or_default());
    let navigate = use_navigate();

    view! {
        <div class="max-w-5xl mx-auto space-y-8">
            <h1 class="text-3xl font-bold text-white">"Choose Anomaly Detection Algorithm"</h1>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                {AlgorithmChoice::ALL.into_iter().map(|algorithm| {
                    let navigate = navigate.clone();
                    let on_click = move |_| {
                        let route = Route::Results { file_id: file_id(), algorithm };
                        navigate(&route.path(), Default::default());
                    };
                    view! {
                        <button
                            on:click=on_click
                            class="flex flex-col items-center text-center gap-4 p-8 bg-slate-900 border border-slate-800 rounded-xl hover:border-blue-500 hover:bg-slate-800/50 transition-all duration-200 group"
                        >
                            <div class="p-4 bg-slate-800 rounded-xl text-slate-400 group-hover:text-blue-400 transition-colors">
                                <AlgorithmIcon algorithm=algorithm />
                            </div>
                            <span class="text-xl font-semibold text-white">{algorithm.wire_name()}</span>
                            <p class="text-sm text-slate-400">{algorithm.description()}</p>
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
