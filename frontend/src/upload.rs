use anomview_core::{FileCandidate, Route, UploadGate};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use lucide_leptos::{FileUp, Upload};

use crate::api;

#[component]
pub fn UploadPage() -> impl IntoView {
    let gate = RwSignal::new(UploadGate::new());
    // The browser handle for whatever the gate currently holds.
    let picked = RwSignal::new_local(None::<web_sys::File>);
    let uploading = RwSignal::new(false);
    let navigate = use_navigate();

    let on_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let file = input.files().and_then(|files| files.get(0));
        let candidate = file
            .as_ref()
            .map(|f| FileCandidate::new(f.name(), f.size() as u64));
        let had_candidate = candidate.is_some();

        let held = gate.try_update(|g| g.select(candidate)).unwrap_or(false);
        if held {
            picked.set(file);
        } else if had_candidate {
            picked.set(None);
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if uploading.get_untracked() {
            return;
        }
        let ready = gate
            .try_update(|g| g.submission().is_ok())
            .unwrap_or(false);
        let Some(file) = picked.get_untracked().filter(|_| ready) else {
            return;
        };

        uploading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            log::info!("uploading {}", file.name());
            let outcome = api::upload(file).await;
            gate.try_update(|g| g.finish_upload(&outcome));
            uploading.try_set(false);
            if let Ok(file_id) = outcome {
                navigate(&Route::after_upload(file_id).path(), Default::default());
            }
        });
    };

    view! {
        <div class="flex flex-col lg:flex-row items-center justify-center h-full gap-12">
            <div class="max-w-xl space-y-6">
                <h1 class="text-4xl font-bold text-white">"Ready to Uncover Hidden Patterns?"</h1>
                <p class="text-slate-400 text-lg">
                    "Select and upload your dataset. We'll analyze it for anomalies using advanced machine learning techniques."
                </p>

                <form on:submit=on_submit class="flex flex-col sm:flex-row gap-3">
                    <label class="flex-grow flex items-center gap-3 px-4 py-3 bg-slate-900 border border-slate-800 rounded-xl cursor-pointer hover:border-blue-500 transition-colors">
                        <FileUp size=20 />
                        <span class="text-sm text-slate-300 truncate">
                            {move || gate.with(|g| g.held().map(|f| f.name.clone()))
                                .unwrap_or_else(|| "Choose a CSV or XLSX file".to_string())}
                        </span>
                        <input type="file" accept=".csv,.xlsx" class="hidden" on:change=on_change />
                    </label>
                    <button
                        type="submit"
                        disabled=move || uploading.get()
                        class="flex items-center justify-center gap-2 px-6 py-3 bg-blue-600 hover:bg-blue-500 disabled:opacity-50 rounded-xl font-medium text-white transition-colors"
                    >
                        <Upload size=18 />
                        {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                    </button>
                </form>

                {move || gate.with(|g| g.message().map(str::to_string)).map(|message| view! {
                    <p class="text-sm text-slate-300 bg-slate-900 border border-slate-800 rounded-lg px-4 py-3">{message}</p>
                })}
            </div>
        </div>
    }
}
