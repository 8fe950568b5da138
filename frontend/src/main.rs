use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;
use lucide_leptos::{Radar, Upload};

mod api;
mod charts;
mod export;
mod results;
mod select;
mod upload;

use results::ResultsPage;
use select::AlgorithmSelection;
use upload::UploadPage;

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="flex flex-col min-h-screen bg-slate-950 text-slate-100 font-sans">
                <nav class="flex items-center justify-between px-8 py-4 border-b border-slate-800 bg-slate-900/50">
                    <A href="/" attr:class="flex items-center space-x-3">
                        <div class="p-2 bg-blue-600 rounded-lg shadow-lg shadow-blue-900/20">
                            <Radar size=22 />
                        </div>
                        <span class="text-2xl font-bold tracking-tight text-white">"AnomView"</span>
                    </A>
                    <A href="/" attr:class="flex items-center space-x-2 px-4 py-2 rounded-xl hover:bg-slate-800 transition-all duration-200 text-slate-400 hover:text-white">
                        <Upload size=18 />
                        <span class="font-medium">"New upload"</span>
                    </A>
                </nav>

                <main class="flex-grow overflow-auto p-8">
                    <Routes fallback=|| view! { <NotFound /> }.into_any()>
                        <Route path=path!("/") view=UploadPage />
                        <Route path=path!("/select-algorithm/:file_id") view=AlgorithmSelection />
                        <Route path=path!("/results/:file_id") view=ResultsPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center h-full space-y-4">
            <h1 class="text-4xl font-bold">"404"</h1>
            <p class="text-slate-400">"Page not found"</p>
            <A href="/" attr:class="text-blue-400 hover:underline">"Back to upload"</A>
        </div>
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
