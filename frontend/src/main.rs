use gloo_file::File as GlooFile;
use shared::PredictionResponse;
use web_sys::DragEvent;
use yew::prelude::*;

mod api;
mod components;
mod workflow;

use components::{handlers, header, results, upload_section, utils};
use workflow::{RequestToken, Workflow};

// Yew msg components
enum Msg {
    // File operations
    FileChosen(Vec<GlooFile>),
    RemoveFile,

    // Analysis operations
    Submit,
    SubmissionFinished(RequestToken, Result<PredictionResponse, String>),
    DownloadReport,
    ReportFetched(String, Result<Vec<u8>, String>),

    // UI states
    SetDragging(bool),

    // Input events
    HandleDrop(DragEvent),
}

// Main component
struct Model {
    workflow: Workflow<GlooFile>,
    is_dragging: bool,
}

// Yew component implementation
impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            workflow: Workflow::new(),
            is_dragging: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File operations
            Msg::FileChosen(files) => handlers::handle_files_chosen(self, files),
            Msg::RemoveFile => handlers::handle_remove_file(self),

            // Analysis operations
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::SubmissionFinished(token, outcome) => {
                handlers::handle_submission_finished(self, token, outcome)
            }
            Msg::DownloadReport => handlers::handle_download_report(self, ctx),
            Msg::ReportFetched(report_id, outcome) => {
                handlers::handle_report_fetched(self, report_id, outcome)
            }

            // UI states
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header() }

                <main class="main-content">
                { upload_section::render_upload_section(self, ctx) }
                { utils::render_error_message(self) }
                { results::render_results(self, ctx) }
                </main>

                <footer class="app-footer">
                    <p>{"Parkinson's Voice Diagnostics | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
