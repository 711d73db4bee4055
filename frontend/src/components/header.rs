use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-wave-square"></i> {" Acoustic Analysis"}</h1>
            <p class="subtitle">{"Upload a patient's voice recording (.wav) to analyze acoustic biomarkers for Parkinson's Disease"}</p>
        </header>
    }
}
