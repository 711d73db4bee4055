use super::super::Model;
use super::super::Msg;
use super::utils::debounce;
use crate::workflow::Phase;
use shared::RiskTier;
use std::str::FromStr;
use yew::prelude::*;

/// Distinct badge treatment per known tier; anything the service sends
/// outside that vocabulary falls back to the neutral style.
pub fn risk_badge_class(risk_level: &str) -> &'static str {
    match RiskTier::from_str(risk_level) {
        Ok(RiskTier::Low) => "risk-badge-low",
        Ok(RiskTier::Moderate) => "risk-badge-moderate",
        Ok(RiskTier::High) => "risk-badge-high",
        Ok(RiskTier::Critical) => "risk-badge-critical",
        Err(_) => "risk-badge-neutral",
    }
}

pub fn meter_fill_class(elevated_risk: bool) -> &'static str {
    if elevated_risk {
        "meter-fill elevated"
    } else {
        "meter-fill"
    }
}

/// The probability distribution shown next to the result card.
pub fn chart_data(probability: f64) -> [(&'static str, f64); 2] {
    let risk = probability * 100.0;
    [("Parkinson Risk", risk), ("Healthy Profile", 100.0 - risk)]
}

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    let Phase::Succeeded { file, result } = model.workflow.phase() else {
        return html! {};
    };

    let link = ctx.link().clone();
    let distribution = chart_data(result.probability);

    html! {
        <div class="results-container">
            <div class="result-header">
                <h2 title={format!("Diagnostic results for: {}", file.name)}>{"Diagnostic Results"}</h2>
                <button
                    class="download-btn"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.callback(|_| Msg::DownloadReport).emit(())
                    })}
                >
                    <i class="fa-solid fa-download"></i>{" Download Clinical Report"}
                </button>
            </div>

            <div class="result-summary">
                <div class="consensus">
                    <p class="result-label">{"Automated Consensus"}</p>
                    <p class="prediction">{ &result.prediction }</p>
                </div>

                <div class="stratification">
                    <p class="result-label">{"Stratification Level"}</p>
                    <span class={classes!("risk-badge", risk_badge_class(&result.risk_level))}>
                        { format!("{} RISK", result.risk_level.to_uppercase()) }
                    </span>
                </div>

                <div class="confidence-meter">
                    <div class="meter-label">{"Algorithmic Confidence:"}</div>
                    <div class="meter">
                        <div
                            class={meter_fill_class(result.elevated_risk())}
                            style={format!("width: {}%", result.probability * 100.0)}
                        ></div>
                    </div>
                    <div class="meter-value">{ &result.confidence }</div>
                </div>
            </div>

            <div class="detailed-results">
                <h3>{"Probability Distribution"}</h3>
                <div class="result-bars">
                    { for distribution.iter().map(|(label, percentage)| html! {
                        <div class="result-item">
                            <div class="result-label">{ *label }</div>
                            <div class="result-bar-container">
                                <div class="result-bar" style={format!("width: {}%", percentage)}></div>
                            </div>
                            <div class="result-value">{ format!("{:.1}%", percentage) }</div>
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}
