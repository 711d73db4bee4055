use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Payload returned by `POST /predict` on the diagnostic service.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct PredictionResponse {
    pub prediction: String,
    pub probability: f64,
    pub risk_level: String,
    pub confidence: String,
    #[serde(default)]
    pub report_id: String,
}

impl PredictionResponse {
    /// The discrete tier advertised by the service, if it is one we know.
    pub fn risk_tier(&self) -> Option<RiskTier> {
        RiskTier::from_str(&self.risk_level).ok()
    }

    pub fn elevated_risk(&self) -> bool {
        self.probability > 0.5
    }
}

/// Risk stratification vocabulary shared with the diagnostic service.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display, EnumString, EnumIter)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    Critical,
}
