/// The ticket report posted on every toolbar click
use crate::error::TransportFailure;
use serde::Serialize;

pub const FIXED_DESCRIPTION: &str = "Ejemplo desde extensión";
pub const FIXED_PROBLEM: &str = "No me anda el sistema";

/// Two-field report sent to the logging endpoint
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TicketReport {
    #[serde(rename = "descripcion")]
    description: String,
    #[serde(rename = "problema")]
    problem: String,
}

impl TicketReport {
    /// The report every activation sends. There is no way to parameterize it.
    pub fn fixed() -> TicketReport {
        TicketReport {
            description: FIXED_DESCRIPTION.to_string(),
            problem: FIXED_PROBLEM.to_string(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn problem(&self) -> &str {
        &self.problem
    }

    pub fn to_json(&self) -> Result<String, TransportFailure> {
        Ok(serde_json::to_string(self)?)
    }
}
