/// Terminal classification of a clean URL probe.
///
/// A 200 means the rewritten path is servable. Anything else (4xx, 5xx,
/// refused connection, DNS failure) means it is not; transport errors are
/// not distinguished from error statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Success,
    Failure,
}

impl ProbeOutcome {
    pub fn from_status(status: Option<u16>) -> Self {
        match status {
            Some(200) => ProbeOutcome::Success,
            _ => ProbeOutcome::Failure,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, ProbeOutcome::Success)
    }
}

pub struct ProbeReport {
    pub url: String,
    pub http_status: Option<u16>,
    pub http_time: f64,
    pub outcome: ProbeOutcome,
}
