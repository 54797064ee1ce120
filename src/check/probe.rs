use std::time::Instant;

use url::Url;

use super::result::{ProbeOutcome, ProbeReport};

// Placeholder request body. The check has always sent a single space, and
// some rewrite configurations behave differently for a bodyless GET.
const PROBE_BODY: &str = " ";

/// Issues the capability probe and classifies the response.
///
/// Never returns an error: transport failures are folded into
/// `ProbeOutcome::Failure` with no status code. The future carries no
/// timeout of its own; bound it through the client's configuration, or race
/// it if the caller cannot afford to wait.
pub async fn probe_clean_urls(client: &reqwest::Client, url: &Url) -> ProbeReport {
    let start = Instant::now();
    let response = client.get(url.clone()).body(PROBE_BODY).send().await;
    let http_time = start.elapsed().as_secs_f64();

    let http_status = match &response {
        Ok(resp) => Some(resp.status().as_u16()),
        Err(_) => None,
    };

    ProbeReport {
        url: url.as_str().to_string(),
        http_status,
        http_time,
        outcome: ProbeOutcome::from_status(http_status),
    }
}
