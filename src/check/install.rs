use reqwest::Client;

use crate::config::model::StatusMessages;
use crate::ui::{Severity, TestingPlacement, UiHandle};

use super::probe::probe_clean_urls;
use super::result::{ProbeOutcome, ProbeReport};
use super::target::{PageLocation, install_target};

/// Runs the install-wizard clean URL check.
///
/// Probes the `node` path next to the wizard page. Unlike the settings
/// check it appends its indicator into the description container (the
/// wizard renders nothing there beforehand) and forces the container
/// visible. On success the clean URL option is additionally pre-selected
/// as the install default; the settings check never does that.
///
/// This checks whether clean URLs *can* be served, not whether they are
/// currently enabled.
pub async fn install_check<U: UiHandle>(
    client: &Client,
    page: &PageLocation,
    messages: &StatusMessages,
    ui: &mut U,
) -> Result<ProbeReport, url::ParseError> {
    let target = install_target(page)?;

    ui.show_testing(&messages.testing, TestingPlacement::AppendNode);
    ui.set_explanation_visible(true);

    let report = probe_clean_urls(client, &target).await;

    ui.toggle_testing();
    match report.outcome {
        ProbeOutcome::Success => {
            ui.set_controls_disabled(true);
            ui.append_message(Severity::Ok, &messages.success);
            ui.set_control_checked(true);
        }
        ProbeOutcome::Failure => {
            ui.append_message(Severity::Warning, &messages.failure);
        }
    }

    Ok(report)
}
