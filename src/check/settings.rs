use reqwest::Client;

use crate::config::model::StatusMessages;
use crate::ui::{Severity, TestingPlacement, UiHandle};

use super::probe::probe_clean_urls;
use super::result::{ProbeOutcome, ProbeReport};
use super::target::{PageLocation, settings_target};

/// Runs the settings-page clean URL check.
///
/// Swaps the status region over to the testing indicator, hides the
/// explanatory paragraph, probes `<page>admin/settings/clean-urls`, and
/// renders the result. A confirmed-working server disables the manual radio
/// choice; a failure leaves it enabled so the user can still pick.
///
/// This checks whether clean URLs *can* be served, not whether they are
/// currently enabled. Running it again replays the whole sequence and
/// appends a second outcome message; the flow does not de-duplicate.
pub async fn settings_check<U: UiHandle>(
    client: &Client,
    page: &PageLocation,
    messages: &StatusMessages,
    ui: &mut U,
) -> Result<ProbeReport, url::ParseError> {
    let target = settings_target(page)?;

    ui.show_testing(&messages.testing, TestingPlacement::ReplaceContent);
    ui.set_explanation_visible(false);

    let report = probe_clean_urls(client, &target).await;

    ui.toggle_testing();
    match report.outcome {
        ProbeOutcome::Success => {
            ui.set_controls_disabled(true);
            ui.append_message(Severity::Ok, &messages.success);
        }
        ProbeOutcome::Failure => {
            ui.append_message(Severity::Warning, &messages.failure);
        }
    }

    Ok(report)
}
