use unicode_truncate::UnicodeTruncateStr;

use super::{Severity, TestingPlacement, UiHandle};

/// Console rendition of a status region, one labelled line per transition.
///
/// Prints what a page would show: the testing indicator while the probe is
/// in flight, then the ok/warning message. Structural calls with no console
/// equivalent (visibility, control state) go to the debug log so a verbose
/// run still shows the full sequence.
pub struct ConsoleUi {
    label: String,
    testing_visible: bool,
}

impl ConsoleUi {
    pub fn new(label: &str, width: usize) -> Self {
        Self {
            label: to_fixed_width(label, width),
            testing_visible: false,
        }
    }
}

fn to_fixed_width(input: &str, width: usize) -> String {
    let (truncated, _) = input.unicode_truncate(width);
    format!("{:<width$}", truncated, width = width)
}

impl UiHandle for ConsoleUi {
    fn show_testing(&mut self, message: &str, _placement: TestingPlacement) {
        self.testing_visible = true;
        println!("[{}] ⏳ {message}", self.label);
    }

    fn set_explanation_visible(&mut self, visible: bool) {
        log::debug!("[{}] explanation visible: {visible}", self.label.trim_end());
    }

    fn toggle_testing(&mut self) {
        self.testing_visible = !self.testing_visible;
        log::debug!(
            "[{}] testing indicator visible: {}",
            self.label.trim_end(),
            self.testing_visible
        );
    }

    fn append_message(&mut self, severity: Severity, message: &str) {
        let marker = match severity {
            Severity::Ok => "✅",
            Severity::Warning => "❌",
        };
        println!("[{}] {marker} {message}", self.label);
    }

    fn set_controls_disabled(&mut self, disabled: bool) {
        log::debug!("[{}] controls disabled: {disabled}", self.label.trim_end());
    }

    fn set_control_checked(&mut self, checked: bool) {
        log::debug!(
            "[{}] clean URLs pre-selected: {checked}",
            self.label.trim_end()
        );
    }
}
