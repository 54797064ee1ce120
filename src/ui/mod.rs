pub mod console;

/// Rendering weight of an appended status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Warning,
}

impl Severity {
    /// CSS class carried by the rendered message node.
    pub fn as_class(self) -> &'static str {
        match self {
            Severity::Ok => "ok",
            Severity::Warning => "warning",
        }
    }
}

/// How the testing indicator enters the status region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestingPlacement {
    /// Replace whatever the region currently shows (settings page).
    ReplaceContent,
    /// Append a fresh node, leaving earlier content alone (install wizard).
    AppendNode,
}

/// Status region a check renders into.
///
/// The check flows never touch a page directly; everything observable goes
/// through this seam, so the same flow can drive a real page, the console,
/// or a recording fake in tests.
pub trait UiHandle {
    /// Put up the transient testing indicator.
    fn show_testing(&mut self, message: &str, placement: TestingPlacement);
    /// Show or hide the explanatory copy around the control group.
    fn set_explanation_visible(&mut self, visible: bool);
    /// Flip the testing indicator's visibility.
    fn toggle_testing(&mut self);
    /// Append an outcome message styled by severity.
    fn append_message(&mut self, severity: Severity, message: &str);
    /// Enable or disable the clean URL radio controls.
    fn set_controls_disabled(&mut self, disabled: bool);
    /// Tick or untick the clean URL radio control.
    fn set_control_checked(&mut self, checked: bool);
}

#[cfg(test)]
pub mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum UiEvent {
        ShowTesting(String, TestingPlacement),
        ExplanationVisible(bool),
        ToggleTesting,
        /// Rendered message as (css class, text).
        Message(&'static str, String),
        ControlsDisabled(bool),
        ControlChecked(bool),
    }

    /// Captures every UI call in order, standing in for a real page.
    #[derive(Debug, Default)]
    pub struct RecordingUi {
        pub events: Vec<UiEvent>,
    }

    impl RecordingUi {
        pub fn messages_with_class(&self, class: &str) -> usize {
            self.events
                .iter()
                .filter(|event| matches!(event, UiEvent::Message(c, _) if *c == class))
                .count()
        }
    }

    impl UiHandle for RecordingUi {
        fn show_testing(&mut self, message: &str, placement: TestingPlacement) {
            self.events
                .push(UiEvent::ShowTesting(message.to_string(), placement));
        }

        fn set_explanation_visible(&mut self, visible: bool) {
            self.events.push(UiEvent::ExplanationVisible(visible));
        }

        fn toggle_testing(&mut self) {
            self.events.push(UiEvent::ToggleTesting);
        }

        fn append_message(&mut self, severity: Severity, message: &str) {
            self.events
                .push(UiEvent::Message(severity.as_class(), message.to_string()));
        }

        fn set_controls_disabled(&mut self, disabled: bool) {
            self.events.push(UiEvent::ControlsDisabled(disabled));
        }

        fn set_control_checked(&mut self, checked: bool) {
            self.events.push(UiEvent::ControlChecked(checked));
        }
    }
}
