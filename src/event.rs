//! Host events delivered to input widgets and forms.

use gpui::SharedString;

/// A raw edit reported by the host for one entry control.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChangeEvent {
    pub target_value: SharedString,
}

impl ChangeEvent {
    pub fn new(target_value: impl Into<SharedString>) -> Self {
        Self {
            target_value: target_value.into(),
        }
    }
}

/// A submission request whose default host action (navigation, reload) can
/// be suppressed by the handler.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_default_is_live_until_prevented() {
        let mut event = SubmitEvent::new();
        assert!(!event.default_prevented());
        event.prevent_default();
        event.prevent_default();
        assert!(event.default_prevented());
    }

    #[test]
    fn change_event_carries_raw_text() {
        let event = ChangeEvent::new("  spaced ");
        assert_eq!(event.target_value.as_ref(), "  spaced ");
    }
}
