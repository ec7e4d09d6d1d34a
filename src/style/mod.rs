use gpui::{Hsla, rgb};

/// Kind of text an entry control accepts. Defaults to plain text.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Password => "password",
        }
    }

    pub fn is_masked(self) -> bool {
        self == InputType::Password
    }

    /// Text drawn in place of `value`.
    pub fn display_text(self, value: &str) -> String {
        if self.is_masked() {
            "*".repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }
}

/// Visual feedback derived from a field's validity flag.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldTone {
    Neutral,
    Success,
    Error,
}

pub const CONTAINER_CLASS: &str = "input-container";

impl FieldTone {
    pub fn from_valid(valid: Option<bool>) -> Self {
        match valid {
            None => FieldTone::Neutral,
            Some(true) => FieldTone::Success,
            Some(false) => FieldTone::Error,
        }
    }

    pub fn class(self) -> Option<&'static str> {
        match self {
            FieldTone::Neutral => None,
            FieldTone::Success => Some("valid"),
            FieldTone::Error => Some("error"),
        }
    }

    pub fn border(self, focused: bool) -> Hsla {
        match self {
            FieldTone::Success => palette::success(),
            FieldTone::Error => palette::error(),
            FieldTone::Neutral if focused => palette::focus(),
            FieldTone::Neutral => palette::border(),
        }
    }
}

pub mod palette {
    use super::*;

    pub fn surface() -> Hsla {
        rgb(0xffffff).into()
    }

    pub fn text() -> Hsla {
        rgb(0x1f2328).into()
    }

    pub fn muted() -> Hsla {
        rgb(0x6e7781).into()
    }

    pub fn border() -> Hsla {
        rgb(0xd0d7de).into()
    }

    pub fn focus() -> Hsla {
        rgb(0x0969da).into()
    }

    pub fn success() -> Hsla {
        rgb(0x1a7f37).into()
    }

    pub fn error() -> Hsla {
        rgb(0xcf222e).into()
    }

    pub fn accent() -> Hsla {
        rgb(0x0969da).into()
    }
}
