use std::rc::Rc;

use gpui::{IntoElement, RenderOnce, SharedString, Window};

use super::control;
use super::entry::{EditHandler, InputView, SubmitAction, edit_at_caret, render_entry};
use super::text_input_state::Edit;
use crate::contracts::FieldLike;
use crate::id::ComponentId;
use crate::style::InputType;

type ChangeHandler = Rc<dyn Fn(SharedString, &mut Window, &mut gpui::App)>;
type SubmitHandler = Rc<dyn Fn(SharedString, &mut Window, &mut gpui::App)>;

/// Every recognized option of a bound input, with its default.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct InputConfig {
    pub label: Option<SharedString>,
    pub input_type: InputType,
    pub value: SharedString,
    pub valid: Option<bool>,
    pub placeholder: Option<SharedString>,
    pub disabled: bool,
}

/// A controlled text entry.
///
/// The widget holds no value of its own: what it displays is always the last
/// `value` its owner supplied. Each keystroke is turned into exactly one
/// `on_change` call carrying the edited text, and the display only moves once
/// the owner renders again with the new value.
#[derive(IntoElement)]
pub struct TextInput {
    id: ComponentId,
    config: InputConfig,
    on_change: Option<ChangeHandler>,
    on_submit: Option<SubmitHandler>,
}

impl TextInput {
    #[track_caller]
    pub fn new() -> Self {
        Self::from_config(InputConfig::default())
    }

    #[track_caller]
    pub fn from_config(config: InputConfig) -> Self {
        Self {
            id: ComponentId::auto("text-input"),
            config,
            on_change: None,
            on_submit: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<ComponentId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.config.value = value.into();
        self
    }

    pub fn valid(mut self, valid: Option<bool>) -> Self {
        self.config.valid = valid;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    pub fn on_change(
        mut self,
        handler: impl Fn(SharedString, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    /// Called with the current value when Enter is pressed in the control.
    pub fn on_submit(
        mut self,
        handler: impl Fn(SharedString, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_submit = Some(Rc::new(handler));
        self
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn view(&self) -> InputView {
        InputView::new(
            &self.id,
            self.config.label.clone(),
            self.config.input_type,
            self.config.value.clone(),
            self.config.valid,
            self.config.placeholder.clone(),
            self.config.disabled,
        )
    }
}

impl Default for TextInput {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

/// Applies `edit` at the stored caret and forwards the result to `emit` when
/// the text changed. Returns whether `emit` ran.
///
/// Edits start from the text emitted since the last render when there is
/// one, so keystrokes arriving before the owner re-renders build on each
/// other in order. Only transient slots are written; the value itself
/// belongs to the caller.
pub fn dispatch_controlled_edit(
    id: &str,
    rendered: &str,
    edit: &Edit,
    emit: impl FnOnce(SharedString),
) -> bool {
    let base = control::read_text_state(id, control::PENDING_SLOT)
        .unwrap_or_else(|| rendered.to_string());
    let Some(next) = edit_at_caret(id, &base, edit) else {
        return false;
    };
    control::set_text_state(id, control::PENDING_SLOT, next.clone());
    emit(next.into());
    true
}

/// Forgets text emitted since the last render. Called whenever the owner
/// supplies a value again, so the next edit starts from that value.
pub fn settle_controlled_edit(id: &str) {
    control::clear_text_state(id, control::PENDING_SLOT);
}

impl FieldLike for TextInput {
    fn label(mut self, value: impl Into<SharedString>) -> Self {
        self.config.label = Some(value.into());
        self
    }

    fn placeholder(mut self, value: impl Into<SharedString>) -> Self {
        self.config.placeholder = Some(value.into());
        self
    }

    fn input_type(mut self, value: InputType) -> Self {
        self.config.input_type = value;
        self
    }

    fn has_label(&self) -> bool {
        self.config.label.is_some()
    }
}

crate::impl_disableable!(TextInput);

impl RenderOnce for TextInput {
    fn render(self, window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        settle_controlled_edit(&self.id);
        let view = self.view();
        let rendered = self.config.value.to_string();

        let on_edit: EditHandler = {
            let id = self.id.clone();
            let on_change = self.on_change.clone();
            Rc::new(move |edit: &Edit, window: &mut Window, cx: &mut gpui::App| {
                dispatch_controlled_edit(&id, &rendered, edit, |next| {
                    if let Some(handler) = on_change.as_ref() {
                        handler(next, window, cx);
                    }
                });
                window.refresh();
            })
        };

        let on_submit = self.on_submit.clone().map(|handler| {
            let value = self.config.value.clone();
            Rc::new(move |window: &mut Window, cx: &mut gpui::App| {
                handler(value.clone(), window, cx)
            }) as SubmitAction
        });

        render_entry(self.id, view, on_edit, on_submit, window, cx)
    }
}
