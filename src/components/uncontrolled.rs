use std::rc::Rc;
use std::sync::Arc;

use gpui::{IntoElement, RenderOnce, SharedString, Window};

use super::control;
use super::entry::{EditHandler, InputView, edit_at_caret, render_entry};
use super::input::InputConfig;
use super::text_input_state::Edit;
use crate::contracts::FieldLike;
use crate::event::SubmitEvent;
use crate::id::ComponentId;
use crate::observer::{FormEvent, FormObserver, Observers};
use crate::style::InputType;

/// Reference to the text owned by a live [`UncontrolledInput`].
///
/// Application code reads through the handle on demand. The host side can
/// also `write` into the widget, which bypasses change notification entirely.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct InputHandle {
    id: ComponentId,
}

impl InputHandle {
    pub fn new(id: impl Into<ComponentId>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    /// Current text of the widget, or `None` when it is not mounted.
    pub fn read(&self) -> Option<SharedString> {
        control::read_text_state(&self.id, control::VALUE_SLOT).map(SharedString::from)
    }

    pub fn is_mounted(&self) -> bool {
        self.read().is_some()
    }

    /// Sets the widget's text the way the platform does, without any event.
    pub fn write(&self, text: impl Into<String>) {
        let text = text.into();
        control::set_caret_state(&self.id, text.chars().count());
        control::set_text_state(&self.id, control::VALUE_SLOT, text);
    }

    /// Drops the widget's state; later reads return `None`.
    pub fn release(&self) {
        control::clear_id(&self.id);
    }
}

/// A text entry that owns its value. Nothing drives what it displays; the
/// initial `default_value` only seeds the widget on first mount.
#[derive(IntoElement)]
pub struct UncontrolledInput {
    id: ComponentId,
    config: InputConfig,
}

impl UncontrolledInput {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: ComponentId::auto("uncontrolled-input"),
            config: InputConfig::default(),
        }
    }

    pub fn with_id(mut self, id: impl Into<ComponentId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn default_value(mut self, value: impl Into<SharedString>) -> Self {
        self.config.value = value.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    pub fn handle(&self) -> InputHandle {
        InputHandle::new(self.id.clone())
    }

    /// Seeds the widget state with the default value unless it already exists.
    pub fn mount(&self) -> InputHandle {
        control::text_state(&self.id, control::VALUE_SLOT, self.config.value.to_string());
        self.handle()
    }

    pub fn view(&self) -> InputView {
        let current = self.mount().read().unwrap_or_default();
        InputView::new(
            &self.id,
            self.config.label.clone(),
            self.config.input_type,
            current,
            None,
            self.config.placeholder.clone(),
            self.config.disabled,
        )
    }
}

impl Default for UncontrolledInput {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

/// Applies a raw edit straight to the widget-owned text.
pub fn apply_uncontrolled_edit(handle: &InputHandle, edit: &Edit) -> bool {
    let current = handle.read().unwrap_or_default();
    let Some(next) = edit_at_caret(handle.id(), &current, edit) else {
        return false;
    };
    control::set_text_state(handle.id(), control::VALUE_SLOT, next);
    true
}

impl FieldLike for UncontrolledInput {
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

crate::impl_disableable!(UncontrolledInput);

impl RenderOnce for UncontrolledInput {
    fn render(self, window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        let view = self.view();
        let handle = self.handle();
        let on_edit: EditHandler =
            Rc::new(move |edit: &Edit, window: &mut Window, _cx: &mut gpui::App| {
                if apply_uncontrolled_edit(&handle, edit) || !edit.changes_text() {
                    window.refresh();
                }
            });
        render_entry(self.id, view, on_edit, None, window, cx)
    }
}

type ValueConsumer = Arc<dyn Fn(&SharedString) + Send + Sync>;

/// Submission wrapper around one uncontrolled input: the value is read from
/// the widget only when the form is submitted.
#[derive(Clone)]
pub struct UncontrolledForm {
    handle: InputHandle,
    consumer: ValueConsumer,
    observers: Observers,
}

impl UncontrolledForm {
    pub fn new(handle: InputHandle) -> Self {
        Self {
            handle,
            consumer: Arc::new(|value: &SharedString| {
                tracing::info!(%value, "uncontrolled input submitted");
            }),
            observers: Observers::default(),
        }
    }

    pub fn on_submit(mut self, consumer: impl Fn(&SharedString) + Send + Sync + 'static) -> Self {
        self.consumer = Arc::new(consumer);
        self
    }

    pub fn observe(mut self, observer: impl FormObserver + 'static) -> Self {
        self.observers.push(Arc::new(observer));
        self
    }

    pub fn handle(&self) -> &InputHandle {
        &self.handle
    }

    /// Prevents the default action, reads the live text and forwards it.
    /// Returns `None` without calling the consumer if the input is unmounted.
    pub fn submit(&self, event: &mut SubmitEvent) -> Option<SharedString> {
        event.prevent_default();
        let value = self.handle.read()?;
        (self.consumer)(&value);
        self.observers.emit(&FormEvent::UncontrolledRead {
            id: self.handle.id().to_string().into(),
            value: value.clone(),
        });
        Some(value)
    }
}
