use gpui::SharedString;

use super::controller::{FieldKey, FormComposer, FormResult};
use super::field::FieldStore;
use crate::components::TextInput;
use crate::contracts::FieldLike;
use crate::event::{ChangeEvent, SubmitEvent};

impl FormComposer {
    /// Drives `input` from the field `key`: the current value and flag go in,
    /// every edit comes back through [`FormComposer::set`]. Inputs without a
    /// label are labeled with the field name.
    pub fn bind_text_input(&self, key: FieldKey, input: TextInput) -> FormResult<TextInput> {
        let field = self.field(key)?;
        let on_change = self.change_handler(key);
        let bound = input
            .value(field.value)
            .valid(field.valid)
            .on_change(move |next, _, _| on_change(next));
        Ok(with_default_label(key, bound))
    }

    /// Writes edits of `key` back into the form. Failures are logged and the
    /// edit is dropped, since a change handler has nowhere to return them.
    pub fn change_handler(&self, key: FieldKey) -> impl Fn(SharedString) + 'static {
        let composer = self.clone();
        move |next: SharedString| {
            if let Err(error) = composer.apply_change(key, &ChangeEvent::new(next)) {
                tracing::warn!(field = %key, %error, "dropping field change");
            }
        }
    }

    /// Binds `input` and submits the whole form when Enter is pressed in it.
    pub fn bind_text_input_submit(
        &self,
        key: FieldKey,
        input: TextInput,
        consumer: impl Fn(&super::FormRecord) + 'static,
    ) -> FormResult<TextInput> {
        let composer = self.clone();
        let bound = self
            .bind_text_input(key, input)?
            .on_submit(move |_, _, _| {
                let mut event = SubmitEvent::new();
                if let Err(error) = composer.submit(&mut event, &consumer) {
                    tracing::warn!(%error, "form submission failed");
                }
            });
        Ok(bound)
    }
}

impl FieldStore {
    /// Drives `input` from this store; edits are written back with `set`.
    pub fn bind_text_input(&self, input: TextInput) -> TextInput {
        let field = self.field();
        let on_change = self.change_handler();
        let bound = input
            .value(field.value)
            .valid(field.valid)
            .on_change(move |next, _, _| on_change(next));
        with_default_label(self.key(), bound)
    }

    pub fn change_handler(&self) -> impl Fn(SharedString) + 'static {
        let store = self.clone();
        move |next: SharedString| store.apply_change(&ChangeEvent::new(next))
    }
}

fn with_default_label(key: FieldKey, input: TextInput) -> TextInput {
    if input.has_label() {
        input
    } else {
        input.label(key.as_str())
    }
}
