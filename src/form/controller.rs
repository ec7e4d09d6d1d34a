use std::fmt::{Display, Formatter};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use gpui::SharedString;
use thiserror::Error;

use super::field::FieldValue;
use super::model::FormModel;
use super::record::FormRecord;
use super::validation::{FieldValidator, SharedValidator};
use crate::event::{ChangeEvent, SubmitEvent};
use crate::observer::{FormEvent, FormObserver, Observers};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FieldKey(&'static str);

impl FieldKey {
    pub const fn new(value: &'static str) -> Self {
        Self(value)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl Display for FieldKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationMode {
    /// Recompute a field's flag synchronously after each of its changes.
    OnChange,
    /// Leave flags untouched until the form is submitted.
    OnSubmit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormOptions {
    pub validate_mode: ValidationMode,
    /// When set, a form with an invalid field is not forwarded to the consumer.
    pub block_invalid_submit: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            validate_mode: ValidationMode::OnChange,
            block_invalid_submit: false,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
    Submitted(FormRecord),
    Blocked { invalid: Vec<FieldKey> },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormSnapshot {
    pub fields: Vec<(FieldKey, FieldValue)>,
    pub submit_count: u32,
    pub is_valid: bool,
}

impl FormSnapshot {
    pub fn field(&self, key: FieldKey) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find_map(|(entry_key, field)| (*entry_key == key).then_some(field))
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum FormError {
    #[error("form state lock poisoned while {0}")]
    StatePoisoned(&'static str),
    #[error("unknown form field `{0}`")]
    UnknownField(FieldKey),
    #[error("form field `{0}` is already declared")]
    DuplicateField(FieldKey),
    #[error("submitted record has no value for `{0}`")]
    MissingField(FieldKey),
}

pub type FormResult<T> = Result<T, FormError>;

pub(super) struct FieldEntry {
    pub(super) key: FieldKey,
    pub(super) field: FieldValue,
    pub(super) validator: Option<SharedValidator>,
}

pub(super) struct FormState {
    pub(super) fields: Vec<FieldEntry>,
    pub(super) submit_count: u32,
}

impl FormState {
    fn entry_mut(&mut self, key: FieldKey) -> FormResult<&mut FieldEntry> {
        self.fields
            .iter_mut()
            .find(|entry| entry.key == key)
            .ok_or(FormError::UnknownField(key))
    }

    fn entry(&self, key: FieldKey) -> FormResult<&FieldEntry> {
        self.fields
            .iter()
            .find(|entry| entry.key == key)
            .ok_or(FormError::UnknownField(key))
    }

    fn record(&self) -> FormRecord {
        self.fields
            .iter()
            .map(|entry| (entry.key, entry.field.value.clone()))
            .collect()
    }

    fn invalid_keys(&self) -> Vec<FieldKey> {
        self.fields
            .iter()
            .filter(|entry| entry.field.valid == Some(false))
            .map(|entry| entry.key)
            .collect()
    }

    /// Runs every registered rule, returning validity transitions.
    fn validate_all(&mut self) -> Vec<FormEvent> {
        let mut events = Vec::new();
        for entry in &mut self.fields {
            let Some(validator) = entry.validator.clone() else {
                continue;
            };
            let previous = entry.field.revalidate(validator.as_ref());
            if previous != entry.field.valid {
                events.push(FormEvent::ValidityChanged {
                    key: entry.key,
                    previous,
                    valid: entry.field.valid,
                });
            }
        }
        events
    }
}

/// Owns the state of a multi-field form and orchestrates change, validation
/// and submission. Clones share state, so a composer can be captured by the
/// change handlers of every bound input.
#[derive(Clone)]
pub struct FormComposer {
    pub(super) options: FormOptions,
    pub(super) state: Arc<RwLock<FormState>>,
    pub(super) observers: Arc<RwLock<Observers>>,
}

impl Default for FormComposer {
    fn default() -> Self {
        Self::new(FormOptions::default())
    }
}

impl FormComposer {
    pub fn new(options: FormOptions) -> Self {
        Self {
            options,
            state: Arc::new(RwLock::new(FormState {
                fields: Vec::new(),
                submit_count: 0,
            })),
            observers: Arc::new(RwLock::new(Observers::default())),
        }
    }

    /// Declares every field of `M` with an empty initial value.
    pub fn for_model<M: FormModel>(options: FormOptions) -> FormResult<Self> {
        let composer = Self::new(options);
        for key in M::FIELD_KEYS {
            composer.register_field(*key, SharedString::default())?;
        }
        Ok(composer)
    }

    /// Declares every field of `model`, seeded with its current values.
    pub fn from_model<M: FormModel>(model: &M, options: FormOptions) -> FormResult<Self> {
        let composer = Self::new(options);
        for (key, value) in model.values() {
            composer.register_field(key, value)?;
        }
        Ok(composer)
    }

    pub fn options(&self) -> FormOptions {
        self.options
    }

    pub fn register_field(
        &self,
        key: FieldKey,
        initial: impl Into<SharedString>,
    ) -> FormResult<()> {
        let mut state = write_lock(&self.state, "registering field")?;
        if state.fields.iter().any(|entry| entry.key == key) {
            return Err(FormError::DuplicateField(key));
        }
        state.fields.push(FieldEntry {
            key,
            field: FieldValue::new(initial),
            validator: None,
        });
        Ok(())
    }

    /// Attaches a rule to a field. The flag stays `None` until the field's
    /// next change (or the next submit in `OnSubmit` mode).
    pub fn register_validator<V>(&self, key: FieldKey, validator: V) -> FormResult<()>
    where
        V: FieldValidator + 'static,
    {
        let mut state = write_lock(&self.state, "registering field validator")?;
        state.entry_mut(key)?.validator = Some(Arc::new(validator));
        Ok(())
    }

    pub fn register_observer(&self, observer: impl FormObserver + 'static) -> FormResult<()> {
        write_lock(&self.observers, "registering observer")?.push(Arc::new(observer));
        Ok(())
    }

    pub fn set(&self, key: FieldKey, value: impl Into<SharedString>) -> FormResult<()> {
        let value = value.into();
        let mut events = Vec::with_capacity(2);
        {
            let mut state = write_lock(&self.state, "writing field value")?;
            let entry = state.entry_mut(key)?;
            let validator = match self.options.validate_mode {
                ValidationMode::OnChange => entry.validator.clone(),
                ValidationMode::OnSubmit => None,
            };
            let previous = entry.field.apply(value, validator.as_deref());
            events.push(FormEvent::FieldChanged {
                key,
                value: entry.field.value.clone(),
            });
            if previous != entry.field.valid {
                events.push(FormEvent::ValidityChanged {
                    key,
                    previous,
                    valid: entry.field.valid,
                });
            }
        }
        self.emit(&events)
    }

    pub fn apply_change(&self, key: FieldKey, event: &ChangeEvent) -> FormResult<()> {
        self.set(key, event.target_value.clone())
    }

    /// Runs every registered rule now, regardless of mode. Returns whether no
    /// field is invalid.
    pub fn validate_all(&self) -> FormResult<bool> {
        let (events, is_valid) = {
            let mut state = write_lock(&self.state, "validating form")?;
            let events = state.validate_all();
            (events, state.invalid_keys().is_empty())
        };
        self.emit(&events)?;
        Ok(is_valid)
    }

    pub fn value(&self, key: FieldKey) -> FormResult<SharedString> {
        let state = read_lock(&self.state, "reading field value")?;
        Ok(state.entry(key)?.field.value.clone())
    }

    pub fn field(&self, key: FieldKey) -> FormResult<FieldValue> {
        let state = read_lock(&self.state, "reading field")?;
        Ok(state.entry(key)?.field.clone())
    }

    pub fn keys(&self) -> FormResult<Vec<FieldKey>> {
        let state = read_lock(&self.state, "reading field keys")?;
        Ok(state.fields.iter().map(|entry| entry.key).collect())
    }

    pub fn record(&self) -> FormResult<FormRecord> {
        Ok(read_lock(&self.state, "assembling form record")?.record())
    }

    pub fn snapshot(&self) -> FormResult<FormSnapshot> {
        let state = read_lock(&self.state, "creating form snapshot")?;
        Ok(FormSnapshot {
            fields: state
                .fields
                .iter()
                .map(|entry| (entry.key, entry.field.clone()))
                .collect(),
            submit_count: state.submit_count,
            is_valid: state.invalid_keys().is_empty(),
        })
    }

    /// Suppresses the host's default submit action, assembles the record and
    /// hands it to `consumer`. Invalid fields do not block submission unless
    /// `FormOptions::block_invalid_submit` is set.
    pub fn submit(
        &self,
        event: &mut SubmitEvent,
        consumer: impl FnOnce(&FormRecord),
    ) -> FormResult<SubmitOutcome> {
        event.prevent_default();

        let (mut events, record, invalid) = {
            let mut state = write_lock(&self.state, "submitting form")?;
            state.submit_count = state.submit_count.saturating_add(1);
            let events = match self.options.validate_mode {
                ValidationMode::OnSubmit => state.validate_all(),
                ValidationMode::OnChange => Vec::new(),
            };
            (events, state.record(), state.invalid_keys())
        };

        if self.options.block_invalid_submit && !invalid.is_empty() {
            events.push(FormEvent::SubmitBlocked {
                invalid: invalid.clone(),
            });
            self.emit(&events)?;
            return Ok(SubmitOutcome::Blocked { invalid });
        }

        consumer(&record);
        events.push(FormEvent::Submitted {
            record: record.clone(),
        });
        self.emit(&events)?;
        Ok(SubmitOutcome::Submitted(record))
    }

    /// Like [`FormComposer::submit`], decoding the record into `M` first.
    pub fn submit_as<M: FormModel>(
        &self,
        event: &mut SubmitEvent,
        consumer: impl FnOnce(M),
    ) -> FormResult<SubmitOutcome> {
        let mut decoded = None;
        let outcome = self.submit(event, |record| decoded = Some(M::from_record(record)))?;
        if let Some(model) = decoded {
            consumer(model?);
        }
        Ok(outcome)
    }

    fn emit(&self, events: &[FormEvent]) -> FormResult<()> {
        if events.is_empty() {
            return Ok(());
        }
        let observers = read_lock(&self.observers, "notifying observers")?.clone();
        for event in events {
            observers.emit(event);
        }
        Ok(())
    }
}

pub(super) fn read_lock<'a, T>(
    lock: &'a RwLock<T>,
    context: &'static str,
) -> FormResult<RwLockReadGuard<'a, T>> {
    lock.read().map_err(|_| FormError::StatePoisoned(context))
}

pub(super) fn write_lock<'a, T>(
    lock: &'a RwLock<T>,
    context: &'static str,
) -> FormResult<RwLockWriteGuard<'a, T>> {
    lock.write().map_err(|_| FormError::StatePoisoned(context))
}
