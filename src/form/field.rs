use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use gpui::SharedString;

use super::controller::FieldKey;
use super::validation::{FieldValidator, SharedValidator, ValidationState};
use crate::event::ChangeEvent;
use crate::observer::{FormEvent, FormObserver, Observers};

/// Current value of one controlled field plus its optional validity flag.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct FieldValue {
    pub value: SharedString,
    pub valid: Option<bool>,
}

impl FieldValue {
    pub fn new(value: impl Into<SharedString>) -> Self {
        Self {
            value: value.into(),
            valid: None,
        }
    }

    pub fn validation_state(&self) -> ValidationState {
        ValidationState::from_flag(self.valid)
    }

    /// Replaces the value and, when a rule is given, recomputes the flag.
    /// Returns the flag as it was before the call.
    pub(crate) fn apply(
        &mut self,
        value: SharedString,
        validator: Option<&dyn FieldValidator>,
    ) -> Option<bool> {
        let previous = self.valid;
        self.value = value;
        if let Some(validator) = validator {
            self.valid = Some(validator.validate(self.value.as_ref()));
        }
        previous
    }

    pub(crate) fn revalidate(&mut self, validator: &dyn FieldValidator) -> Option<bool> {
        let previous = self.valid;
        self.valid = Some(validator.validate(self.value.as_ref()));
        previous
    }
}

type Listener = Arc<dyn Fn(&FieldValue) + Send + Sync>;

struct StoreState {
    field: FieldValue,
    validator: Option<SharedValidator>,
    listeners: Vec<Listener>,
    observers: Observers,
}

/// Single source of truth for one controlled field.
///
/// Clones share the same value. `set` never fails: a poisoned lock is
/// recovered because a field value cannot be left half-written.
#[derive(Clone)]
pub struct FieldStore {
    key: FieldKey,
    state: Arc<RwLock<StoreState>>,
}

impl FieldStore {
    pub fn new(key: FieldKey, initial: impl Into<SharedString>) -> Self {
        Self {
            key,
            state: Arc::new(RwLock::new(StoreState {
                field: FieldValue::new(initial),
                validator: None,
                listeners: Vec::new(),
                observers: Observers::default(),
            })),
        }
    }

    pub fn with_validator(self, validator: impl FieldValidator + 'static) -> Self {
        self.write().validator = Some(Arc::new(validator));
        self
    }

    pub fn key(&self) -> FieldKey {
        self.key
    }

    pub fn get(&self) -> SharedString {
        self.read().field.value.clone()
    }

    pub fn field(&self) -> FieldValue {
        self.read().field.clone()
    }

    pub fn set(&self, value: impl Into<SharedString>) {
        let value = value.into();
        let (field, previous, listeners, observers) = {
            let mut state = self.write();
            let validator = state.validator.clone();
            let previous = state.field.apply(value, validator.as_deref());
            (
                state.field.clone(),
                previous,
                state.listeners.clone(),
                state.observers.clone(),
            )
        };

        for listener in &listeners {
            listener(&field);
        }
        observers.emit(&FormEvent::FieldChanged {
            key: self.key,
            value: field.value.clone(),
        });
        if previous != field.valid {
            observers.emit(&FormEvent::ValidityChanged {
                key: self.key,
                previous,
                valid: field.valid,
            });
        }
    }

    /// Applies a host change event; equivalent to `set(event.target_value)`.
    pub fn apply_change(&self, event: &ChangeEvent) {
        self.set(event.target_value.clone());
    }

    /// Registers a callback run after every `set`; this is the re-render hook.
    pub fn subscribe(&self, listener: impl Fn(&FieldValue) + Send + Sync + 'static) {
        self.write().listeners.push(Arc::new(listener));
    }

    pub fn observe(&self, observer: impl FormObserver + 'static) {
        self.write().observers.push(Arc::new(observer));
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        match self.state.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        match self.state.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl std::fmt::Debug for FieldStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldStore")
            .field("key", &self.key)
            .field("field", &self.field())
            .finish()
    }
}
