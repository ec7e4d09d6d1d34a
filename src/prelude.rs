pub use crate::components::{
    InputConfig, InputHandle, InputView, TextInput, UncontrolledForm, UncontrolledInput,
};
pub use crate::contracts::{Disableable, FieldLike};
pub use crate::event::{ChangeEvent, SubmitEvent};
pub use crate::form::{
    FieldKey, FieldStore, FieldValue, FormComposer, FormError, FormModel, FormOptions,
    FormRecord, FormResult, SignupForm, SubmitOutcome, ValidationMode, is_valid_password,
    signup_form,
};
pub use crate::observer::{FormEvent, FormObserver, TracingObserver};
pub use crate::style::InputType;
