mod binding;
mod controller;
mod field;
mod model;
mod record;
mod signup;
mod validation;


pub use controller::{
    FieldKey, FormComposer, FormError, FormOptions, FormResult, FormSnapshot, SubmitOutcome,
    ValidationMode,
};
pub use field::{FieldStore, FieldValue};
pub use inputbind_form_derive::FormModel;
pub use model::FormModel;
pub use record::FormRecord;
pub use signup::{SignupForm, SignupFormFields, signup_form, signup_form_with};
pub use validation::{
    FieldValidator, MinLength, PASSWORD_MIN_LENGTH, SharedValidator, ValidationState,
    is_valid_password,
};
