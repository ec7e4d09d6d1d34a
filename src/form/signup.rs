use gpui::SharedString;

use super::controller::{FormComposer, FormOptions, FormResult};
use super::model::FormModel;
use super::validation::is_valid_password;

/// The sign-up form: three text fields, submitted in this order.
#[derive(Clone, Debug, Default, Eq, PartialEq, inputbind_form_derive::FormModel)]
pub struct SignupForm {
    pub name: SharedString,
    pub email: SharedString,
    pub password: SharedString,
}

/// A composer holding the sign-up fields, empty and unvalidated, with the
/// password length rule attached.
pub fn signup_form() -> FormResult<FormComposer> {
    signup_form_with(FormOptions::default())
}

pub fn signup_form_with(options: FormOptions) -> FormResult<FormComposer> {
    let composer = FormComposer::for_model::<SignupForm>(options)?;
    composer.register_validator(SignupForm::fields().password(), is_valid_password)?;
    Ok(composer)
}
