use std::sync::Arc;

/// Minimum password length accepted by [`is_valid_password`].
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Pure predicate over a field's current value, recomputed on every change.
pub trait FieldValidator: Send + Sync {
    fn validate(&self, value: &str) -> bool;
}

impl<F> FieldValidator for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn validate(&self, value: &str) -> bool {
        (self)(value)
    }
}

pub type SharedValidator = Arc<dyn FieldValidator>;

/// Accepts values holding at least this many characters (scalar values, not bytes).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MinLength(pub usize);

impl FieldValidator for MinLength {
    fn validate(&self, value: &str) -> bool {
        value.chars().count() >= self.0
    }
}

pub fn is_valid_password(value: &str) -> bool {
    MinLength(PASSWORD_MIN_LENGTH).validate(value)
}

/// Where a validated field sits in its feedback lifecycle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationState {
    Unvalidated,
    Valid,
    Invalid,
}

impl ValidationState {
    pub fn from_flag(valid: Option<bool>) -> Self {
        match valid {
            None => Self::Unvalidated,
            Some(true) => Self::Valid,
            Some(false) => Self::Invalid,
        }
    }
}
