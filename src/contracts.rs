use gpui::SharedString;

use crate::style::InputType;

pub trait Disableable: Sized {
    fn disabled(self, value: bool) -> Self;
}

#[macro_export]
macro_rules! impl_disableable {
    ($type:ty) => {
        impl $crate::contracts::Disableable for $type {
            fn disabled(self, value: bool) -> Self {
                <$type>::disabled(self, value)
            }
        }
    };
}

/// Presentation shared by every labeled entry control, controlled or not.
pub trait FieldLike: Sized {
    fn label(self, value: impl Into<SharedString>) -> Self;
    fn placeholder(self, value: impl Into<SharedString>) -> Self;
    fn input_type(self, value: InputType) -> Self;
    fn has_label(&self) -> bool;
}
