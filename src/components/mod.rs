pub(crate) mod control;
mod entry;
mod input;
mod text_input_actions;
mod text_input_state;
mod uncontrolled;

#[cfg(test)]
mod tests;

pub use entry::InputView;
pub use input::{InputConfig, TextInput, dispatch_controlled_edit, settle_controlled_edit};
pub use text_input_actions::INPUT_KEY_CONTEXT;
pub use text_input_state::{Edit, InputState};
pub use uncontrolled::{InputHandle, UncontrolledForm, UncontrolledInput, apply_uncontrolled_edit};
