use std::sync::Once;

use gpui::{App, KeyBinding, actions};

pub const INPUT_KEY_CONTEXT: &str = "inputbind_text_input";

actions!(
    inputbind_text_input,
    [
        MoveLeft,
        MoveRight,
        MoveHome,
        MoveEnd,
        DeleteBackward,
        DeleteForward,
        SelectAll,
        PasteClipboard,
        Submit,
    ]
);

static BINDINGS_INIT: Once = Once::new();

pub fn ensure_text_keybindings(cx: &mut App) {
    BINDINGS_INIT.call_once(|| {
        cx.bind_keys(input_bindings(INPUT_KEY_CONTEXT));
    });
}

fn input_bindings(context: &'static str) -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("left", MoveLeft, Some(context)),
        KeyBinding::new("right", MoveRight, Some(context)),
        KeyBinding::new("home", MoveHome, Some(context)),
        KeyBinding::new("end", MoveEnd, Some(context)),
        KeyBinding::new("backspace", DeleteBackward, Some(context)),
        KeyBinding::new("delete", DeleteForward, Some(context)),
        KeyBinding::new("cmd-a", SelectAll, Some(context)),
        KeyBinding::new("ctrl-a", SelectAll, Some(context)),
        KeyBinding::new("cmd-v", PasteClipboard, Some(context)),
        KeyBinding::new("ctrl-v", PasteClipboard, Some(context)),
        KeyBinding::new("enter", Submit, Some(context)),
    ]
}
