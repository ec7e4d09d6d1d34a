//! Rendering shared by controlled and uncontrolled entry controls.

use std::{
    collections::HashMap,
    rc::Rc,
    sync::{LazyLock, Mutex},
};

use gpui::{
    AnyElement, Div, FocusHandle, FontWeight, InteractiveElement, IntoElement, KeyDownEvent,
    ParentElement, SharedString, Stateful, StatefulInteractiveElement, Styled, Window, div, px,
};

use super::control;
use super::text_input_actions::{
    DeleteBackward, DeleteForward, INPUT_KEY_CONTEXT, MoveEnd, MoveHome, MoveLeft, MoveRight,
    PasteClipboard, SelectAll, Submit, ensure_text_keybindings,
};
use super::text_input_state::{Edit, InputState};
use crate::id::ComponentId;
use crate::style::{CONTAINER_CLASS, FieldTone, InputType, palette};

pub(super) type EditHandler = Rc<dyn Fn(&Edit, &mut Window, &mut gpui::App)>;
pub(super) type SubmitAction = Rc<dyn Fn(&mut Window, &mut gpui::App)>;

static INPUT_FOCUS_HANDLES: LazyLock<Mutex<HashMap<String, FocusHandle>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// What one render of an entry control shows. This is the whole render
/// contract: a host only needs these attributes to draw the control.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InputView {
    pub id: SharedString,
    pub label: Option<SharedString>,
    pub class: Vec<&'static str>,
    pub input_type: InputType,
    pub value: SharedString,
    pub display_text: String,
    pub tone: FieldTone,
    pub placeholder: Option<SharedString>,
    pub disabled: bool,
}

impl InputView {
    pub(super) fn new(
        id: &ComponentId,
        label: Option<SharedString>,
        input_type: InputType,
        value: SharedString,
        valid: Option<bool>,
        placeholder: Option<SharedString>,
        disabled: bool,
    ) -> Self {
        let tone = FieldTone::from_valid(valid);
        let mut class = vec![CONTAINER_CLASS];
        class.extend(tone.class());
        Self {
            id: id.to_string().into(),
            label,
            class,
            input_type,
            display_text: input_type.display_text(value.as_ref()),
            value,
            tone,
            placeholder,
            disabled,
        }
    }

    pub fn class_name(&self) -> String {
        self.class.join(" ")
    }
}

/// Runs `edit` against `current` at the caret stored for `id`, updating the
/// caret and selection slots. Returns the new text when it differs.
pub(super) fn edit_at_caret(id: &str, current: &str, edit: &Edit) -> Option<String> {
    let caret = control::caret_state(id, current.chars().count());
    let mut state = InputState::new(current, caret);
    if control::bool_state(id, control::ALL_SELECTED_SLOT, false) {
        state.apply(&Edit::SelectAll);
    }
    let changed = state.apply(edit);
    control::set_caret_state(id, state.caret);
    control::set_bool_state(id, control::ALL_SELECTED_SLOT, state.selection.is_some());
    changed.then_some(state.value)
}

fn resolved_focus_handle(id: &str, cx: &gpui::App) -> FocusHandle {
    if let Ok(mut handles) = INPUT_FOCUS_HANDLES.lock() {
        return handles
            .entry(id.to_string())
            .or_insert_with(|| cx.focus_handle())
            .clone();
    }
    cx.focus_handle()
}

fn bind_edit<A: gpui::Action>(
    entry: Stateful<Div>,
    edit: Edit,
    on_edit: &EditHandler,
) -> Stateful<Div> {
    let on_edit = on_edit.clone();
    entry.on_action(move |_: &A, window, cx| on_edit(&edit, window, cx))
}

fn render_text(view: &InputView, caret: Option<usize>) -> Div {
    if view.value.is_empty() {
        let mut content = div().flex().flex_row().items_center();
        if caret.is_some() {
            content = content.child(render_caret());
        }
        if let Some(placeholder) = view.placeholder.clone() {
            content = content.child(div().text_color(palette::muted()).child(placeholder));
        }
        return content;
    }

    let Some(caret) = caret else {
        return div().child(view.display_text.clone());
    };
    let split = InputState::byte_index_at_char(&view.display_text, caret);
    let (before, after) = view.display_text.split_at(split);
    div()
        .flex()
        .flex_row()
        .items_center()
        .child(before.to_string())
        .child(render_caret())
        .child(after.to_string())
}

fn render_caret() -> Div {
    div().w(px(1.5)).h(px(16.0)).bg(palette::accent())
}

pub(super) fn render_entry(
    id: ComponentId,
    view: InputView,
    on_edit: EditHandler,
    on_submit: Option<SubmitAction>,
    window: &mut Window,
    cx: &mut gpui::App,
) -> AnyElement {
    ensure_text_keybindings(cx);
    let focus_handle = resolved_focus_handle(&id, cx);
    let is_focused =
        !view.disabled && (focus_handle.is_focused(window) || control::focused_state(&id));
    let caret = is_focused.then(|| control::caret_state(&id, view.value.chars().count()));

    let mut entry = div()
        .id(id.slot("entry"))
        .key_context(INPUT_KEY_CONTEXT)
        .track_focus(&focus_handle)
        .flex()
        .flex_row()
        .items_center()
        .w_full()
        .h(px(34.0))
        .px_2()
        .border_1()
        .rounded_md()
        .bg(palette::surface())
        .text_color(palette::text())
        .border_color(view.tone.border(is_focused))
        .child(render_text(&view, caret));

    if view.disabled {
        entry = entry.cursor_default().opacity(0.55);
    } else {
        entry = entry.cursor_text();
        entry = bind_edit::<MoveLeft>(entry, Edit::MoveLeft, &on_edit);
        entry = bind_edit::<MoveRight>(entry, Edit::MoveRight, &on_edit);
        entry = bind_edit::<MoveHome>(entry, Edit::MoveHome, &on_edit);
        entry = bind_edit::<MoveEnd>(entry, Edit::MoveEnd, &on_edit);
        entry = bind_edit::<DeleteBackward>(entry, Edit::DeleteBackward, &on_edit);
        entry = bind_edit::<DeleteForward>(entry, Edit::DeleteForward, &on_edit);
        entry = bind_edit::<SelectAll>(entry, Edit::SelectAll, &on_edit);

        entry = entry
            .on_action({
                let on_edit = on_edit.clone();
                move |_: &PasteClipboard, window, cx| {
                    let Some(item) = cx.read_from_clipboard() else {
                        return;
                    };
                    let Some(pasted) = item.text() else {
                        return;
                    };
                    on_edit(&Edit::Insert(pasted), window, cx);
                }
            })
            .on_key_down({
                let on_edit = on_edit.clone();
                let id = id.clone();
                move |event: &KeyDownEvent, window, cx| {
                    let modifiers = &event.keystroke.modifiers;
                    if modifiers.control
                        || modifiers.platform
                        || modifiers.function
                        || modifiers.alt
                    {
                        return;
                    }
                    let Some(text) = event.keystroke.key_char.as_ref() else {
                        return;
                    };
                    if text.is_empty() || text.chars().any(char::is_control) {
                        return;
                    }
                    control::set_focused_state(&id, true);
                    on_edit(&Edit::Insert(text.clone()), window, cx);
                    cx.stop_propagation();
                }
            })
            .on_click({
                let focus_handle = focus_handle.clone();
                let id = id.clone();
                move |_, window, cx| {
                    control::set_focused_state(&id, true);
                    window.focus(&focus_handle, cx);
                    window.refresh();
                }
            })
            .on_mouse_down_out({
                let id = id.clone();
                move |_, window, _cx| {
                    control::set_focused_state(&id, false);
                    window.refresh();
                }
            });

        if let Some(on_submit) = on_submit {
            entry = entry.on_action(move |_: &Submit, window, cx| on_submit(window, cx));
        }
    }

    let mut root = div().id(id.clone()).flex().flex_col().gap_1().w_full();
    if let Some(label) = view.label.clone() {
        root = root.child(
            div()
                .text_sm()
                .font_weight(FontWeight::MEDIUM)
                .text_color(palette::text())
                .child(label),
        );
    }
    root.child(entry).into_any_element()
}
