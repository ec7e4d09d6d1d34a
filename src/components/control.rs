//! Widget-owned state, keyed by component id and slot.
//!
//! Uncontrolled inputs keep their text here; controlled inputs only keep
//! transient editing state (caret, focus, the text emitted since the last
//! render) and never their value.

use std::{
    collections::HashMap,
    sync::{LazyLock, Mutex},
};

static BOOL_STATE: LazyLock<Mutex<HashMap<String, bool>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));
static TEXT_STATE: LazyLock<Mutex<HashMap<String, String>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

pub const VALUE_SLOT: &str = "value";
pub const CARET_SLOT: &str = "caret-index";
pub const FOCUSED_SLOT: &str = "focused";
pub const ALL_SELECTED_SLOT: &str = "all-selected";
pub const PENDING_SLOT: &str = "pending";

fn key(id: &str, slot: &str) -> String {
    format!("{id}::{slot}")
}

fn prefix(id: &str) -> String {
    format!("{id}::")
}

pub fn bool_state(id: &str, slot: &str, default: bool) -> bool {
    let composed = key(id, slot);
    if let Ok(mut state) = BOOL_STATE.lock() {
        return *state.entry(composed).or_insert(default);
    }
    default
}

pub fn set_bool_state(id: &str, slot: &str, value: bool) {
    let composed = key(id, slot);
    if let Ok(mut state) = BOOL_STATE.lock() {
        state.insert(composed, value);
    }
}

pub fn focused_state(id: &str) -> bool {
    bool_state(id, FOCUSED_SLOT, false)
}

pub fn set_focused_state(id: &str, value: bool) {
    set_bool_state(id, FOCUSED_SLOT, value);
}

/// Returns the stored text, seeding the slot with `default` on first access.
pub fn text_state(id: &str, slot: &str, default: String) -> String {
    let composed = key(id, slot);
    if let Ok(mut state) = TEXT_STATE.lock() {
        return state.entry(composed).or_insert(default).clone();
    }
    default
}

/// Reads a slot without seeding it.
pub fn read_text_state(id: &str, slot: &str) -> Option<String> {
    let composed = key(id, slot);
    TEXT_STATE.lock().ok()?.get(&composed).cloned()
}

pub fn set_text_state(id: &str, slot: &str, value: String) {
    let composed = key(id, slot);
    if let Ok(mut state) = TEXT_STATE.lock() {
        state.insert(composed, value);
    }
}

pub fn clear_text_state(id: &str, slot: &str) {
    let composed = key(id, slot);
    if let Ok(mut state) = TEXT_STATE.lock() {
        state.remove(&composed);
    }
}

pub fn caret_state(id: &str, len: usize) -> usize {
    text_state(id, CARET_SLOT, len.to_string())
        .parse::<usize>()
        .ok()
        .unwrap_or(len)
        .min(len)
}

pub fn set_caret_state(id: &str, caret: usize) {
    set_text_state(id, CARET_SLOT, caret.to_string());
}

/// Drops every slot of one component.
pub fn clear_id(id: &str) {
    let prefix = prefix(id);
    if let Ok(mut state) = TEXT_STATE.lock() {
        state.retain(|composed, _| !composed.starts_with(&prefix));
    }
    if let Ok(mut state) = BOOL_STATE.lock() {
        state.retain(|composed, _| !composed.starts_with(&prefix));
    }
}

