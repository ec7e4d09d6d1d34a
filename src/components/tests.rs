use std::cell::RefCell;
use std::sync::{Arc, Mutex};

use gpui::SharedString;

use super::{
    Edit, InputConfig, InputHandle, TextInput, UncontrolledForm, UncontrolledInput,
    apply_uncontrolled_edit, control, dispatch_controlled_edit, settle_controlled_edit,
};
use crate::contracts::FieldLike;
use crate::event::SubmitEvent;
use crate::observer::FormEvent;
use crate::style::{FieldTone, InputType};

#[test]
fn input_type_defaults_to_text() {
    let input = TextInput::new().with_id("components-default-type");
    assert_eq!(input.view().input_type, InputType::Text);
    assert_eq!(input.view().input_type.as_str(), "text");
}

#[test]
fn validity_maps_to_container_classes() {
    let neutral = TextInput::new().with_id("components-class-neutral");
    assert_eq!(neutral.view().class_name(), "input-container");
    assert_eq!(neutral.view().tone, FieldTone::Neutral);

    let valid = TextInput::new()
        .with_id("components-class-valid")
        .valid(Some(true));
    assert_eq!(valid.view().class_name(), "input-container valid");

    let invalid = TextInput::new()
        .with_id("components-class-error")
        .valid(Some(false));
    assert_eq!(invalid.view().class_name(), "input-container error");
    assert_eq!(invalid.view().tone, FieldTone::Error);
}

#[test]
fn password_values_are_masked_in_display_only() {
    let input = TextInput::new()
        .with_id("components-password")
        .input_type(InputType::Password)
        .value("hunter22");
    let view = input.view();
    assert_eq!(view.value, SharedString::from("hunter22"));
    assert_eq!(view.display_text, "********");
}

#[test]
fn config_carries_label_and_placeholder() {
    let input = TextInput::from_config(InputConfig {
        label: Some("email".into()),
        input_type: InputType::Email,
        placeholder: Some("you@example.com".into()),
        ..InputConfig::default()
    })
    .with_id("components-config");
    assert!(input.has_label());
    let view = input.view();
    assert_eq!(view.label, Some("email".into()));
    assert_eq!(view.placeholder, Some("you@example.com".into()));
    assert!(!view.disabled);
}

#[test]
fn controlled_edit_emits_once_and_leaves_view_unchanged() {
    let id = "components-controlled-edit";
    control::clear_id(id);
    let input = TextInput::new().with_id(id).value("ab");
    let emitted = RefCell::new(Vec::new());

    let dispatched = dispatch_controlled_edit(id, "ab", &Edit::Insert("c".into()), |next| {
        emitted.borrow_mut().push(next)
    });

    assert!(dispatched);
    assert_eq!(emitted.into_inner(), vec![SharedString::from("abc")]);
    assert_eq!(input.view().value, SharedString::from("ab"));
    assert_eq!(control::read_text_state(id, control::VALUE_SLOT), None);
}

#[test]
fn keystrokes_before_rerender_build_on_each_other() {
    let id = "components-controlled-burst";
    control::clear_id(id);
    let mut emitted = Vec::new();

    dispatch_controlled_edit(id, "", &Edit::Insert("a".into()), |next| emitted.push(next));
    dispatch_controlled_edit(id, "", &Edit::Insert("b".into()), |next| emitted.push(next));
    dispatch_controlled_edit(id, "", &Edit::DeleteBackward, |next| emitted.push(next));
    dispatch_controlled_edit(id, "", &Edit::Insert("c".into()), |next| emitted.push(next));

    assert_eq!(
        emitted,
        vec![
            SharedString::from("a"),
            SharedString::from("ab"),
            SharedString::from("a"),
            SharedString::from("ac"),
        ]
    );
    assert_eq!(control::read_text_state(id, control::VALUE_SLOT), None);
}

#[test]
fn rerender_resets_edits_to_the_owner_value() {
    let id = "components-controlled-rejected";
    control::clear_id(id);
    let mut last = SharedString::default();

    dispatch_controlled_edit(id, "", &Edit::Insert("x".into()), |next| last = next);
    assert_eq!(last, SharedString::from("x"));

    // Owner ignored the change and rendered the old value again.
    settle_controlled_edit(id);
    dispatch_controlled_edit(id, "", &Edit::Insert("y".into()), |next| last = next);
    assert_eq!(last, SharedString::from("y"));

    settle_controlled_edit(id);
    dispatch_controlled_edit(id, "y", &Edit::Insert("z".into()), |next| last = next);
    assert_eq!(last, SharedString::from("yz"));
}

#[test]
fn controlled_caret_only_edits_do_not_emit() {
    let id = "components-controlled-caret";
    control::clear_id(id);
    let mut calls = 0;

    assert!(!dispatch_controlled_edit(id, "abc", &Edit::MoveLeft, |_| calls += 1));
    assert_eq!(control::caret_state(id, 3), 2);
    assert!(!dispatch_controlled_edit(id, "", &Edit::DeleteBackward, |_| calls += 1));
    assert_eq!(calls, 0);
}

#[test]
fn controlled_edit_follows_the_caret() {
    let id = "components-controlled-caret-insert";
    control::clear_id(id);
    let mut last = SharedString::default();

    dispatch_controlled_edit(id, "ac", &Edit::MoveLeft, |_| {});
    dispatch_controlled_edit(id, "ac", &Edit::Insert("b".into()), |next| last = next);
    assert_eq!(last, SharedString::from("abc"));
}

#[test]
fn controlled_select_all_then_type_replaces_value() {
    let id = "components-controlled-select-all";
    control::clear_id(id);
    let mut last = SharedString::default();

    dispatch_controlled_edit(id, "old", &Edit::SelectAll, |_| {});
    dispatch_controlled_edit(id, "old", &Edit::Insert("new".into()), |next| last = next);
    assert_eq!(last, SharedString::from("new"));
}

#[test]
fn uncontrolled_mount_seeds_default_once() {
    let id = "components-uncontrolled-mount";
    let input = UncontrolledInput::new()
        .with_id(id)
        .default_value("seed");
    let handle = input.handle();
    handle.release();
    assert!(!handle.is_mounted());

    input.mount();
    assert_eq!(handle.read(), Some("seed".into()));

    handle.write("typed");
    let again = UncontrolledInput::new()
        .with_id(id)
        .default_value("other");
    assert_eq!(again.view().value, SharedString::from("typed"));
    handle.release();
}

#[test]
fn uncontrolled_edits_update_owned_text() {
    let id = "components-uncontrolled-edit";
    let input = UncontrolledInput::new().with_id(id).default_value("hi");
    let handle = input.handle();
    handle.release();
    input.mount();

    assert!(apply_uncontrolled_edit(&handle, &Edit::Insert("!".into())));
    assert!(!apply_uncontrolled_edit(&handle, &Edit::MoveHome));
    assert!(apply_uncontrolled_edit(&handle, &Edit::DeleteForward));
    assert_eq!(handle.read(), Some("i!".into()));
    handle.release();
}

#[test]
fn uncontrolled_form_reads_value_on_submit() {
    let handle = InputHandle::new("components-uncontrolled-submit");
    handle.release();
    handle.write("hello");

    let seen = Arc::new(Mutex::new(Vec::<SharedString>::new()));
    let events = Arc::new(Mutex::new(Vec::<FormEvent>::new()));
    let form = UncontrolledForm::new(handle.clone())
        .on_submit({
            let seen = seen.clone();
            move |value: &SharedString| {
                if let Ok(mut seen) = seen.lock() {
                    seen.push(value.clone());
                }
            }
        })
        .observe({
            let events = events.clone();
            move |event: &FormEvent| {
                if let Ok(mut events) = events.lock() {
                    events.push(event.clone());
                }
            }
        });

    let mut event = SubmitEvent::new();
    assert_eq!(form.submit(&mut event), Some("hello".into()));
    assert!(event.default_prevented());
    assert_eq!(*seen.lock().expect("seen lock"), vec![SharedString::from("hello")]);
    assert_eq!(
        *events.lock().expect("events lock"),
        vec![FormEvent::UncontrolledRead {
            id: "components-uncontrolled-submit".into(),
            value: "hello".into(),
        }]
    );
    handle.release();
}

#[test]
fn unmounted_uncontrolled_form_skips_consumer() {
    let handle = InputHandle::new("components-uncontrolled-unmounted");
    handle.release();
    let called = Arc::new(Mutex::new(false));
    let form = UncontrolledForm::new(handle).on_submit({
        let called = called.clone();
        move |_: &SharedString| {
            if let Ok(mut called) = called.lock() {
                *called = true;
            }
        }
    });

    let mut event = SubmitEvent::new();
    assert_eq!(form.submit(&mut event), None);
    assert!(event.default_prevented());
    assert!(!*called.lock().expect("called lock"));
}

#[test]
fn disabled_flag_reaches_the_view() {
    use crate::contracts::Disableable;

    let input = Disableable::disabled(TextInput::new().with_id("components-disabled"), true);
    assert!(input.view().disabled);
    let uncontrolled = UncontrolledInput::new()
        .with_id("components-disabled-uncontrolled")
        .disabled(true);
    assert!(uncontrolled.view().disabled);
    uncontrolled.handle().release();
}
