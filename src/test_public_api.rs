use gpui::{IntoElement, SharedString};

use crate::form::FormModel as _;

fn into_any(element: impl IntoElement) -> gpui::AnyElement {
    element.into_any_element()
}

fn assert_render_once<T: gpui::RenderOnce>() {}

#[test]
fn components_export_render_elements() {
    assert_render_once::<crate::components::TextInput>();
    assert_render_once::<crate::components::UncontrolledInput>();
}

#[test]
fn prelude_smoke_builds_inputs() {
    use crate::prelude::*;

    let _ = into_any(TextInput::new().placeholder("controlled"));
    let _ = into_any(
        TextInput::from_config(InputConfig::default())
            .input_type(InputType::Password)
            .disabled(true),
    );
    let _ = into_any(UncontrolledInput::new().default_value("seed"));
}

#[derive(Clone, crate::form::FormModel)]
struct ApiSmokeForm {
    title: SharedString,
    body: String,
}

#[test]
fn form_public_api_smoke_compiles() {
    use crate::prelude::*;

    let fields = ApiSmokeForm::fields();
    let composer = FormComposer::for_model::<ApiSmokeForm>(FormOptions::default())
        .expect("composer");
    composer
        .register_validator(fields.title(), |value: &str| !value.is_empty())
        .expect("register validator");
    composer
        .register_observer(TracingObserver)
        .expect("register observer");
    composer.set(fields.body(), "text").expect("set body");
    composer
        .apply_change(fields.title(), &ChangeEvent::new("Hello"))
        .expect("apply change");

    let mut submitted = None;
    composer
        .submit_as::<ApiSmokeForm>(&mut SubmitEvent::new(), |model| submitted = Some(model))
        .expect("submit");
    let model = submitted.expect("model decoded");
    assert_eq!(model.title, SharedString::from("Hello"));
    assert_eq!(model.body, "text");
    assert_eq!(
        composer.field(fields.title()).expect("title").valid,
        Some(true)
    );
}

#[test]
fn application_defaults_are_usable() {
    let options = crate::ShowcaseOptions::default();
    assert!(!options.title.is_empty());
    assert!(options.default_log_filter.starts_with("inputbind"));
    crate::init_tracing(&options.default_log_filter);
    crate::init_tracing(&options.default_log_filter);
}
