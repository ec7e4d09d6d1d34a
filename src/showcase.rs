//! Demo window composing a bound input, an uncontrolled input and the
//! sign-up form.

use gpui::prelude::*;
use gpui::{
    AnyElement, ClickEvent, Context, Div, FontWeight, SharedString, Stateful, Window, div, px,
};

use crate::components::{InputHandle, TextInput, UncontrolledForm, UncontrolledInput};
use crate::contracts::FieldLike;
use crate::event::SubmitEvent;
use crate::form::FormModel as _;
use crate::form::{
    FieldKey, FieldStore, FormComposer, PASSWORD_MIN_LENGTH, SignupForm, SubmitOutcome,
};
use crate::observer::TracingObserver;
use crate::style::{InputType, palette};

const CONTROLLED_ID: &str = "showcase-controlled";
const UNCONTROLLED_ID: &str = "showcase-uncontrolled";

pub struct Showcase {
    controlled: FieldStore,
    uncontrolled: UncontrolledForm,
    signup: FormComposer,
    last_uncontrolled: Option<SharedString>,
    last_signup: Option<SharedString>,
}

impl Showcase {
    pub fn new(signup: FormComposer) -> Self {
        let controlled = FieldStore::new(FieldKey::new("controlled"), "jkhsakdfhalksjf");
        controlled.observe(TracingObserver);
        if let Err(error) = signup.register_observer(TracingObserver) {
            tracing::warn!(%error, "sign-up form runs without diagnostics");
        }

        Self {
            controlled,
            uncontrolled: UncontrolledForm::new(InputHandle::new(UNCONTROLLED_ID))
                .observe(TracingObserver),
            signup,
            last_uncontrolled: None,
            last_signup: None,
        }
    }

    fn submit_uncontrolled(&mut self, _: &ClickEvent, _: &mut Window, cx: &mut Context<Self>) {
        let mut event = SubmitEvent::new();
        self.last_uncontrolled = self.uncontrolled.submit(&mut event);
        cx.notify();
    }

    fn submit_signup(&mut self, _: &ClickEvent, _: &mut Window, cx: &mut Context<Self>) {
        let mut event = SubmitEvent::new();
        match self.signup.submit(&mut event, |_| {}) {
            Ok(SubmitOutcome::Submitted(record)) => {
                self.last_signup = Some(record.to_string().into());
            }
            Ok(SubmitOutcome::Blocked { invalid }) => {
                tracing::info!(?invalid, "sign-up submission blocked");
            }
            Err(error) => tracing::error!(%error, "sign-up submission failed"),
        }
        cx.notify();
    }

    fn render_controlled(&self) -> Div {
        section("Controlled input")
            .child(
                self.controlled
                    .bind_text_input(TextInput::new().with_id(CONTROLLED_ID).label("Value")),
            )
            .child(caption(format!("Store holds: {}", self.controlled.get())))
    }

    fn render_uncontrolled(&self, cx: &mut Context<Self>) -> Div {
        section("Uncontrolled input")
            .child(
                UncontrolledInput::new()
                    .with_id(UNCONTROLLED_ID)
                    .label("Value")
                    .placeholder("Type, then submit"),
            )
            .child(
                button("submit-uncontrolled", "Submit")
                    .on_click(cx.listener(Self::submit_uncontrolled)),
            )
            .children(
                self.last_uncontrolled
                    .clone()
                    .map(|value| caption(format!("Submitted: {value}"))),
            )
    }

    fn signup_field(&self, key: FieldKey, input: TextInput) -> AnyElement {
        match self.signup.bind_text_input(key, input) {
            Ok(bound) => bound.into_any_element(),
            Err(error) => caption(error.to_string()).into_any_element(),
        }
    }

    fn render_signup(&self, cx: &mut Context<Self>) -> Div {
        let fields = SignupForm::fields();
        let password_invalid = self
            .signup
            .field(fields.password())
            .is_ok_and(|field| field.valid == Some(false));

        section("Sign up")
            .child(self.signup_field(fields.name(), TextInput::new().with_id("signup-name")))
            .child(self.signup_field(
                fields.email(),
                TextInput::new()
                    .with_id("signup-email")
                    .input_type(InputType::Email),
            ))
            .child(self.signup_field(
                fields.password(),
                TextInput::new()
                    .with_id("signup-password")
                    .input_type(InputType::Password),
            ))
            .when(password_invalid, |this| {
                this.child(
                    caption(format!(
                        "Password must be at least {PASSWORD_MIN_LENGTH} characters"
                    ))
                    .text_color(palette::error()),
                )
            })
            .child(
                button("submit-signup", "Create account")
                    .on_click(cx.listener(Self::submit_signup)),
            )
            .children(
                self.last_signup
                    .clone()
                    .map(|record| caption(format!("Submitted: {record}"))),
            )
    }
}

impl Render for Showcase {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("showcase")
            .flex()
            .flex_col()
            .gap_6()
            .p_6()
            .size_full()
            .overflow_y_scroll()
            .bg(palette::surface())
            .text_color(palette::text())
            .child(self.render_controlled())
            .child(self.render_uncontrolled(cx))
            .child(self.render_signup(cx))
    }
}

fn section(title: &'static str) -> Div {
    div().flex().flex_col().gap_2().max_w(px(420.0)).child(
        div()
            .text_lg()
            .font_weight(FontWeight::SEMIBOLD)
            .child(title),
    )
}

fn caption(text: impl Into<SharedString>) -> Div {
    div()
        .text_sm()
        .text_color(palette::muted())
        .child(text.into())
}

fn button(id: &'static str, label: &'static str) -> Stateful<Div> {
    div()
        .id(id)
        .px_3()
        .py_1()
        .rounded_md()
        .bg(palette::accent())
        .text_color(palette::surface())
        .cursor_pointer()
        .child(label)
}
