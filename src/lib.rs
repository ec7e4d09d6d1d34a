pub mod application;
pub mod components;
pub mod contracts;
pub mod event;
pub mod form;
pub mod id;
pub mod observer;
pub mod prelude;
pub mod showcase;
pub mod style;

#[cfg(test)]
mod test_public_api;

pub use application::{ShowcaseApplication, ShowcaseOptions, init_tracing, run_showcase};
pub use gpui::SharedString;
