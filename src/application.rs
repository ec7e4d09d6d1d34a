use gpui::{
    App, AppContext as _, Application, Bounds, Pixels, Size, TitlebarOptions, WindowBounds,
    WindowOptions, px, size,
};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

use crate::form::signup_form;
use crate::showcase::Showcase;

/// Window settings for the showcase.
#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseOptions {
    pub title: String,
    pub size: Size<Pixels>,
    /// Filter used when `RUST_LOG` is unset.
    pub default_log_filter: String,
}

impl Default for ShowcaseOptions {
    fn default() -> Self {
        Self {
            title: "Input binding showcase".to_string(),
            size: size(px(720.0), px(640.0)),
            default_log_filter: "inputbind=debug".to_string(),
        }
    }
}

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `default_filter`. Does nothing when a global subscriber already exists.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let installed = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Event loop plus the options of the window it opens.
pub struct ShowcaseApplication {
    application: Application,
    options: ShowcaseOptions,
}

impl ShowcaseApplication {
    pub fn new(options: ShowcaseOptions) -> Self {
        Self {
            application: Application::new(),
            options,
        }
    }

    /// Runs the event loop and opens the showcase window.
    pub fn run(self) {
        let options = self.options;
        init_tracing(&options.default_log_filter);
        self.application.run(move |cx| {
            open_showcase_window(&options, cx);
            cx.activate(true);
        });
    }
}

/// Opens one showcase window. Failures are logged, not propagated, since
/// they happen inside the event loop.
pub fn open_showcase_window(options: &ShowcaseOptions, cx: &mut App) {
    let signup = match signup_form() {
        Ok(composer) => composer,
        Err(error) => {
            tracing::error!(%error, "could not build the sign-up form");
            return;
        }
    };

    let window_options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
            None,
            options.size,
            cx,
        ))),
        titlebar: Some(TitlebarOptions {
            title: Some(options.title.clone().into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    let opened = cx.open_window(window_options, |_window, cx| {
        cx.new(|_cx| Showcase::new(signup))
    });
    match opened {
        Ok(_) => tracing::info!(title = %options.title, "showcase window opened"),
        Err(error) => tracing::error!(%error, "could not open the showcase window"),
    }
}

pub fn run_showcase(options: ShowcaseOptions) {
    ShowcaseApplication::new(options).run();
}
