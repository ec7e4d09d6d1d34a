use inputbind::{ShowcaseOptions, run_showcase};

fn main() {
    run_showcase(ShowcaseOptions::default());
}
