mod app;
mod effects;
mod input;
mod logging;
mod persistence;
mod render;

fn main() {
    logging::initialize();
    app::run();
}
