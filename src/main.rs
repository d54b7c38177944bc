#![allow(non_snake_case)]

use coffeebook::client::{config::Config, App};
use dioxus_logger::tracing::Level;

fn main() {
    let level = Config::from_env()
        .map(|config| config.log_level)
        .unwrap_or(Level::INFO);

    if let Err(e) = dioxus_logger::init(level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    dioxus::launch(App);
}
