//! event_list - Event list manager: table model, renderer, controller and
//! terminal host.

pub mod app;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod terminal;
pub mod view;

#[cfg(test)]
mod testing;

pub use app::{build_app, build_http_app};
pub use config::Config;
pub use controller::{Controller, Operation, Outcome, Phase};
pub use error::ViewError;
pub use view::Renderer;
