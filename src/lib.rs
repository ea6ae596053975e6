mod builtin;
pub mod catalog;
pub mod logging;
pub mod model;
pub mod registry;
pub mod selector;
pub mod store;
pub mod tui;
mod tui_shell;
pub mod workspace;
