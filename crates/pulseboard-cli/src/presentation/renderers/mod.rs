pub mod console;
pub mod tui;

pub use console::ConsoleRenderer;
pub use tui::{AppAction, DashboardApp, TuiRenderer};
