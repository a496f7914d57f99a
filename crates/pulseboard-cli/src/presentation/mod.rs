//! # Presentation Layer
//!
//! Data flows one way:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!  (command)       (converter)       (contract)     (console/TUI)
//! ```
//!
//! * `view_models/`: plain data, `Serialize` where it reaches `--format json`.
//! * `presenters/`: pure functions turning posts, summaries and config into
//!   view models. Sums, percentages and string formatting happen here.
//! * `views/`: `Display` impls for console output and ratatui widgets for the
//!   dashboard. Layout and color only.
//! * `renderers/`: the console renderer (plain, JSON, CSV) and the TUI loop.
//! * `router`: dashboard paths and the back stack.
//! * `formatters/`: small shared helpers (`1.2k`, `+12.5%`, `3 days ago`).

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod router;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, TuiRenderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
