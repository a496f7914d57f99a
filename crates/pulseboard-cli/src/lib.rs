// NOTE: pulseboard layering
//
// types    -> domain records (posts, sessions, nav items)
// backend  -> Supabase auth + PostgREST clients behind traits
// engine   -> pure computations (metric cards, navigation, summaries)
// runtime  -> config, stored session, the posts feed
// cli      -> commands, console output and the ratatui dashboard
//
// Only the runtime's feed talks to the posts table. Every screen and command
// reads the feed's state and turns it into view models; nothing here mutates
// posts.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{Cli, Commands, ConfigCommand, LogLevel, OutputFormat};
pub use commands::run;
