mod context;

pub mod account;
pub mod config;
pub mod dashboard;
pub mod posts;

pub use context::HandlerContext;
