// Supabase adapters
// GoTrue for sessions, PostgREST for table reads. Nothing here writes rows.

mod auth;
mod endpoint;
mod error;
mod query;
mod rest;
mod traits;

// Public API
pub use auth::AuthClient;
pub use endpoint::SupabaseEndpoint;
pub use error::{Error, QueryError, Result};
pub use query::{Order, PostQuery};
pub use rest::RestClient;
pub use traits::{PostsTable, SessionProvider};
