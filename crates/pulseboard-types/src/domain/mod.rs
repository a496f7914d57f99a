pub mod ids;
pub mod navigation;
pub mod post;
pub mod session;

pub use ids::*;
pub use navigation::*;
pub use post::*;
pub use session::*;
