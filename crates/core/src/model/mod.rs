mod catalog;
mod fallback;
mod ids;
mod progress;
mod session;
mod topic;

pub use catalog::{Catalog, CatalogError};
pub use ids::{KEY_SEPARATOR, SessionId, TopicId};
pub use progress::SessionProgress;
pub use session::Session;
pub use topic::{Topic, TopicType};
