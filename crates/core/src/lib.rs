#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod placeholder;
pub mod search;

pub use error::Error;
pub use model::{
    Catalog, CatalogError, Session, SessionId, SessionProgress, Topic, TopicId, TopicType,
};
pub use placeholder::{CONTENT_NOT_FOUND, render_placeholder};
pub use search::{SearchRecord, SessionRecord, TopicRecord, build_search_index};
