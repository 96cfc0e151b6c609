//! Post storage: identifier and document mapping plus repository backends.

mod connections;
pub mod document;
mod memory_repo;
pub mod object_id;

#[cfg(feature = "mongodb")]
mod mongo_repo;

pub use connections::DatabaseConfig;
pub use document::{NewPostDocument, POSTS_COLLECTION, PostDocument};
pub use memory_repo::InMemoryPostRepository;
pub use object_id::{id_to_string, string_to_id};

#[cfg(feature = "mongodb")]
pub use connections::DatabaseConnection;
#[cfg(feature = "mongodb")]
pub use mongo_repo::MongoPostRepository;
