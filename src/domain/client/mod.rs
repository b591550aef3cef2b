pub mod entity;
pub mod invariants;


pub use entity::{Client, LibraryReport, DEFAULT_EMAIL};
pub use invariants::validate_client;
