//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_type_repo;

pub use category_type_repo::CategoryTypeRepo;
