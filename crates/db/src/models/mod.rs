//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` write DTO
//! - Any list/filter parameters the repository accepts

pub mod category_type;
