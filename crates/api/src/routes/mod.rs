pub mod category_type;
pub mod health;
