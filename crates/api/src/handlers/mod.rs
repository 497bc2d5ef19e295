pub mod category_type;
