pub mod content;
pub mod price;
pub mod summary;
