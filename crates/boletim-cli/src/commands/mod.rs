pub mod extract;
pub mod save;
pub mod summary;
