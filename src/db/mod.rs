pub mod database;
pub mod product;
pub mod user;
