pub mod error;
pub mod product;
pub mod response;
pub mod token;
pub mod user;
