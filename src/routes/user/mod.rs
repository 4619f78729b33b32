pub mod create;
pub mod generate_token;
