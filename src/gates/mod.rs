pub mod auth;
pub mod disclaimer;
