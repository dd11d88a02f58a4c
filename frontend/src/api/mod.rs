pub mod auth;
pub mod client;
pub mod sports;
pub mod types;

pub use auth::AuthGateway;
pub use client::*;
pub use sports::SportsApi;
pub use types::*;

#[cfg(test)]
pub mod test_support;
