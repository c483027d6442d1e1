//! Authentication and user management

pub mod service;
pub mod token;

pub use service::{AuthContext, AuthService};
pub use token::{Claims, TokenService};

#[cfg(test)]
mod tests;
