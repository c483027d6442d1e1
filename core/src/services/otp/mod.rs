//! OTP issuance and verification

pub mod service;

pub use service::OtpService;

#[cfg(test)]
pub(crate) mod tests;
