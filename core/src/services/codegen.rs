//! One-time password generation.

use rand::Rng;

/// Generate a random 6-digit OTP in [100000, 999999]
///
/// The range starts at 100000 so a leading zero is impossible by
/// construction. `thread_rng` is unpredictable enough for OTPs; this is not
/// a cryptographic secret.
pub fn generate_code() -> String {
    let code: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
    code.to_string()
}
