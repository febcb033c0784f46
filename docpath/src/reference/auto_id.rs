use crate::common::{AUTO_ID_ALPHABET, AUTO_ID_LENGTH};
use rand::Rng;

/// Generates a client-side document identifier: 20 characters drawn
/// uniformly from `[A-Za-z0-9]`.
pub fn generate_auto_id() -> String {
    let mut rng = rand::thread_rng();
    (0..AUTO_ID_LENGTH)
        .map(|_| AUTO_ID_ALPHABET[rng.gen_range(0..AUTO_ID_ALPHABET.len())] as char)
        .collect()
}
