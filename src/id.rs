//! Note identifier generation
//!
//! Identifiers are 8 random bytes hex-encoded, giving 16 lowercase hex
//! characters. The keyspace is large enough that collisions are treated as
//! negligible and never checked against the store.

use rand::RngCore;

/// Number of random bytes backing a note identifier.
pub const NOTE_ID_BYTES: usize = 8;

/// Length of a note identifier in hex characters.
pub const NOTE_ID_LEN: usize = NOTE_ID_BYTES * 2;

/// Generates a fresh random note identifier.
pub fn generate_note_id() -> String {
    let mut bytes = [0u8; NOTE_ID_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Builds the store key for a note identifier.
pub fn note_key(id: &str) -> String {
    format!("note:{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_16_lowercase_hex_chars() {
        let id = generate_note_id();
        assert_eq!(id.len(), NOTE_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_ids_are_distinct() {
        let a = generate_note_id();
        let b = generate_note_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_note_key_prefix() {
        assert_eq!(note_key("abcd1234abcd1234"), "note:abcd1234abcd1234");
    }
}
