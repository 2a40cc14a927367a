//! Opaque record identifier generation.
//!
//! Identifiers are 12 random bytes rendered as 24 lowercase hex characters,
//! the same shape as document-store object ids.

/// Number of random bytes before hex encoding.
const ID_LENGTH_BYTES: usize = 12;

/// Generates a new random identifier.
///
/// # Errors
///
/// Returns an error if the system random number generator fails.
pub fn generate_id() -> Result<String, getrandom::Error> {
    let mut buffer = [0u8; ID_LENGTH_BYTES];
    getrandom::fill(&mut buffer)?;
    Ok(hex::encode(buffer))
}

/// Returns true if `id` has the shape produced by [`generate_id`].
pub fn is_valid_id(id: &str) -> bool {
    id.len() == ID_LENGTH_BYTES * 2 && id.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id().unwrap();
        assert_eq!(id.len(), 24);
        assert!(is_valid_id(&id));
    }

    #[test]
    fn test_generate_id_produces_unique_ids() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id().unwrap()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_is_valid_id_rejects_other_shapes() {
        assert!(is_valid_id("5fa1c2d3e4f5a6b7c8d9e0f1"));
        assert!(!is_valid_id("5FA1C2D3E4F5A6B7C8D9E0F1"));
        assert!(!is_valid_id("5fa1c2d3"));
        assert!(!is_valid_id(":_id"));
        assert!(!is_valid_id("zzzzzzzzzzzzzzzzzzzzzzzz"));
    }
}
