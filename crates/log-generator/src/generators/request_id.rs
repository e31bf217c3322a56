//! Trace id generator.

use crate::tables::REQUEST_ID_PREFIX;
use rand::Rng;
use uuid::Uuid;

/// Number of hex characters kept from the UUID.
const REQUEST_ID_HEX_LEN: usize = 16;

/// Generate a random UUID v4 using the provided RNG.
pub fn generate_uuid_v4<R: Rng>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    // Set version (4) and variant (RFC 4122) bits
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
}

/// Generate a request id such as `req_1f0c9a4be27d4c31`.
///
/// Uniqueness is not enforced; 64 random bits make collisions negligible.
pub fn generate_request_id<R: Rng>(rng: &mut R) -> String {
    let hex = generate_uuid_v4(rng).simple().to_string();
    format!("{REQUEST_ID_PREFIX}{}", &hex[..REQUEST_ID_HEX_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_request_id_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let id = generate_request_id(&mut rng);

        assert!(id.starts_with("req_"));
        assert_eq!(id.len(), 4 + 16);
        assert!(id[4..]
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_request_id_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(generate_request_id(&mut rng1), generate_request_id(&mut rng2));
        assert_ne!(generate_request_id(&mut rng1), generate_request_id(&mut rng1));
    }

    #[test]
    fn test_uuid_version() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_uuid_v4(&mut rng).get_version_num(), 4);
    }
}
