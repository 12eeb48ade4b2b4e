//! Unique names for the resources created by tests
use uuid::Uuid;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random string of `size` upper case letters and digits, prefixed with
/// `id-` when an id is given.
pub fn random_gen(id: Option<&str>, size: usize) -> String {
    let mut suffix = String::with_capacity(size);
    while suffix.len() < size {
        for byte in Uuid::new_v4().as_bytes() {
            if suffix.len() == size {
                break;
            }
            suffix.push(ALPHABET[*byte as usize % ALPHABET.len()] as char);
        }
    }

    match id {
        Some(id) if !id.is_empty() => format!("{}-{}", id, suffix),
        _ => suffix,
    }
}

/// `name-XXXXXX`
pub fn with_random_suffix(name: &str) -> String {
    format!("{}-{}", name, random_gen(None, 6))
}

/// Account user names keep at most 6 characters of the requested name and
/// the last 85 characters of the client id, for at most 99 characters.
pub fn account_username(username: &str, client_id: &str) -> String {
    let prefix: String = username.chars().take(6).collect();
    let skip = client_id.chars().count().saturating_sub(85);
    let client_id: String = client_id.chars().skip(skip).collect();
    format!("{}-{}", prefix, random_gen(Some(client_id.as_str()), 6))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_strings() {
        let plain = random_gen(None, 6);
        assert_eq!(plain.len(), 6);
        assert!(plain
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));

        let long = random_gen(None, 40);
        assert_eq!(long.len(), 40);

        let with_id = random_gen(Some("client"), 6);
        assert!(with_id.starts_with("client-"));
        assert_eq!(with_id.len(), "client-".len() + 6);
    }

    #[test]
    fn suffixed_name() {
        let name = with_random_suffix("test-vpc");
        assert!(name.starts_with("test-vpc-"));
        assert_eq!(name.len(), "test-vpc-".len() + 6);
    }

    #[test]
    fn username_fits_in_99_chars() {
        let client_id = "c".repeat(200);
        let name = account_username("test-account", &client_id);
        assert_eq!(name.len(), 99);
        assert!(name.starts_with("test-a-ccc"));

        let short = account_username("bob", "id1");
        assert!(short.starts_with("bob-id1-"));
    }
}
