use crate::errors::{DataModelError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Shortest accepted DNS prefix
pub const MIN_DNS_PREFIX_LENGTH: usize = 3;

/// Longest accepted DNS prefix
pub const MAX_DNS_PREFIX_LENGTH: usize = 45;

static DNS_PREFIX_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

// Leading letter, 1..=43 interior characters, trailing letter or digit.
fn matches_dns_prefix_pattern(dns_prefix: &str) -> bool {
    DNS_PREFIX_PATTERN
        .get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9-]{1,43}[A-Za-z0-9]$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(dns_prefix))
}

/// Validate a user-supplied DNS prefix.
///
/// Every rule is checked at once and any violation is reported as a single
/// [`DataModelError::InvalidDnsPrefix`] carrying the prefix and its length.
pub fn validate_dns_prefix(dns_prefix: &str) -> Result<()> {
    let length = dns_prefix.len();
    let in_range = (MIN_DNS_PREFIX_LENGTH..=MAX_DNS_PREFIX_LENGTH).contains(&length);

    if !in_range || !matches_dns_prefix_pattern(dns_prefix) {
        log::debug!("rejected DNS prefix {:?} (length {})", dns_prefix, length);
        return Err(DataModelError::InvalidDnsPrefix {
            prefix: dns_prefix.to_string(),
            length,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_message(prefix: &str, length: usize) -> String {
        format!(
            "DNSPrefix '{}' is invalid. The DNSPrefix must contain between 3 and 45 characters and can contain only letters, numbers, and hyphens.  It must start with a letter and must end with a letter or a number. (length was {})",
            prefix, length
        )
    }

    #[test]
    fn test_validate_dns_prefix() {
        let cases: &[(&str, &str, Option<usize>)] = &[
            ("valid DNS prefix", "validDnsPrefix", None),
            ("empty string", "", Some(0)),
            ("one char", "a", Some(1)),
            ("numbers", "1234", Some(4)),
            (
                "too many chars",
                "verylongdnsprefixthatismorethan45characterslong",
                Some(47),
            ),
            ("invalid special character", "dnswith_special?char", Some(20)),
            ("valid with numbers", "myDNS-1234", None),
        ];

        for (name, prefix, expected_length) in cases {
            let result = validate_dns_prefix(prefix);
            match expected_length {
                None => assert!(result.is_ok(), "{}: expected no error, got {:?}", name, result),
                Some(length) => {
                    let err = result.expect_err(name);
                    assert_eq!(err.to_string(), expected_message(prefix, *length), "{}", name);
                }
            }
        }
    }

    #[test]
    fn test_length_boundaries() {
        assert!(validate_dns_prefix("abc").is_ok());
        assert!(validate_dns_prefix("ab").is_err());

        let longest = format!("a{}", "b".repeat(44));
        assert_eq!(longest.len(), 45);
        assert!(validate_dns_prefix(&longest).is_ok());

        let too_long = format!("a{}", "b".repeat(45));
        assert!(validate_dns_prefix(&too_long).is_err());
    }

    #[test]
    fn test_start_and_end_rules() {
        assert!(validate_dns_prefix("-abc").is_err());
        assert!(validate_dns_prefix("abc-").is_err());
        assert!(validate_dns_prefix("9abc").is_err());
        assert!(validate_dns_prefix("abc9").is_ok());
        assert!(validate_dns_prefix("a--b").is_ok());
    }

    #[test]
    fn test_error_carries_prefix_and_length() {
        match validate_dns_prefix("x_y") {
            Err(DataModelError::InvalidDnsPrefix { prefix, length }) => {
                assert_eq!(prefix, "x_y");
                assert_eq!(length, 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
