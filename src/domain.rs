use crate::error::{Error, Result};

/// Returns the registrable (second-level) domain: the last two labels of `domain`.
///
/// `i.am.nested.domain.example.com` becomes `example.com`. Fails when fewer than
/// two labels are present or either of the last two is empty, which covers
/// leading and trailing dots.
pub fn extract_second_level_domain(domain: &str) -> Result<String> {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(Error::InvalidDomain(domain.to_string()));
    }

    let tail = &labels[labels.len() - 2..];
    if tail.iter().any(|label| label.is_empty()) {
        return Err(Error::InvalidDomain(domain.to_string()));
    }

    Ok(tail.join("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_level_domain() {
        assert_eq!(extract_second_level_domain("example.com").unwrap(), "example.com");
        assert_eq!(
            extract_second_level_domain("i.am.nested.domain.example.com").unwrap(),
            "example.com"
        );
        assert_eq!(
            extract_second_level_domain("_acme-challenge.www.example.cz").unwrap(),
            "example.cz"
        );
    }

    #[test]
    fn test_unparseable_domains() {
        for domain in ["", ".", ".com", "example.", "idonthaveseperator", "a..", "example.com."] {
            let err = extract_second_level_domain(domain).unwrap_err();
            assert!(
                matches!(err, Error::InvalidDomain(ref d) if d == domain),
                "unexpected result for {domain:?}: {err}"
            );
        }
    }

    #[test]
    fn test_empty_inner_label_is_ignored() {
        // Only the last two labels matter.
        assert_eq!(extract_second_level_domain("a..example.com").unwrap(), "example.com");
    }
}
