//! Cache key generation using SHA-256 hashes

use sha2::{Digest, Sha256};

/// Generate a deterministic cache key from a request URL and its query parameters.
///
/// The key is the lowercase hex SHA-256 of `"{url}?{k1=v1&k2=v2...}"` with the
/// parameters sorted by name, so parameter order never changes the key.
pub fn cache_key(url: &str, params: &[(&str, String)]) -> String {
    let mut sorted_params: Vec<_> = params.iter().collect();
    sorted_params.sort_by_key(|(k, _)| *k);

    let query = sorted_params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hasher.update(b"?");
    hasher.update(query.as_bytes());

    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://api.github.com/users/octocat/repos";

    fn params(pairs: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_cache_key_ignores_param_order() {
        let key1 = cache_key(URL, &params(&[("per_page", "100"), ("page", "1")]));
        let key2 = cache_key(URL, &params(&[("page", "1"), ("per_page", "100")]));

        assert_eq!(key1, key2);
    }

    #[test]
    fn test_cache_key_different_pages() {
        let key1 = cache_key(URL, &params(&[("page", "1")]));
        let key2 = cache_key(URL, &params(&[("page", "2")]));

        assert_ne!(key1, key2);
    }

    #[test]
    fn test_cache_key_different_urls() {
        let key1 = cache_key(URL, &[]);
        let key2 = cache_key("https://api.github.com/orgs/octocat/repos", &[]);

        assert_ne!(key1, key2);
    }

    #[test]
    fn test_cache_key_is_sha256_of_signature() {
        let key = cache_key("u", &params(&[("b", "2"), ("a", "1")]));
        let expected = format!("{:x}", Sha256::digest(b"u?a=1&b=2"));

        assert_eq!(key, expected);
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }
}
