//! Query string encoding.
//!
//! A pure mapping-to-string collaborator: the dispatch core hands it the
//! query mapping of the effective request and splices the result into the
//! URL. The encoder owns the canonical parameter order (sorted by key,
//! courtesy of `BTreeMap`); callers must not rely on insertion order.

use std::collections::BTreeMap;

use crate::Result;

/// Encode a query mapping as a URL query component, without a leading `?`.
///
/// # Errors
///
/// Returns an error if serialization fails.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
///
/// let query = BTreeMap::from([
///     ("page".to_string(), "2".to_string()),
///     ("foo".to_string(), "bar".to_string()),
/// ]);
/// assert_eq!(courier_core::encode_query(&query).expect("encode"), "foo=bar&page=2");
/// ```
pub fn encode_query(query: &BTreeMap<String, String>) -> Result<String> {
    serde_html_form::to_string(query).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_single_pair() {
        let query = BTreeMap::from([("foo".to_string(), "bar".to_string())]);
        assert_eq!(encode_query(&query).expect("encode"), "foo=bar");
    }

    #[test]
    fn encode_sorts_by_key() {
        let query = BTreeMap::from([
            ("zebra".to_string(), "1".to_string()),
            ("apple".to_string(), "2".to_string()),
            ("mango".to_string(), "3".to_string()),
        ]);
        assert_eq!(encode_query(&query).expect("encode"), "apple=2&mango=3&zebra=1");
    }

    #[test]
    fn encode_escapes_values() {
        let query = BTreeMap::from([("q".to_string(), "a&b=c".to_string())]);
        assert_eq!(encode_query(&query).expect("encode"), "q=a%26b%3Dc");
    }

    #[test]
    fn encode_empty_mapping() {
        let query = BTreeMap::new();
        assert_eq!(encode_query(&query).expect("encode"), "");
    }
}
