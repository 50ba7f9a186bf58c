use querykit_core::infrastructure::value_source::FormValues;

/// Decodes a raw query string into [`FormValues`], keeping repeated keys.
///
/// A malformed query string yields no values rather than an error, so every
/// key simply reads as absent.
pub fn form_values_from_query(query: &str) -> FormValues {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_default();
    FormValues::from_pairs(pairs)
}

/// Same as [`form_values_from_query`] for an `application/x-www-form-urlencoded` body.
pub fn form_values_from_body(body: &[u8]) -> FormValues {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body).unwrap_or_default();
    FormValues::from_pairs(pairs)
}

#[cfg(test)]
mod tests {
    use querykit_core::domain::query::ValueSource;

    use super::*;

    #[test]
    fn test_repeated_keys_keep_first() {
        let values = form_values_from_query("page=2&page=9&pageSize=10");
        assert_eq!(values.first_value("page").as_deref(), Some("2"));
        assert_eq!(values.get_all("page"), ["2", "9"]);
        assert_eq!(values.first_value("pageSize").as_deref(), Some("10"));
    }

    #[test]
    fn test_bracketed_keys_are_decoded() {
        let values = form_values_from_query("__qsort%5B0%5D.__n=name&search=hello+world");
        assert_eq!(values.first_value("__qsort[0].__n").as_deref(), Some("name"));
        assert_eq!(values.first_value("search").as_deref(), Some("hello world"));
    }

    #[test]
    fn test_body_is_decoded() {
        let values = form_values_from_body(b"__cdgr.__o=1&__cdgr.__cd%5B0%5D.__n=city");
        assert_eq!(values.first_value("__cdgr.__o").as_deref(), Some("1"));
        assert_eq!(
            values.first_value("__cdgr.__cd[0].__n").as_deref(),
            Some("city")
        );
    }

    #[test]
    fn test_empty_query() {
        assert!(form_values_from_query("").is_empty());
    }
}
