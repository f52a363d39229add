//! Cookie header parsing

/// Returns the value of the first cookie called `name` across all the given
/// `Cookie` header values (`a=1; b=2`). Surrounding double quotes are stripped.
pub fn find_cookie<'a, I>(header_values: I, name: &str) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    header_values
        .into_iter()
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| {
            let value = value.trim();
            value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value)
                .to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cookie() {
        assert_eq!(find_cookie(["my_cookie=abc"], "my_cookie").as_deref(), Some("abc"));
    }

    #[test]
    fn test_among_others() {
        let header = "theme=dark; my_cookie=abc-123 ; lang=en";
        assert_eq!(find_cookie([header], "my_cookie").as_deref(), Some("abc-123"));
        assert_eq!(find_cookie([header], "lang").as_deref(), Some("en"));
    }

    #[test]
    fn test_multiple_headers() {
        let headers = ["theme=dark", "my_cookie=xyz"];
        assert_eq!(find_cookie(headers, "my_cookie").as_deref(), Some("xyz"));
    }

    #[test]
    fn test_quoted_value() {
        assert_eq!(find_cookie(["my_cookie=\"q\""], "my_cookie").as_deref(), Some("q"));
    }

    #[test]
    fn test_missing() {
        assert_eq!(find_cookie(["my_cookiez=1; other"], "my_cookie"), None);
        assert_eq!(find_cookie(std::iter::empty::<&str>(), "my_cookie"), None);
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(find_cookie(["my_cookie="], "my_cookie").as_deref(), Some(""));
    }
}
