//! Query-string helpers for href mode.
//!
//! In href mode each control links to the host page with the page number
//! carried in a query parameter, and the starting page is read back from the
//! host's own query string.

use super::config::parse_int_prefix;
use percent_encoding::percent_decode_str;

fn strip_question_mark(search: &str) -> &str {
    search.strip_prefix('?').unwrap_or(search)
}

/// Reads the page number carried by `param` in `search`.
///
/// `search` may start with `?`. The first occurrence of the parameter wins.
/// Returns `None` when the parameter is missing, empty, or does not start
/// with an integer.
///
/// ```rust
/// use bubbletea_pagination::pagination::page_from_query_string;
///
/// assert_eq!(page_from_query_string("?q=rust&page=3", "page"), Some(3));
/// assert_eq!(page_from_query_string("?page=", "page"), None);
/// assert_eq!(page_from_query_string("", "page"), None);
/// ```
pub fn page_from_query_string(search: &str, param: &str) -> Option<i64> {
    strip_question_mark(search)
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == param)
        .and_then(|(_, value)| {
            let value = percent_decode_str(value).decode_utf8().ok()?;
            parse_int_prefix(&value)
        })
}

/// Builds the query string linking to `page`.
///
/// Existing parameters are kept in order. The value of `param` is replaced,
/// or the parameter is appended when it is missing.
///
/// ```rust
/// use bubbletea_pagination::pagination::generate_query_string;
///
/// assert_eq!(generate_query_string(4, "?q=rust&page=1", "page"), "?q=rust&page=4");
/// assert_eq!(generate_query_string(2, "?q=rust", "page"), "?q=rust&page=2");
/// assert_eq!(generate_query_string(2, "", "page"), "?page=2");
/// ```
pub fn generate_query_string(page: usize, search: &str, param: &str) -> String {
    let search = strip_question_mark(search);
    let mut replaced = false;
    let mut pairs: Vec<String> = search
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let key = pair.split_once('=').map_or(pair, |(key, _)| key);
            if key == param && !replaced {
                replaced = true;
                format!("{param}={page}")
            } else {
                pair.to_string()
            }
        })
        .collect();
    if !replaced {
        pairs.push(format!("{param}={page}"));
    }
    format!("?{}", pairs.join("&"))
}
