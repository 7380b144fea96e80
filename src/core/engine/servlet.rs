//! Decoding of `enabled-servlet-and-path` values
//!
//! Each value is `<servlet name> <url>`, e.g.
//! `Monitored Servlet https://example.com/monitoredServlet`.

const URL_MARKER: &str = " http";

/// Servlet name of an `enabled-servlet-and-path` value
///
/// The name is everything before the last ` http` that is followed by at
/// least one more character. Values without a name are skipped.
pub(super) fn servlet_name(value: &str) -> Option<&str> {
    let mut search_end = value.len();
    while let Some(index) = value[..search_end].rfind(URL_MARKER) {
        if index + URL_MARKER.len() < value.len() {
            return (index > 0).then(|| &value[..index]);
        }
        search_end = index;
    }
    None
}
