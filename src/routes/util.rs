//! Shared query parsing and fragment helpers for route handlers.

use crate::arcana::{Arcana, ParseArcanaError};

/// Parse a `key=value&key2=value2` string into decoded key-value pairs.
pub fn parse_form_body(body: &str) -> Vec<(String, String)> {
    if body.is_empty() {
        return Vec::new();
    }
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next()?;
            let val = parts.next().unwrap_or("");
            Some((percent_decode(key), percent_decode(val)))
        })
        .collect()
}

/// Percent-decode a URL-encoded value. `+` becomes a space.
pub fn percent_decode(input: &str) -> String {
    let mut out: Vec<u8> = Vec::with_capacity(input.len());
    let mut bytes = input.bytes();
    while let Some(b) = bytes.next() {
        match b {
            b'%' => {
                let hi = bytes.next();
                let lo = bytes.next();
                match (hi.and_then(hex_val), lo.and_then(hex_val)) {
                    (Some(h), Some(l)) => out.push(h << 4 | l),
                    _ => {
                        out.push(b'%');
                        out.extend(hi);
                        out.extend(lo);
                    }
                }
            }
            b'+' => out.push(b' '),
            _ => out.push(b),
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Parse a query string (leading `?` optional) into key-value pairs.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    let q = query.strip_prefix('?').unwrap_or(query);
    parse_form_body(q)
}

/// First value for `key`, if present.
pub fn get_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Read `key` as an arcana name. A missing key reads as empty.
pub fn arcana_param(params: &[(String, String)], key: &str) -> Result<Arcana, ParseArcanaError> {
    get_param(params, key).unwrap_or("").parse()
}

/// Escape text for interpolation into HTML.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Red error span for HTMX to swap in.
pub fn error_fragment(message: &str) -> String {
    format!(
        r#"<span class="text-velvet-red">{}</span>"#,
        escape_html(message)
    )
}

/// Error fragment for a bad arcana parameter.
pub fn arcana_error(key: &str, err: &ParseArcanaError) -> String {
    match err {
        ParseArcanaError::Empty => error_fragment(&format!("Missing {} parameter", key)),
        ParseArcanaError::Unknown(_) => error_fragment(&err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_form_body_works() {
        let pairs = parse_form_body("a=Fool&b=Magician&format=json");
        assert_eq!(pairs.len(), 3);
        assert_eq!(get_param(&pairs, "a"), Some("Fool"));
        assert_eq!(get_param(&pairs, "format"), Some("json"));
    }

    #[test]
    fn parse_form_body_empty() {
        assert!(parse_form_body("").is_empty());
    }

    #[test]
    fn percent_decode_plus_as_space() {
        assert_eq!(percent_decode("Hanged+Man"), "Hanged Man");
    }

    #[test]
    fn percent_decode_hex() {
        assert_eq!(percent_decode("Hanged%20Man"), "Hanged Man");
        assert_eq!(percent_decode("caf%C3%A9"), "café");
    }

    #[test]
    fn percent_decode_keeps_malformed_escape() {
        assert_eq!(percent_decode("100%zz"), "100%zz");
        assert_eq!(percent_decode("50%"), "50%");
    }

    #[test]
    fn parse_query_strips_prefix() {
        let pairs = parse_query("?target=Sun");
        assert_eq!(get_param(&pairs, "target"), Some("Sun"));
    }

    #[test]
    fn arcana_param_reads_and_validates() {
        let pairs = parse_query("a=Hanged+Man&b=Aeon");
        assert_eq!(arcana_param(&pairs, "a"), Ok(Arcana::HangedMan));
        assert!(matches!(
            arcana_param(&pairs, "b"),
            Err(ParseArcanaError::Unknown(_))
        ));
        assert_eq!(arcana_param(&pairs, "c"), Err(ParseArcanaError::Empty));
    }

    #[test]
    fn escape_html_escapes_markup() {
        assert_eq!(
            escape_html(r#"<script>"x"&'y'</script>"#),
            "&lt;script&gt;&quot;x&quot;&amp;&#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn arcana_error_names_the_parameter() {
        let html = arcana_error("target", &ParseArcanaError::Empty);
        assert!(html.contains("Missing target parameter"));
        let html = arcana_error("a", &ParseArcanaError::Unknown("<b>".into()));
        assert!(html.contains("unknown arcana: &lt;b&gt;"));
    }
}
