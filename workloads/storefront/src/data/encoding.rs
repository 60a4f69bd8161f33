//! Percent decoding for query strings and urlencoded form bodies.

use std::collections::HashMap;

/// Decode one percent-encoded value. `+` means space, as browsers send
/// for both query strings and `application/x-www-form-urlencoded`
/// bodies. Malformed escapes pass through literally.
pub fn url_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => match (hex_digit(bytes.get(i + 1)), hex_digit(bytes.get(i + 2))) {
                (Some(hi), Some(lo)) => {
                    out.push(hi * 16 + lo);
                    i += 3;
                }
                _ => {
                    out.push(b'%');
                    i += 1;
                }
            },
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: Option<&u8>) -> Option<u8> {
    (*b? as char).to_digit(16).map(|d| d as u8)
}

/// Percent-encode a value for a query string or path segment. Only
/// unreserved characters pass through, so gid-style ids survive the
/// round trip.
pub fn url_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

/// Parse `a=1&b=2` pairs into a map, decoding keys and values. Later
/// duplicates win; pairs without `=` become empty-valued keys.
pub fn parse_urlencoded(input: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    for pair in input.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        fields.insert(url_decode(key), url_decode(value));
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain() {
        assert_eq!(url_decode("encre-noire"), "encre-noire");
    }

    #[test]
    fn test_decode_plus_and_percent() {
        assert_eq!(url_decode("savon+vert"), "savon vert");
        assert_eq!(url_decode("savon%20vert"), "savon vert");
        assert_eq!(url_decode("hygi%C3%A8ne"), "hygiène");
        assert_eq!(url_decode("a%26b"), "a&b");
    }

    #[test]
    fn test_decode_malformed_escape_passes_through() {
        assert_eq!(url_decode("100%"), "100%");
        assert_eq!(url_decode("%zz"), "%zz");
    }

    #[test]
    fn test_parse_pairs() {
        let fields = parse_urlencoded("q=encre+noire&page=2");
        assert_eq!(fields.get("q").map(String::as_str), Some("encre noire"));
        assert_eq!(fields.get("page").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_parse_empty_and_bare_keys() {
        let fields = parse_urlencoded("");
        assert!(fields.is_empty());

        let fields = parse_urlencoded("flag&q=");
        assert_eq!(fields.get("flag").map(String::as_str), Some(""));
        assert_eq!(fields.get("q").map(String::as_str), Some(""));
    }

    #[test]
    fn test_parse_last_duplicate_wins() {
        let fields = parse_urlencoded("q=a&q=b");
        assert_eq!(fields.get("q").map(String::as_str), Some("b"));
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let gid = "gid://shopify/ProductVariant/123";
        assert_eq!(url_encode(gid), "gid%3A%2F%2Fshopify%2FProductVariant%2F123");
        assert_eq!(url_decode(&url_encode(gid)), gid);
        assert_eq!(url_encode("encre-noire"), "encre-noire");
        assert_eq!(url_encode("savon vert"), "savon%20vert");
    }

    #[test]
    fn test_parse_decodes_gid_values() {
        let fields =
            parse_urlencoded("variant_id=gid%3A%2F%2Fshopify%2FProductVariant%2F123");
        assert_eq!(
            fields.get("variant_id").map(String::as_str),
            Some("gid://shopify/ProductVariant/123")
        );
    }
}
