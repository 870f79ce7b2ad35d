//! Strict percent-decoding helpers.
//!
//! Unlike lenient decoders that pass malformed escapes through, these return
//! `None` on a truncated or non-hex escape and on non-UTF-8 output.

/// Decodes `%XX` escapes in a path segment.
pub fn decode_segment(input: &str) -> Option<String> {
    decode(input, false)
}

/// Decodes a query-style component: `+` is a space, `%XX` escapes are decoded.
pub fn decode_query_component(input: &str) -> Option<String> {
    decode(input, true)
}

fn decode(input: &str, plus_as_space: bool) -> Option<String> {
    let mut out = Vec::with_capacity(input.len());
    let mut bytes = input.bytes();

    while let Some(b) = bytes.next() {
        match b {
            b'%' => {
                let high = bytes.next().and_then(hex_digit)?;
                let low = bytes.next().and_then(hex_digit)?;
                out.push(high << 4 | low);
            }
            b'+' if plus_as_space => out.push(b' '),
            _ => out.push(b),
        }
    }

    String::from_utf8(out).ok()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
