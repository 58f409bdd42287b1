//! Byte-level helpers for inspecting hand-assembled PDFs in tests.

#![allow(dead_code)]

/// Position of the first occurrence of `needle` at or after `from`.
pub fn find_from(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| pos + from)
}

/// Parses the ASCII decimal number starting at `start`.
pub fn number_at(bytes: &[u8], start: usize) -> usize {
    let digits: String = bytes[start..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .map(|&byte| byte as char)
        .collect();
    digits.parse().expect("decimal number")
}

/// Offset recorded after the last `startxref` keyword.
pub fn startxref(bytes: &[u8]) -> usize {
    let keyword = b"startxref\n";
    let pos = bytes
        .windows(keyword.len())
        .rposition(|window| window == keyword)
        .expect("startxref keyword");
    number_at(bytes, pos + keyword.len())
}

/// The fixed-width entries of the classic xref table at `startxref`.
pub fn xref_entries(bytes: &[u8]) -> Vec<&[u8]> {
    let start = startxref(bytes);
    assert!(bytes[start..].starts_with(b"xref\n0 "), "xref keyword at startxref");

    let count_start = start + b"xref\n0 ".len();
    let count = number_at(bytes, count_start);
    let first_entry = find_from(bytes, b"\n", count_start).expect("subsection header") + 1;

    (0..count)
        .map(|index| {
            let begin = first_entry + index * 20;
            &bytes[begin..begin + 20]
        })
        .collect()
}

/// Declared `/Length` and actual body of the single stream object.
pub fn stream_length_and_body(bytes: &[u8]) -> (usize, &[u8]) {
    let length_key = b"/Length ";
    let key_pos = find_from(bytes, length_key, 0).expect("/Length key");
    let declared = number_at(bytes, key_pos + length_key.len());

    let body_start = find_from(bytes, b"stream\n", key_pos).expect("stream keyword") + 7;
    let body_end = find_from(bytes, b"\nendstream", body_start).expect("endstream keyword");
    (declared, &bytes[body_start..body_end])
}

/// Removes one level of PDF string escaping, panicking on a dangling or stray escape.
pub fn unescape(escaped: &str) -> String {
    let mut output = String::new();
    let mut chars = escaped.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            let next = chars.next().expect("escape must not dangle");
            assert!(
                matches!(next, '\\' | '(' | ')'),
                "unexpected escape of {next:?}"
            );
            output.push(next);
        } else {
            assert!(
                !matches!(ch, '(' | ')'),
                "unescaped delimiter {ch:?} in {escaped:?}"
            );
            output.push(ch);
        }
    }
    output
}
