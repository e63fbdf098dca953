// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

/// split `text` on every occurrence of `delim`
///
/// runs of the delimiter are never collapsed, so the result always
/// has exactly one more piece than there are delimiters
#[must_use]
pub fn split(text: &str, delim: char) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = text;

    while let Some((piece, tail)) = rest.split_once(delim) {
        pieces.push(piece);
        rest = tail;
    }
    pieces.push(rest);

    pieces
}

#[test]
fn boundaries() {
    assert_eq!(split("", '.'), [""]);
    assert_eq!(split("11", '.'), ["11"]);
    assert_eq!(split("..", '.'), ["", "", ""]);
    assert_eq!(split("11.", '.'), ["11", ""]);
    assert_eq!(split(".11", '.'), ["", "11"]);
    assert_eq!(split("11.22", '.'), ["11", "22"]);
}

#[test]
fn counts_delimiters() {
    for (text, delim) in [
        ("113.162.145.156\t111\t0", '\t'),
        ("46.70.225.39", '.'),
        ("meow", '.'),
        ("\t\t\t", '\t'),
    ] {
        let wanted = text.matches(delim).count() + 1;
        assert_eq!(split(text, delim).len(), wanted);
    }
}
