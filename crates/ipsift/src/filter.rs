// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

use crate::addr::IpRecord;
use std::io::{self, Write};

/// whether every comparison byte equals the octet in its position,
/// starting from the first
///
/// an empty comparison list matches nothing, and so does a list
/// longer than the address
#[must_use]
pub fn compare_first_bytes(ip: &IpRecord, bytes: &[u8]) -> bool {
    if bytes.is_empty() || bytes.len() > ip.octets().len() {
        return false;
    }
    ip.octets().iter().zip(bytes).all(|(octet, byte)| octet == byte)
}

/// whether any octet equals the first comparison byte
///
/// only the first byte of the list is consulted, callers pass a
/// single byte
#[must_use]
pub fn compare_any_bytes(ip: &IpRecord, bytes: &[u8]) -> bool {
    let Some(first) = bytes.first() else {
        return false;
    };
    ip.octets().contains(first)
}

/// streams the records a predicate accepts to a sink
///
/// bound to one collection and one sink for its whole lifetime, and
/// reusable across predicate and byte list pairs
#[derive(Debug)]
pub struct FilterEmitter<'a, W> {
    records: &'a [IpRecord],
    sink: W,
}

impl<'a, W: Write> FilterEmitter<'a, W> {
    pub fn new(records: &'a [IpRecord], sink: W) -> Self {
        Self { records, sink }
    }

    /// write the text of every matching record, one per line, in
    /// collection order
    pub fn apply(
        &mut self,
        filter: impl Fn(&IpRecord, &[u8]) -> bool,
        bytes: &[u8],
    ) -> io::Result<()> {
        for ip in self.records {
            if filter(ip, bytes) {
                writeln!(self.sink, "{}", ip.text())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
fn record(s: &str) -> IpRecord {
    s.parse().unwrap()
}

#[test]
fn prefix_bytes() {
    let ip = record("192.168.1.1");
    assert!(!compare_first_bytes(&ip, &[]));
    assert!(compare_first_bytes(&ip, &[192]));
    assert!(!compare_first_bytes(&ip, &[10]));
    assert!(compare_first_bytes(&ip, &[192, 168]));
    assert!(!compare_first_bytes(&ip, &[192, 100]));
    // a later match does not make up for a wrong first byte
    assert!(!compare_first_bytes(&ip, &[10, 168]));
    assert!(compare_first_bytes(&ip, &[192, 168, 1, 1]));
    assert!(!compare_first_bytes(&ip, &[192, 168, 1, 1, 0]));
}

#[test]
fn any_bytes() {
    assert!(compare_any_bytes(&record("182.75.81.122"), &[75]));
    assert!(compare_any_bytes(&record("30.168.75.1"), &[75]));
    assert!(!compare_any_bytes(&record("192.168.1.1"), &[75]));
    assert!(compare_any_bytes(&record("192.168.1.1"), &[168]));
    assert!(compare_any_bytes(&record("30.168.75.1"), &[168]));
    assert!(!compare_any_bytes(&record("192.168.1.1"), &[]));
    // bytes past the first never match on their own
    assert!(!compare_any_bytes(&record("192.168.1.1"), &[75, 168]));
}

#[test]
fn emits_in_order() {
    let records: Vec<IpRecord> = [
        "192.168.1.1",
        "85.254.10.197",
        "67.250.31.212",
        "182.75.81.122",
        "30.168.75.1",
    ]
    .iter()
    .map(|s| record(s))
    .collect();

    let mut out = Vec::new();
    let mut emitter = FilterEmitter::new(&records, &mut out);
    emitter.apply(|_, _| true, &[]).unwrap();
    emitter.apply(compare_any_bytes, &[75]).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "192.168.1.1\n85.254.10.197\n67.250.31.212\n182.75.81.122\n30.168.75.1\n\
         182.75.81.122\n30.168.75.1\n"
    );
}
