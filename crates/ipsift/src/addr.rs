// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

use crate::split::split;
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, foxerror::FoxError)]
pub enum Error {
    /// address must have 4 dotted octets
    InvalidFormat(String),
    /// octet value must be between 0 and 255
    OutOfRange(String),
}

/// convert a dotted decimal address to its octets
///
/// no whitespace trimming, no hex or octal, no ipv6
pub fn parse_octets(text: &str) -> Result<[u8; 4], Error> {
    let parts = split(text, '.');
    if parts.len() != 4 {
        return Err(Error::InvalidFormat(text.to_string()));
    }

    let mut octets = [0; 4];
    for (slot, part) in octets.iter_mut().zip(parts) {
        let value: i64 = part
            .parse()
            .map_err(|_| Error::InvalidFormat(part.to_string()))?;
        *slot = value
            .try_into()
            .map_err(|_| Error::OutOfRange(part.to_string()))?;
    }

    Ok(octets)
}

/// one input line: the address text as it appeared, plus its parsed
/// octets
///
/// equality and ordering consider the octets only, the text is kept
/// around for emitting
#[derive(Debug, Clone)]
pub struct IpRecord {
    text: String,
    octets: [u8; 4],
}

impl IpRecord {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn octets(&self) -> &[u8; 4] {
        &self.octets
    }
}

impl FromStr for IpRecord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            text: s.to_string(),
            octets: parse_octets(s)?,
        })
    }
}

impl PartialEq for IpRecord {
    fn eq(&self, other: &Self) -> bool {
        self.octets == other.octets
    }
}

impl Eq for IpRecord {}

impl Ord for IpRecord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.octets.cmp(&other.octets)
    }
}

impl PartialOrd for IpRecord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[test]
fn parse_known() {
    assert_eq!(parse_octets("192.168.1.1"), Ok([192, 168, 1, 1]));
    assert_eq!(parse_octets("0.0.0.0"), Ok([0, 0, 0, 0]));
    assert_eq!(parse_octets("255.255.255.255"), Ok([255; 4]));
}

#[test]
fn parse_rejects() {
    assert_eq!(
        parse_octets("1.2.3"),
        Err(Error::InvalidFormat("1.2.3".to_string()))
    );
    assert_eq!(
        parse_octets("1.2.3.4.5"),
        Err(Error::InvalidFormat("1.2.3.4.5".to_string()))
    );
    assert_eq!(
        parse_octets("1.2.3.cat"),
        Err(Error::InvalidFormat("cat".to_string()))
    );
    assert_eq!(
        parse_octets("1.2..4"),
        Err(Error::InvalidFormat(String::new()))
    );
    assert_eq!(
        parse_octets("256.1.1.1"),
        Err(Error::OutOfRange("256".to_string()))
    );
    assert_eq!(
        parse_octets("1.2.3.-4"),
        Err(Error::OutOfRange("-4".to_string()))
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        format!("{}", Error::OutOfRange("256".to_string())),
        "octet value must be between 0 and 255: 256"
    );
    assert_eq!(
        format!("{}", Error::InvalidFormat("1.2.3".to_string())),
        "address must have 4 dotted octets: 1.2.3"
    );
}

#[test]
fn record_ordering() {
    let a: IpRecord = "1.2.1.1".parse().unwrap();
    let b: IpRecord = "1.10.1.1".parse().unwrap();
    assert!(a < b);

    // the text is not part of the key
    let c = IpRecord {
        text: "something else".to_string(),
        octets: [1, 2, 1, 1],
    };
    assert_eq!(a, c);
}
