// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

use crate::{
    addr::{self, IpRecord},
    split::split,
};

/// parsed records in input order, duplicates preserved
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IpPool(Vec<IpRecord>);

impl IpPool {
    /// build a pool from tab separated lines, taking the address from
    /// the first field of each and discarding the rest
    ///
    /// the whole input is rejected on the first bad line
    pub fn parse(input: &str) -> Result<Self, addr::Error> {
        let mut records = Vec::new();
        for line in input.lines() {
            records.push(split(line, '\t')[0].parse()?);
        }
        Ok(Self(records))
    }

    /// reverse lexicographic order on the octets
    ///
    /// records with equal octets end up in arbitrary relative order
    pub fn sort(&mut self) {
        self.0.sort_unstable_by(|a, b| b.cmp(a));
    }

    #[must_use]
    pub fn records(&self) -> &[IpRecord] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[test]
fn takes_first_field() {
    let pool = IpPool::parse("113.162.145.156\t111\t0\n").unwrap();
    assert_eq!(pool.len(), 1);
    assert_eq!(pool.records()[0].text(), "113.162.145.156");
}

#[test]
fn keeps_duplicates() {
    let pool = IpPool::parse("185.46.86.132\t11\t0\n185.46.86.132\t11\t0\n").unwrap();
    assert_eq!(pool.len(), 2);
    assert_eq!(pool.records()[0], pool.records()[1]);
}

#[test]
fn sorts_descending() {
    let mut pool = IpPool::parse("1.1.1.1\n1.10.1.1\n222.173.190.239\n1.2.1.1\n").unwrap();
    pool.sort();
    let order: Vec<_> = pool.records().iter().map(IpRecord::text).collect();
    // byte-wise, so 1.10 outranks 1.2
    assert_eq!(order, ["222.173.190.239", "1.10.1.1", "1.2.1.1", "1.1.1.1"]);
}

#[test]
fn fails_fast() {
    assert_eq!(
        IpPool::parse("1.1.1.1\n256.1.1.1\n1.1.1.2\n"),
        Err(addr::Error::OutOfRange("256".to_string()))
    );
}

#[test]
fn empty_input() {
    let pool = IpPool::parse("").unwrap();
    assert!(pool.is_empty());
}
