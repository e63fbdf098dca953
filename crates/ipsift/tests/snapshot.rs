// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

use std::{fs::File, path::Path, process::Command};

static BIN: &str = env!("CARGO_BIN_EXE_ipsift");
static DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data");

fn snapshot(name: &str) {
    let testname = Path::new(DATA_DIR).join(name);
    let input = File::open(testname.with_extension("tsv")).unwrap();
    let output = Command::new(BIN).stdin(input).output().unwrap();

    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let output = String::from_utf8(output.stdout).unwrap();
    let mut lines = output.lines();
    let sample = std::fs::read_to_string(testname.with_extension("out")).unwrap();

    for (n, sl) in sample.lines().enumerate() {
        assert_eq!(lines.next().unwrap(), sl, "line {}", n + 1);
    }

    assert_eq!(lines.next(), None);
}

macro_rules! snap {
    ($name:ident) => {
        #[test]
        fn $name() {
            snapshot(stringify!($name));
        }
    };
}

snap!(sift);
snap!(empty);

#[test]
fn rejects_bad_octet() {
    let input = File::open(Path::new(DATA_DIR).join("badoctet.tsv")).unwrap();
    let output = Command::new(BIN).stdin(input).output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn reads_file_argument() {
    let testname = Path::new(DATA_DIR).join("sift");
    let output = Command::new(BIN)
        .arg(testname.with_extension("tsv"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let sample = std::fs::read(testname.with_extension("out")).unwrap();
    assert_eq!(output.stdout, sample);
}
