// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

use argh::{FromArgs, from_env};
use std::{io, path::PathBuf};

mod addr;
mod filter;
mod pool;
mod split;

use filter::{FilterEmitter, compare_any_bytes, compare_first_bytes};

/// sort and sift tab separated ipv4 addresses
#[derive(Debug, FromArgs)]
#[argh(help_triggers("-h", "--help"))]
struct Opt {
    /// where to read addresses from (stdin by default)
    #[argh(positional)]
    file: Option<PathBuf>,
}

#[derive(Debug, foxerror::FoxError)]
enum Error {
    /// io error
    #[err(from)]
    Io(io::Error),
    /// parse error
    #[err(from)]
    Parse(addr::Error),
}

fn main() -> Result<(), Error> {
    let opt: Opt = from_env();
    let input = match &opt.file {
        Some(file) => std::fs::read_to_string(file)?,
        None => io::read_to_string(io::stdin())?,
    };

    let mut pool = pool::IpPool::parse(&input)?;
    pool.sort();

    let stdout = io::stdout().lock();
    let mut emitter = FilterEmitter::new(pool.records(), stdout);

    emitter.apply(|_, _| true, &[])?;
    emitter.apply(compare_first_bytes, &[1])?;
    emitter.apply(compare_first_bytes, &[46, 70])?;
    emitter.apply(compare_any_bytes, &[46])?;

    Ok(())
}
