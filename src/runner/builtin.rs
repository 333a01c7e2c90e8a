use std::path::Path;

use anyhow::{ensure, Context};
use tracing::error;

use super::{TestId, TestTable};
use crate::spec::parse_testspec;

const SAMPLE: &str = "\
# sample
engine.util.test_hash:hashes a key
engine.util.test_url:parses http://host:80/

";

fn parse_sample() -> anyhow::Result<()> {
    let registry = parse_testspec(SAMPLE, Path::new("<sample>")).context("sample testspec")?;
    ensure!(registry.len() == 2, "expected 2 entries, got {}", registry.len());
    ensure!(
        registry.get("engine.util.test_url") == Some("parses http://host:80/"),
        "description was split on a later colon"
    );
    Ok(())
}

fn reject_malformed() -> anyhow::Result<()> {
    let result = parse_testspec("no delimiter here", Path::new("<sample>"));
    ensure!(result.is_err(), "line without ':' was accepted");
    Ok(())
}

fn split_identifier() -> anyhow::Result<()> {
    let id = TestId::parse("a.b.c.FunctionName")?;
    ensure!(id.module == "a.b.c", "module was '{}'", id.module);
    ensure!(id.symbol == "FunctionName", "symbol was '{}'", id.symbol);
    Ok(())
}

fn builtin_table() -> anyhow::Result<()> {
    let table = builtin();
    for name in BUILTIN.iter().map(|(name, _)| name) {
        ensure!(table.contains(name), "'{name}' is not registered");
    }
    Ok(())
}

const BUILTIN: &[(&str, super::TestFn)] = &[
    ("testspec.selftest.parse_sample", parse_sample),
    ("testspec.selftest.reject_malformed", reject_malformed),
    ("testspec.selftest.split_identifier", split_identifier),
    ("testspec.selftest.builtin_table", builtin_table),
];

/// Tests compiled into this binary.
pub fn builtin() -> TestTable {
    let mut table = TestTable::new();
    for (name, test) in BUILTIN {
        if let Err(e) = table.register(name, *test) {
            error!(test = name, error = %e, "skipping builtin test");
        }
    }
    table
}
