/// testspec
///
/// Reads line-based testspec files that map test names to descriptions, and
/// runs a single test function by its dotted identifier through an explicit
/// lookup table.
pub mod assets;
pub mod cli;
pub mod error;
pub mod logging;
pub mod runner;
pub mod spec;

pub use assets::{AssetDir, AssetLocator, DEFAULT_TESTSPEC_ASSET};
pub use error::{Error, Result};
pub use runner::{run_test, TestFn, TestId, TestTable};
pub use spec::{parse_testspec, read_testspec, TestRegistry};
