//! Call-by-name dispatch for test functions.
//!
//! Tests are plain functions registered in a [`TestTable`] under a dotted
//! identifier such as `engine.util.test_hash`. Everything before the last dot
//! is the module path and the last segment is the function name.

mod builtin;

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info};

use crate::error::RunError;

pub use builtin::builtin;

/// A test takes no arguments. Any error it returns is the test's failure.
pub type TestFn = fn() -> anyhow::Result<()>;

const SEPARATOR: char = '.';

/// A dotted test identifier split into module path and function name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestId {
    pub module: String,
    pub symbol: String,
}

impl TestId {
    /// Split `name` on its final dot.
    pub fn parse(name: &str) -> Result<Self, RunError> {
        match name.rsplit_once(SEPARATOR) {
            Some((module, symbol)) if !module.is_empty() && !symbol.is_empty() => Ok(Self {
                module: module.to_string(),
                symbol: symbol.to_string(),
            }),
            _ => Err(RunError::invalid_identifier(name)),
        }
    }
}

impl fmt::Display for TestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.module, self.symbol)
    }
}

/// Module path to (function name to test function).
#[derive(Debug, Clone, Default)]
pub struct TestTable {
    modules: HashMap<String, HashMap<String, TestFn>>,
}

impl TestTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `test` under the dotted identifier `name`. A later
    /// registration of the same name replaces the earlier one.
    pub fn register(&mut self, name: &str, test: TestFn) -> Result<&mut Self, RunError> {
        let id = TestId::parse(name)?;
        self.modules
            .entry(id.module)
            .or_default()
            .insert(id.symbol, test);
        Ok(self)
    }

    pub fn resolve(&self, id: &TestId) -> Result<TestFn, RunError> {
        let module = self
            .modules
            .get(&id.module)
            .ok_or_else(|| RunError::module_not_found(&id.module))?;
        module
            .get(&id.symbol)
            .copied()
            .ok_or_else(|| RunError::symbol_not_found(&id.module, &id.symbol))
    }

    pub fn contains(&self, name: &str) -> bool {
        TestId::parse(name)
            .ok()
            .is_some_and(|id| self.resolve(&id).is_ok())
    }

    pub fn len(&self) -> usize {
        self.modules.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All registered identifiers, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .modules
            .iter()
            .flat_map(|(module, tests)| {
                tests
                    .keys()
                    .map(move |symbol| format!("{module}{SEPARATOR}{symbol}"))
            })
            .collect();
        names.sort();
        names
    }
}

/// Resolve `name` in `table` and call it once.
///
/// Resolution problems come back as the matching [`RunError`] variant. A
/// test that fails is returned as [`RunError::Failed`] holding the test's
/// own error untouched.
pub fn run_test(table: &TestTable, name: &str) -> Result<(), RunError> {
    let id = TestId::parse(name)?;
    let test = table.resolve(&id)?;
    debug!(module = %id.module, symbol = %id.symbol, "resolved test");

    info!(test = %id, "running test");
    test().map_err(RunError::Failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, PartialEq, Eq)]
    struct ValueError(&'static str);

    impl fmt::Display for ValueError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "ValueError: {}", self.0)
        }
    }

    impl std::error::Error for ValueError {}

    static CALLS: AtomicUsize = AtomicUsize::new(0);

    fn counted() -> anyhow::Result<()> {
        CALLS.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn raises_value_error() -> anyhow::Result<()> {
        Err(ValueError("bad input").into())
    }

    fn passes() -> anyhow::Result<()> {
        Ok(())
    }

    fn table() -> TestTable {
        let mut table = TestTable::new();
        table
            .register("pkg.mod.myfunc", counted)
            .unwrap()
            .register("pkg.mod.broken", raises_value_error)
            .unwrap()
            .register("pkg.other.ok", passes)
            .unwrap();
        table
    }

    #[test]
    fn test_parse_splits_on_last_dot() {
        let id = TestId::parse("a.b.c.FunctionName").unwrap();
        assert_eq!(id.module, "a.b.c");
        assert_eq!(id.symbol, "FunctionName");
        assert_eq!(id.to_string(), "a.b.c.FunctionName");
    }

    #[test]
    fn test_parse_rejects_undotted_and_empty_parts() {
        for name in ["myfunc", ".myfunc", "pkg.mod.", ""] {
            assert!(
                matches!(TestId::parse(name), Err(RunError::InvalidIdentifier { .. })),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_run_invokes_exactly_once() {
        let before = CALLS.load(Ordering::SeqCst);
        run_test(&table(), "pkg.mod.myfunc").unwrap();
        assert_eq!(CALLS.load(Ordering::SeqCst), before + 1);
    }

    #[test]
    fn test_failure_propagates_unmodified() {
        let err = run_test(&table(), "pkg.mod.broken").unwrap_err();
        let RunError::Failed(inner) = err else {
            panic!("expected Failed");
        };
        assert_eq!(inner.downcast_ref::<ValueError>(), Some(&ValueError("bad input")));
    }

    #[test]
    fn test_missing_symbol() {
        let err = run_test(&table(), "pkg.mod.missing").unwrap_err();
        assert!(matches!(err, RunError::SymbolNotFound { .. }));
        assert!(!err.is_test_failure());
    }

    #[test]
    fn test_missing_module() {
        let err = run_test(&table(), "nope.missing").unwrap_err();
        assert!(matches!(err, RunError::ModuleNotFound { module } if module == "nope"));
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut table = table();
        table.register("pkg.mod.broken", passes).unwrap();
        assert!(run_test(&table, "pkg.mod.broken").is_ok());
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_names_sorted() {
        assert_eq!(
            table().names(),
            vec!["pkg.mod.broken", "pkg.mod.myfunc", "pkg.other.ok"]
        );
    }

    #[test]
    fn test_contains() {
        let table = table();
        assert!(table.contains("pkg.other.ok"));
        assert!(!table.contains("pkg.other.nope"));
        assert!(!table.contains("undotted"));
    }
}
