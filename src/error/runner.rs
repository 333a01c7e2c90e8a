use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    #[error("invalid test identifier '{name}': expected '<module>.<function>'")]
    InvalidIdentifier { name: String },

    #[error("no module named '{module}'")]
    ModuleNotFound { module: String },

    #[error("module '{module}' has no test '{symbol}'")]
    SymbolNotFound { module: String, symbol: String },

    /// Whatever the test itself returned, passed through as-is.
    #[error(transparent)]
    Failed(anyhow::Error),
}

impl RunError {
    pub fn invalid_identifier(name: impl Into<String>) -> Self {
        Self::InvalidIdentifier { name: name.into() }
    }

    pub fn module_not_found(module: impl Into<String>) -> Self {
        Self::ModuleNotFound {
            module: module.into(),
        }
    }

    pub fn symbol_not_found(module: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self::SymbolNotFound {
            module: module.into(),
            symbol: symbol.into(),
        }
    }

    /// True when the test was found and invoked, and it reported a failure.
    pub fn is_test_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
