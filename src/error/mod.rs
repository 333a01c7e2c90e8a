mod io;
mod runner;
mod spec;

pub use io::IoError;
pub use runner::RunError;
pub use spec::{LineError, SpecError};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Run(#[from] RunError),
}

pub type Result<T> = std::result::Result<T, Error>;
