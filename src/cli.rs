use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::assets::{AssetDir, DEFAULT_TESTSPEC_ASSET};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "testspec")]
#[command(about = "List tests from a testspec and run them by name", long_about = None)]
pub struct Args {
    /// Directory holding asset files (auto-detected if not specified)
    #[arg(long, value_name = "DIR", global = true)]
    pub assets: Option<PathBuf>,

    /// Asset name of the testspec to read
    #[arg(long, value_name = "NAME", default_value = DEFAULT_TESTSPEC_ASSET, global = true)]
    pub spec: String,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every test in the testspec
    List {
        /// Output format (text, json)
        #[arg(short = 'f', long, default_value = "text")]
        format: OutputFormat,
    },

    /// Run tests by dotted identifier, stopping at the first failure
    Run {
        /// Test identifiers, e.g. engine.util.test_hash
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
    },
}

impl Args {
    pub fn asset_dir(&self) -> AssetDir {
        match &self.assets {
            Some(dir) => AssetDir::new(dir),
            None => AssetDir::discover(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_defaults() {
        let args = Args::try_parse_from(["testspec", "list"]).unwrap();
        assert_eq!(
            args.command,
            Command::List {
                format: OutputFormat::Text
            }
        );
        assert_eq!(args.spec, DEFAULT_TESTSPEC_ASSET);
        assert_eq!(args.assets, None);
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_parse_list_json() {
        let args = Args::try_parse_from(["testspec", "list", "--format", "json"]).unwrap();
        assert_eq!(
            args.command,
            Command::List {
                format: OutputFormat::Json
            }
        );
    }

    #[test]
    fn test_parse_run_multiple_names() {
        let args = Args::try_parse_from(["testspec", "run", "a.b.c", "d.e"]).unwrap();
        assert_eq!(
            args.command,
            Command::Run {
                names: vec!["a.b.c".to_string(), "d.e".to_string()]
            }
        );
    }

    #[test]
    fn test_run_requires_a_name() {
        assert!(Args::try_parse_from(["testspec", "run"]).is_err());
    }

    #[test]
    fn test_missing_subcommand() {
        assert!(Args::try_parse_from(["testspec"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "testspec",
            "run",
            "a.b",
            "--assets",
            "/tmp/assets",
            "--spec",
            "other",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.assets, Some(PathBuf::from("/tmp/assets")));
        assert_eq!(args.spec, "other");
        assert_eq!(args.verbose, 2);
        assert_eq!(args.asset_dir(), AssetDir::new("/tmp/assets"));
    }
}
