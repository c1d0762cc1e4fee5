//! Command line arguments for the `ordered-tree` demo driver.

use std::str::FromStr;

use clap::Parser;
use thiserror::Error;

/// The pairs inserted when none are given on the command line.
pub const CANONICAL_PAIRS: [(i64, &str); 7] = [
    (5, "five"),
    (3, "three"),
    (7, "seven"),
    (2, "two"),
    (4, "four"),
    (6, "six"),
    (8, "eight"),
];

/// Walks an ordered tree through insertion, traversal, lookup, structural queries, deletion and
/// clearing, printing each step
#[derive(Parser, Debug)]
#[command(name = "ordered-tree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// KEY=VALUE pairs to insert, in order [default: 5=five 3=three 7=seven 2=two 4=four 6=six 8=eight]
    #[arg(value_name = "PAIRS")]
    pub pairs: Vec<Pair>,

    /// Keys to look up
    #[arg(short, long = "search", value_name = "KEY", default_values_t = [4, 9])]
    pub search: Vec<i64>,

    /// Key whose degree and height are reported
    #[arg(short, long, value_name = "KEY", default_value_t = 5)]
    pub inspect: i64,

    /// Key whose level and ancestors are reported
    #[arg(short, long, value_name = "KEY", default_value_t = 4)]
    pub locate: i64,

    /// Key to delete
    #[arg(short = 'x', long, value_name = "KEY", default_value_t = 3)]
    pub delete: i64,

    /// Turn debugging information on (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,
}

impl Cli {
    /// The pairs to insert, falling back to [`CANONICAL_PAIRS`].
    pub fn pairs(&self) -> Vec<Pair> {
        if self.pairs.is_empty() {
            CANONICAL_PAIRS
                .iter()
                .map(|&(key, value)| Pair {
                    key,
                    value: value.to_string(),
                })
                .collect()
        } else {
            self.pairs.clone()
        }
    }
}

/// A key and the value stored under it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pair {
    /// The ordering key.
    pub key: i64,
    /// The stored value.
    pub value: String,
}

/// Reasons a `KEY=VALUE` argument can't be read.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PairParseError {
    /// No `=` between key and value.
    #[error("expected KEY=VALUE, got `{0}`")]
    MissingSeparator(String),

    /// The key isn't an integer.
    #[error("invalid key `{key}`: {source}")]
    InvalidKey {
        /// The text before `=`.
        key: String,
        /// Why it didn't parse.
        source: std::num::ParseIntError,
    },
}

impl FromStr for Pair {
    type Err = PairParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| PairParseError::MissingSeparator(s.to_string()))?;
        let key = key.trim();
        let parsed = key.parse::<i64>().map_err(|source| PairParseError::InvalidKey {
            key: key.to_string(),
            source,
        })?;
        Ok(Pair {
            key: parsed,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_reproduce_the_canonical_run() {
        let cli = Cli::try_parse_from(["ordered-tree"]).unwrap();

        assert_eq!(cli.search, [4, 9]);
        assert_eq!(cli.inspect, 5);
        assert_eq!(cli.locate, 4);
        assert_eq!(cli.delete, 3);
        assert_eq!(cli.debug, 0);
        let keys: Vec<_> = cli.pairs().iter().map(|p| p.key).collect();
        assert_eq!(keys, [5, 3, 7, 2, 4, 6, 8]);
    }

    #[test]
    fn explicit_pairs_replace_the_defaults() {
        let cli = Cli::try_parse_from(["ordered-tree", "-dd", "1=one", "0=zero", "-s", "1"]).unwrap();

        assert_eq!(cli.debug, 2);
        assert_eq!(cli.search, [1]);
        assert_eq!(
            cli.pairs(),
            [
                Pair { key: 1, value: "one".into() },
                Pair { key: 0, value: "zero".into() },
            ]
        );
    }

    #[test]
    fn pair_parsing() {
        assert_eq!(
            "-3=minus three".parse::<Pair>(),
            Ok(Pair { key: -3, value: "minus three".into() })
        );
        assert_eq!("7=".parse::<Pair>(), Ok(Pair { key: 7, value: String::new() }));
        assert_eq!(
            "seven".parse::<Pair>(),
            Err(PairParseError::MissingSeparator("seven".into()))
        );
        assert!(matches!(
            "x=1".parse::<Pair>(),
            Err(PairParseError::InvalidKey { key, .. }) if key == "x"
        ));
    }

    #[test]
    fn bad_pair_is_rejected_by_clap() {
        assert!(Cli::try_parse_from(["ordered-tree", "nope"]).is_err());
    }
}
