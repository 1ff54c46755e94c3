use std::path::PathBuf;

use clap::Parser;

use crate::report::Sections;

#[derive(Parser)]
#[command(version, about = "Computes FIRST and FOLLOW sets of a BNF grammar")]
pub struct Cli {
    /// File containing the grammar
    pub file: PathBuf,

    /// Start symbol (default: first in the file)
    #[arg(short, long, value_name = "SYMBOL")]
    pub start: Option<String>,

    /// Only print FIRST sets
    #[arg(long, conflicts_with = "follow")]
    pub first: bool,

    /// Only print FOLLOW sets
    #[arg(long)]
    pub follow: bool,

    /// Also print the FIRST set of every line suffix
    #[arg(long)]
    pub suffixes: bool
}

impl Cli {
    pub fn sections(&self) -> Sections {
        Sections {
            first: self.first || !self.follow,
            follow: self.follow || !self.first,
            suffixes: self.suffixes
        }
    }
}
