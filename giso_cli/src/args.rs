use std::path::PathBuf;

use clap::Parser;

/// GISO - decide whether two graphs are isomorphic
#[derive(Parser, Debug)]
#[command(name = "giso")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the first graph file (.gf)
    pub graph_a: PathBuf,

    /// Path to the second graph file (.gf)
    pub graph_b: PathBuf,

    /// Dump both graphs' edge lists to stderr before deciding
    #[arg(long, default_value_t = false)]
    pub dump: bool,

    /// Print the witness bijection when the graphs are isomorphic
    #[arg(long, default_value_t = false)]
    pub witness: bool,
}
