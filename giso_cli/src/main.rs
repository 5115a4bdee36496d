//! GISO command-line tool.
//!
//! Entry point for the graph-isomorphism checker. Loads two graph
//! files, runs the decision pipeline, and prints a single verdict line
//! to stdout. Load and validation errors propagate out of `main` and
//! terminate with a nonzero exit code and a message on stderr.

mod args;

use clap::Parser;
use tracing::info;

use args::Args;
use giso_common::{Graph, load_graph};
use giso_match::IsoMatcher;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    info!("loading graph A from {}", args.graph_a.display());
    let a = load_graph(&args.graph_a)?;
    info!("loading graph B from {}", args.graph_b.display());
    let b = load_graph(&args.graph_b)?;

    if args.dump {
        dump_graph(&a);
        dump_graph(&b);
    }

    let outcome = IsoMatcher::check(&a, &b);
    println!("{}", outcome.verdict);

    if args.witness {
        print_witness(&outcome);
    }

    Ok(())
}

/// Prints the witness bijection, one `a -> b` row per vertex. Prints
/// nothing for non-isomorphic outcomes.
fn print_witness(outcome: &giso_match::MatchOutcome) {
    let Some(witness) = &outcome.witness else {
        return;
    };
    for (vertex, image) in witness.as_slice().iter().enumerate() {
        println!("{vertex} -> {image}");
    }
}

/// Writes a graph's edge list to stderr, one `edge i: a-b` row per
/// edge, in construction order.
fn dump_graph(g: &Graph) {
    for (i, edge) in g.edges().iter().enumerate() {
        eprintln!("edge {i}: {}-{}", edge.a, edge.b);
    }
}
