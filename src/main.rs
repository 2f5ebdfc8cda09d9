use std::{io::Write, path::PathBuf, process};
use clap::Parser;
use log::{info, warn, LevelFilter};
use rand::{rngs::StdRng, SeedableRng};
use thiserror::Error;
use queyranne::graph_cut::GraphCut;
use queyranne::instance_parser::{read_graph_from_file, ParseError};
use queyranne::verify::{check_submodularity, check_symmetry, VerifyConfig};
use queyranne::{minimize, Minimum, SfmError};

/// Computes a minimum cut of a weighted graph by minimizing its (symmetric submodular) cut
/// function with Queyranne's algorithm.
#[derive(Debug, Parser)]
#[command(author, version, about, arg_required_else_help = true)]
struct Args {
    /// The instance: 'c' comment lines, a header 'p <descriptor> <n> <m>' (or '# <n>') and one
    /// edge 'u v [weight]' per line, vertices numbered 1..=n.
    #[clap(verbatim_doc_comment)]
    instance_path: PathBuf,

    /// Sample the cut function for symmetry and submodularity violations before minimizing.
    #[arg(long)]
    verify: bool,

    /// Number of random samples drawn by each check of '--verify'.
    #[arg(long, default_value_t = 1000)]
    samples: usize,

    /// Seed of the random generator used by '--verify'.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Log every contraction round.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("Problem reading the instance, more details: {0}")]
    Instance(#[from] ParseError),
    #[error("Minimization failed, more details: {0}")]
    Minimization(#[from] SfmError),
}

fn configure_logging(verbose: bool) {
    let level_filter = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .format(|buf, record| writeln!(buf, "c {}", record.args()))
        .filter_level(level_filter)
        .init();
}

fn main() {
    let args = Args::parse();
    configure_logging(args.verbose);
    if let Err(err) = run(&args) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let g = read_graph_from_file(&args.instance_path)?;
    info!("read {:?}: {} vertices, {} edges", args.instance_path, g.size(), g.edge_count());
    let ground = g.ground_set();

    if args.verify {
        verify_cut_function(&g, &ground, args)?;
    }

    let min = minimize(&ground, &g, &())?;
    print_solution(&min);
    Ok(())
}

/// runs the oracle diagnostics on the cut function of 'g' (violations are only reported)
fn verify_cut_function(g: &GraphCut, ground: &[usize], args: &Args) -> Result<(), CliError> {
    let config = VerifyConfig { samples: args.samples, ..VerifyConfig::default() };
    let mut rng = StdRng::seed_from_u64(args.seed);
    if let Some(violation) = check_symmetry(ground, g, &(), &config, &mut rng)? {
        warn!("symmetry check failed: {violation:?}");
    }
    if let Some(violation) = check_submodularity(ground, g, &(), &config, &mut rng)? {
        warn!("submodularity check failed: {violation:?}");
    }
    Ok(())
}

/// prints the minimum cut (+1 -> undoes index shift)
fn print_solution(min: &Minimum) {
    let shift = |block: &[usize]| block.iter().map(|v| (v + 1).to_string()).collect::<Vec<_>>().join(" ");
    println!("SOLUTION:\nvalue = {}\nS = {}\nT = {}",
             min.value, shift(&min.partition.first), shift(&min.partition.second));
}
