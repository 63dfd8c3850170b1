use clap::Parser;

use perm_census::census::{Census, Frontier};
use perm_census::config::CensusConfig;
use perm_census::generator::GeneratorSet;
use perm_census::partition::{Layout, Partition};

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Block lengths, comma-separated (e.g. `3,2,1`, or `6` for a single cycle).
    #[arg(value_name = "BLOCKS", default_value = "3,2,1")]
    partition: Partition,

    /// Generator set: `adjacent` or `pairs`.
    #[arg(short, long, value_name = "SET", default_value = "adjacent")]
    generators: GeneratorSet,

    /// Store blocks as fixed-length runs instead of separator-delimited.
    #[arg(long)]
    implicit: bool,

    /// Starting label order, comma-separated (default: identity).
    #[arg(long, value_name = "LABELS", value_delimiter = ',')]
    start: Option<Vec<u32>>,

    /// Do not print each newly discovered state.
    #[arg(short, long)]
    quiet: bool,

    /// Keep the previous level in memory instead of rescanning the trie.
    #[arg(long)]
    tracked: bool,

    /// Maximum number of trie nodes.
    #[arg(long, value_name = "INT")]
    node_limit: Option<usize>,

    /// Print the states of every level, deepest first.
    #[arg(long)]
    levels: bool,

    /// Dump the trie structure.
    #[arg(long)]
    dump_trie: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();
    println!("args = {:?}", args);

    let layout = if args.implicit { Layout::Implicit } else { Layout::Separated };
    let mut config = CensusConfig::new(args.partition.with_layout(layout), args.generators)
        .with_print_states(!args.quiet)
        .with_frontier(if args.tracked { Frontier::Tracked } else { Frontier::Rescan });
    config.start = args.start;
    config.node_limit = args.node_limit;

    let mut census = Census::new(config)?;
    println!("census = {:?}", census);

    let report = census.run()?;

    if args.levels {
        for level in (0..=census.current_level()).rev() {
            let states: Vec<String> = census.states_at(level).iter().map(|s| s.to_string()).collect();
            println!("Level {}:", level);
            println!("{}", states.join(" "));
        }
    }

    if args.dump_trie {
        print!("{}", census.trie().to_tree_string());
    }

    println!("{}", report);
    println!("census = {:?}", census);

    let time_total = time_total.elapsed();
    println!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
