//! Tournament CLI
//!
//! Run matches between Isolation agents and report win rates.

use anyhow::{bail, Context, Result};
use search_engine::SearchConfig;
use std::env;
use std::path::PathBuf;
use tournament::{create_agent, MatchConfig, MatchRunner, TournamentResults};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Isolation Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <agent1> <agent2> [options]");
    println!("  tournament roundrobin <agent>... [options]");
    println!();
    println!("Options:");
    println!("  --games N       games per match (default 10)");
    println!("  --time MS       time limit per move in ms (default 150)");
    println!("  --size N        board edge length (default 7)");
    println!("  --config FILE   TOML search config applied to search agents");
    println!("  --out FILE      save results as JSON");
    println!();
    println!("Agents:");
    println!("  random            - uniformly random legal moves");
    println!("  minimax[:D]       - fixed-depth minimax (depth D, else search_depth from --config)");
    println!("  alphabeta[:D]     - fixed-depth alpha-beta");
    println!("  id_minimax[:D]    - iterative deepening minimax, capped at depth D if given");
    println!("  id_alphabeta[:D]  - iterative deepening alpha-beta");
    println!();
    println!("Examples:");
    println!("  tournament match id_alphabeta random --games 20");
    println!("  tournament roundrobin id_alphabeta alphabeta:3 minimax:2 --time 300");
}

struct Options {
    agents: Vec<String>,
    config: MatchConfig,
    search: SearchConfig,
    out: Option<PathBuf>,
}

fn parse_options(args: &[String]) -> Result<Options> {
    let mut agents = Vec::new();
    let mut config = MatchConfig::default();
    let mut search = SearchConfig::default();
    let mut out = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let flag = arg.as_str();
        let mut value = || {
            iter.next()
                .cloned()
                .with_context(|| format!("{flag} requires a value"))
        };
        match flag {
            "--games" | "-g" => config.num_games = value()?.parse().context("--games")?,
            "--time" | "-t" => config.time_limit_ms = value()?.parse().context("--time")?,
            "--size" | "-s" => config.board_size = value()?.parse().context("--size")?,
            "--config" | "-c" => {
                let path = value()?;
                search = SearchConfig::load(&path)
                    .with_context(|| format!("loading search config {path}"))?;
            }
            "--out" | "-o" => out = Some(PathBuf::from(value()?)),
            flag if flag.starts_with('-') => bail!("unknown option {flag}"),
            name => agents.push(name.to_string()),
        }
    }

    Ok(Options {
        agents,
        config,
        search,
        out,
    })
}

fn run(agents: &[String], options: &Options, name: &str) -> Result<TournamentResults> {
    let runner = MatchRunner::new(options.config.clone());
    let mut results = TournamentResults::new(name, agents.to_vec(), runner.config().clone());

    for (i, first) in agents.iter().enumerate() {
        for second in &agents[i + 1..] {
            println!("=== Match: {} vs {} ===", first, second);
            let mut agent1 = create_agent(first, &options.search)?;
            let mut agent2 = create_agent(second, &options.search)?;

            let result = runner.run_match(agent1.as_mut(), agent2.as_mut())?;
            println!(
                "{}: {} wins, {} losses ({} on time), score {:.1}%",
                first,
                result.wins,
                result.losses,
                result.timeouts,
                result.score() * 100.0
            );
            results.add_match(first, second, result);
        }
    }

    Ok(results)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };

    let options = parse_options(&args[1..])?;
    let results = match command.as_str() {
        "match" => {
            if options.agents.len() != 2 {
                print_usage();
                bail!("match requires exactly two agents");
            }
            run(&options.agents, &options, "match")?
        }
        "roundrobin" | "rr" => {
            if options.agents.len() < 2 {
                print_usage();
                bail!("roundrobin requires at least two agents");
            }
            run(&options.agents, &options, "round robin")?
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return Ok(());
        }
        other => {
            print_usage();
            bail!("unknown command: {other}");
        }
    };

    println!();
    results.print_report();

    if let Some(path) = &options.out {
        results
            .save(path)
            .with_context(|| format!("saving results to {}", path.display()))?;
        println!("Results saved to {}", path.display());
    }

    Ok(())
}
