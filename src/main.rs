use clap::{Arg, Command};
use log::LevelFilter;
use phishguard::analyzer::UrlAnalyzer;
use phishguard::config::Config;
use phishguard::report::render_text;
use std::process;

fn main() {
    let matches = Command::new("phishguard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Heuristic URL risk reports with simulated registry data")
        .long_about(
            "Evaluates URLs against seven syntax heuristics (character set, \
             subdomain count, IP-literal host, HTTPS, simulated domain age, \
             free-hosting tokens) and prints a risk report. All WHOIS/DNS/TLS \
             detail is simulated; no network requests are made.",
        )
        .arg(
            Arg::new("urls")
                .value_name("URL")
                .help("One or more URLs to analyze (scheme optional)")
                .num_args(1..)
                .required_unless_present("generate-config"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("generate-config")
                .long("generate-config")
                .value_name("FILE")
                .help("Generate a default configuration file")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("N")
                .help("Seed the simulated registry for reproducible reports")
                .value_parser(clap::value_parser!(u64))
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("json")
                .short('j')
                .long("json")
                .help("Emit reports as JSON instead of text")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Some(generate_path) = matches.get_one::<String>("generate-config") {
        match Config::default().to_file(generate_path) {
            Ok(()) => {
                println!("Generated default configuration at {}", generate_path);
                return;
            }
            Err(e) => {
                eprintln!("Failed to generate configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let config = match matches.get_one::<String>("config") {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load configuration from {}: {}", path, e);
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    let mut analyzer = match matches.get_one::<u64>("seed") {
        Some(seed) => UrlAnalyzer::seeded(*seed, config),
        None => UrlAnalyzer::new(config),
    };

    let urls: Vec<&String> = matches
        .get_many::<String>("urls")
        .map(|values| values.collect())
        .unwrap_or_default();

    let mut reports = Vec::new();
    for url in urls {
        log::debug!("analyzing {}", url);
        reports.push(analyzer.analyze(url));
    }

    if matches.get_flag("json") {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize reports: {}", e);
                process::exit(1);
            }
        }
    } else {
        for report in &reports {
            print!("{}", render_text(report));
            println!();
        }
    }
}
