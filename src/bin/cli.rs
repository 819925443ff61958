use clap::{Arg, ArgMatches, Command};

use prefix_registry::{RegistryConfig, RegistryManager};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let matches = Command::new("prefix-registry")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Query a prefix registry snapshot from the command line")
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .value_name("DIR")
                .help("Directory holding registry.json, metaregistry.json, collections.json")
                .default_value("."),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail the load on bad patterns or provider templates")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("get")
                .about("Look up a canonical record by prefix or synonym")
                .arg(Arg::new("prefix").required(true)),
        )
        .subcommand(
            Command::new("reference")
                .about("Validate an identifier and print its provider URLs")
                .arg(Arg::new("prefix").required(true))
                .arg(Arg::new("identifier").required(true)),
        )
        .subcommand(
            Command::new("map")
                .about("Dump canonical prefix -> external local id for one registry")
                .arg(Arg::new("metaprefix").required(true)),
        )
        .subcommand(
            Command::new("overlap")
                .about("Compute the overlap between two external registries")
                .arg(Arg::new("source").required(true))
                .arg(Arg::new("target").required(true)),
        )
        .subcommand(
            Command::new("search")
                .about("Ranked prefix search")
                .arg(Arg::new("query").required(true)),
        )
        .subcommand(
            Command::new("autocomplete")
                .about("Ranked (prefix, name) suggestions")
                .arg(Arg::new("query").required(true)),
        )
        .get_matches();

    let root: &String = matches.get_one("root").ok_or("missing --root")?;
    let mut config = RegistryConfig::from_dir(root);
    if matches.get_flag("strict") {
        config = config.strict();
    }
    let manager = RegistryManager::load(config)?;

    for warning in manager.snapshot().warnings() {
        eprintln!("warning: {}: {}", warning.prefix, warning.message);
    }

    run(&manager, &matches)
}

fn run(manager: &RegistryManager, matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("get", sub)) => {
            let prefix: &String = sub.get_one("prefix").ok_or("missing prefix")?;
            let resource = manager
                .get_resource(prefix)
                .ok_or_else(|| format!("prefix not found: {prefix}"))?;
            println!("{}", serde_json::to_string_pretty(resource)?);
        }
        Some(("reference", sub)) => {
            let prefix: &String = sub.get_one("prefix").ok_or("missing prefix")?;
            let identifier: &String = sub.get_one("identifier").ok_or("missing identifier")?;
            let providers = manager.get_providers(prefix, identifier)?;
            println!("{}", serde_json::to_string_pretty(&providers)?);
        }
        Some(("map", sub)) => {
            let metaprefix: &String = sub.get_one("metaprefix").ok_or("missing metaprefix")?;
            let map = manager.get_registry_map(metaprefix)?;
            println!("{}", serde_json::to_string_pretty(map)?);
        }
        Some(("overlap", sub)) => {
            let source: &String = sub.get_one("source").ok_or("missing source")?;
            let target: &String = sub.get_one("target").ok_or("missing target")?;
            let result = manager.overlap(source, target)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Some(("search", sub)) => {
            let query: &String = sub.get_one("query").ok_or("missing query")?;
            println!("{}", serde_json::to_string_pretty(&manager.search(query))?);
        }
        Some(("autocomplete", sub)) => {
            let query: &String = sub.get_one("query").ok_or("missing query")?;
            println!(
                "{}",
                serde_json::to_string_pretty(&manager.autocomplete(query))?
            );
        }
        _ => unreachable!("subcommand_required"),
    }
    Ok(())
}
