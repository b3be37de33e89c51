//! Command-line interface for foam-outline
//! Prints the outline of an OpenFOAM dictionary in one of the registered formats.
//!
//! Usage:
//!   foam-outline `<path>` [--format `<format>`] [--config `<file>`]   - Print the outline of a file
//!   foam-outline --list-formats                                     - List all output formats
//!
//! Settings are layered: built-in defaults, then `--config <file>` (or `./foam.toml` when
//! present), then the command-line flags.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use foam_config::{FoamConfig, Loader, PROJECT_CONFIG_FILE};
use foam_parser::foam::formats::{FormatRegistry, OutputFormat, TreevizFormatter};
use foam_parser::foam::loader::DocumentLoader;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("foam-outline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print the outline of an OpenFOAM dictionary")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the dictionary file")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: treeviz, json, yaml or tag (default: from config, treeviz)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Config file layered over the defaults (default: ./foam.toml if present)"),
        )
        .arg(
            Arg::new("lookahead")
                .long("lookahead")
                .help("Lines to peek past a bare identifier for its opening brace")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("line-numbers")
                .long("line-numbers")
                .short('n')
                .help("Prefix treeviz lines with their line number")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("skip-block-comments")
                .long("skip-block-comments")
                .help("Ignore everything inside multi-line /* */ comments")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config =
        load_config(&matches).unwrap_or_else(|e| fail(format!("Configuration error: {}", e)));
    let path = matches
        .get_one::<String>("path")
        .unwrap_or_else(|| fail("A dictionary path is required".to_string()));
    handle_outline_command(path, &config);
}

/// Layer the config sources, then apply the flags as overrides
fn load_config(matches: &ArgMatches) -> Result<FoamConfig, foam_config::ConfigError> {
    let mut loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(PROJECT_CONFIG_FILE),
    };

    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(lookahead) = matches.get_one::<u32>("lookahead") {
        loader = loader.set_override("outline.brace_lookahead", i64::from(*lookahead))?;
    }
    if matches.get_flag("line-numbers") {
        loader = loader.set_override("output.show_line_numbers", true)?;
    }
    if matches.get_flag("skip-block-comments") {
        loader = loader.set_override("outline.skip_block_comments", true)?;
    }

    loader.build()
}

/// Handle the outline command
fn handle_outline_command(path: &str, config: &FoamConfig) {
    let format: OutputFormat = config
        .output
        .format
        .parse()
        .unwrap_or_else(|e| fail(format!("{}", e)));

    let loader = DocumentLoader::from_path(path)
        .unwrap_or_else(|e| fail(format!("{}", e)))
        .with_options(config.outline.parse_options());
    let outline = loader.outline();
    tracing::debug!(path, roots = outline.len(), %format, "built outline");

    let mut registry = FormatRegistry::with_defaults();
    if config.output.show_line_numbers {
        registry.register(TreevizFormatter::with_line_numbers());
    }

    let output = registry
        .serialize(&outline, format.name())
        .unwrap_or_else(|e| fail(format!("Error formatting outline: {}", e)));
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        println!("  {}", name);
        if let Some(formatter) = registry.get(&name) {
            if !formatter.description().is_empty() {
                println!("    {}", formatter.description());
            }
        }
        println!();
    }
}

fn fail(message: String) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}
