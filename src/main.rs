use clap::{Parser, Subcommand};
use dir_index::config::{self, IndexConfig};
use dir_index::types::{OutputFormat, SortPolicy};
use dir_index::{generate, output};
use std::path::PathBuf;

/// Flags shared by every command that scans a directory.
#[derive(clap::Args, Clone)]
struct ScanArgs {
    /// Directory whose subdirectories are indexed
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Ordering of the listed directories (overrides the config file)
    #[arg(long, value_enum)]
    sort: Option<SortPolicy>,

    /// Config file with sort, format and page settings
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Flags for commands that write an artifact.
#[derive(clap::Args, Clone)]
struct BuildArgs {
    #[command(flatten)]
    scan: ScanArgs,

    /// Artifact to write into DIR (overrides the config file)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Parser)]
#[command(name = "dir-index")]
#[command(about = "Generate an index of the subdirectories of a directory")]
#[command(long_about = "\
Generate an index of the subdirectories of a directory

Lists the immediate, non-hidden subdirectories of DIR and writes either
index.html (a page linking to each one) or index.json into DIR.

With the default semver ordering, named directories come first in
alphabetical order, followed by release directories (vMAJOR.MINOR.PATCH)
newest first:

  docs/
  ├── .git/        # hidden, skipped
  ├── api/         # 1
  ├── guide/       # 2
  ├── v1.2.0/      # 4
  ├── v1.10.0/     # 3
  └── index.html   # written here

Run 'dir-index gen-config' to print a documented config file.")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(flatten)]
    build: BuildArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write index.html or index.json into the directory (default)
    Build(BuildArgs),
    /// Print the ordered directory list without writing anything
    List(ScanArgs),
    /// Print a stock config file with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Build(cli.build)) {
        Command::Build(args) => {
            let mut config = resolve_config(&args.scan)?;
            if let Some(format) = args.format {
                config.format = format;
            }
            output::print_scan_header(&args.scan.dir);
            let report = generate::build_index(&args.scan.dir, &config)?;
            output::print_build_output(&report);
        }
        Command::List(args) => {
            let config = resolve_config(&args)?;
            output::eprint_scan_header(&args.dir);
            let entries = generate::ordered_directories(&args.dir, &config)?;
            output::print_list_output(&entries);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Config file (if any) over defaults, then command-line overrides.
fn resolve_config(args: &ScanArgs) -> Result<IndexConfig, config::ConfigError> {
    let mut config = config::load_optional_config(args.config.as_deref())?;
    if let Some(sort) = args.sort {
        config.sort = sort;
    }
    Ok(config)
}
