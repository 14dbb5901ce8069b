use clap::{Parser, Subcommand};
use simple_index::{generate, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simple-index")]
#[command(about = "Static PEP 503 package index generator")]
#[command(long_about = "\
Static PEP 503 package index generator

Your filesystem is the data source. Every .yaml/.yml file under the input
directory is a stream of artifact records:

  package: my-package            # PEP 503 identifier (or requiresPython-style
  href: https://example.com/...  # camelCase keys — both spellings work)
  sha256: 0b2e...                # optional, emitted as a #sha256= fragment
  requires_python: \">=3.8\"       # optional, emitted as data-requires-python

The output is a static index tree:

  public/
  ├── index.html                 # links every package directory
  └── my-package/                # normalized package name
      └── index.html             # one anchor per artifact, sorted by href

Point pip at it with --index-url file:///path/to/public/ or serve it from
any static file host.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the index tree from a metadata directory
    Build {
        /// Directory scanned recursively for .yaml/.yml metadata files
        #[arg(long)]
        input_dir: PathBuf,
        /// Directory the index tree is written to (created if absent)
        #[arg(long)]
        output_dir: PathBuf,
    },
    /// Validate metadata without writing anything
    Check {
        /// Directory scanned recursively for .yaml/.yml metadata files
        #[arg(long)]
        input_dir: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            input_dir,
            output_dir,
        } => {
            generate::generate(&input_dir, &output_dir)?;
            println!("==> Index written to {}", output_dir.display());
        }
        Command::Check { input_dir } => {
            let packages = scan::find_packages(&input_dir)?;
            let total: usize = packages.values().map(Vec::len).sum();
            for (package, artifacts) in &packages {
                println!("{package}: {} artifact(s)", artifacts.len());
            }
            println!(
                "==> Metadata is valid: {} package(s), {total} artifact(s)",
                packages.len()
            );
        }
    }

    Ok(())
}
