//! CLI for the SDP download portal.

mod commands;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use sdp_core::catalog::{self, DownloadRecord};
use sdp_core::config::{self, SdpConfig};
use sdp_core::matcher::QueryKind;
use std::path::{Path, PathBuf};

use commands::{run_convert, run_link, run_list, run_show};

/// Top-level CLI for the SDP download portal.
#[derive(Debug, Parser)]
#[command(name = "sdp")]
#[command(about = "SDP: static download portal toolkit", long_about = None)]
pub struct Cli {
    /// Path to the catalog JSON table (overrides the configured default).
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Record selector: exactly one of `--title` or `--file`.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct QueryArgs {
    /// Look the record up by its display title.
    #[arg(long)]
    pub title: Option<String>,

    /// Look the record up by its filename.
    #[arg(long)]
    pub file: Option<String>,
}

impl QueryArgs {
    pub fn query(&self) -> (&str, QueryKind) {
        match (&self.title, &self.file) {
            (Some(t), _) => (t, QueryKind::Title),
            (_, Some(f)) => (f, QueryKind::File),
            // clap's arg group guarantees one of the two is present.
            (None, None) => unreachable!("clap enforces the query group"),
        }
    }
}

/// Which viewer pane `show --raw` emits verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RawPane {
    Py,
    Yaml,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List the catalog as categorized cards, optionally filtered.
    List {
        /// Case-insensitive substring filter over title, filename and description.
        #[arg(long, value_name = "QUERY")]
        filter: Option<String>,
    },

    /// Show one record's viewer page (source and config panes).
    Show {
        #[command(flatten)]
        query: QueryArgs,

        /// Emit just the selected embedded pane, verbatim (pipe it anywhere).
        #[arg(long, value_enum, value_name = "PANE")]
        raw: Option<RawPane>,
    },

    /// Print the download href for one record.
    Link {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Convert a two-port .s2p file into S11/S21 dB tables.
    Convert {
        /// Path to the .s2p input file.
        path: PathBuf,

        /// Directory for the output .dat files (default: next to the input).
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::List { filter } => {
                let records = load_catalog(cli.catalog.as_deref(), &cfg)?;
                run_list(&records, &cfg, filter.as_deref())
            }
            CliCommand::Show { query, raw } => {
                let records = load_catalog(cli.catalog.as_deref(), &cfg)?;
                let (q, kind) = query.query();
                run_show(&records, q, kind, raw)
            }
            CliCommand::Link { query } => {
                let records = load_catalog(cli.catalog.as_deref(), &cfg)?;
                let (q, kind) = query.query();
                run_link(&records, &cfg, q, kind)
            }
            CliCommand::Convert { path, out_dir } => {
                run_convert(&cfg, &path, out_dir.as_deref())
            }
        }
    }
}

/// Resolves the catalog path (flag wins over config) and loads the table.
fn load_catalog(flag: Option<&Path>, cfg: &SdpConfig) -> Result<Vec<DownloadRecord>> {
    let path = match flag.or(cfg.catalog_path.as_deref()) {
        Some(p) => p,
        None => bail!("no catalog path given; pass --catalog or set catalog_path in config.toml"),
    };
    catalog::load_from_path(path)
}
