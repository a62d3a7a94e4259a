//! docsym: inspect JSDoc symbol dumps and render doc-comment text as HTML.
//!
//! - `docsym render [FILE]` converts doc text (file or stdin) to an HTML fragment.
//! - `docsym symbols dumps/*.json` prints resolved names, types and flags per symbol.
//! - `docsym get dump.json Foo#bar --field meta.code.name` looks a symbol up by name.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use docsym::config::{self, Config};
use docsym::markup::{self, ParseOptions};
use docsym::model::Symbol;
use docsym::symbol;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "docsym",
    version,
    about = "Inspect JSDoc symbol metadata and convert doc-comment text to HTML"
)]
struct Cli {
    /// Configuration file. Defaults to the nearest docsym.toml.
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert doc-comment text to an HTML fragment
    Render {
        /// Input file. If omitted, reads from stdin.
        file: Option<PathBuf>,

        /// Leave single-paragraph text unwrapped
        #[arg(long)]
        keep_if_single: bool,

        /// Target attribute for generated links (e.g. _blank)
        #[arg(long)]
        target: Option<String>,
    },

    /// Summarize every symbol in one or more JSON dumps
    Symbols {
        /// Input files, directories or glob patterns. If omitted, reads from stdin.
        files: Vec<String>,

        /// Filter symbols by flag. Prefix with ! to exclude.
        /// Can be specified multiple times. E.g. --filter method --filter '!private'
        #[arg(long)]
        filter: Vec<String>,

        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },

    /// Look up a symbol by name, long name or resolved long name
    Get {
        /// JSON dump to search ("-" for stdin)
        file: PathBuf,

        /// Name to look up, e.g. Foo#bar
        name: String,

        /// Print only this dotted field of the symbol, e.g. meta.code.name
        #[arg(long)]
        field: Option<String>,

        /// Single-line JSON output
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Render {
            file,
            keep_if_single,
            target,
        } => {
            let options = parse_options(&config, keep_if_single, target);
            render_mode(file.as_deref(), &options)
        }
        Command::Symbols {
            files,
            filter,
            compact,
        } => symbols_mode(&files, &filter, &config, compact),
        Command::Get {
            file,
            name,
            field,
            compact,
        } => get_mode(&file, &name, field.as_deref(), &config, compact),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("docsym=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("docsym=warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

/// Explicit --config, else the nearest docsym.toml, else defaults.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path)
            .with_context(|| format!("failed to load config: {}", path.display()));
    }
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    match config::find_config(&cwd) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using config");
            Config::load(&path)
                .with_context(|| format!("failed to load config: {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

/// Config defaults overridden by command-line flags.
fn parse_options(config: &Config, keep_if_single: bool, target: Option<String>) -> ParseOptions {
    ParseOptions {
        keep_if_single: keep_if_single || config.parse.keep_if_single,
        target: target.or_else(|| config.parse.target.clone()),
    }
}

fn render_mode(file: Option<&Path>, options: &ParseOptions) -> Result<()> {
    let input = match file {
        Some(path) => read_input(path)?,
        None => read_stdin()?,
    };
    println!("{}", markup::parse(markup::trim_new_lines(&input), options));
    Ok(())
}

fn symbols_mode(files: &[String], filters: &[String], config: &Config, compact: bool) -> Result<()> {
    let forest = if files.is_empty() {
        docsym::load_symbols(&read_stdin()?).context("failed to parse symbols from stdin")?
    } else {
        let mut forest = Vec::new();
        for path in expand_inputs(files)? {
            let content = read_input(&path)?;
            match docsym::load_symbols(&content) {
                Ok(symbols) => forest.extend(symbols),
                Err(e) => tracing::warn!("skipping {}: {}", path.display(), e),
            }
        }
        forest
    };

    let mut summaries = Vec::new();
    collect_summaries(&forest, &config.parse, &mut summaries);
    summaries.retain(|summary| matches_filters(&summary.flags, filters));

    print_json(&summaries, config.output.pretty && !compact)
}

fn get_mode(
    file: &Path,
    name: &str,
    field: Option<&str>,
    config: &Config,
    compact: bool,
) -> Result<()> {
    let content = if file == Path::new("-") {
        read_stdin()?
    } else {
        read_input(file)?
    };
    let forest = docsym::load_symbols(&content)
        .with_context(|| format!("failed to parse symbols from {}", file.display()))?;

    let Some(found) = symbol::get_symbol_by_name(&forest, name) else {
        bail!("symbol not found: {}", name);
    };

    let pretty = config.output.pretty && !compact;
    match field {
        Some(path) => match found.notate(path) {
            Some(value) => print_json(&value, pretty),
            None => bail!("field not found on {}: {}", name, path),
        },
        None => print_json(found, pretty),
    }
}

/// Resolved view of one symbol, as printed by `docsym symbols`.
#[derive(Debug, Serialize)]
struct SymbolSummary {
    name: String,
    longname: String,
    codename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    types: String,
    returns: String,
    access: String,
    flags: Vec<&'static str>,
    keywords: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl SymbolSummary {
    fn new(sym: &Symbol, options: &ParseOptions) -> Self {
        let description = [&sym.classdesc, &sym.description]
            .into_iter()
            .flatten()
            .find(|d| !d.trim().is_empty())
            .map(|d| markup::parse(d, options));
        Self {
            name: symbol::get_name(sym),
            longname: symbol::get_long_name(sym),
            codename: symbol::get_code_name(sym),
            kind: sym.kind.as_ref().map(|k| k.as_str().to_string()),
            types: symbol::get_types(sym),
            returns: symbol::get_return_types(sym),
            access: sym
                .access
                .as_ref()
                .map_or("public", |a| a.as_str())
                .to_string(),
            flags: flags(sym),
            keywords: symbol::get_keywords(sym),
            description,
        }
    }
}

/// Depth-first, parents before their `$members`.
fn collect_summaries(symbols: &[Symbol], options: &ParseOptions, out: &mut Vec<SymbolSummary>) {
    for sym in symbols {
        out.push(SymbolSummary::new(sym, options));
        collect_summaries(&sym.members, options, out);
    }
}

/// Names of every classifier that holds for the symbol.
fn flags(sym: &Symbol) -> Vec<&'static str> {
    let checks: [(&'static str, fn(&Symbol) -> bool); 20] = [
        ("constructor", symbol::is_constructor),
        ("class", symbol::is_class),
        ("method", symbol::is_method),
        ("property", symbol::is_property),
        ("typedef", symbol::is_type_def),
        ("namespace", symbol::is_namespace),
        ("module", symbol::is_module),
        ("constant", symbol::is_constant),
        ("event", symbol::is_event),
        ("global", symbol::is_global),
        ("static", symbol::is_static),
        ("instance", symbol::is_instance_member),
        ("inner", symbol::is_inner),
        ("enum", symbol::is_enum),
        ("readonly", symbol::is_read_only),
        ("deprecated", symbol::is_deprecated),
        ("undocumented", symbol::is_undocumented),
        ("public", symbol::is_public),
        ("private", symbol::is_private),
        ("protected", symbol::is_protected),
    ];
    checks
        .iter()
        .filter(|(_, check)| check(sym))
        .map(|(flag, _)| *flag)
        .collect()
}

/// Every inclusion filter must be present and no `!`-prefixed one may be.
fn matches_filters(flags: &[&str], filters: &[String]) -> bool {
    filters.iter().all(|filter| match filter.strip_prefix('!') {
        Some(excluded) => !flags.contains(&excluded),
        None => flags.contains(&filter.as_str()),
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("failed to serialize output")?;
    println!("{}", out);
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    Ok(input)
}

/// Extension of symbol dump files.
const DUMP_EXTENSION: &str = "json";

/// Resolve CLI inputs to symbol dump paths. Files are taken as given,
/// directories are searched recursively for `*.json`, and anything else is
/// treated as a glob pattern.
fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        let path = Path::new(input);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        let pattern = if path.is_dir() {
            format!(
                "{}/**/*.{}",
                glob::Pattern::escape(input.trim_end_matches('/')),
                DUMP_EXTENSION
            )
        } else {
            input.clone()
        };

        let before = files.len();
        let entries =
            glob::glob(&pattern).with_context(|| format!("invalid glob pattern: {}", input))?;
        for entry in entries {
            match entry {
                Ok(p) if p.is_file() => files.push(p),
                Ok(_) => {}
                Err(e) => tracing::warn!("cannot read {}: {}", e.path().display(), e.error()),
            }
        }
        if files.len() == before {
            tracing::warn!("no symbol dumps matched: {}", input);
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}
