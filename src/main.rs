//! CLI entry point for arbor

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use arbor::{
    Grouping, Order, OutputConfig, Style, TreeError, WalkerConfig, build_tree, print_json, render,
};
use clap::{Parser, ValueEnum};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum StyleArg {
    /// Box-drawing connectors
    #[default]
    Tree,
    /// Four spaces per level
    Indent,
    /// Directory names with a trailing slash, files before subdirectories
    Outline,
}

impl From<StyleArg> for Style {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Tree => Style::Tree,
            StyleArg::Indent => Style::Indent,
            StyleArg::Outline => Style::Outline,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OrderArg {
    /// Sort entries by name
    #[default]
    Sorted,
    /// Keep the order reported by the filesystem
    Native,
}

impl From<OrderArg> for Order {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Sorted => Order::Sorted,
            OrderArg::Native => Order::Native,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum GroupArg {
    /// Files and directories interleaved
    #[default]
    Mixed,
    FilesFirst,
    DirsFirst,
}

impl From<GroupArg> for Grouping {
    fn from(arg: GroupArg) -> Self {
        match arg {
            GroupArg::Mixed => Grouping::Mixed,
            GroupArg::FilesFirst => Grouping::FilesFirst,
            GroupArg::DirsFirst => Grouping::DirsFirst,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(about = "Print a directory tree")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Line layout
    #[arg(short, long, value_enum, default_value = "tree")]
    style: StyleArg,

    /// Order of entries within a directory
    #[arg(long, value_enum, default_value = "sorted")]
    order: OrderArg,

    /// Exclude entries with exactly this name (can be used multiple times)
    #[arg(short = 'I', long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,

    /// Exclude entries whose name matches a glob pattern (can be used multiple times)
    #[arg(short = 'P', long = "pattern", value_name = "GLOB")]
    pattern: Vec<String>,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level", value_parser = clap::value_parser!(u64).range(1..))]
    level: Option<u64>,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Group files and directories (outline style always lists files first)
    #[arg(long = "group", value_enum, default_value = "mixed")]
    group: GroupArg,

    /// Descend into symlinked directories
    #[arg(short = 'l', long = "follow-links")]
    follow_links: bool,

    /// Print the root path before the tree
    #[arg(short = 'r', long = "root")]
    root: bool,

    /// Print directory and file counts after the tree
    #[arg(long = "summary")]
    summary: bool,

    /// Output in JSON format
    #[arg(long = "json", conflicts_with_all = ["style", "root", "summary", "color"])]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn run(args: Args) -> Result<(), TreeError> {
    let walker_config = WalkerConfig {
        exclude: args.exclude,
        exclude_patterns: args.pattern,
        order: args.order.into(),
        grouping: args.group.into(),
        max_depth: args.level.map(|l| l as usize),
        dirs_only: args.dirs_only,
        follow_links: args.follow_links,
    };

    if args.json {
        let tree = build_tree(&args.path, walker_config)?;
        return print_json(&tree);
    }

    let output_config = OutputConfig {
        style: args.style.into(),
        use_color: should_use_color(args.color),
        show_root: args.root,
        summary: args.summary,
    };
    render(&args.path, walker_config, output_config)?;
    Ok(())
}

fn main() {
    arbor::logging::init();
    let args = Args::parse();
    tracing::debug!(?args, "parsed arguments");

    if let Err(e) = run(args) {
        eprintln!("arbor: {}", e);
        process::exit(1);
    }
}
