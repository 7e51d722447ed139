mod args;
mod value_enum;

use std::path::Path;

pub use args::{Args, Command, ListArgs, MkdirArgs, OpenArgs};
use anyhow::{Context, Result, anyhow};
use log::LevelFilter;
use pdirfile_core::{CreateOptions, DirFile, ListOptions, ListerConfig, ListerConfigBuilder};
pub use value_enum::{CliMatcher, CliOutputFormat, CliSortKey};

use crate::presentation;

/// Log level selected by `-v`/`-q`; `None` defers to `PDIRFILE_LOG`.
pub fn level_filter(args: &Args) -> Option<LevelFilter> {
    if args.quiet {
        return Some(LevelFilter::Error);
    }
    match args.verbose {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

fn utf8_path(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| anyhow!("path '{}' is not valid UTF-8", path.display()))
}

/// Translate `list` flags into option bits and lister configuration.
///
/// # Errors
///
/// Returns `Err` when `--growth-increment` is zero.
pub fn list_settings(args: &ListArgs) -> Result<(ListOptions, ListerConfig)> {
    let mut options = ListOptions::empty();
    options.set(ListOptions::DONT_COUNT, args.no_count);
    options.set(ListOptions::NULL_PATTERN_MATCHES, args.null_pattern_matches);

    let mut builder = ListerConfigBuilder::default();
    if let Some(step) = args.growth_increment {
        builder.growth_increment(step);
    }
    let config = builder.build().context("invalid --growth-increment")?;
    Ok((options, config))
}

pub fn create_options(args: &MkdirArgs) -> CreateOptions {
    let mut options = CreateOptions::empty();
    options.set(CreateOptions::RECURSIVE, args.recursive);
    options.set(CreateOptions::ERROR_IF_EXISTS, args.error_if_exists);
    options
}

/// Execute the parsed subcommand against the native backend.
///
/// # Errors
///
/// Returns `Err` when argument conversion or the directory operation fails.
pub fn run(args: &Args) -> Result<()> {
    match &args.command {
        Command::List(list) => run_list(list),
        Command::Mkdir(mkdir) => {
            let path = utf8_path(&mkdir.path)?;
            DirFile::native()
                .create_directory(path, create_options(mkdir))
                .with_context(|| format!("cannot create '{path}'"))
        }
        Command::Open(open) => {
            let path = utf8_path(&open.path)?;
            DirFile::native().open_with(path, open.app.as_deref()).map_err(Into::into)
        }
    }
}

fn run_list(args: &ListArgs) -> Result<()> {
    let dir = utf8_path(&args.dir)?;
    let (options, config) = list_settings(args)?;
    let matcher = args.matcher.build();

    let mut listing = DirFile::native()
        .with_config(config)
        .list_directory(dir, options, args.pattern.as_deref(), Some(matcher.as_ref()))
        .with_context(|| format!("cannot list '{dir}'"))?;
    listing.sort(args.sort.into(), args.reverse);

    presentation::print_listing(&listing, args.format.into())
}
