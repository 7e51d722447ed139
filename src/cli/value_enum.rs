use clap::ValueEnum;
use pdirfile_core::{
    NameMatcher, SortKey,
    matchers::{ContainsMatcher, GlobMatcher, RegexMatcher, SuffixMatcher},
};

use crate::presentation::OutputFormat;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    #[default]
    Table,
    Json,
    Jsonl,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Jsonl => OutputFormat::Jsonl,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliSortKey {
    #[default]
    Name,
    Path,
    #[value(alias = "mtime")]
    Time,
}

impl From<CliSortKey> for SortKey {
    fn from(value: CliSortKey) -> Self {
        match value {
            CliSortKey::Name => SortKey::Name,
            CliSortKey::Path => SortKey::Path,
            CliSortKey::Time => SortKey::Time,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliMatcher {
    #[default]
    Suffix,
    Contains,
    Glob,
    Regex,
}

impl CliMatcher {
    pub fn build(self) -> Box<dyn NameMatcher> {
        match self {
            Self::Suffix => Box::new(SuffixMatcher),
            Self::Contains => Box::new(ContainsMatcher),
            Self::Glob => Box::new(GlobMatcher::new()),
            Self::Regex => Box::new(RegexMatcher::new()),
        }
    }
}
