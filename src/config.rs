use crate::SortPolicy;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// One combined table
    #[default]
    Single,

    /// Separate free and toll tables
    Split,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub data: PathBuf,

    pub readme: PathBuf,

    pub template: PathBuf,

    pub layout: Layout,

    pub sort: SortPolicy,

    // Abort on the first malformed station instead of skipping it.
    pub strict: bool,

    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: PathBuf::from("list.json"),
            readme: PathBuf::from("README.MD"),
            template: PathBuf::from("index.html"),
            layout: Layout::default(),
            sort: SortPolicy::default(),
            strict: false,
            dry_run: false,
        }
    }
}

impl Config {
    // Absolute paths are kept.
    pub fn within(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.data = dir.join(&self.data);
        self.readme = dir.join(&self.readme);
        self.template = dir.join(&self.template);
        self
    }
}
