mod config;
pub use config::{Config, Layout};
mod error;
pub use error::Error;
mod generate;
pub use generate::{Report, Stage};
mod html;
pub use html::render_html;
mod load_stations;
pub use load_stations::Dataset;
pub mod marker;
pub use marker::MarkerPair;
mod station;
pub use station::{Category, Station};
pub mod table;
pub use table::SortPolicy;
mod timestamp;
pub use timestamp::Timestamp;
use std::fs;
use std::path::Path;

pub struct Generator {
    config: Config,
}

impl Generator {
    pub fn new(config: Config) -> Generator {
        Generator { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn read(&self, path: &Path) -> Result<String, Error> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(text),
            Err(err) => Err(Error::IoError(format!(
                "Could not read \"{}\" ({}).",
                path.display(),
                err
            ))),
        }
    }

    // NOTE: Overwrites in place, there is no backup and no atomic rename.
    fn write(&self, path: &Path, contents: &str) -> Result<(), Error> {
        if self.config.dry_run {
            tracing::info!(path = %path.display(), bytes = contents.len(), "Dry run, not writing");
            return Ok(());
        }

        match fs::write(path, contents) {
            Ok(()) => Ok(()),
            Err(err) => Err(Error::IoError(format!(
                "Could not write \"{}\" ({}).",
                path.display(),
                err
            ))),
        }
    }
}
