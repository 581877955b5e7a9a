use clap::Parser;
use stationlist::{Config, Generator, Layout, SortPolicy};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Regenerates the station tables in the README and the HTML page built from it.
#[derive(Parser, Debug)]
#[command(name = "stationlist", version, about)]
struct Cli {
    /// JSON file with a top-level `stations` array
    #[arg(long, default_value = "list.json")]
    data: PathBuf,

    /// README containing the table markers
    #[arg(long, default_value = "README.MD")]
    readme: PathBuf,

    /// HTML template containing the README markers
    #[arg(long, default_value = "index.html")]
    template: PathBuf,

    #[arg(long, value_enum, default_value_t = Layout::Single)]
    layout: Layout,

    #[arg(long, value_enum, default_value_t = SortPolicy::Category)]
    sort: SortPolicy,

    /// Fail on the first invalid station instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Run every stage without writing any file
    #[arg(long)]
    dry_run: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            data: cli.data,
            readme: cli.readme,
            template: cli.template,
            layout: cli.layout,
            sort: cli.sort,
            strict: cli.strict,
            dry_run: cli.dry_run,
        }
    }
}

fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stationlist=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let generator = Generator::new(Config::from(Cli::parse()));
    tracing::info!(layout = ?generator.config().layout, sort = ?generator.config().sort, "Building");

    // NOTE: Errors are already logged by the generator together with the last completed stage.
    match generator.generate() {
        Ok(report) => {
            tracing::info!(
                stations = report.stations,
                quarantined = report.quarantined,
                readme_bytes = report.readme_bytes,
                html_bytes = report.html_bytes,
                "Build complete"
            );
            ExitCode::SUCCESS
        }
        Err(_) => ExitCode::FAILURE,
    }
}
