use anyhow::Result;
use running_indicator::{cli, logger};
use tracing::{error, info};

fn main() -> Result<()> {
    // Logging is best-effort; a missing home directory shouldn't block output
    let _guard = logger::init().ok();
    info!(args = ?std::env::args().collect::<Vec<_>>(), "running-indicator start");

    let result = cli::run();
    if let Err(ref e) = result {
        error!(error = %e, "running-indicator failed");
    }
    result
}
