use flexi_logger::{opt_format, Age, Cleanup, Criterion, Duplicate, Logger, Naming};
use std::path::PathBuf;

#[cfg(debug_assertions)]
const DEFAULT_SPEC: &str = "trayctl=debug";

#[cfg(not(debug_assertions))]
const DEFAULT_SPEC: &str = "trayctl=info";

pub fn setup() -> Result<(), Box<dyn std::error::Error>> {
    #[allow(unused_mut)]
    let mut path: PathBuf = ["./log"].iter().collect();

    #[cfg(not(debug_assertions))]
    {
        path = dirs::config_dir().expect("Failed to get config directory");

        path.push("trayctl");
        path.push("log");
    }

    #[allow(unused_mut)]
    let mut logger = Logger::with_env_or_str(DEFAULT_SPEC)
        .duplicate_to_stderr(Duplicate::All)
        .directory(path)
        .format(opt_format)
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(6),
        );

    #[cfg(not(debug_assertions))]
    {
        logger = logger.log_to_file();
    }

    logger.start()?;

    Ok(())
}
