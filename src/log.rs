use std::path::Path;

use tracing::metadata::LevelFilter;
use tracing_subscriber::prelude::*;

/// Installs the global subscriber. `log` records are forwarded to it.
///
/// Console output is pretty printed at `stdout_level`, a plain copy at INFO
/// goes to a timestamped file in `log_dir` if one was given.
pub fn init(stdout_level: LevelFilter, log_dir: Option<&Path>) {
    let stdout_log = tracing_subscriber::fmt::layer()
        .with_ansi(true)
        .pretty()
        .with_filter(stdout_level);

    let file_log = log_dir.and_then(create_log_file).map(|file| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .with_filter(LevelFilter::INFO)
    });

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(file_log)
        .init();
}

fn create_log_file(dir: &Path) -> Option<std::fs::File> {
    std::fs::create_dir_all(dir).ok()?;
    let file_name = format!("{}.log", chrono::Local::now().format("%Y%m%dT%H%M%S"));
    std::fs::File::create(dir.join(file_name)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_log_keeps_every_target() {
        let dir = std::env::temp_dir().join(format!("scatterfit-log-{}", std::process::id()));
        init(LevelFilter::OFF, Some(&dir));

        log::info!("read 3 points");
        log::info!(target: "sctk::wayland::seat::pointer", "pointer moved");

        let file = std::fs::read_dir(&dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .find(|path| path.extension().map_or(false, |ext| ext == "log"))
            .unwrap();
        let contents = std::fs::read_to_string(file).unwrap();
        assert!(contents.contains("read 3 points"));
        assert!(contents.contains("pointer moved"));
    }
}
