use anyhow::Context;
use scatterfit::{options::Options, summary::Summary, Dataset};
use tracing::metadata::LevelFilter;

fn main() -> anyhow::Result<()> {
    let options = Options::parse_from(std::env::args_os()).unwrap_or_else(|err| err.exit());

    let stdout_level = if options.headless {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };
    scatterfit::log::init(stdout_level, options.log_dir.as_deref());

    match options.file {
        Some(file) if options.headless => {
            let dataset = Dataset::from_path(&file)
                .with_context(|| format!("failed to load {}", file.display()))?;
            let summary = Summary::new(&dataset)
                .with_context(|| format!("no regression line for {}", file.display()))?;
            println!("{}", summary.render(options.format)?);
        }
        file => {
            let native_options = eframe::NativeOptions {
                initial_window_size: Some(egui::vec2(960.0, 640.0)),
                ..Default::default()
            };
            eframe::run_native(
                "scatterfit",
                native_options,
                Box::new(move |cc| Box::new(scatterfit::ScatterApp::new(cc, file))),
            );
        }
    }
    Ok(())
}
