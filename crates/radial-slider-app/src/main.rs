//! Command-line export of radial sliders (native).

#[cfg(feature = "native")]
mod cli {
    use clap::Parser;
    use radial_slider_app::export::{ExportOptions, export_file};
    use radial_slider_app::AppError;
    use radial_slider_core::LabelOptions;
    use std::path::PathBuf;

    /// Render radial sliders described by a JSON config file.
    #[derive(Debug, Parser)]
    #[command(name = "radial-slider", version, about)]
    pub struct Cli {
        /// JSON file holding an array of slider configs.
        pub config: PathBuf,
        /// Write here instead of stdout.
        #[arg(short, long)]
        pub output: Option<PathBuf>,
        /// Emit a standalone HTML page.
        #[arg(long)]
        pub html: bool,
        /// Include a label panel with this container id.
        #[arg(long, value_name = "ID")]
        pub labels: Option<String>,
        /// Prefix for label values.
        #[arg(long, default_value = "$")]
        pub currency: String,
        /// Preset a slider, by index or name.
        #[arg(long = "set", value_name = "SLIDER=VALUE")]
        pub assignments: Vec<String>,
    }

    pub fn run(cli: Cli) -> Result<(), AppError> {
        let options = ExportOptions {
            html: cli.html,
            labels: cli.labels,
            label_options: LabelOptions {
                currency: cli.currency,
                ..LabelOptions::default()
            },
        };
        let document = export_file(&cli.config, &cli.assignments, &options)?;

        match cli.output {
            Some(path) => {
                std::fs::write(&path, document).map_err(|source| AppError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                log::info!("Wrote {}", path.display());
            }
            None => print!("{document}"),
        }
        Ok(())
    }
}

#[cfg(feature = "native")]
fn main() {
    use clap::Parser;

    env_logger::init();
    if let Err(err) = cli::run(cli::Cli::parse()) {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
