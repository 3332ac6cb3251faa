use std::path::Path;

use lib::display_lut::Settings;

fn main() -> std::io::Result<()> {
    clap::App::new("ReSyne Display LUT")
        .version("0.1")
        .about("Generates the ReSyne spectral preview LUT")
        .get_matches();

    let log_level = if cfg!(debug_assertions) {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new().filter_level(log_level).init();

    let settings = Settings::default();
    let path = settings.output_path(Path::new(env!("CARGO_MANIFEST_DIR")));
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    log::info!("Writing display LUT to \"{}\".", path.display());
    lib::write_lut_file(&path, settings.size)
}
