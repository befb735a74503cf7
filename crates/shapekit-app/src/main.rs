//! Main application entry point.

use std::path::PathBuf;

fn main() {
    env_logger::init();
    log::info!("Starting shapekit");

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    match shapekit_app::run(config_path.as_deref()) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
