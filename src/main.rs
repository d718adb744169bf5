// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use workforce_lib::AppConfig;

fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };
    workforce_lib::logging::init(&config.log_level);

    if let Err(e) = workforce_lib::run(config) {
        eprintln!("Error running application: {:#}", e);
        std::process::exit(1);
    }
}
