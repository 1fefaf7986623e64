use std::process;
use log::{error, info};

use coordkit::api::CoordKit;
use coordkit::commands::{build_cli, CommandFactory, CoordkitCommandFactory};
use coordkit::utils::logger::Logger;

const GLOBAL_LOG_FILE: &str = "coordkit-global.log";

fn main() {
    let matches = build_cli().get_matches();

    let verbose = matches.get_flag("verbose");
    if let Err(e) = Logger::init_global_logger(GLOBAL_LOG_FILE, verbose) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let log_file = matches.get_one::<String>("log-file").map(|s| s.as_str());
    let mut kit = match CoordKit::new(log_file) {
        Ok(kit) => kit.with_progress(verbose),
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Some(config_path) = matches.get_one::<String>("config") {
        kit = match kit.with_config_file(config_path) {
            Ok(kit) => kit,
            Err(e) => {
                error!("Failed to load configuration: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        };
    }

    let factory = CoordkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &kit);
    match command_result {
        Ok(command) => match command.execute() {
            Ok(output) => {
                info!("Command finished");
                println!("{}", output);
            }
            Err(e) => {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
