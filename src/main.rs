use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

// Import from your library
use treekit::utils::logger::Logger;
use treekit::commands::{CommandFactory, TreekitCommandFactory};

fn main() {
    let matches = ClapCommand::new("Treekit")
        .version("0.1")
        .about("Correlate tree-care PDF reports with a tree registry and extract embedded images")
        .arg(
            Arg::new("input")
                .help("Input directory of PDF reports, or scan-result CSV for --geojson")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("extract-images")
                .short('e')
                .long("extract-images")
                .help("Extract embedded images from each PDF instead of scanning")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("geojson")
                .short('g')
                .long("geojson")
                .help("Join a scan-result CSV against the registry and write GeoJSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file or directory (defaults depend on the operation)")
                .value_name("PATH")
                .required(false),
        )
        .arg(
            Arg::new("fixed-trees")
                .short('f')
                .long("fixed-trees")
                .help("CSV of predefined tree IDs per report filename")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("registry")
                .long("registry")
                .help("Tree-registry dataset CSV used for the GeoJSON join")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let log_file = "treekit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("treekit-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = TreekitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
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
