use std::{fs::File, process::ExitCode};

use shadow_logging::{LogCategory, Logger, log_error, log_info, log_warning, set_logger};

mod probe;
mod settings;

use settings::ProbeSettings;

pub const LOG_CAT : LogCategory = LogCategory::new("Main");

const LOG_FILE : &str = "yield_probe.log";

static LOGGER : Logger = Logger::new();

fn setup_logging() {
    set_logger(&LOGGER);

    match File::create(LOG_FILE) {
        Ok(file) => {
            _ = LOGGER.add_writer(Box::new(file));
        },
        Err(err) => log_warning!(LOG_CAT, "Failed to create '{LOG_FILE}', only logging to console ({err})"),
    }
}

fn main() -> ExitCode {
    setup_logging();

    let settings = match ProbeSettings::from_args(std::env::args().skip(1)) {
        Ok(settings) => settings,
        Err(err) => {
            log_error!(LOG_CAT, main, "{err}");
            log_info!(LOG_CAT, "{}", ProbeSettings::USAGE);
            LOGGER.flush();
            return ExitCode::from(2);
        },
    };
    log_info!(LOG_CAT, "{settings:?}");

    let res = probe::run(&settings);
    let code = match res {
        Ok(()) => {
            log_info!(LOG_CAT, "All scenarios passed");
            ExitCode::SUCCESS
        },
        Err(err) => {
            log_error!(LOG_CAT, main, "{err}");
            ExitCode::FAILURE
        },
    };

    // Statics aren't dropped, so make sure everything reaches the writers
    LOGGER.flush();
    code
}
