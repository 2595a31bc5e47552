use std::sync::Once;

use cfg_if::cfg_if;
use log::info;

cfg_if! {
    if #[cfg(feature = "debug")] {
        const LOG_ENV: &str = "identical_core=trace";
    } else {
        const LOG_ENV: &str = "identical_core=info";
    }
}
static INIT: Once = Once::new();

/// Initializes the configured log backend. Safe to call more than once.
pub fn init_logger() {
    INIT.call_once(|| {
        init();
    });
}

cfg_if! {
    if #[cfg(feature = "flexi_logger")] {
        fn init() {
            match flexi_logger::Logger::try_with_env_or_str(LOG_ENV)
                .and_then(|logger| logger.start())
            {
                // the handle must outlive the program, otherwise the logger
                // shuts down
                Ok(handle) => core::mem::forget(handle),
                Err(err) => {
                    eprintln!("Failed to initialize logger: {err}");
                    return;
                }
            }
            info!("Logger initialized! (Using flexi_logger) {LOG_ENV}");
        }
    }

    else {
        fn init() {
            println!("No logger enabled. Logs will not be recorded.");
        }
    }
}
