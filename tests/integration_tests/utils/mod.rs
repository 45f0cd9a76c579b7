#[path = "mod_errors.rs"]
mod errors_tests;
#[path = "mod_logger.rs"]
mod logger_tests;
