use std::io;

use counter_orders::{run_console, AppError, StoreConfig};
use dotenvy::dotenv;

fn main() -> Result<(), AppError> {
    dotenv().ok();
    // Keep stderr quiet while the operator is typing; RUST_LOG raises it.
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let config = StoreConfig::from_env();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_console(&config, stdin.lock(), stdout.lock())
}
