pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;

use std::io::{BufRead, Write};

use application::order_service::OrderService;
use handlers::console::Console;
use infrastructure::json_store::JsonOrderRepository;

pub use config::{CorruptStorePolicy, StoreConfig};
pub use errors::AppError;

/// Wire the JSON-file repository and the service for `config`.
pub fn build_service(config: &StoreConfig) -> OrderService<JsonOrderRepository> {
    OrderService::new(JsonOrderRepository::new(config), config.corrupt_policy)
}

/// Run the interactive menu against `config`'s stores until the operator quits.
pub fn run_console<R: BufRead, W: Write>(
    config: &StoreConfig,
    input: R,
    output: W,
) -> Result<(), AppError> {
    log::debug!(
        "Using pending store {} and completed store {}",
        config.pending_path.display(),
        config.completed_path.display()
    );
    Console::new(input, output, build_service(config)).run()
}
