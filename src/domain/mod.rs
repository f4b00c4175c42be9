pub mod errors;
pub mod input;
pub mod order;
pub mod ports;
