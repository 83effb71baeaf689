pub mod config_ops;
pub mod read_ops;
