//! Logging bootstrap shared by hosts embedding the canvas.

mod init;

pub use init::{LoggingConfig, init_logging};
