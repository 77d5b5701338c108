//! Sink trait and the bundled output destinations

pub mod console;
pub mod file;
pub mod rolling_file;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use rolling_file::RollingFileSink;

use crate::core::error::Result;

/// A destination that durably records formatted log bytes.
///
/// Sinks receive finished byte ranges and write them verbatim, with no added
/// framing. A sink may be shared by multiple loggers and is called from
/// whichever thread dispatches (the caller for sync loggers, the pipeline
/// worker for async ones), so implementations carry their own locking.
/// Failures are reported through the returned `Result` and never raised
/// across the call boundary into application code.
pub trait Sink: Send + Sync {
    fn log(&self, bytes: &[u8]) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}
