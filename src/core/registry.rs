//! Process-wide named-logger registry
//!
//! Lazily constructed on first access, guarded by a single exclusive lock,
//! and always containing one root logger. Lookup never auto-constructs.
//! Shutdown drops loggers in reverse registration order, so each async
//! pipeline drains deterministically instead of relying on implicit teardown
//! at process exit.

use super::logger::Logger;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

pub const ROOT_LOGGER_NAME: &str = "root";

struct RegistryInner {
    loggers: HashMap<String, Arc<Logger>>,
    /// Registration order, for deterministic reverse-order shutdown.
    order: Vec<String>,
}

pub struct LoggerRegistry {
    inner: Mutex<RegistryInner>,
}

impl LoggerRegistry {
    /// A registry seeded with its root logger. Most callers want the
    /// process-wide [`registry()`]; standalone instances exist for embedding
    /// and tests.
    pub fn new() -> Self {
        let root = Arc::new(
            Logger::builder()
                .name(ROOT_LOGGER_NAME)
                .build()
                .expect("root logger configuration is well formed"),
        );
        let mut loggers = HashMap::new();
        loggers.insert(ROOT_LOGGER_NAME.to_string(), root);
        Self {
            inner: Mutex::new(RegistryInner {
                loggers,
                order: vec![ROOT_LOGGER_NAME.to_string()],
            }),
        }
    }

    /// Insert `logger` under its name unless that name is already taken.
    /// Returns the handle that survives: the new logger, or the existing one.
    pub fn register(&self, logger: Arc<Logger>) -> Arc<Logger> {
        let mut inner = self.inner.lock();
        if let Some(existing) = inner.loggers.get(logger.name()) {
            return Arc::clone(existing);
        }
        let name = logger.name().to_string();
        inner.loggers.insert(name.clone(), Arc::clone(&logger));
        inner.order.push(name);
        logger
    }

    /// Look up a logger by name. Absent names are a not-found result, never
    /// an implicit construction.
    pub fn lookup(&self, name: &str) -> Option<Arc<Logger>> {
        self.inner.lock().loggers.get(name).cloned()
    }

    /// The default logger; always present. Re-created here if a prior
    /// `shutdown` removed it.
    pub fn root(&self) -> Arc<Logger> {
        let mut inner = self.inner.lock();
        if let Some(root) = inner.loggers.get(ROOT_LOGGER_NAME) {
            return Arc::clone(root);
        }
        let root = Arc::new(
            Logger::builder()
                .name(ROOT_LOGGER_NAME)
                .build()
                .expect("root logger configuration is well formed"),
        );
        inner
            .loggers
            .insert(ROOT_LOGGER_NAME.to_string(), Arc::clone(&root));
        inner.order.insert(0, ROOT_LOGGER_NAME.to_string());
        root
    }

    /// Remove and drop every registered logger in reverse registration order
    /// (root last). Each async logger drains its backlog as its last handle
    /// goes away. The root logger is re-created on next access.
    pub fn shutdown(&self) {
        let mut inner = self.inner.lock();
        let order = std::mem::take(&mut inner.order);
        let mut loggers = std::mem::take(&mut inner.loggers);
        drop(inner);
        for name in order.iter().rev() {
            if let Some(logger) = loggers.remove(name) {
                let _ = logger.flush();
                drop(logger);
            }
        }
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide registry.
pub fn registry() -> &'static LoggerRegistry {
    static REGISTRY: OnceLock<LoggerRegistry> = OnceLock::new();
    REGISTRY.get_or_init(LoggerRegistry::new)
}
