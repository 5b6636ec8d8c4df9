//! Error handling traits for the streaming ecosystem

use super::types::{Error, Result};

/// Extension trait for results coming out of backend crates
pub trait ResultExt<T> {
    /// Surface a backend failure as [`Error::Backend`], keeping its message
    fn backend_err(self, component: &'static str) -> Result<T>;
}

impl<T, E: core::fmt::Display> ResultExt<T> for core::result::Result<T, E> {
    fn backend_err(self, component: &'static str) -> Result<T> {
        self.map_err(|e| Error::backend(component, e.to_string()))
    }
}
