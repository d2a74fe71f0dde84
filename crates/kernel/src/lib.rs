//! Kernel primitives shared by every shelf crate: configuration, the
//! [`Module`] contract, and the [`ModuleRegistry`] that drives module
//! lifecycles.

pub mod module;
pub mod registry;
pub mod settings;

pub use module::{InitCtx, Module};
pub use registry::ModuleRegistry;
