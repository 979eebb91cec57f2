//! Core data entities of the resolution engine: the per-image transform
//! state that accumulates directives during resolution. Internal primitives
//! consumed by the `config` engine and re-exported through `api`.
pub mod params;

pub use params::ImageParams;
