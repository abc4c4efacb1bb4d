// Adapters layer: wiring the core logic into external frameworks.

#[cfg(feature = "server")]
pub mod http;
