/// Adapters - service-specific implementations
///
/// These modules implement the port traits for concrete external services.
pub mod llm;
pub mod notify;
pub mod storage;
