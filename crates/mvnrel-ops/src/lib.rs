pub mod ops_prepare;
pub mod ops_publish;
pub mod ops_verify_conditions;
pub mod ops_verify_release;

/// Log which mvnrel build is running, once per hook.
pub fn log_tool_version() {
    tracing::info!("Running mvnrel version {}", env!("CARGO_PKG_VERSION"));
}
