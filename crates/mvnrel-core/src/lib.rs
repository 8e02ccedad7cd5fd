//! Core data types for mvnrel.
//!
//! Holds the plugin configuration, the per-hook release context supplied by
//! the orchestrator, the well-known project file names, and the version
//! arithmetic the hooks rely on.

pub mod config;
pub mod context;
pub mod version;

/// Project descriptor, relative to the project root.
pub const POM_FILE: &str = "pom.xml";

/// Deploy credentials passed to `mvn deploy --settings`.
pub const MAVEN_SETTINGS_FILE: &str = "maven-settings.xml";

/// Project-local Maven wrapper script.
pub const MAVEN_WRAPPER: &str = "mvnw";
