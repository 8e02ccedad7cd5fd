//! Maven integration: POM reading and validation, build-tool invocation,
//! and the Maven Central search client.

pub mod central;
pub mod mvn;
pub mod pom;
