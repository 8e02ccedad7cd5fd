//! POM file reading: project coordinates, version, modules, and validation.

use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use mvnrel_core::POM_FILE;
use mvnrel_util::errors::ReleaseError;

/// The `<project>` entry of a POM file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pom {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub packaging: Option<String>,
    pub name: Option<String>,
    pub modules: Vec<String>,
}

/// A well-formed POM document. `project` is `None` when the root element is
/// something other than `<project>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomDocument {
    pub root: String,
    pub project: Option<Pom>,
}

impl Pom {
    /// `groupId:artifactId`, for log lines.
    pub fn coordinates(&self) -> String {
        format!(
            "{}:{}",
            self.group_id.as_deref().unwrap_or("?"),
            self.artifact_id.as_deref().unwrap_or("?")
        )
    }

    /// The project version; present once [`validate_pom`] has passed.
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or_default()
    }

    /// Packaging type, `jar` when the POM doesn't say.
    pub fn packaging(&self) -> &str {
        self.packaging.as_deref().unwrap_or("jar")
    }

    /// One-line description: `org.example:lib 1.0.0 (pom, 2 modules)`.
    pub fn summary(&self) -> String {
        let mut summary = format!("{} {} ({}", self.coordinates(), self.version(), self.packaging());
        match self.modules.len() {
            0 => {}
            1 => summary.push_str(", 1 module"),
            n => summary.push_str(&format!(", {n} modules")),
        }
        summary.push(')');
        summary
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

fn unparsable(reason: impl Into<String>) -> ReleaseError {
    ReleaseError::UnparsablePom {
        reason: reason.into(),
    }
}

/// Parse a POM XML string. Fails only when the text is not well-formed XML.
pub fn parse_pom(xml: &str) -> Result<PomDocument, ReleaseError> {
    let mut reader = Reader::from_str(xml);

    let mut pom = Pom::default();
    let mut root: Option<String> = None;
    let mut path: Vec<String> = Vec::new();
    let mut text_buf = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let tag = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                if path.is_empty() {
                    if root.is_some() {
                        return Err(unparsable(format!("second root element <{tag}>")));
                    }
                    root = Some(tag.clone());
                }
                path.push(tag);
                text_buf.clear();
            }
            Ok(Event::Empty(ref e)) => {
                if path.is_empty() {
                    let tag = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                    if root.is_some() {
                        return Err(unparsable(format!("second root element <{tag}/>")));
                    }
                    root = Some(tag);
                }
            }
            // Comments and CDATA split an element's text into several events.
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().map_err(|err| unparsable(err.to_string()))?;
                text_buf.push_str(&text);
            }
            Ok(Event::CData(e)) => {
                text_buf.push_str(&String::from_utf8_lossy(&e.into_inner()));
            }
            Ok(Event::End(_)) => {
                let in_project = path.first().map(|s| s.as_str()) == Some("project");
                let value = text_buf.trim().to_string();

                // Top-level project fields
                if in_project && path.len() == 2 {
                    match path.last().map(|s| s.as_str()) {
                        Some("groupId") => pom.group_id = Some(value.clone()),
                        Some("artifactId") => pom.artifact_id = Some(value.clone()),
                        Some("version") => pom.version = Some(value.clone()),
                        Some("packaging") => pom.packaging = Some(value.clone()),
                        Some("name") => pom.name = Some(value.clone()),
                        _ => {}
                    }
                }

                // Modules
                if in_project && path.len() == 3 && path[1] == "modules" && path[2] == "module" {
                    pom.modules.push(value);
                }

                path.pop();
                text_buf.clear();
            }
            Ok(Event::Eof) => {
                if let Some(open) = path.last() {
                    return Err(unparsable(format!("unclosed element <{open}>")));
                }
                break;
            }
            Err(e) => {
                return Err(unparsable(format!(
                    "{e} (at byte {})",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    let root = root.ok_or_else(|| unparsable("document has no root element"))?;
    let project = (root == "project").then_some(pom);
    Ok(PomDocument { root, project })
}

/// Read and parse `<dir>/pom.xml`.
pub fn read_pom(dir: &Path) -> Result<PomDocument, ReleaseError> {
    let path = dir.join(POM_FILE);
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(ReleaseError::NoPomXml),
        Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
            return Err(unparsable(format!("{} is not UTF-8 text", path.display())))
        }
        Err(e) => return Err(ReleaseError::Io(e)),
    };
    parse_pom(&content)
}

/// Check that the document has a project with groupId, artifactId and version.
///
/// All missing fields are reported together in one [`ReleaseError::InvalidPom`].
pub fn validate_pom(doc: &PomDocument) -> Result<&Pom, ReleaseError> {
    let pom = doc.project.as_ref().ok_or(ReleaseError::MissingProjectEntry)?;

    let mut problems = Vec::new();
    if is_blank(&pom.group_id) {
        problems.push(ReleaseError::MissingGroupId);
    }
    if is_blank(&pom.artifact_id) {
        problems.push(ReleaseError::MissingArtifactId);
    }
    if is_blank(&pom.version) {
        problems.push(ReleaseError::MissingVersion);
    }

    if problems.is_empty() {
        Ok(pom)
    } else {
        Err(ReleaseError::InvalidPom { problems })
    }
}

/// Read `<dir>/pom.xml` and return its validated project entry.
pub fn load_validated_pom(dir: &Path) -> miette::Result<Pom> {
    let doc = read_pom(dir)?;
    let pom = validate_pom(&doc)?;
    Ok(pom.clone())
}
