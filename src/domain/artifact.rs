//! Generated artifact descriptors.

use std::fmt;

/// The fixed set of files produced by a generation run, in write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Dockerfile,
    Compose,
    SetupScript,
    Summary,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 4] =
        [ArtifactKind::Dockerfile, ArtifactKind::Compose, ArtifactKind::SetupScript, ArtifactKind::Summary];

    /// Output file name relative to the output directory.
    pub fn file_name(self) -> &'static str {
        match self {
            ArtifactKind::Dockerfile => "Dockerfile",
            ArtifactKind::Compose => "docker-compose.yml",
            ArtifactKind::SetupScript => "setup.sh",
            ArtifactKind::Summary => "team_urls.md",
        }
    }

    /// Whether the file must carry the executable bit after writing.
    pub fn is_executable(self) -> bool {
        matches!(self, ArtifactKind::SetupScript)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// A rendered artifact awaiting write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub content: String,
}

impl GeneratedArtifact {
    pub fn new(kind: ArtifactKind, content: String) -> Self {
        Self { kind, content }
    }

    pub fn path(&self) -> &'static str {
        self.kind.file_name()
    }
}
