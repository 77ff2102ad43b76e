use serde::{Deserialize, Serialize};

/// Target social-media platform. Serialized lowercase on the wire
/// (`{"platform": "instagram"}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Facebook,
    Instagram,
    Threads,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Threads => "threads",
        }
    }
}

/// Tone preset for generated copy. The wire values are the product's
/// display strings, so serde renames carry them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Style {
    #[default]
    #[serde(rename = "專業且親切")]
    ProfessionalFriendly,
    #[serde(rename = "幽默風趣")]
    Humorous,
    #[serde(rename = "感性動人")]
    Heartfelt,
    #[serde(rename = "簡潔有力")]
    Punchy,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::ProfessionalFriendly => "專業且親切",
            Style::Humorous => "幽默風趣",
            Style::Heartfelt => "感性動人",
            Style::Punchy => "簡潔有力",
        }
    }

    pub const PRESETS: [Style; 4] = [
        Style::ProfessionalFriendly,
        Style::Humorous,
        Style::Heartfelt,
        Style::Punchy,
    ];
}

/// Payload for the copy-generation endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CopyRequest {
    pub platform: Platform,
    pub topic: String,
    pub style: Style,
    pub use_agent: bool,
    pub use_search: bool,
}

/// Generated copy plus the ordered reasoning log for the most recent
/// request. `logs` is absent from the response when the backend ran a
/// single-shot generation, so it defaults to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyResult {
    pub content: String,
    #[serde(default)]
    pub logs: Vec<String>,
}

/// A file the user picked for upload, held in memory until submission.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Input for the vision workflow: analysis cannot run until an image
/// has been selected.
#[derive(Debug, Clone, Default)]
pub struct VisionInput {
    pub image: Option<FileUpload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionAnalysis {
    pub analysis: String,
}

/// Payload for the brainstorm endpoint. Shares the platform enum with
/// copy generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrainstormRequest {
    pub idea: String,
    pub platform: Platform,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrainstormResult {
    pub suggestions: String,
}

/// Input for the brand-knowledge upload screen.
#[derive(Debug, Clone, Default)]
pub struct BrandDocumentInput {
    pub document: Option<FileUpload>,
}

/// Confirmation returned by the brand-knowledge ingestion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestReceipt {
    pub message: String,
}

/// Which workflow tab is currently presented. Orthogonal to workflow
/// state: switching never touches any slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Write,
    Vision,
    Brainstorm,
}
