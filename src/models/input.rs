//! Named input blobs and file-name classification

/// Suffixes accepted as single certificate files (case-insensitive)
pub const CERTIFICATE_EXTENSIONS: [&str; 4] = [".cer", ".crt", ".pem", ".der"];

/// Suffix accepted as a certificate bundle (case-insensitive)
pub const ARCHIVE_EXTENSION: &str = ".zip";

/// One file supplied by the caller, already read into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedInput {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl NamedInput {
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    pub fn kind(&self) -> InputKind {
        InputKind::from_name(&self.file_name)
    }
}

/// What a file name says about its content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Archive,
    Certificate,
    Unsupported,
}

impl InputKind {
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.ends_with(ARCHIVE_EXTENSION) {
            InputKind::Archive
        } else if is_certificate_name(&lower) {
            InputKind::Certificate
        } else {
            InputKind::Unsupported
        }
    }
}

/// True if `name` ends with one of [`CERTIFICATE_EXTENSIONS`]
pub fn is_certificate_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    CERTIFICATE_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(ext))
}

/// Human-readable list of accepted suffixes, e.g. for help text
pub fn accepted_extensions() -> String {
    let mut all: Vec<&str> = CERTIFICATE_EXTENSIONS.to_vec();
    all.push(ARCHIVE_EXTENSION);
    all.join(", ")
}
