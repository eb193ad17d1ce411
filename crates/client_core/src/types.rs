/// Content of the receipt file input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type,
            bytes,
        }
    }

    /// File name without any directory part, whichever separator the host used.
    pub fn base_name(&self) -> &str {
        self.name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.name.as_str())
    }

    /// Lowercased text after the last `.` of the base name.
    pub fn extension(&self) -> Option<String> {
        let base = self.base_name();
        let (stem, ext) = base.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

/// Multipart payload of the receipt upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillUpload {
    pub file: SelectedFile,
    pub email: String,
}
