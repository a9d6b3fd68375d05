use std::fmt;

#[derive(Debug)]
pub enum WinArtifactError {
    RecycleBin,
    Info2,
    Serialize,
    Format,
    Output,
}

impl std::error::Error for WinArtifactError {}

impl fmt::Display for WinArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinArtifactError::RecycleBin => write!(f, "Failed to parse Recycle Bin $I files"),
            WinArtifactError::Info2 => write!(f, "Failed to parse Recycle Bin INFO2 files"),
            WinArtifactError::Serialize => write!(f, "Failed to serialize artifact data"),
            WinArtifactError::Format => write!(f, "Unknown output format"),
            WinArtifactError::Output => write!(f, "Failed to output artifact data"),
        }
    }
}
