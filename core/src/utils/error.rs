use std::fmt;

#[derive(Debug)]
pub enum DumpsterError {
    Env,
    CompressCreate,
    GzipFinish,
    CreateDirectory,
    LogFile,
    Local,
    UnknownOutput,
}

impl std::error::Error for DumpsterError {}

impl fmt::Display for DumpsterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DumpsterError::Env => write!(f, "Could not get environment variable"),
            DumpsterError::CompressCreate => write!(f, "Could not compress data"),
            DumpsterError::GzipFinish => write!(f, "Could not complete gzip compression"),
            DumpsterError::CreateDirectory => write!(f, "Could not create directory(ies)"),
            DumpsterError::LogFile => write!(f, "Could not create log file"),
            DumpsterError::Local => write!(f, "Failed output data to local directory"),
            DumpsterError::UnknownOutput => write!(f, "Unsupported output type"),
        }
    }
}
