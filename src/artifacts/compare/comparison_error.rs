use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    #[error("please provide both source and target directories (missing {0})")]
    Configuration(&'static str),

    #[error("error walking source tree at {path}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("error getting relative path of {path} under {root}")]
    RelativePath { path: PathBuf, root: PathBuf },

    #[error("error getting absolute path of {path}")]
    AbsolutePath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing comparison script to {destination}")]
    OutputWrite {
        destination: String,
        #[source]
        source: std::io::Error,
    },
}

impl CompareError {
    pub fn traversal(root: &std::path::Path, source: walkdir::Error) -> Self {
        let path = source
            .path()
            .map(PathBuf::from)
            .unwrap_or_else(|| root.to_path_buf());

        CompareError::Traversal { path, source }
    }

    pub fn output_write(destination: impl Into<String>, source: std::io::Error) -> Self {
        CompareError::OutputWrite {
            destination: destination.into(),
            source,
        }
    }
}

pub type CompareResult<T> = Result<T, CompareError>;
