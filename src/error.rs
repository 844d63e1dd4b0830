// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkRankError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("corpus is empty: nothing to rank")]
    EmptyCorpus,

    #[error("page {page:?} links to {target:?}, which is not in the corpus")]
    ForeignLink { page: String, target: String },

    #[error("page {0:?} links to itself")]
    SelfLink(String),

    #[error("unknown page: {0:?}")]
    UnknownPage(String),

    #[error("weighted sampling failed: {0}")]
    Sampling(#[from] rand::distributions::WeightedError),

    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, LinkRankError>;

// Allow `?` on std::io::Error by converting to LinkRankError::Io with unknown path.
impl From<std::io::Error> for LinkRankError {
    fn from(source: std::io::Error) -> Self {
        LinkRankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for LinkRankError {
    fn from(e: walkdir::Error) -> Self {
        match e.path() {
            Some(path) => LinkRankError::Io {
                source: std::io::Error::other(e.to_string()),
                path: path.to_path_buf(),
            },
            None => LinkRankError::Io {
                source: std::io::Error::other(e.to_string()),
                path: PathBuf::from("<unknown>"),
            },
        }
    }
}
