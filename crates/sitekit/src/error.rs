// SPDX-FileCopyrightText: 2024 Filip Krawczyk
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for configuration loading and site generation.

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("bad frontmatter in {path}: {message}")]
    Frontmatter { path: PathBuf, message: String },

    #[error("content directory not found: {path}")]
    MissingContent { path: PathBuf },

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub(crate) fn frontmatter<P: AsRef<Path>, S: Into<String>>(path: P, message: S) -> Self {
        Error::Frontmatter {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }
}
