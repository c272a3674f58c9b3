//! Error types for configuration operations.

use std::path::{Path, PathBuf};

use iamix_core::DownmixError;
use thiserror::Error;

/// Errors that can occur while loading, saving or applying a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A renderer configuration file could not be read
    #[error("cannot read downmix config '{path}': {source}")]
    ReadFile {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A renderer configuration file could not be written
    #[error("cannot write downmix config '{path}': {source}")]
    WriteFile {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The directory holding a configuration file could not be created
    #[error("cannot create config directory '{path}': {source}")]
    CreateDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has the wrong shape
    #[error("malformed downmix config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The configuration could not be written as TOML
    #[error("cannot serialize downmix config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Layout name not in the catalogue
    #[error("unknown layout: {0}")]
    UnknownLayout(String),

    /// Reserved or out-of-range demixing mode
    #[error("invalid demixing mode: {0}")]
    InvalidMode(u8),

    /// Default weight index off the weight curve
    #[error("invalid default weight index {0}, expected 0..=10")]
    InvalidWeightIndex(i32),

    /// The renderer rejected the configuration
    #[error("downmix: {0}")]
    Downmix(#[from] DownmixError),
}

impl ConfigError {
    /// Wraps a failed read of the configuration at `path`.
    pub(crate) fn read_file(path: &Path, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Wraps a failed write of the configuration at `path`.
    pub(crate) fn write_file(path: &Path, source: std::io::Error) -> Self {
        Self::WriteFile {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Wraps a failed creation of the configuration directory `dir`.
    pub(crate) fn create_dir(dir: &Path, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: dir.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iamix_core::Layout;
    use std::error::Error;

    fn mock_io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "mock")
    }

    #[test]
    fn read_file_names_the_config() {
        let err = ConfigError::read_file(Path::new("/a/stereo.toml"), mock_io_err());
        assert_eq!(
            err.to_string(),
            "cannot read downmix config '/a/stereo.toml': mock"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn write_file_names_the_config() {
        let err = ConfigError::write_file(Path::new("/a/stereo.toml"), mock_io_err());
        assert_eq!(
            err.to_string(),
            "cannot write downmix config '/a/stereo.toml': mock"
        );
    }

    #[test]
    fn create_dir_keeps_directory() {
        let err = ConfigError::create_dir(Path::new("/dir/path"), mock_io_err());
        assert!(
            matches!(err, ConfigError::CreateDir { ref path, .. } if path == Path::new("/dir/path"))
        );
        assert!(err.to_string().starts_with("cannot create config directory"));
    }

    #[test]
    fn malformed_toml_display() {
        let err = ConfigError::from(toml::from_str::<toml::Table>("input = ").unwrap_err());
        assert!(err.to_string().starts_with("malformed downmix config"));
    }

    #[test]
    fn unknown_layout_display() {
        let err = ConfigError::UnknownLayout("9.1.6".to_string());
        assert_eq!(err.to_string(), "unknown layout: 9.1.6");
        assert!(err.source().is_none());
    }

    #[test]
    fn downmix_error_is_source() {
        let err = ConfigError::from(DownmixError::SameLayout(Layout::Stereo));
        assert_eq!(err.to_string(), "downmix: cannot downmix stereo to itself");
        assert!(err.source().is_some());
    }
}
