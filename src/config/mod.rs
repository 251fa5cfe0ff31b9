//! Configuration layer: credential resolution from flag or per-user file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{ApiId, ValidationError};

/// Name of the per-user credential file, looked up in the home directory.
pub const CREDENTIAL_FILE_NAME: &str = ".smssendrc";

/// Minimum significant length of a credential token read from the file.
pub const MIN_CREDENTIAL_LEN: usize = 10;

/// Capability to resolve the current user's home directory.
///
/// Production code uses [`SystemHome`]; tests substitute a fixed path.
pub trait HomeDirSource {
    fn home_dir(&self) -> Option<PathBuf>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Platform home-directory lookup (`$HOME` on Unix-likes, `%USERPROFILE%` on Windows).
pub struct SystemHome;

impl HomeDirSource for SystemHome {
    fn home_dir(&self) -> Option<PathBuf> {
        directories::UserDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("unable to determine the user home directory")]
    NoHomeDir,

    #[error("cannot read credential file {}: {source}", path.display())]
    Unreadable { path: PathBuf, source: io::Error },

    #[error("credential in {} is shorter than {} characters", path.display(), MIN_CREDENTIAL_LEN)]
    TooShort { path: PathBuf },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Resolve the API credential.
///
/// An explicit value wins; otherwise the per-user credential file is read.
/// The file content is stripped of leading/trailing whitespace and must keep
/// at least [`MIN_CREDENTIAL_LEN`] characters.
pub fn resolve_api_id(
    explicit: Option<&str>,
    home: &dyn HomeDirSource,
) -> Result<ApiId, CredentialError> {
    if let Some(value) = explicit {
        return Ok(ApiId::new(value)?);
    }
    let path = credential_file_path(home)?;
    load_credential_file(&path)
}

/// Path of the per-user credential file.
pub fn credential_file_path(home: &dyn HomeDirSource) -> Result<PathBuf, CredentialError> {
    home.home_dir()
        .map(|dir| dir.join(CREDENTIAL_FILE_NAME))
        .ok_or(CredentialError::NoHomeDir)
}

fn load_credential_file(path: &Path) -> Result<ApiId, CredentialError> {
    let data = fs::read_to_string(path).map_err(|source| CredentialError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let token = data.trim();
    if token.len() < MIN_CREDENTIAL_LEN {
        return Err(CredentialError::TooShort {
            path: path.to_path_buf(),
        });
    }

    Ok(ApiId::new(token)?)
}
