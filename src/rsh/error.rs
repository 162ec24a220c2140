// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustsha256
// File: error.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use crate::rsh::sha256::EnginePhase;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Errors surfaced by the digest engine and the file facade.
///
/// The hashing arithmetic itself never fails; every variant originates
/// at the byte source or from driving the engine out of order.
#[derive(Debug)]
pub enum DigestError {
	Io {
		path: Option<PathBuf>,
		source: io::Error,
	},
	IsADirectory {
		path: PathBuf,
	},
	InvalidState {
		phase: EnginePhase,
		operation: &'static str,
	},
}

impl DigestError {
	pub fn io(source: io::Error) -> Self {
		DigestError::Io { path: None, source }
	}

	/// Attaches `path` to I/O errors that do not carry one yet.
	pub fn with_path(self, path: impl AsRef<Path>) -> Self {
		match self {
			DigestError::Io { path: None, source } => DigestError::Io {
				path: Some(path.as_ref().to_path_buf()),
				source,
			},
			other => other,
		}
	}

	pub fn path(&self) -> Option<&Path> {
		match self {
			DigestError::Io { path, .. } => path.as_deref(),
			DigestError::IsADirectory { path } => Some(path),
			DigestError::InvalidState { .. } => None,
		}
	}

	/// True for failures at the byte source (open, stat, read, length).
	pub fn is_io(&self) -> bool {
		matches!(
			self,
			DigestError::Io { .. } | DigestError::IsADirectory { .. }
		)
	}
}

impl fmt::Display for DigestError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DigestError::Io {
				path: Some(path),
				source,
			} => write!(f, "{}: {}", path.display(), source),
			DigestError::Io { path: None, source } => {
				write!(f, "{}", source)
			}
			DigestError::IsADirectory { path } => {
				write!(f, "{}: is a directory", path.display())
			}
			DigestError::InvalidState { phase, operation } => write!(
				f,
				"cannot {} while the engine is {}",
				operation, phase
			),
		}
	}
}

impl std::error::Error for DigestError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			DigestError::Io { source, .. } => Some(source),
			DigestError::IsADirectory { .. }
			| DigestError::InvalidState { .. } => None,
		}
	}
}

impl From<io::Error> for DigestError {
	fn from(source: io::Error) -> Self {
		DigestError::io(source)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::error::Error as _;

	#[test]
	fn with_path_names_the_file_in_the_message() {
		let err = DigestError::io(io::Error::new(
			io::ErrorKind::PermissionDenied,
			"permission denied",
		))
		.with_path("secret.bin");
		assert_eq!(err.to_string(), "secret.bin: permission denied");
		assert_eq!(err.path(), Some(Path::new("secret.bin")));
		assert!(err.source().is_some());
		assert!(err.is_io());
	}

	#[test]
	fn with_path_keeps_an_existing_path() {
		let err = DigestError::Io {
			path: Some(PathBuf::from("first")),
			source: io::Error::new(io::ErrorKind::Other, "boom"),
		}
		.with_path("second");
		assert_eq!(err.path(), Some(Path::new("first")));
	}

	#[test]
	fn invalid_state_reports_phase_and_operation() {
		let err = DigestError::InvalidState {
			phase: EnginePhase::Finalized,
			operation: "absorb a block",
		};
		assert_eq!(
			err.to_string(),
			"cannot absorb a block while the engine is finalized"
		);
		assert!(!err.is_io());
	}
}
