//! Error types and handling for binshim
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for binshim operations
#[derive(Error, Diagnostic, Debug)]
pub enum BinshimError {
    // Platform errors
    #[error("Unsupported operating system: {os}")]
    #[diagnostic(
        code(binshim::platform::unsupported_os),
        help("Prebuilt binaries are published for windows, macos and linux")
    )]
    UnsupportedOs { os: String },

    #[error("Unsupported architecture: {arch}")]
    #[diagnostic(
        code(binshim::platform::unsupported_arch),
        help("Prebuilt binaries are published for x86_64 (amd64) and aarch64 (arm64)")
    )]
    UnsupportedArch { arch: String },

    // Manifest errors
    #[error("Failed to read manifest: {path}")]
    #[diagnostic(code(binshim::manifest::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to parse manifest: {path}")]
    #[diagnostic(
        code(binshim::manifest::parse_failed),
        help("The manifest must be a JSON object with name, version and repository fields")
    )]
    ManifestParseFailed { path: String, reason: String },

    // Download errors
    #[error("Download failed with status {status}: {url}")]
    #[diagnostic(
        code(binshim::download::failed),
        help("Check that the release exists for this version and platform")
    )]
    DownloadFailed { status: u16, url: String },

    #[error("Too many redirects (limit {limit}) while fetching: {url}")]
    #[diagnostic(code(binshim::download::too_many_redirects))]
    TooManyRedirects { url: String, limit: usize },

    #[error("Redirect response without a Location header: {url}")]
    #[diagnostic(code(binshim::download::missing_location))]
    RedirectMissingLocation { url: String },

    #[error("HTTP request failed: {message}")]
    #[diagnostic(
        code(binshim::download::transport),
        help("Check network connectivity and that the repository URL is reachable")
    )]
    HttpError { message: String },

    // Launch errors
    #[error("Binary not installed: {path}")]
    #[diagnostic(
        code(binshim::launch::not_installed),
        help("Run 'binshim install' to download the binary for this platform")
    )]
    BinaryNotFound { path: String },

    #[error("Failed to launch {path}: {reason}")]
    #[diagnostic(code(binshim::launch::spawn_failed))]
    LaunchFailed { path: String, reason: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(binshim::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for BinshimError {
    fn from(err: std::io::Error) -> Self {
        BinshimError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for BinshimError {
    fn from(err: reqwest::Error) -> Self {
        BinshimError::HttpError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BinshimError {
    fn from(err: serde_json::Error) -> Self {
        BinshimError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BinshimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BinshimError::UnsupportedOs {
            os: "freebsd".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported operating system: freebsd");
    }

    #[test]
    fn test_error_code() {
        let err = BinshimError::UnsupportedArch {
            arch: "riscv64".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("binshim::platform::unsupported_arch".to_string())
        );
    }

    #[test]
    fn test_download_failed_carries_status() {
        let err = BinshimError::DownloadFailed {
            status: 404,
            url: "https://example.com/releases/download/v1.0.0/tool-linux-amd64".to_string(),
        };
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_too_many_redirects_carries_limit() {
        let err = BinshimError::TooManyRedirects {
            url: "https://example.com/loop".to_string(),
            limit: 5,
        };
        assert!(err.to_string().contains("limit 5"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BinshimError = io_err.into();
        assert!(matches!(err, BinshimError::IoError { .. }));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_result: std::result::Result<serde_json::Value, _> =
            serde_json::from_str("not json");
        let err: BinshimError = parse_result.unwrap_err().into();
        assert!(matches!(err, BinshimError::ManifestParseFailed { .. }));
    }

    #[test]
    fn test_binary_not_found_help_mentions_install() {
        let err = BinshimError::BinaryNotFound {
            path: "/opt/binshim/tool".to_string(),
        };
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("binshim install"));
    }
}
