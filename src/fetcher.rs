//! Binary artifact download
//!
//! Fetches a release asset over HTTP(S) and installs it at the destination
//! path with the executable bit set. Redirects are followed manually so the
//! hop count stays bounded, and the body is streamed into a temporary file in
//! the destination directory that is renamed into place only once the
//! download completed. An interrupted download never leaves a truncated file
//! at the artifact path.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header;
use reqwest::redirect::Policy;

use crate::error::{BinshimError, Result};

/// Upper bound on redirect hops before the download is abandoned
const MAX_REDIRECTS: usize = 5;

/// Initial connection timeout; release hosts that do not answer within this
/// window are treated as unreachable
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Download `url` into `dest` and mark it executable
///
/// Returns only after the artifact is fully written, flushed and renamed into
/// place. On any error the destination path is left untouched.
pub fn download(url: &str, dest: &Path) -> Result<()> {
    // Redirects are handled below so the hop count can be bounded
    let client = Client::builder()
        .redirect(Policy::none())
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(concat!("binshim/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let mut url = url.to_string();

    for _ in 0..=MAX_REDIRECTS {
        let mut response = client.get(&url).send()?;
        let status = response.status();

        if status.is_redirection() {
            let location = response
                .headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok())
                .ok_or_else(|| BinshimError::RedirectMissingLocation { url: url.clone() })?;
            url = location.to_string();
            continue;
        }

        if !status.is_success() {
            return Err(BinshimError::DownloadFailed {
                status: status.as_u16(),
                url,
            });
        }

        return write_artifact(&mut response, dest);
    }

    Err(BinshimError::TooManyRedirects {
        url,
        limit: MAX_REDIRECTS,
    })
}

/// Stream the response body into a temporary file beside `dest`, mark it
/// executable and atomically rename it into place
fn write_artifact(response: &mut reqwest::blocking::Response, dest: &Path) -> Result<()> {
    let dir = dest.parent().ok_or_else(|| BinshimError::IoError {
        message: format!("artifact path has no parent directory: {}", dest.display()),
    })?;

    // Same directory as the destination so the rename cannot cross filesystems
    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    response.copy_to(temp.as_file_mut())?;
    temp.as_file_mut().flush()?;

    set_executable(temp.path())?;

    temp.persist(dest).map_err(|e| BinshimError::from(e.error))?;

    Ok(())
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<()> {
    // Windows derives executability from the file extension
    Ok(())
}
