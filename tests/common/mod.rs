//! Common test utilities for binshim integration tests

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;

use tempfile::TempDir;

/// Get a command for the real binshim binary
#[allow(deprecated)]
#[allow(dead_code)]
pub fn binshim_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("binshim").unwrap()
}

/// A loopback release server serving one canned HTTP response per accepted
/// connection, in scripted order
///
/// Responses carry `Connection: close` so the client opens a fresh connection
/// for every redirect hop.
#[allow(dead_code)]
pub struct ReleaseServer {
    listener: TcpListener,
    /// Base URL of the server, e.g. `http://127.0.0.1:34567`
    pub base: String,
}

#[allow(dead_code)]
impl ReleaseServer {
    /// Bind to an ephemeral loopback port without serving yet, so responses
    /// can embed the server's own address (redirect targets)
    pub fn bind() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind loopback listener");
        let base = format!("http://{}", listener.local_addr().expect("No local addr"));
        Self { listener, base }
    }

    /// Serve the scripted responses on a background thread
    pub fn serve(self, responses: Vec<String>) -> String {
        let listener = self.listener;
        std::thread::spawn(move || {
            for response in responses {
                let (mut stream, _) = match listener.accept() {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                let mut buf = [0u8; 1024];
                let mut request = Vec::new();
                loop {
                    let n = match stream.read(&mut buf) {
                        Ok(n) => n,
                        Err(_) => return,
                    };
                    request.extend_from_slice(&buf[..n]);
                    if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
                let _ = stream.write_all(response.as_bytes());
            }
        });
        self.base
    }
}

/// A 200 response with the given body
#[allow(dead_code)]
pub fn ok_response(body: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    )
}

/// A 302 response pointing at `location`
#[allow(dead_code)]
pub fn redirect_response(location: &str) -> String {
    format!(
        "HTTP/1.1 302 Found\r\nLocation: {location}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
    )
}

/// An empty response with the given status
#[allow(dead_code)]
pub fn status_response(status: u16, reason: &str) -> String {
    format!("HTTP/1.1 {status} {reason}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
}

/// A test install directory with a manifest file
#[allow(dead_code)]
pub struct TestInstall {
    /// Temporary directory (kept alive for the test's duration)
    pub temp: TempDir,
    /// Install directory for artifacts
    pub install_dir: PathBuf,
    /// Path of the manifest file
    pub manifest_path: PathBuf,
}

#[allow(dead_code)]
impl TestInstall {
    /// Create an install dir and a manifest pinning `tool` v1.2.3 at `repository`
    pub fn new(repository: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let install_dir = temp.path().join("bin");
        std::fs::create_dir_all(&install_dir).expect("Failed to create install dir");

        let manifest_path = temp.path().join("manifest.json");
        let manifest = format!(
            r#"{{"name": "tool", "version": "1.2.3", "repository": "{repository}"}}"#
        );
        std::fs::write(&manifest_path, manifest).expect("Failed to write manifest");

        Self {
            temp,
            install_dir,
            manifest_path,
        }
    }

    /// Path the artifact is expected at after install
    pub fn artifact(&self) -> PathBuf {
        if cfg!(windows) {
            self.install_dir.join("tool.exe")
        } else {
            self.install_dir.join("tool")
        }
    }
}
