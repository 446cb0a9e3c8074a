//! Test utilities: template archive builder and a minimal HTTP server.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;
use std::thread;

use axum::Router;
use axum::body::Body;
use axum::http::Response;
use axum::http::StatusCode;
use axum::http::Uri;
use axum::http::header::CONTENT_LENGTH;
use axum::http::header::CONTENT_TYPE;
use axum::serve;
use tokio::net::TcpListener;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Builder for repository-style zip archives.
///
/// Every path is placed below a synthetic top-level directory, the way
/// hosting services lay out `archive/master.zip`.
///
/// # Examples
///
/// ```
/// use tmplfetch_core::test_utils::TemplateArchiveBuilder;
///
/// let zip_data = TemplateArchiveBuilder::new("templates-master")
///     .add_directory("template/")
///     .add_language("go")
///     .add_file("template/go/handler.go", b"package function")
///     .build();
/// assert!(!zip_data.is_empty());
/// ```
pub struct TemplateArchiveBuilder {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    root: String,
}

impl TemplateArchiveBuilder {
    /// Creates a builder and adds the top-level `root/` directory entry.
    #[must_use]
    pub fn new(root: &str) -> Self {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().unix_permissions(0o755);
        zip.add_directory(format!("{root}/"), options).unwrap();
        Self {
            zip,
            root: root.to_string(),
        }
    }

    /// Adds a directory with mode 0o755.
    #[must_use]
    pub fn add_directory(self, path: &str) -> Self {
        self.add_directory_with_mode(path, 0o755)
    }

    /// Adds a directory with a custom mode.
    #[must_use]
    pub fn add_directory_with_mode(mut self, path: &str, mode: u32) -> Self {
        let options = SimpleFileOptions::default().unix_permissions(mode);
        self.zip
            .add_directory(format!("{}/{path}", self.root), options)
            .unwrap();
        self
    }

    /// Adds the `template/<language>/` root directory.
    #[must_use]
    pub fn add_language(self, language: &str) -> Self {
        self.add_directory(&format!("template/{language}/"))
    }

    /// Adds a regular file with mode 0o644.
    #[must_use]
    pub fn add_file(self, path: &str, data: &[u8]) -> Self {
        self.add_file_with_mode(path, data, 0o644)
    }

    /// Adds a regular file with a custom mode.
    #[must_use]
    pub fn add_file_with_mode(mut self, path: &str, data: &[u8], mode: u32) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(mode);
        self.zip
            .start_file(format!("{}/{path}", self.root), options)
            .unwrap();
        self.zip.write_all(data).unwrap();
        self
    }

    /// Builds and returns the zip archive data.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.zip.finish().unwrap().into_inner()
    }
}

/// The two-language archive used throughout the tests: `go` (0o644 handler)
/// and `node` (0o755 handler), plus entries outside `template/`.
#[must_use]
pub fn sample_archive() -> Vec<u8> {
    TemplateArchiveBuilder::new("templates-master")
        .add_file("README.md", b"# templates\n")
        .add_directory("template/")
        .add_language("go")
        .add_file("template/go/handler.go", b"package function\n")
        .add_language("node")
        .add_file_with_mode("template/node/handler.js", b"module.exports = {};\n", 0o755)
        .build()
}

/// HTTP server answering every request with one canned response.
///
/// The axum router runs on a dedicated thread with its own current-thread
/// tokio runtime, so blocking clients can talk to it from plain `#[test]`
/// functions. Request paths are recorded so tests can assert what was
/// fetched.
pub struct TestHttpServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestHttpServer {
    /// Binds `127.0.0.1:0` and starts serving `status` with `body`.
    #[must_use]
    pub fn serve(status: u16, body: Vec<u8>) -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let addr = listener.local_addr().unwrap();
        let status = StatusCode::from_u16(status).unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        let router = Router::new().fallback(move |uri: Uri| {
            let body = body.clone();
            let recorded = Arc::clone(&recorded);
            async move {
                recorded.lock().unwrap().push(uri.path().to_string());
                Response::builder()
                    .status(status)
                    .header(CONTENT_TYPE, "application/zip")
                    .header(CONTENT_LENGTH, body.len())
                    .body(Body::from(body))
                    .unwrap()
            }
        });

        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let listener = TcpListener::from_std(listener).unwrap();
                let _ = serve(listener, router).await;
            });
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    /// Base URL of the server, without a trailing slash.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Paths requested so far.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}
