use std::collections::HashMap;

/// Why a fragment resource could not be retrieved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request for `{path}` failed: {reason}")]
    Network { path: String, reason: String },
    #[error("`{path}` answered with status {status}")]
    Status { path: String, status: u16 },
    #[error("`{path}` returned an unreadable body")]
    Body { path: String },
}

/// Transport for fragment resources, relative to the site root.
#[allow(async_fn_in_trait)]
pub trait FragmentSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;
}

impl<S: FragmentSource> FragmentSource for &S {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        (**self).fetch_text(path).await
    }
}

/// Fixed in-memory resources; unknown paths answer 404.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    files: HashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.files.insert(path.into(), body.into());
        self
    }
}

impl FragmentSource for StaticSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        self.files.get(path).cloned().ok_or_else(|| FetchError::Status {
            path: path.to_string(),
            status: 404,
        })
    }
}

/// Reads resources from a directory laid out like the served site root.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct DirSource {
    root: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl DirSource {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl FragmentSource for DirSource {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        // Keep lookups inside the root.
        if path.split('/').any(|part| part == "..") {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: 403,
            });
        }
        std::fs::read_to_string(self.root.join(path)).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => FetchError::Status {
                path: path.to_string(),
                status: 404,
            },
            std::io::ErrorKind::InvalidData => FetchError::Body {
                path: path.to_string(),
            },
            _ => FetchError::Network {
                path: path.to_string(),
                reason: err.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn static_source_serves_known_paths_only() {
        let source = StaticSource::new().with("home/home.html", "<p>hi</p>");
        assert_eq!(
            block_on(source.fetch_text("home/home.html")).as_deref(),
            Ok("<p>hi</p>")
        );
        assert_eq!(
            block_on(source.fetch_text("nope/nope.html")),
            Err(FetchError::Status {
                path: "nope/nope.html".into(),
                status: 404
            })
        );
    }

    #[test]
    fn dir_source_refuses_parent_segments() {
        let source = DirSource::new(env!("CARGO_MANIFEST_DIR"));
        assert!(matches!(
            block_on(source.fetch_text("../Cargo.toml")),
            Err(FetchError::Status { status: 403, .. })
        ));
        assert!(block_on(source.fetch_text("Cargo.toml")).is_ok());
    }
}
