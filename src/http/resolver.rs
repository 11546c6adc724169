use std::fmt;
use std::path::Path;

use tokio::fs;

/// A resolved resource: fully materialized body plus its content type.
///
/// Produced by [`resolve`] and consumed immediately by the response
/// serializer. Bodies are read whole into memory; there is no streaming
/// and no size limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub body: Vec<u8>,
    pub content_type: String,
}

/// Resolution failure. Carries the offending URI so the 404 body can
/// embed the same message the server has always produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    NotFound(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NotFound(uri) => write!(f, "Path '{}' not found", uri),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Content-type policy for files served out of the webroot.
///
/// Intentionally naive and kept in one place so it can be swapped out
/// later without touching resolution: a URI containing the substring
/// `images` anywhere is typed `image/<extension after the last dot>`;
/// otherwise anything not ending in `html` is `text/plain`.
pub fn content_type_for(uri: &str) -> String {
    if uri.contains("images") {
        let ext = uri.rsplit('.').next().unwrap_or("");
        format!("image/{}", ext)
    } else if !uri.ends_with("html") {
        "text/plain".to_string()
    } else {
        "text/html".to_string()
    }
}

/// Maps a normalized URI to a resource under `webroot`.
///
/// In priority order: `/` lists the webroot itself, `/images` lists the
/// `images` subdirectory with a link back home, any other URI is served
/// as a whole file if `webroot + uri` exists. Everything else fails with
/// [`ResolveError::NotFound`]. Listing order is whatever the filesystem
/// enumerates; it is not guaranteed stable across platforms.
pub async fn resolve(uri: &str, webroot: &Path) -> Result<Resource, ResolveError> {
    tracing::debug!(uri, "processing uri");

    if uri == "/" {
        // The root listing leaves its <ul> unclosed. Long-standing output
        // quirk, kept as-is.
        let mut body = list_directory(webroot, "/", uri).await?;
        body.extend_from_slice(b"</html>");
        return Ok(Resource {
            body,
            content_type: "text/html".to_string(),
        });
    }

    if uri == "/images" {
        let mut body = list_directory(&webroot.join("images"), "/images/", uri).await?;
        body.extend_from_slice(b"</ul><a href=\"/\">Home</a>");
        body.extend_from_slice(b"</html>");
        return Ok(Resource {
            body,
            content_type: "text/html".to_string(),
        });
    }

    // Drop exactly one leading slash before joining, like the original
    // path handling did.
    let path = webroot.join(uri.strip_prefix('/').unwrap_or(uri));

    match fs::read(&path).await {
        Ok(body) => Ok(Resource {
            body,
            content_type: content_type_for(uri),
        }),
        // Missing files and unreadable paths (a nested directory, say) are
        // indistinguishable to the client: both are a 404.
        Err(_) => Err(ResolveError::NotFound(uri.to_string())),
    }
}

/// Renders `<html><h1>{dir}</h1><ul>` followed by one hyperlink per entry.
///
/// The caller appends its own closing markup; the root listing has never
/// closed its `<ul>`, so that quirk is the caller's to keep.
async fn list_directory(
    dir: &Path,
    link_prefix: &str,
    uri: &str,
) -> Result<Vec<u8>, ResolveError> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("<html><h1>{}</h1><ul>", dir.display()).as_bytes());

    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|_| ResolveError::NotFound(uri.to_string()))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|_| ResolveError::NotFound(uri.to_string()))?
    {
        let name = entry.file_name().to_string_lossy().into_owned();
        body.extend_from_slice(
            format!("<li><a href=\"{0}{1}\">{1}</a></li>", link_prefix, name).as_bytes(),
        );
    }

    Ok(body)
}
