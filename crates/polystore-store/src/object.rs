use std::path::Path;

/// Read-only metadata snapshot of one stored item.
///
/// Each backend provides its own implementor: the local store wraps a
/// `std::fs::Metadata` plus the virtual path it was examined under; the
/// composite store wraps any inner object and re-prefixes its path.
///
/// `path()` is the one accessor with contract weight: it must be valid
/// input to a subsequent call on the store (hierarchy) that returned the
/// object.
pub trait Object: Send + Sync {
    /// Content checksum, if the backend tracks one. Empty means unknown.
    fn checksum(&self) -> String;

    /// Backend-stable identifier for the object.
    fn id(&self) -> String;

    /// Whether the object is a directory.
    fn is_dir(&self) -> bool;

    /// Modification time in seconds since the Unix epoch.
    fn mod_time(&self) -> i64;

    /// MIME type, derived from the path extension where the backend has no
    /// richer source. Empty for unknown types and directories.
    fn mime_type(&self) -> String;

    /// The path the caller should use to address this object through the
    /// layer that returned it.
    fn path(&self) -> String;

    /// Size in bytes. Zero for directories.
    fn size(&self) -> u64;

    /// Backend-defined payload, opaque to generic code.
    fn optional(&self) -> Option<serde_json::Value> {
        None
    }
}

/// Guess a MIME type from a path's extension.
///
/// Returns an empty string for unknown extensions, matching the
/// "unknown/unsupported" convention of [`Object::mime_type`].
pub fn mime_type_for_path(path: &str) -> String {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    match ext.to_ascii_lowercase().as_str() {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" | "mjs" => "text/javascript",
        "json" => "application/json",
        "txt" | "text" | "log" | "conf" => "text/plain",
        "md" | "markdown" => "text/markdown",
        "csv" => "text/csv",
        "xml" => "application/xml",
        "yaml" | "yml" => "application/yaml",
        "toml" => "application/toml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "bmp" => "image/bmp",
        "ico" => "image/vnd.microsoft.icon",
        "tif" | "tiff" => "image/tiff",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "bz2" => "application/x-bzip2",
        "xz" => "application/x-xz",
        "zst" => "application/zstd",
        "tar" => "application/x-tar",
        "7z" => "application/x-7z-compressed",
        "wasm" => "application/wasm",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "mp3" => "audio/mpeg",
        "ogg" | "oga" => "audio/ogg",
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        _ => "",
    }
    .to_string()
}
