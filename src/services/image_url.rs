//! Image URL compatibility rules.
//!
//! Project rows may hold image URLs written by older deployments: bare
//! `/uploads/...` paths, absolute dev-server URLs, production URLs without the
//! `/api` prefix, or a `/php-backend/uploads/...` prefix. Everything that
//! points into the upload store is folded into `/api/uploads/{file}`.

/// Public path prefix the upload store is served under
pub const UPLOADS_PATH: &str = "/api/uploads/";

/// Hosts from earlier deployments whose `/uploads/` URLs are ours
const LEGACY_HOSTS: &[&str] = &["localhost:", "127.0.0.1:", "redlinesolution.rw/"];

/// Extract the stored file name when `url` points into the upload store
pub fn upload_file_name(url: &str) -> Option<&str> {
    let url = url.trim();

    let rest = if let Some(rest) = url.strip_prefix(UPLOADS_PATH) {
        rest
    } else if let Some(rest) = url.strip_prefix("/uploads/") {
        rest
    } else if let Some((_, rest)) = url.split_once("/php-backend/uploads/") {
        rest
    } else if LEGACY_HOSTS.iter().any(|host| url.contains(host)) {
        url.split_once("/uploads/")?.1
    } else {
        return None;
    };

    is_plain_file_name(rest).then_some(rest)
}

/// Canonical stored form (`/api/uploads/{file}`) of an internal image URL.
/// External URLs yield `None`.
pub fn canonical_stored_path(url: &str) -> Option<String> {
    upload_file_name(url).map(|name| format!("{}{}", UPLOADS_PATH, name))
}

/// Absolute URL a browser can load, given the site's public base URL
pub fn normalize(url: Option<&str>, base_url: &str) -> Option<String> {
    let url = url.map(str::trim).filter(|u| !u.is_empty())?;

    match canonical_stored_path(url) {
        Some(path) => Some(format!("{}{}", base_url.trim_end_matches('/'), path)),
        None => Some(url.to_string()),
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://redlinesolution.rw";

    #[test]
    fn test_blank_is_none() {
        assert_eq!(normalize(None, BASE), None);
        assert_eq!(normalize(Some("  "), BASE), None);
    }

    #[test]
    fn test_relative_paths() {
        assert_eq!(
            normalize(Some("/api/uploads/1700000000-ab12.jpg"), BASE).as_deref(),
            Some("https://redlinesolution.rw/api/uploads/1700000000-ab12.jpg")
        );
        assert_eq!(
            normalize(Some("/uploads/a.png"), BASE).as_deref(),
            Some("https://redlinesolution.rw/api/uploads/a.png")
        );
    }

    #[test]
    fn test_legacy_absolute_urls() {
        assert_eq!(
            normalize(Some("http://localhost:8000/uploads/a.png"), BASE).as_deref(),
            Some("https://redlinesolution.rw/api/uploads/a.png")
        );
        assert_eq!(
            normalize(Some("https://redlinesolution.rw/uploads/a.png"), BASE).as_deref(),
            Some("https://redlinesolution.rw/api/uploads/a.png")
        );
        assert_eq!(
            normalize(Some("https://host.example/php-backend/uploads/a.png"), "").as_deref(),
            Some("/api/uploads/a.png")
        );
    }

    #[test]
    fn test_external_urls_pass_through() {
        let url = "https://images.example.com/uploads/a.png";
        assert_eq!(normalize(Some(url), BASE).as_deref(), Some(url));
        assert_eq!(canonical_stored_path(url), None);
    }

    #[test]
    fn test_traversal_is_not_internal() {
        assert_eq!(upload_file_name("/api/uploads/../secret.txt"), None);
        assert_eq!(upload_file_name("/uploads/"), None);
        assert_eq!(upload_file_name("/api/uploads/a/b.png"), None);
    }
}
