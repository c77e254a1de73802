//! Storage helpers for staged uploads on disk.

use std::path::{Path, PathBuf};

/// Sanitize a filename for safe storage on disk.
///
/// Replaces path separators and other problematic characters, trims the
/// result, and caps its length.
pub fn sanitize_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    // Trim and limit length
    let trimmed = sanitized.trim().trim_matches('_');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.chars().take(100).collect()
    }
}

/// Construct the staging path for an upload.
///
/// A random prefix keeps concurrent uploads with the same name apart:
/// `{upload_dir}/{uuid}_{sanitized_name}`
pub fn staged_upload_path(upload_dir: &Path, original_name: &str) -> PathBuf {
    let filename = format!(
        "{}_{}",
        uuid::Uuid::new_v4().simple(),
        sanitize_filename(original_name)
    );
    upload_dir.join(filename)
}

/// Write upload content to its staging path, creating the directory if
/// needed. Returns the path the content landed at.
pub fn save_upload(
    upload_dir: &Path,
    original_name: &str,
    content: &[u8],
) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(upload_dir)?;
    let path = staged_upload_path(upload_dir, original_name);
    std::fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("picking list.pdf"), "picking list.pdf");
        assert_eq!(sanitize_filename("a/b\\c:d.pdf"), "a_b_c_d.pdf");
        assert_eq!(sanitize_filename("  spaced.pdf  "), "spaced.pdf");
        assert_eq!(sanitize_filename("///"), "upload");
        assert_eq!(sanitize_filename(""), "upload");
    }

    #[test]
    fn test_sanitize_filename_caps_length() {
        let long = "a".repeat(300);
        assert_eq!(sanitize_filename(&long).len(), 100);
    }

    #[test]
    fn test_staged_paths_are_unique() {
        let dir = Path::new("/uploads");
        let a = staged_upload_path(dir, "list.pdf");
        let b = staged_upload_path(dir, "list.pdf");
        assert_ne!(a, b);
        assert!(a.to_string_lossy().ends_with("_list.pdf"));
    }

    #[test]
    fn test_save_upload() {
        let dir = tempdir().unwrap();
        let staging = dir.path().join("uploads");

        let path = save_upload(&staging, "list.pdf", b"%PDF-1.4 fake").unwrap();
        assert!(path.exists());
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4 fake");
        assert_eq!(path.parent(), Some(staging.as_path()));
    }
}
