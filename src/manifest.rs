// SPDX-License-Identifier: MPL-2.0
//! Photo manifest loading.
//!
//! The gallery is fed a fixed, ordered list of [`PhotoRecord`]s at startup.
//! That list comes from one of two sources:
//!
//! - a TOML manifest listing each photo explicitly:
//!
//!   ```toml
//!   [[photos]]
//!   id = "harbour"
//!   category = "travel"
//!   image = "images/harbour.jpg"
//!   title = "Harbour at dawn"
//!   description = "Fishing boats heading out."
//!   ```
//!
//! - a directory whose immediate sub-directories are categories and whose
//!   image files become photos, sorted alphabetically.
//!
//! Both sources are validated the same way: every category must be
//! non-empty and every id unique. A manifest is either loaded completely or
//! rejected.

use crate::domain::photo::{Category, PhotoId, PhotoRecord};
use crate::error::{Error, ManifestError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Image extensions picked up when scanning a directory.
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    photos: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    #[serde(default)]
    id: Option<String>,
    category: String,
    image: PathBuf,
    title: String,
    #[serde(default)]
    description: String,
}

/// Loads photo records from a manifest file or a category directory.
///
/// # Errors
///
/// Returns an error if the source cannot be read or violates the record
/// invariants (empty category, duplicate id).
pub fn load(path: &Path) -> Result<Vec<PhotoRecord>> {
    if path.is_dir() {
        scan_directory(path)
    } else {
        load_manifest(path)
    }
}

/// Loads photo records from a TOML manifest.
///
/// Relative image paths are resolved against the manifest's directory.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid manifest.
pub fn load_manifest(path: &Path) -> Result<Vec<PhotoRecord>> {
    let content = fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    parse_manifest(&content, base_dir)
}

/// Parses manifest content, resolving relative image paths against `base_dir`.
///
/// Photos without an explicit id get `photo-<position>`.
///
/// # Errors
///
/// Returns [`ManifestError::Parse`] for malformed TOML and the validation
/// errors described in [`validate`].
pub fn parse_manifest(content: &str, base_dir: &Path) -> Result<Vec<PhotoRecord>> {
    let manifest: ManifestFile =
        toml::from_str(content).map_err(|e| ManifestError::Parse(e.to_string()))?;

    let mut records = Vec::with_capacity(manifest.photos.len());
    for (position, entry) in manifest.photos.into_iter().enumerate() {
        let id = entry.id.unwrap_or_else(|| format!("photo-{position}"));
        let category = Category::new(entry.category)
            .ok_or_else(|| ManifestError::EmptyCategory { id: id.clone() })?;
        let image = if entry.image.is_absolute() {
            entry.image
        } else {
            base_dir.join(entry.image)
        };

        records.push(PhotoRecord::new(
            PhotoId::new(id),
            category,
            image,
            entry.title,
            entry.description,
        ));
    }

    validate(&records)?;
    Ok(records)
}

/// Builds photo records from a directory of category folders.
///
/// Each immediate sub-directory of `root` is a category; supported image
/// files inside it become photos titled after their file stem. Categories
/// and files are both visited in alphabetical order. Files placed directly
/// in `root` have no category and are skipped.
///
/// # Errors
///
/// Returns an error if `root` or one of its category folders cannot be read.
pub fn scan_directory(root: &Path) -> Result<Vec<PhotoRecord>> {
    let mut category_dirs = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_dir() {
            category_dirs.push(path);
        }
    }
    category_dirs.sort();

    let mut records = Vec::new();
    for dir in category_dirs {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let category = Category::new(name.clone())
            .ok_or_else(|| ManifestError::EmptyCategory { id: name.clone() })?;

        let mut images = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_file() && is_supported_image(&path) {
                images.push(path);
            }
        }
        images.sort_by_key(|path| path.file_name().map(|n| n.to_ascii_lowercase()));

        for image in images {
            let file_name = image
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let title = image
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| file_name.clone());

            records.push(PhotoRecord::new(
                PhotoId::new(format!("{category}/{file_name}")),
                category.clone(),
                image,
                title,
                String::new(),
            ));
        }
    }

    validate(&records)?;
    Ok(records)
}

/// Checks that no two records share an id.
///
/// Category non-emptiness is already guaranteed by [`Category`].
///
/// # Errors
///
/// Returns [`ManifestError::DuplicateId`] naming the first repeated id.
pub fn validate(records: &[PhotoRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(Error::Manifest(ManifestError::DuplicateId(
                record.id().to_string(),
            )));
        }
    }
    Ok(())
}

/// Checks whether a path has a supported image extension (case-insensitive).
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn ids(records: &[PhotoRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id().as_str()).collect()
    }

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create dir");
        }
        fs::write(path, b"fake image data").expect("failed to write test file");
    }

    #[test]
    fn parse_manifest_keeps_declaration_order() {
        let content = r#"
            [[photos]]
            id = "harbour"
            category = "travel"
            image = "images/harbour.jpg"
            title = "Harbour"
            description = "Boats"

            [[photos]]
            id = "fern"
            category = "nature"
            image = "images/fern.jpg"
            title = "Fern"
        "#;

        let records = parse_manifest(content, Path::new("/site")).expect("valid manifest");

        assert_eq!(ids(&records), ["harbour", "fern"]);
        assert_eq!(records[0].category().as_str(), "travel");
        assert_eq!(records[0].image(), Path::new("/site/images/harbour.jpg"));
        assert_eq!(records[0].description(), "Boats");
        assert_eq!(records[1].description(), "");
    }

    #[test]
    fn parse_manifest_assigns_positional_ids() {
        let content = r#"
            [[photos]]
            category = "a"
            image = "one.jpg"
            title = "One"

            [[photos]]
            category = "b"
            image = "two.jpg"
            title = "Two"
        "#;

        let records = parse_manifest(content, Path::new("")).expect("valid manifest");
        assert_eq!(ids(&records), ["photo-0", "photo-1"]);
    }

    #[test]
    fn parse_manifest_keeps_absolute_image_paths() {
        let content = r#"
            [[photos]]
            category = "a"
            image = "/srv/photos/one.jpg"
            title = "One"
        "#;

        let records = parse_manifest(content, Path::new("/site")).expect("valid manifest");
        assert_eq!(records[0].image(), Path::new("/srv/photos/one.jpg"));
    }

    #[test]
    fn parse_manifest_rejects_empty_category() {
        let content = r#"
            [[photos]]
            id = "blank"
            category = "  "
            image = "one.jpg"
            title = "One"
        "#;

        match parse_manifest(content, Path::new("")) {
            Err(Error::Manifest(ManifestError::EmptyCategory { id })) => assert_eq!(id, "blank"),
            other => panic!("expected EmptyCategory, got {:?}", other),
        }
    }

    #[test]
    fn parse_manifest_rejects_duplicate_ids() {
        let content = r#"
            [[photos]]
            id = "same"
            category = "a"
            image = "one.jpg"
            title = "One"

            [[photos]]
            id = "same"
            category = "b"
            image = "two.jpg"
            title = "Two"
        "#;

        match parse_manifest(content, Path::new("")) {
            Err(Error::Manifest(ManifestError::DuplicateId(id))) => assert_eq!(id, "same"),
            other => panic!("expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn parse_manifest_rejects_missing_fields() {
        let content = r#"
            [[photos]]
            id = "no-category"
            image = "one.jpg"
            title = "One"
        "#;

        let result = parse_manifest(content, Path::new(""));
        assert!(matches!(result, Err(Error::Manifest(ManifestError::Parse(_)))));
    }

    #[test]
    fn empty_manifest_yields_no_records() {
        let records = parse_manifest("", Path::new("")).expect("empty manifest is valid");
        assert!(records.is_empty());
    }

    #[test]
    fn load_manifest_resolves_against_manifest_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest_path = temp_dir.path().join("gallery.toml");
        fs::write(
            &manifest_path,
            "[[photos]]\ncategory = \"a\"\nimage = \"pics/one.jpg\"\ntitle = \"One\"\n",
        )
        .expect("failed to write manifest");

        let records = load(&manifest_path).expect("load failed");
        assert_eq!(records[0].image(), temp_dir.path().join("pics/one.jpg"));
    }

    #[test]
    fn load_manifest_missing_file_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_manifest(&temp_dir.path().join("missing.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn scan_directory_uses_folders_as_categories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path();
        touch(&root.join("travel/b.png"));
        touch(&root.join("travel/A.jpg"));
        touch(&root.join("nature/fern.JPEG"));
        touch(&root.join("nature/notes.txt"));
        touch(&root.join("loose.jpg"));

        let records = load(root).expect("scan failed");

        assert_eq!(
            ids(&records),
            ["nature/fern.JPEG", "travel/A.jpg", "travel/b.png"]
        );
        assert_eq!(records[0].category().as_str(), "nature");
        assert_eq!(records[0].title(), "fern");
        assert_eq!(records[1].image(), root.join("travel/A.jpg"));
    }

    #[test]
    fn scan_directory_distinguishes_same_stem() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let root = temp_dir.path();
        touch(&root.join("events/party.jpg"));
        touch(&root.join("events/party.png"));

        let records = scan_directory(root).expect("scan failed");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title(), records[1].title());
    }

    #[test]
    fn supported_image_check_is_case_insensitive() {
        assert!(is_supported_image(Path::new("a.JPG")));
        assert!(is_supported_image(Path::new("a.webp")));
        assert!(!is_supported_image(Path::new("a.mp4")));
        assert!(!is_supported_image(Path::new("README")));
    }
}
