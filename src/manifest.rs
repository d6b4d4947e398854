// SPDX-License-Identifier: MPL-2.0
//! Portfolio manifest loading.
//!
//! The manifest is a TOML file describing the profile and both portfolio
//! panels:
//!
//! ```toml
//! [profile]
//! name = "Simran"
//! tagline = "Wedding & portrait photography"
//! about = "..."
//! portrait = "images/portrait.jpg"
//!
//! [[gallery]]
//! category = "wedding"
//! image = "images/w1.jpg"
//! title = "First dance"
//!
//! [[ugc]]
//! category = "beauty"
//! video = "videos/clip1.mp4"
//! poster = "videos/clip1.jpg"
//! title = "Glow routine"
//! ```
//!
//! Relative media paths resolve against the manifest's directory. Missing
//! media files are not errors; the item is kept and flagged unavailable.

use crate::domain::gallery::{Category, GalleryItem, ItemSet, MediaRef};
use crate::error::{Error, ManifestError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Who the portfolio belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub portrait: Option<PathBuf>,
    /// Whether the portrait file was found when the manifest was loaded.
    #[serde(skip)]
    pub portrait_available: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: default_name(),
            tagline: String::new(),
            about: String::new(),
            portrait: None,
            portrait_available: false,
        }
    }
}

fn default_name() -> String {
    "Portfolio".to_string()
}

#[derive(Debug, Deserialize)]
struct GalleryEntry {
    category: String,
    image: PathBuf,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UgcEntry {
    category: String,
    video: PathBuf,
    #[serde(default)]
    poster: Option<PathBuf>,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    #[serde(default)]
    profile: Profile,
    #[serde(default)]
    gallery: Vec<GalleryEntry>,
    #[serde(default)]
    ugc: Vec<UgcEntry>,
}

/// A parsed manifest with media paths resolved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Manifest {
    pub profile: Profile,
    pub gallery: ItemSet,
    pub ugc: ItemSet,
}

/// Reads and resolves the manifest at `path`.
///
/// # Errors
///
/// Returns [`ManifestError::NotFound`] if the file is missing,
/// [`ManifestError::Parse`] for invalid TOML and a category error for
/// entries with an empty or reserved category.
pub fn load(path: &Path) -> Result<Manifest> {
    if !path.exists() {
        return Err(ManifestError::NotFound(path.display().to_string()).into());
    }
    let content = fs::read_to_string(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    parse(&content, base)
}

/// Parses manifest text, resolving relative paths against `base`.
pub fn parse(content: &str, base: &Path) -> Result<Manifest> {
    let raw: RawManifest =
        toml::from_str(content).map_err(|e| Error::from(ManifestError::Parse(e.to_string())))?;

    let gallery = raw
        .gallery
        .into_iter()
        .enumerate()
        .map(|(position, entry)| {
            let category = category("gallery", position, &entry.category)?;
            let image = resolve(base, &entry.image);
            let title = entry.title.unwrap_or_else(|| title_from(&image));
            let available = image.exists();
            Ok(GalleryItem::new(category, MediaRef::new(image), title).with_availability(available))
        })
        .collect::<Result<Vec<_>>>()?;

    let ugc = raw
        .ugc
        .into_iter()
        .enumerate()
        .map(|(position, entry)| {
            let category = category("ugc", position, &entry.category)?;
            let video = resolve(base, &entry.video);
            let title = entry.title.unwrap_or_else(|| title_from(&video));
            let available = video.exists();
            let mut item =
                GalleryItem::new(category, MediaRef::new(video), title).with_availability(available);
            if let Some(poster) = entry.poster {
                item = item.with_poster(MediaRef::new(resolve(base, &poster)));
            }
            Ok(item)
        })
        .collect::<Result<Vec<_>>>()?;

    let mut profile = raw.profile;
    profile.portrait = profile.portrait.map(|p| resolve(base, &p));
    profile.portrait_available = profile.portrait.as_deref().is_some_and(Path::exists);

    Ok(Manifest {
        profile,
        gallery: ItemSet::new(gallery),
        ugc: ItemSet::new(ugc),
    })
}

fn category(section: &'static str, position: usize, raw: &str) -> Result<Category> {
    let category = Category::new(raw);
    if category.as_str().is_empty() {
        return Err(ManifestError::EmptyCategory { section, position }.into());
    }
    if category.as_str().eq_ignore_ascii_case(Category::ALL) {
        return Err(ManifestError::ReservedCategory { section, position }.into());
    }
    Ok(category)
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn title_from(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
[profile]
name = "Simran"
tagline = "Wedding & portrait photography"
portrait = "images/portrait.jpg"

[[gallery]]
category = "wedding"
image = "images/w1.jpg"
title = "First dance"

[[gallery]]
category = "portrait"
image = "images/p1.jpg"

[[ugc]]
category = "beauty"
video = "videos/clip1.mp4"
poster = "videos/clip1.jpg"
"#;

    #[test]
    fn parses_sections_and_resolves_paths() {
        let manifest = parse(SAMPLE, Path::new("/site")).expect("sample should parse");

        assert_eq!(manifest.profile.name, "Simran");
        assert_eq!(
            manifest.profile.portrait,
            Some(PathBuf::from("/site/images/portrait.jpg"))
        );
        assert_eq!(manifest.gallery.len(), 2);
        assert_eq!(manifest.ugc.len(), 1);

        let first = &manifest.gallery.items()[0];
        assert_eq!(first.title, "First dance");
        assert_eq!(first.media.path(), Path::new("/site/images/w1.jpg"));
        assert!(!first.available);

        assert_eq!(manifest.gallery.items()[1].title, "p1");
        assert_eq!(
            manifest.ugc.items()[0].poster.as_ref().map(MediaRef::path),
            Some(Path::new("/site/videos/clip1.jpg"))
        );
    }

    #[test]
    fn every_item_starts_visible() {
        let manifest = parse(SAMPLE, Path::new("/site")).unwrap();
        assert_eq!(manifest.gallery.visible_count(), 2);
        assert!(manifest.gallery.selection().is_all());
    }

    #[test]
    fn empty_manifest_is_valid() {
        let manifest = parse("", Path::new(".")).unwrap();
        assert!(manifest.gallery.is_empty());
        assert!(manifest.ugc.is_empty());
        assert_eq!(manifest.profile.name, "Portfolio");
    }

    #[test]
    fn reserved_category_is_rejected() {
        let content = "[[gallery]]\ncategory = \"ALL\"\nimage = \"a.jpg\"\n";
        match parse(content, Path::new(".")) {
            Err(Error::Manifest(ManifestError::ReservedCategory { section, position })) => {
                assert_eq!(section, "gallery");
                assert_eq!(position, 0);
            }
            other => panic!("expected reserved category error, got {other:?}"),
        }
    }

    #[test]
    fn blank_category_is_rejected() {
        let content = "[[ugc]]\ncategory = \"  \"\nvideo = \"a.mp4\"\n";
        assert!(matches!(
            parse(content, Path::new(".")),
            Err(Error::Manifest(ManifestError::EmptyCategory { section: "ugc", position: 0 }))
        ));
    }

    #[test]
    fn unknown_top_level_key_is_a_parse_error() {
        let content = "[[videos]]\ncategory = \"x\"\n";
        assert!(matches!(
            parse(content, Path::new(".")),
            Err(Error::Manifest(ManifestError::Parse(_)))
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("portfolio.toml");
        assert!(matches!(
            load(&path),
            Err(Error::Manifest(ManifestError::NotFound(_)))
        ));
    }

    #[test]
    fn load_marks_existing_media_available() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("here.jpg"), b"jpeg").unwrap();
        let path = dir.path().join("portfolio.toml");
        fs::write(
            &path,
            "[[gallery]]\ncategory = \"travel\"\nimage = \"here.jpg\"\n\n\
             [[gallery]]\ncategory = \"travel\"\nimage = \"gone.jpg\"\n",
        )
        .unwrap();

        let manifest = load(&path).unwrap();
        let items = manifest.gallery.items();
        assert!(items[0].available);
        assert!(!items[1].available);
    }
}
