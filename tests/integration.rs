// SPDX-License-Identifier: MPL-2.0
use iced_folio::config::{self, Config};
use iced_folio::domain::gallery::{Category, GalleryItem, ItemSet, MediaRef};
use iced_folio::domain::lightbox::{LightboxKey, Transition};
use iced_folio::domain::portfolio::Portfolio;
use iced_folio::domain::tabs::TabId;
use iced_folio::error::{Error, ManifestError};
use iced_folio::manifest;
use iced_folio::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

fn item(category: &str, file: &str) -> GalleryItem {
    GalleryItem::new(Category::new(category), MediaRef::new(file), file)
}

fn sample_portfolio() -> Portfolio {
    let gallery = ItemSet::new(vec![
        item("wedding", "w1.jpg"),
        item("portrait", "p1.jpg"),
        item("wedding", "w2.jpg"),
    ]);
    let ugc = ItemSet::new(vec![item("beauty", "b1.mp4"), item("fashion", "f1.mp4")]);
    Portfolio::new(gallery, ugc)
}

#[test]
fn config_survives_a_save_and_reload() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.general.theme_mode = ThemeMode::Dark;
    settings.gallery.columns = Some(2);
    settings.contact.send_delay_ms = Some(500);
    config::save_to_path(&settings, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert_eq!(loaded.gallery.column_count(), 2);
    assert_eq!(loaded.contact.send_delay_ms, Some(500));
}

#[test]
fn unreadable_config_falls_back_to_defaults_with_a_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[general\ntheme_mode = ")
        .expect("Failed to write broken config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(config::LOAD_WARNING));
}

#[test]
fn missing_config_is_silent() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert!(warning.is_none());
}

#[test]
fn manifest_resolves_media_next_to_the_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::create_dir(dir.path().join("images")).expect("Failed to create images dir");
    fs::write(dir.path().join("images/w1.jpg"), b"jpeg").expect("Failed to write image");

    let manifest_path = dir.path().join("portfolio.toml");
    fs::write(
        &manifest_path,
        r#"
[profile]
name = "Simran"
tagline = "Wedding photography"

[[gallery]]
category = "wedding"
image = "images/w1.jpg"
title = "First dance"

[[gallery]]
category = "portrait"
image = "images/missing.jpg"

[[ugc]]
category = "beauty"
video = "videos/clip.mp4"
poster = "videos/clip.jpg"
"#,
    )
    .expect("Failed to write manifest");

    let loaded = manifest::load(&manifest_path).expect("Manifest should load");
    assert_eq!(loaded.profile.name, "Simran");
    assert!(!loaded.profile.portrait_available);

    let items = loaded.gallery.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "First dance");
    assert!(items[0].available);
    assert_eq!(items[0].media.path(), dir.path().join("images/w1.jpg"));
    assert!(!items[1].available);

    let clip = &loaded.ugc.items()[0];
    assert!(!clip.available);
    assert_eq!(
        clip.poster.as_ref().map(MediaRef::path),
        Some(dir.path().join("videos/clip.jpg").as_path())
    );
}

#[test]
fn manifest_rejects_the_reserved_category() {
    let result = manifest::parse(
        "[[gallery]]\ncategory = \"all\"\nimage = \"a.jpg\"\n",
        std::path::Path::new(""),
    );
    assert!(matches!(
        result,
        Err(Error::Manifest(ManifestError::ReservedCategory {
            section: "gallery",
            position: 0
        }))
    ));
}

#[test]
fn missing_manifest_is_reported() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let result = manifest::load(&dir.path().join("nowhere.toml"));
    assert!(matches!(
        result,
        Err(Error::Manifest(ManifestError::NotFound(_)))
    ));
}

#[test]
fn filtered_gallery_drives_lightbox_navigation() {
    let mut portfolio = sample_portfolio();

    let outcome = portfolio.select_category(TabId::Gallery, Category::new("wedding"));
    assert_eq!(outcome.visible_count, 2);
    assert_eq!(outcome.hidden, vec![1]);

    assert_eq!(portfolio.open_lightbox_at(2), Some(Ok(Transition::Opened)));
    let viewing = portfolio.lightbox().viewing().expect("lightbox should be open");
    assert_eq!(
        viewing.images(),
        &[MediaRef::new("w1.jpg"), MediaRef::new("w2.jpg")]
    );
    assert_eq!(viewing.index(), 1);

    let session = portfolio.lightbox_mut();
    assert_eq!(session.handle_key(LightboxKey::ArrowRight), Transition::Moved);
    assert_eq!(session.current(), Some(&MediaRef::new("w1.jpg")));
    assert_eq!(session.handle_key(LightboxKey::ArrowLeft), Transition::Moved);
    assert_eq!(session.current(), Some(&MediaRef::new("w2.jpg")));
    assert_eq!(session.handle_key(LightboxKey::Escape), Transition::Closed);
    assert!(!session.is_open());
}

#[test]
fn hidden_image_cannot_open_the_lightbox() {
    let mut portfolio = sample_portfolio();
    portfolio.select_category(TabId::Gallery, Category::new("wedding"));

    assert!(matches!(portfolio.open_lightbox_at(1), Some(Err(_))));
    assert!(!portfolio.lightbox().is_open());
    assert_eq!(portfolio.open_lightbox_at(7), None);
}

#[test]
fn closed_lightbox_ignores_arrow_keys() {
    let mut portfolio = sample_portfolio();
    let session = portfolio.lightbox_mut();
    assert_eq!(
        session.handle_key(LightboxKey::ArrowRight),
        Transition::Unchanged
    );
    assert!(session.index().is_none());
}

#[test]
fn switching_tabs_resets_every_filter() {
    let mut portfolio = sample_portfolio();
    portfolio.select_category(TabId::Gallery, Category::new("portrait"));
    portfolio.select_category(TabId::Ugc, Category::new("beauty"));

    let resets = portfolio
        .activate_tab(TabId::Ugc)
        .expect("switching to another tab should reset filters");
    assert_eq!(resets.len(), 2);
    assert_eq!(portfolio.active_tab(), TabId::Ugc);
    for tab in TabId::ALL {
        let set = portfolio.set(tab);
        assert!(set.selection().is_all());
        assert_eq!(set.visible_count(), set.len());
    }

    assert!(portfolio.activate_tab(TabId::Ugc).is_none());
}
