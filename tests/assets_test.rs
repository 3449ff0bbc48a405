//! Loading sprites from an asset directory on disk.

use std::fs;
use std::path::PathBuf;

use arena_display::config::ViewerConfig;
use arena_display::term::AssetTable;
use arena_display::types::{Rgb, REQUIRED_IMAGES};
use image::{Rgba, RgbaImage};

/// Fresh scratch directory under the system temp dir.
fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("arena-display-{}-{tag}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_png(dir: &PathBuf, name: &str, px: [u8; 4]) {
    RgbaImage::from_pixel(3, 2, Rgba(px)).save(dir.join(name)).unwrap();
}

#[test]
fn loads_every_png_in_the_directory() {
    let dir = scratch_dir("full");
    for name in REQUIRED_IMAGES {
        write_png(&dir, name, [1, 2, 3, 255]);
    }
    write_png(&dir, "custom.png", [9, 8, 7, 255]);
    fs::write(dir.join("notes.txt"), "not an image").unwrap();

    let table = AssetTable::load(&dir).unwrap();
    assert_eq!(table.len(), REQUIRED_IMAGES.len() + 1);
    assert!(!table.contains("notes.txt"));

    let custom = table.get("custom.png").unwrap();
    assert_eq!((custom.width(), custom.height()), (3, 2));
    assert_eq!(custom.pixel(2, 1), Some(Rgb::new(9, 8, 7)));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn transparent_png_pixels_read_as_none() {
    let dir = scratch_dir("alpha");
    for name in REQUIRED_IMAGES {
        write_png(&dir, name, [0, 0, 0, 0]);
    }
    let table = AssetTable::load(&dir).unwrap();
    assert_eq!(table.get("npc1.png").unwrap().pixel(0, 0), None);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_required_sprite_is_an_error() {
    let dir = scratch_dir("partial");
    for name in REQUIRED_IMAGES.iter().filter(|n| **n != "enemy3.png") {
        write_png(&dir, name, [1, 2, 3, 255]);
    }

    let err = AssetTable::load(&dir).unwrap_err();
    assert!(format!("{err:#}").contains("enemy3.png"), "{err:#}");
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_directory_is_an_error() {
    let dir = std::env::temp_dir().join("arena-display-does-not-exist");
    assert!(AssetTable::load(dir).is_err());
}

#[test]
fn bundled_sprites_are_complete() {
    let root = concat!(env!("CARGO_MANIFEST_DIR"), "/display/images");
    let table = AssetTable::load(root).unwrap();
    assert!(table.contains("player.png"));
    assert_eq!(table.names().len(), table.len());
}

#[test]
fn configured_player_image_must_exist_at_startup() {
    let root = concat!(env!("CARGO_MANIFEST_DIR"), "/display/images");
    let mut config = ViewerConfig {
        asset_root: PathBuf::from(root),
        ..ViewerConfig::default()
    };
    assert!(config.load_assets().unwrap().contains("player.png"));

    config.player_image = "hero.png".to_string();
    let err = config.load_assets().unwrap_err();
    assert!(format!("{err:#}").contains("hero.png"), "{err:#}");
}
