// Host-side tests for background palettes.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod theme {
    include!("../src/core/theme.rs");
}

use theme::*;

fn approx(a: Rgb, b: Rgb) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
}

#[test]
fn parses_hex_colors() {
    assert_eq!(parse_hex("#FF0000"), Some([1.0, 0.0, 0.0]));
    assert_eq!(parse_hex("00ff00"), Some([0.0, 1.0, 0.0]));
    assert_eq!(parse_hex("#FFF"), None);
    assert_eq!(parse_hex("#GG0000"), None);
    assert_eq!(parse_hex(""), None);
}

#[test]
fn linear_conversion_keeps_endpoints() {
    assert_eq!(srgb_to_linear(0.0), 0.0);
    assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    // Mid grey is darker in linear light.
    assert!((srgb_to_linear(0.5) - 0.2140).abs() < 1e-3);
}

#[test]
fn bad_hex_falls_back_to_black() {
    assert_eq!(linear_from_hex("not a color"), [0.0, 0.0, 0.0]);
}

#[test]
fn default_palette_without_theme_class() {
    let p = Palette::for_body_classes(["home", "loaded"]);
    assert_eq!(p, Palette::default());
    assert_eq!(p, Palette::from_hex(DEFAULT_GRADIENT));
}

#[test]
fn theme_class_selects_its_gradient() {
    let p = Palette::for_body_classes(["theme-dayout"]);
    assert!(approx(p.colors[0], linear_from_hex("#87CEEB")));
    assert!(approx(p.colors[1], linear_from_hex("#FFB347")));
}

#[test]
fn first_theme_in_table_order_wins() {
    let p = Palette::for_body_classes(["theme-packages", "theme-spa"]);
    assert_eq!(p, Palette::from_hex(THEME_GRADIENTS[0].1));
}
