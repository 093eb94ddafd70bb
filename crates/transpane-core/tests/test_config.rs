use transpane_core::config::{Rgb, ViewerConfig, ZoomConfig};
use transpane_core::consts::{
    DEFAULT_OPACITY, MAX_SCALE, MIN_SCALE, VERTICAL_ASPECT_THRESHOLD, WHEEL_SENSITIVITY, ZOOM_STEP,
};
use transpane_core::error::TranspaneError;

#[test]
fn test_defaults_match_constants() {
    let cfg = ViewerConfig::default();
    assert_eq!(cfg.layout.vertical_threshold, VERTICAL_ASPECT_THRESHOLD);
    assert_eq!(cfg.zoom.min_scale, MIN_SCALE);
    assert_eq!(cfg.zoom.max_scale, MAX_SCALE);
    assert_eq!(cfg.zoom.wheel_sensitivity, WHEEL_SENSITIVITY);
    assert_eq!(cfg.zoom.step, ZOOM_STEP);
    assert_eq!(cfg.overlay.default_opacity, DEFAULT_OPACITY);
    assert!(cfg.overlay.font_path.is_none());
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_toml_round_trip() {
    let cfg = ViewerConfig::default();
    let text = toml::to_string_pretty(&cfg).unwrap();
    let back: ViewerConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn test_partial_toml_fills_defaults() {
    let text = r#"
[zoom]
max_scale = 4.0

[layout]
vertical_threshold = 1.5
"#;
    let cfg: ViewerConfig = toml::from_str(text).unwrap();
    assert_eq!(cfg.zoom.max_scale, 4.0);
    assert_eq!(cfg.zoom.min_scale, MIN_SCALE);
    assert_eq!(cfg.layout.vertical_threshold, 1.5);
    assert_eq!(cfg.overlay, ViewerConfig::default().overlay);
}

#[test]
fn test_empty_toml_is_default() {
    let cfg: ViewerConfig = toml::from_str("").unwrap();
    assert_eq!(cfg, ViewerConfig::default());
}

#[test]
fn test_validate_rejects_inverted_zoom_range() {
    let cfg = ViewerConfig {
        zoom: ZoomConfig {
            min_scale: 4.0,
            max_scale: 2.0,
            ..ZoomConfig::default()
        },
        ..ViewerConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(TranspaneError::InvalidConfig(_))));
}

#[test]
fn test_validate_rejects_opacity_out_of_range() {
    let mut cfg = ViewerConfig::default();
    cfg.overlay.default_opacity = 0.05;
    assert!(cfg.validate().is_err());
}

#[test]
fn test_validate_rejects_non_positive_threshold() {
    let mut cfg = ViewerConfig::default();
    cfg.layout.vertical_threshold = 0.0;
    assert!(cfg.validate().is_err());
}

#[test]
fn test_zoom_clamp() {
    let z = ZoomConfig::default();
    assert_eq!(z.clamp(100.0), MAX_SCALE);
    assert_eq!(z.clamp(0.0), MIN_SCALE);
    assert_eq!(z.clamp(2.0), 2.0);
}

#[test]
fn test_rgb_display() {
    assert_eq!(Rgb([255, 255, 255]).to_string(), "#ffffff");
    assert_eq!(Rgb([17, 0, 171]).to_string(), "#1100ab");
}
