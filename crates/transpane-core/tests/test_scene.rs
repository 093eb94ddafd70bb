mod common;

use approx::assert_relative_eq;
use common::{dims, region, side_by_side};
use transpane_core::config::{EasingConfig, ViewerConfig, ZoomConfig};
use transpane_core::geometry::{Orientation, PxRect};
use transpane_core::region::parse_regions;
use transpane_core::scene::{compose, split_panes, Opacity, OverlayStyle, PaneKind, PaneSplit};
use transpane_core::viewport::{PointerEvent, ViewTransform};
use transpane_core::viewer::Viewer;

fn no_easing() -> ViewerConfig {
    ViewerConfig {
        easing: EasingConfig {
            enabled: false,
            ..EasingConfig::default()
        },
        ..ViewerConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Overlay style
// ---------------------------------------------------------------------------

#[test]
fn test_end_to_end_wide_image_half_height_region() {
    // 1200x800 image, top half of the grid, two characters.
    let r = region(0, 0, 500, 1000, "你好");
    let style = OverlayStyle::for_region(&r, &ViewerConfig::default());

    assert_eq!(style.orientation, Orientation::Horizontal);
    assert_relative_eq!(style.placement.top, 0.0);
    assert_relative_eq!(style.placement.left, 0.0);
    assert_relative_eq!(style.placement.width, 100.0);
    assert_relative_eq!(style.placement.height, 50.0);
    assert_relative_eq!(style.font_size.height_percent, 85.0);
    assert_relative_eq!(style.font_size.width_percent, 47.5);
    assert_relative_eq!(style.line_height, 1.0);

    // In a 600x600 pane the image is 600x400, the box 600x200.
    let frame = compose(
        dims(1200, 800),
        &[r],
        ViewTransform::IDENTITY,
        Opacity::new(0.9),
        side_by_side(600.0, 600.0),
        &ViewerConfig::default(),
    );
    let b = &frame.translated.overlays[0];
    assert_relative_eq!(b.rect.width, 600.0);
    assert_relative_eq!(b.rect.height, 200.0);
    assert_relative_eq!(b.rect.y, 100.0);
    // min(0.85 * 200, 0.475 * 600) = 170
    assert_relative_eq!(b.font_px, 170.0, max_relative = 1e-4);
}

#[test]
fn test_vertical_region_style() {
    let r = region(0, 0, 800, 100, "東京駅");
    let style = OverlayStyle::for_region(&r, &ViewerConfig::default());
    assert!(style.is_vertical());
    assert_relative_eq!(style.line_height, 1.1);
    assert_relative_eq!(style.font_size.width_percent, 85.0);
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

#[test]
fn test_original_pane_has_no_overlays() {
    let regions = parse_regions(common::SAMPLE_REGIONS_JSON).unwrap();
    let frame = compose(
        dims(1000, 1000),
        &regions,
        ViewTransform::IDENTITY,
        Opacity::new(0.5),
        side_by_side(400.0, 400.0),
        &ViewerConfig::default(),
    );
    assert_eq!(frame.original.kind, PaneKind::Original);
    assert!(frame.original.overlays.is_empty());
    assert_eq!(frame.translated.kind, PaneKind::Translated);
    assert_eq!(frame.translated.overlays.len(), 2);
}

#[test]
fn test_overlays_keep_input_order() {
    let regions = vec![
        region(0, 0, 100, 100, "first"),
        region(0, 0, 100, 100, "second"),
        region(500, 500, 600, 900, "third"),
    ];
    let frame = compose(
        dims(640, 480),
        &regions,
        ViewTransform::IDENTITY,
        Opacity::new(1.0),
        side_by_side(320.0, 240.0),
        &ViewerConfig::default(),
    );
    let texts: Vec<&str> = frame
        .translated
        .overlays
        .iter()
        .map(|o| o.text.as_str())
        .collect();
    assert_eq!(texts, ["first", "second", "third"]);
}

#[test]
fn test_empty_regions_render_image_only() {
    let frame = compose(
        dims(640, 480),
        &[],
        ViewTransform::IDENTITY,
        Opacity::new(1.0),
        side_by_side(320.0, 240.0),
        &ViewerConfig::default(),
    );
    assert!(frame.translated.overlays.is_empty());
    assert_eq!(
        frame.translated.image_rect.width,
        frame.original.image_rect.width
    );
}

#[test]
fn test_zero_length_text_does_not_break_layout() {
    let frame = compose(
        dims(100, 100),
        &[region(100, 100, 200, 400, "")],
        ViewTransform::IDENTITY,
        Opacity::new(1.0),
        side_by_side(100.0, 100.0),
        &ViewerConfig::default(),
    );
    let b = &frame.translated.overlays[0];
    assert!(b.font_px.is_finite());
    assert!(b.font_px > 0.0);
}

#[test]
fn test_overlay_alpha_follows_opacity() {
    let frame = compose(
        dims(100, 100),
        &[region(0, 0, 100, 100, "x")],
        ViewTransform::IDENTITY,
        Opacity::from_percent(35),
        side_by_side(100.0, 100.0),
        &ViewerConfig::default(),
    );
    assert_relative_eq!(frame.translated.overlays[0].fill_alpha, 0.35);
}

#[test]
fn test_overlays_follow_zoom_and_pan() {
    let regions = [region(100, 200, 300, 600, "Exit")];
    let panes = side_by_side(500.0, 500.0);
    let cfg = ViewerConfig::default();

    let base = compose(dims(1000, 1000), &regions, ViewTransform::IDENTITY, Opacity::new(1.0), panes, &cfg);
    let t = ViewTransform {
        pan_x: 30.0,
        pan_y: -10.0,
        scale: 2.0,
    };
    let zoomed = compose(dims(1000, 1000), &regions, t, Opacity::new(1.0), panes, &cfg);

    let a = &base.translated.overlays[0];
    let b = &zoomed.translated.overlays[0];
    assert_relative_eq!(b.rect.width, a.rect.width * 2.0, max_relative = 1e-5);
    assert_relative_eq!(b.font_px, a.font_px * 2.0, max_relative = 1e-5);

    // Relative position inside the image is unchanged.
    let img = zoomed.translated.image_rect;
    assert_relative_eq!((b.rect.x - img.x) / img.width, 0.2, max_relative = 1e-5);
    assert_relative_eq!((b.rect.y - img.y) / img.height, 0.1, max_relative = 1e-5);
}

#[test]
fn test_both_panes_share_identical_transform() {
    let mut viewer = Viewer::new(no_easing());
    let source = viewer.open_image();
    viewer.image_loaded(source, dims(1200, 800));

    viewer.handle_pointer(PointerEvent::down(0.0, 0.0));
    viewer.handle_pointer(PointerEvent::moved(13.5, -7.25));
    viewer.wheel(-333.0);
    viewer.handle_pointer(PointerEvent::moved(20.0, 1.0));
    viewer.handle_pointer(PointerEvent::up(20.0, 1.0));
    viewer.zoom_out();
    viewer.pinch(1.37);
    viewer.tick(1.0 / 60.0);

    let frame = viewer.frame(side_by_side(640.0, 480.0)).unwrap();
    let a = &frame.original;
    let b = &frame.translated;
    assert_eq!(a.transform.pan_x.to_bits(), b.transform.pan_x.to_bits());
    assert_eq!(a.transform.pan_y.to_bits(), b.transform.pan_y.to_bits());
    assert_eq!(a.transform.scale.to_bits(), b.transform.scale.to_bits());
    assert_eq!(a.image_rect.width.to_bits(), b.image_rect.width.to_bits());
    assert_eq!(a.image_rect.height.to_bits(), b.image_rect.height.to_bits());
    assert_eq!(a.transform, viewer.transform());
}

// ---------------------------------------------------------------------------
// Opacity
// ---------------------------------------------------------------------------

#[test]
fn test_opacity_slider_mapping() {
    assert_relative_eq!(Opacity::from_percent(20).value(), 0.2);
    assert_relative_eq!(Opacity::from_percent(100).value(), 1.0);
    assert_relative_eq!(Opacity::from_percent(60).value(), 0.6);
    assert_relative_eq!(Opacity::from_percent(0).value(), 0.2);
    assert_relative_eq!(Opacity::from_percent(250).value(), 1.0);
}

#[test]
fn test_opacity_clamps() {
    assert_relative_eq!(Opacity::new(0.0).value(), 0.2);
    assert_relative_eq!(Opacity::new(4.0).value(), 1.0);
    assert_eq!(Opacity::new(0.45).percent(), 45);
    assert_eq!(Opacity::new(0.45).to_string(), "45%");
}

// ---------------------------------------------------------------------------
// Pane split
// ---------------------------------------------------------------------------

#[test]
fn test_split_landscape_side_by_side() {
    let (split, left, right) = split_panes(PxRect::new(0.0, 0.0, 1010.0, 600.0), 10.0);
    assert_eq!(split, PaneSplit::SideBySide);
    assert_relative_eq!(left.width, 500.0);
    assert_relative_eq!(right.x, 510.0);
    assert_eq!(left.height, right.height);
}

#[test]
fn test_split_portrait_stacked() {
    let (split, top, bottom) = split_panes(PxRect::new(0.0, 0.0, 400.0, 810.0), 10.0);
    assert_eq!(split, PaneSplit::Stacked);
    assert_relative_eq!(top.height, 400.0);
    assert_relative_eq!(bottom.y, 410.0);
}

// ---------------------------------------------------------------------------
// Viewer lifecycle
// ---------------------------------------------------------------------------

#[test]
fn test_viewer_renders_nothing_until_dims_known() {
    let mut viewer = Viewer::default();
    assert!(viewer.frame(side_by_side(100.0, 100.0)).is_none());

    let source = viewer.open_image();
    assert!(viewer.frame(side_by_side(100.0, 100.0)).is_none());

    viewer.image_loaded(source, dims(10, 10));
    assert!(viewer.frame(side_by_side(100.0, 100.0)).is_some());
}

#[test]
fn test_viewer_failed_image_stays_on_placeholder() {
    let mut viewer = Viewer::default();
    let source = viewer.open_image();
    assert!(viewer.image_failed(source, "decode error"));
    assert!(viewer.frame(side_by_side(100.0, 100.0)).is_none());
}

#[test]
fn test_new_image_resets_transform() {
    let mut viewer = Viewer::new(no_easing());
    let first = viewer.open_image();
    viewer.image_loaded(first, dims(100, 100));
    viewer.zoom_in();
    viewer.handle_pointer(PointerEvent::down(0.0, 0.0));
    viewer.handle_pointer(PointerEvent::moved(50.0, 50.0));
    viewer.handle_pointer(PointerEvent::up(50.0, 50.0));
    assert_ne!(viewer.transform(), ViewTransform::IDENTITY);

    let second = viewer.open_image();
    assert!(viewer.image_loaded(second, dims(200, 100)));
    assert_eq!(viewer.transform(), ViewTransform::IDENTITY);
}

#[test]
fn test_viewer_ignores_stale_image() {
    let mut viewer = Viewer::default();
    let old = viewer.open_image();
    let new = viewer.open_image();
    assert!(!viewer.image_loaded(old, dims(50, 50)));
    assert!(viewer.session().is_pending());
    assert!(viewer.image_loaded(new, dims(80, 40)));
    assert_eq!(viewer.session().aspect_ratio(), Some(2.0));
}

#[test]
fn test_open_image_drops_previous_regions() {
    let mut viewer = Viewer::default();
    viewer.set_regions(parse_regions(common::SAMPLE_REGIONS_JSON).unwrap());
    assert_eq!(viewer.regions().len(), 2);
    viewer.open_image();
    assert!(viewer.regions().is_empty());
}

#[test]
fn test_regions_for_replaced_image_are_dropped() {
    let mut viewer = Viewer::default();
    let first = viewer.open_image();
    let second = viewer.open_image();
    assert!(viewer.image_loaded(second, dims(100, 100)));

    let late = parse_regions(common::SAMPLE_REGIONS_JSON).unwrap();
    assert!(!viewer.set_regions_for(first, late));
    assert!(viewer.regions().is_empty());

    let current = vec![region(0, 0, 10, 10, "a")];
    assert!(viewer.set_regions_for(second, current));
    assert_eq!(viewer.regions().len(), 1);
}

#[test]
fn test_regions_accepted_while_image_pending() {
    let mut viewer = Viewer::default();
    let source = viewer.open_image();
    assert!(viewer.set_regions_for(source, vec![region(0, 0, 10, 10, "a")]));
    assert_eq!(viewer.regions().len(), 1);
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let config = ViewerConfig {
        zoom: ZoomConfig {
            min_scale: 4.0,
            max_scale: 2.0,
            ..ZoomConfig::default()
        },
        ..ViewerConfig::default()
    };
    let mut viewer = Viewer::new(config.clone());
    assert_eq!(viewer.config(), &ViewerConfig::default());
    viewer.zoom_in();
    assert_eq!(viewer.transform().scale, 1.25);

    viewer.set_config(config);
    assert_eq!(viewer.config(), &ViewerConfig::default());
    viewer.zoom_out();
    assert_eq!(viewer.transform().scale, 1.0);
}

#[test]
fn test_revision_advances_on_every_mutation() {
    let mut viewer = Viewer::default();
    let mut last = viewer.revision();
    let mut check = |viewer: &Viewer| {
        let now = viewer.revision();
        assert!(now > last, "revision did not advance: {now} <= {last}");
        last = now;
    };

    let source = viewer.open_image();
    check(&viewer);
    viewer.image_loaded(source, dims(100, 50));
    check(&viewer);
    viewer.set_regions(vec![region(0, 0, 10, 10, "a")]);
    check(&viewer);
    viewer.set_opacity(Opacity::from_percent(40));
    check(&viewer);
    viewer.zoom_in();
    check(&viewer);
    viewer.reset_view();
    check(&viewer);
}

#[test]
fn test_viewer_starts_at_default_opacity() {
    let viewer = Viewer::default();
    assert_relative_eq!(viewer.opacity().value(), 0.9);
}
