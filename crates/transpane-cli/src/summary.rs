use std::path::Path;

use console::Style;
use transpane_core::region::Region;
use transpane_core::scene::DualPaneFrame;
use transpane_core::session::ImageDims;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    vertical: Style,
    horizontal: Style,
    warn: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            vertical: Style::new().magenta(),
            horizontal: Style::new().green(),
            warn: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_layout(image: &Path, dims: ImageDims, regions: &[Region], frame: &DualPaneFrame) {
    let s = Styles::new();
    let pane = &frame.translated;

    println!();
    println!("  {}", s.title.apply_to("Overlay Layout"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(14)));
    println!();
    println!("  {:<12}{}", s.label.apply_to("Image"), s.path.apply_to(image.display()));
    println!("  {:<12}{}", s.label.apply_to("Size"), s.value.apply_to(dims));
    println!(
        "  {:<12}{}",
        s.label.apply_to("Pane"),
        s.value.apply_to(format!("{:.0}x{:.0}", pane.viewport.width, pane.viewport.height))
    );
    println!(
        "  {:<12}{}",
        s.label.apply_to("Image rect"),
        s.value.apply_to(format!(
            "{:.0}x{:.0} at ({:.0}, {:.0})",
            pane.image_rect.width, pane.image_rect.height, pane.image_rect.x, pane.image_rect.y
        ))
    );
    println!(
        "  {:<12}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!("{:.2}", pane.transform.scale))
    );
    println!();

    if pane.overlays.is_empty() {
        println!("  {}", s.warn.apply_to("no regions"));
        println!();
        return;
    }

    println!(
        "  {}",
        s.label.apply_to(format!(
            "{:>3}  {:>6} {:>6} {:>6} {:>6}  {:<10}  {:<22} {:>7}  text",
            "#", "top%", "left%", "w%", "h%", "dir", "font", "px"
        ))
    );

    for (i, (overlay, region)) in pane.overlays.iter().zip(regions).enumerate() {
        let p = overlay.style.placement;
        let dir = if overlay.style.is_vertical() {
            s.vertical.apply_to(overlay.style.orientation)
        } else {
            s.horizontal.apply_to(overlay.style.orientation)
        };
        let clamp_note = if region.bbox.is_well_formed() {
            String::new()
        } else {
            format!(" {}", s.warn.apply_to("(clamped)"))
        };
        println!(
            "  {:>3}  {:>6.1} {:>6.1} {:>6.1} {:>6.1}  {:<10}  {:<22} {:>7.1}  {}{}",
            i,
            p.top,
            p.left,
            p.width,
            p.height,
            dir,
            overlay.style.font_size.to_string(),
            overlay.font_px,
            s.value.apply_to(&overlay.text),
            clamp_note
        );
    }
    println!();
}
