use std::path::Path;

use console::Style;

use avacrop_core::session::CropSession;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_crop_summary(session: &CropSession, input: &Path) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Avatar Crop"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );

    if let Some((w, h)) = session.natural_size() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Source"),
            s.value.apply_to(format!("{w}x{h}"))
        );
    }

    println!(
        "  {:<14}{}",
        s.label.apply_to("Viewport"),
        s.value.apply_to(format!("{}px", session.viewport_size()))
    );

    if let (Some(scale), Some(min)) = (session.scale(), session.min_scale()) {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Scale"),
            s.value.apply_to(format!("{scale:.4} (min {min:.4})"))
        );
    }

    if let Some(offset) = session.offset() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Offset"),
            s.value.apply_to(format!("({:.1}, {:.1})", offset.x, offset.y))
        );
    }

    if let Some(win) = session.source_window() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Window"),
            s.value
                .apply_to(format!("{:.1},{:.1} {:.1}x{:.1}", win.x, win.y, win.side, win.side))
        );
    }

    println!(
        "  {:<14}{}",
        s.label.apply_to("Export"),
        s.value
            .apply_to(format!("{0}x{0}", session.config().export_size))
    );
    println!();
}
