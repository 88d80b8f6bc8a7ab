// png.rs - Raster rendering of the bar chart

use crate::report::chart::{ChartLayout, Rgb, LABEL_FONT_SIZE, TITLE_FONT_SIZE};
use crate::report::export::ensure_parent_dir;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{register_font, FontStyle};
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_DPI: u32 = 300;

/// DejaVu Sans, compiled in so rasterizing text needs no system fonts
const CHART_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
const CHART_FONT_FAMILY: &str = "sans-serif";

static FONT_REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();

/// Register the bundled font under the family name used by the chart styles
fn register_chart_font() -> Result<(), String> {
    FONT_REGISTERED
        .get_or_init(|| {
            register_font(CHART_FONT_FAMILY, FontStyle::Normal, CHART_FONT)
                .map_err(|_| "Failed to load the bundled chart font".to_string())
        })
        .clone()
}

fn color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

fn draw_failure<E: std::fmt::Display>(file_path: &Path, e: E) -> String {
    format!("Failed to draw chart '{}': {}", file_path.display(), e)
}

/// Pixel dimensions of `layout` at `dpi`
pub fn pixel_size(layout: &ChartLayout, dpi: u32) -> (u32, u32) {
    let scale = dpi as f64 / 72.0;
    (
        (layout.width * scale).ceil() as u32,
        (layout.height * scale).ceil() as u32,
    )
}

/// Render `layout` to a PNG file at `dpi`
pub fn render_png(layout: &ChartLayout, file_path: &Path, dpi: u32) -> Result<(), String> {
    register_chart_font()?;
    ensure_parent_dir(file_path)?;
    let scale = dpi as f64 / 72.0;
    let px = |v: f64| (v * scale).round() as i32;
    let draw_err = |e| draw_failure(file_path, e);

    let root = BitMapBackend::new(file_path, pixel_size(layout, dpi)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let edge = ShapeStyle::from(&BLACK).stroke_width(px(0.8).max(1) as u32);
    let label_style = TextStyle::from((CHART_FONT_FAMILY, LABEL_FONT_SIZE * scale).into_font());
    let title_style = TextStyle::from((CHART_FONT_FAMILY, TITLE_FONT_SIZE * scale).into_font())
        .pos(Pos::new(HPos::Center, VPos::Center));

    root.draw(&Text::new(
        layout.title.clone(),
        (px(layout.title_anchor.0), px(layout.title_anchor.1)),
        title_style,
    ))
    .map_err(draw_err)?;

    for bar in &layout.bars {
        let corners = [
            (px(bar.frame.left), px(bar.frame.top)),
            (px(bar.frame.right), px(bar.frame.bottom)),
        ];
        root.draw(&Rectangle::new(corners, color(bar.color).filled()))
            .map_err(draw_err)?;
        root.draw(&Rectangle::new(corners, edge)).map_err(draw_err)?;
        root.draw(&Text::new(
            bar.label.clone(),
            (px(layout.label_x), px(bar.frame.center_y())),
            label_style.pos(Pos::new(HPos::Left, VPos::Center)),
        ))
        .map_err(draw_err)?;
    }

    let plot = layout.plot;
    root.draw(&Rectangle::new(
        [(px(plot.left), px(plot.top)), (px(plot.right), px(plot.bottom))],
        edge,
    ))
    .map_err(draw_err)?;

    for tick in &layout.ticks {
        root.draw(&PathElement::new(
            vec![(px(tick.x), px(tick.top)), (px(tick.x), px(tick.bottom))],
            edge,
        ))
        .map_err(draw_err)?;
        root.draw(&Text::new(
            tick.value.to_string(),
            (px(tick.x), px(layout.tick_label_top())),
            label_style.pos(Pos::new(HPos::Center, VPos::Top)),
        ))
        .map_err(draw_err)?;
    }

    root.present().map_err(draw_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tally::TargetTally;

    #[test]
    fn test_pixel_size_scales_with_dpi() {
        let layout = ChartLayout::new("S1", &TargetTally::new()).unwrap();
        let (w72, h72) = pixel_size(&layout, 72);
        let (w300, h300) = pixel_size(&layout, 300);
        assert_eq!(w72, layout.width.ceil() as u32);
        assert_eq!(h72, layout.height.ceil() as u32);
        assert!(w300 > 4 * w72 && h300 > 4 * h72);
    }

    #[test]
    fn test_register_chart_font_is_repeatable() {
        assert!(register_chart_font().is_ok());
        assert!(register_chart_font().is_ok());
    }

    #[test]
    fn test_render_png_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("S1_TargetCheck.png");
        let tally = TargetTally::from_titles(["CytK BC1110 Cytotoxin K"]);
        let layout = ChartLayout::new("S1", &tally).unwrap();

        render_png(&layout, &path, 72).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        // IHDR width and height, big-endian
        let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
        assert_eq!((width, height), pixel_size(&layout, 72));
    }
}
