// pdf.rs - Vector rendering of the bar chart

use crate::report::chart::{estimate_text_width, ChartLayout, Frame, Rgb, LABEL_FONT_SIZE, TITLE_FONT_SIZE};
use crate::report::export::ensure_parent_dir;
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Pt, Rect,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Baseline offset below a line's vertical centre, relative to font size
const BASELINE_SHIFT: f64 = 0.35;
const EDGE_WIDTH: f32 = 0.8;

fn mm(points: f64) -> Mm {
    Mm::from(Pt(points as f32))
}

fn pdf_color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.unit();
    Color::Rgb(printpdf::Rgb::new(r, g, b, None))
}

/// Converts top-left chart coordinates into PDF page coordinates
struct Page<'a> {
    layer: PdfLayerReference,
    font: &'a IndirectFontRef,
    height: f64,
}

impl Page<'_> {
    fn point(&self, x: f64, y: f64) -> Point {
        Point::new(mm(x), mm(self.height - y))
    }

    fn rect(&self, frame: &Frame, fill: Option<Rgb>) {
        let mode = match fill {
            Some(rgb) => {
                self.layer.set_fill_color(pdf_color(rgb));
                PaintMode::FillStroke
            }
            None => PaintMode::Stroke,
        };
        let rect = Rect::new(
            mm(frame.left),
            mm(self.height - frame.bottom),
            mm(frame.right),
            mm(self.height - frame.top),
        )
        .with_mode(mode);
        self.layer.add_rect(rect);
    }

    fn line(&self, from: (f64, f64), to: (f64, f64)) {
        self.layer.add_line(Line {
            points: vec![
                (self.point(from.0, from.1), false),
                (self.point(to.0, to.1), false),
            ],
            is_closed: false,
        });
    }

    /// Draw `text` with its left edge at `x`, vertically centred on `center_y`
    fn text(&self, text: &str, size: f64, x: f64, center_y: f64) {
        self.layer.set_fill_color(pdf_color(Rgb::BLACK));
        let baseline = center_y + size * BASELINE_SHIFT;
        self.layer.use_text(
            text,
            size as f32,
            mm(x),
            mm(self.height - baseline),
            self.font,
        );
    }

    fn centered_text(&self, text: &str, size: f64, center_x: f64, center_y: f64) {
        let x = center_x - estimate_text_width(text, size) / 2.0;
        self.text(text, size, x, center_y);
    }
}

/// Render `layout` to a single-page PDF
pub fn render_pdf(layout: &ChartLayout, file_path: &Path) -> Result<(), String> {
    ensure_parent_dir(file_path)?;
    let (doc, page_index, layer_index) =
        PdfDocument::new(&layout.title, mm(layout.width), mm(layout.height), "chart");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| format!("Failed to load PDF font: {}", e))?;

    let page = Page {
        layer: doc.get_page(page_index).get_layer(layer_index),
        font: &font,
        height: layout.height,
    };
    page.layer.set_outline_color(pdf_color(Rgb::BLACK));
    page.layer.set_outline_thickness(EDGE_WIDTH);

    page.centered_text(
        &layout.title,
        TITLE_FONT_SIZE,
        layout.title_anchor.0,
        layout.title_anchor.1,
    );

    for bar in &layout.bars {
        page.rect(&bar.frame, Some(bar.color));
        page.text(&bar.label, LABEL_FONT_SIZE, layout.label_x, bar.frame.center_y());
    }

    page.rect(&layout.plot, None);
    let label_center = layout.tick_label_top() + LABEL_FONT_SIZE / 2.0;
    for tick in &layout.ticks {
        page.line((tick.x, tick.top), (tick.x, tick.bottom));
        page.centered_text(&tick.value.to_string(), LABEL_FONT_SIZE, tick.x, label_center);
    }

    let file = File::create(file_path)
        .map_err(|e| format!("Failed to create output file '{}': {}", file_path.display(), e))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| format!("Failed to write PDF '{}': {}", file_path.display(), e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tally::TargetTally;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_mm_conversion() {
        let a4_width = mm(595.0);
        assert!((a4_width.0 - 209.9).abs() < 0.2);
    }

    #[test]
    fn test_render_pdf_writes_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("S1_TargetCheck.pdf");
        let tally = TargetTally::from_titles([
            "plcR Transcriptional activator",
            "NheB BC1810 Non-hemolytic enterotoxin lytic component L1",
        ]);
        let layout = ChartLayout::new("S1", &tally).unwrap();

        render_pdf(&layout, &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.len() > 500);
    }
}
