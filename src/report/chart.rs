// chart.rs - Backend-independent bar chart geometry
//
// All coordinates are in points (1/72 inch) with the origin at the top-left
// corner of the figure and y growing downwards.

use crate::report::tally::TargetTally;

/// Bar fill colours, assigned to vocabulary entries in order
pub const BAR_COLORS: [&str; 16] = [
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6",
    "#bcf60c", "#fabebe", "#008080", "#800000", "#aaffc3", "#808000", "#000075", "#808080",
];

pub const LABEL_FONT_SIZE: f64 = 8.0;
pub const TITLE_FONT_SIZE: f64 = 11.0;
const MARGIN: f64 = 10.0;
const PLOT_WIDTH: f64 = 200.0;
const PLOT_HEIGHT: f64 = 380.0;
const TICK_LENGTH: f64 = 3.5;
const TICK_GAP: f64 = 2.0;
const LABEL_GAP: f64 = 6.0;
/// Fraction of each category slot filled by its bar
const BAR_FILL: f64 = 0.5;
/// Headroom beyond the largest count on the x axis
const X_PADDING: f64 = 1.05;
/// Average glyph advance relative to font size for sans-serif text
const GLYPH_WIDTH: f64 = 0.52;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Parse `#rrggbb`
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(format!("Invalid colour '{}': expected #rrggbb", hex));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| format!("Invalid colour '{}': expected #rrggbb", hex))
        };
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Channels scaled to 0.0-1.0
    pub fn unit(&self) -> (f32, f32, f32) {
        (
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        )
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Frame {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center_y(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub count: usize,
    pub color: Rgb,
    pub frame: Frame,
}

/// X-axis tick: value, x position and the tick mark's vertical extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub value: usize,
    pub x: f64,
    pub top: f64,
    pub bottom: f64,
}

/// A horizontal bar chart of a [`TargetTally`], ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub title: String,
    /// Centre of the title's text box
    pub title_anchor: (f64, f64),
    pub plot: Frame,
    /// Left edge of the category labels
    pub label_x: f64,
    pub bars: Vec<Bar>,
    pub ticks: Vec<Tick>,
}

/// Rough rendered width of `text`, used where no font metrics are available
pub fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * GLYPH_WIDTH
}

impl ChartLayout {
    /// Lay out one bar per vocabulary entry, first entry at the bottom
    pub fn new(title: &str, tally: &TargetTally) -> Result<Self, String> {
        let entries = tally.entries();
        if entries.len() > BAR_COLORS.len() {
            return Err(format!(
                "Cannot chart {} categories with {} colours",
                entries.len(),
                BAR_COLORS.len()
            ));
        }

        let label_width = entries
            .iter()
            .map(|(name, _)| estimate_text_width(name, LABEL_FONT_SIZE))
            .fold(0.0, f64::max);

        let label_x = MARGIN;
        let left = label_x + label_width + LABEL_GAP;
        let top = MARGIN + TITLE_FONT_SIZE + LABEL_GAP;
        let plot = Frame {
            left,
            top,
            right: left + PLOT_WIDTH,
            bottom: top + PLOT_HEIGHT,
        };

        let max_count = tally.max_count();
        let x_range = max_count.max(1) as f64 * X_PADDING;
        let x_of = |value: usize| plot.left + value as f64 / x_range * plot.width();

        let slot = plot.height() / entries.len().max(1) as f64;
        let mut bars = Vec::with_capacity(entries.len());
        for (i, (name, count)) in entries.iter().enumerate() {
            let center = plot.bottom - (i as f64 + 0.5) * slot;
            let half = slot * BAR_FILL / 2.0;
            bars.push(Bar {
                label: name.to_string(),
                count: *count,
                color: Rgb::from_hex(BAR_COLORS[i])?,
                frame: Frame {
                    left: plot.left,
                    top: center - half,
                    right: x_of(*count),
                    bottom: center + half,
                },
            });
        }

        let ticks = (0..=max_count)
            .map(|value| Tick {
                value,
                x: x_of(value),
                top: plot.bottom,
                bottom: plot.bottom + TICK_LENGTH,
            })
            .collect();

        let last_tick_label = estimate_text_width(&max_count.to_string(), LABEL_FONT_SIZE);
        let title_width = estimate_text_width(title, TITLE_FONT_SIZE);
        let title_center_x = (plot.left + plot.right) / 2.0;
        let width = (plot.right + last_tick_label / 2.0)
            .max(title_center_x + title_width / 2.0)
            + MARGIN;
        let height = plot.bottom + TICK_LENGTH + TICK_GAP + LABEL_FONT_SIZE + MARGIN;

        Ok(Self {
            width,
            height,
            title: title.to_string(),
            title_anchor: (title_center_x, MARGIN + TITLE_FONT_SIZE / 2.0),
            plot,
            label_x,
            bars,
            ticks,
        })
    }

    /// Top edge of the tick labels
    pub fn tick_label_top(&self) -> f64 {
        self.plot.bottom + TICK_LENGTH + TICK_GAP
    }
}
