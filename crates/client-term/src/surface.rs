//! Pixel surface kept by the terminal window and its half-block rendering.

use cellhop_client::config::Color;
use cellhop_core::types::PixelRect;
use grid::Grid;
use ratatui::{buffer::Buffer, layout::Rect, style, widgets::Widget};

const UPPER_HALF_BLOCK: &str = "▀";

/// Rows are indexed by pixel y, row 0 being the bottom of the window.
pub struct Surface {
    pixels: Grid<Color>,
    background: Color,
}

impl Surface {
    pub fn new(width_px: usize, height_px: usize, background: Color) -> Self {
        Self {
            pixels: Grid::init(height_px, width_px, background),
            background,
        }
    }

    pub fn width(&self) -> usize {
        self.pixels.cols()
    }

    pub fn height(&self) -> usize {
        self.pixels.rows()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        self.pixels.get(y, x).copied()
    }

    /// Paints `rect`, ignoring whatever lies outside of the surface.
    pub fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        let x2 = rect.x2.min(self.width());
        let y2 = rect.y2.min(self.height());
        for y in rect.y1..y2 {
            for x in rect.x1..x2 {
                if let Some(pixel) = self.pixels.get_mut(y, x) {
                    *pixel = color;
                }
            }
        }
    }

    /// Colour shown for sample (`col`, `sub_row`) of a `cols` x `sub_rows` sampling,
    /// sub rows being counted from the top.
    ///
    /// A sample covers a whole block of pixels and shows the first one that is not
    /// background, so nothing drawn disappears when the surface is scaled down.
    fn sample(&self, col: usize, sub_row: usize, cols: usize, sub_rows: usize) -> Color {
        let (x1, x2) = span(col, cols, self.width());
        let (top1, top2) = span(sub_row, sub_rows, self.height());
        // sub rows go down, pixel rows go up
        let (y1, y2) = (self.height() - top2, self.height() - top1);

        (y1..y2)
            .flat_map(|y| (x1..x2).map(move |x| (x, y)))
            .filter_map(|(x, y)| self.get(x, y))
            .find(|&color| color != self.background)
            .unwrap_or(self.background)
    }
}

/// Pixel range covered by sample `index` out of `samples` along an axis of `len` pixels.
/// Never empty, even when there are more samples than pixels.
fn span(index: usize, samples: usize, len: usize) -> (usize, usize) {
    let start = index * len / samples;
    let end = ((index + 1) * len / samples).max(start + 1).min(len);
    (start.min(len - 1), end)
}

/// Scales the surface to the area, two pixel samples per terminal cell.
impl Widget for &Surface {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let cols = area.width as usize;
        let sub_rows = area.height as usize * 2;
        for row in 0..area.height {
            for col in 0..area.width {
                let top = self.sample(col as usize, row as usize * 2, cols, sub_rows);
                let bottom = self.sample(col as usize, row as usize * 2 + 1, cols, sub_rows);
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(UPPER_HALF_BLOCK)
                        .set_fg(to_term_color(top))
                        .set_bg(to_term_color(bottom));
                }
            }
        }
    }
}

fn to_term_color(color: Color) -> style::Color {
    style::Color::Rgb(color.red, color.green, color.blue)
}
