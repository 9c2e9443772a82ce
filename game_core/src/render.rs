//! Drawing surface consumed by the game

use crate::Rect;

/// Font used for scene titles
pub const TITLE_FONT: &str = "32pt Arial";
/// Font used for everything else
pub const TEXT_FONT: &str = "18pt Arial";

/// A 2D drawing target (an HTML canvas in the browser)
///
/// Fill colour and text alignment are configured by the host once. Text is
/// drawn centered on `x`.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str);

    /// Clear the whole surface
    fn clear(&mut self) {
        let (width, height) = (self.width(), self.height());
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn fill(&mut self, rect: &Rect) {
        self.fill_rect(rect.pos.x, rect.pos.y, rect.size.x, rect.size.y);
    }
}
