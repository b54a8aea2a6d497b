//! Drawing-surface contract.
//!
//! The engine never touches a canvas itself. The web bridge implements
//! [`Surface`] for a 2D canvas context; tests use a recording double.

use super::dot::Dot;
use super::streak::Streak;

pub trait Surface {
    /// Resize the backing store to `width × height` device pixels.
    fn resize(&mut self, width: u32, height: u32);

    /// Erase the previous frame.
    fn clear(&mut self, width: f32, height: f32);

    /// Stroke every streak, in order, with round caps and the given colour.
    fn stroke_streaks(&mut self, streaks: &[Streak], color: &str);

    /// Fill every dot as a circle with the given colour.
    fn fill_dots(&mut self, dots: &[Dot], color: &str);
}
