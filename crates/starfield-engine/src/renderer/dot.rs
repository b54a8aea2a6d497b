/// One particle as drawn this frame: a filled circle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Dot {
    pub x: f32,
    pub y: f32,
    /// Radius in device pixels.
    pub radius: f32,
    pub alpha: f32,
}
