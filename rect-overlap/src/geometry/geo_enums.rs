/// Slope of a rectangle edge.
/// A vertical edge has no finite slope and is tagged as such, instead of being encoded as a magic value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Slope {
    /// Δy/Δx of a non-vertical edge
    Finite(f64),
    /// Δx == 0
    Vertical,
}

impl Slope {
    /// Slope of the edge running from `(x1, y1)` to `(x2, y2)`
    pub fn between((x1, y1): (f64, f64), (x2, y2): (f64, f64)) -> Self {
        let dx = x2 - x1;
        match dx == 0.0 {
            true => Slope::Vertical,
            false => Slope::Finite((y2 - y1) / dx),
        }
    }
}
