/// Geometric rule of a self-similar curve.
///
/// Every side of the base figure is drawn as four sub-segments one level
/// down; the rule decides how long they are and how the pen turns between
/// them.
pub trait CurveAlgorithm {
    /// Turns, in degrees, applied before each side of the base figure.
    fn base_turns(&self) -> &[f64];

    /// Length of each sub-segment that replaces a segment of `size`.
    fn child_size(&self, size: f64) -> f64;

    /// Turns, in degrees, between consecutive sub-segments.
    fn child_turns(&self) -> [f64; 3];
}
