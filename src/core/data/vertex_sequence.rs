use crate::core::data::point::Point;

/// Ordered vertices of an open polyline, in draw order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VertexSequence {
    points: Vec<Point>,
}

impl VertexSequence {
    #[must_use]
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Appends every vertex of `other`, preserving its order.
    pub fn append(&mut self, other: VertexSequence) {
        if self.points.is_empty() {
            self.points = other.points;
        } else {
            self.points.extend(other.points);
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl From<Vec<Point>> for VertexSequence {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl Extend<Point> for VertexSequence {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sequence_of(xs: &[f64]) -> VertexSequence {
        xs.iter().map(|&x| Point::new(x, 0.0)).collect::<Vec<_>>().into()
    }

    #[test]
    fn test_new_is_empty() {
        let sequence = VertexSequence::new();
        assert!(sequence.is_empty());
        assert_eq!(sequence.first(), None);
        assert_eq!(sequence.last(), None);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut sequence = sequence_of(&[1.0, 2.0]);
        sequence.append(sequence_of(&[3.0, 4.0]));

        let xs: Vec<f64> = sequence.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_append_to_empty_takes_other() {
        let mut sequence = VertexSequence::new();
        sequence.append(sequence_of(&[5.0, 6.0]));
        assert_eq!(sequence, sequence_of(&[5.0, 6.0]));
    }

    #[test]
    fn test_append_empty_is_noop() {
        let mut sequence = sequence_of(&[1.0]);
        sequence.append(VertexSequence::new());
        assert_eq!(sequence, sequence_of(&[1.0]));
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut sequence = sequence_of(&[1.0, 2.0, 3.0]);
        sequence.clear();
        assert!(sequence.is_empty());
    }

    #[test]
    fn test_first_and_last() {
        let sequence = sequence_of(&[7.0, 8.0, 9.0]);
        assert_eq!(sequence.first(), Some(Point::new(7.0, 0.0)));
        assert_eq!(sequence.last(), Some(Point::new(9.0, 0.0)));
    }
}
