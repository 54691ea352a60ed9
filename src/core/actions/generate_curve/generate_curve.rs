use tracing::debug;

use crate::core::actions::generate_curve::ports::curve_algorithm::CurveAlgorithm;
use crate::core::data::fractal_params::{BoundedParameters, FractalParameters};
use crate::core::data::pen::Pen;
use crate::core::data::point::Point;
use crate::core::data::vertex_sequence::VertexSequence;
use crate::core::fractals::cesaro::algorithm::CesaroAlgorithm;
use crate::core::fractals::curve_kinds::CurveKinds;
use crate::core::fractals::koch::algorithm::KochAlgorithm;

/// Vertices emitted while drawing one segment, and where the pen ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub vertices: Vec<Point>,
    pub end: Pen,
}

/// Draws one segment of `size`, subdivided `depth` times.
///
/// The start point is not emitted; every level-0 segment contributes its end
/// point, so the trace holds exactly `4^depth` vertices.
#[must_use]
pub fn trace_side<Alg: CurveAlgorithm>(algorithm: &Alg, depth: u32, pen: Pen, size: f64) -> Trace {
    if depth == 0 {
        let end = pen.advance(size);

        return Trace {
            vertices: vec![end],
            end: pen.moved_to(end),
        };
    }

    let child_size = algorithm.child_size(size);
    let [first, second, third] = algorithm.child_turns();

    let mut vertices = Vec::with_capacity(4usize.pow(depth));
    let mut pen = pen;

    for turn in [0.0, first, second, third] {
        pen = pen.turned(turn);

        let child = trace_side(algorithm, depth - 1, pen, child_size);
        pen = pen.moved_to(child.end.position);
        vertices.extend(child.vertices);
    }

    Trace { vertices, end: pen }
}

/// Draws the whole figure: the start point followed by every side.
///
/// # Panics
///
/// Panics if `size` is negative or not finite, or `start` is not finite.
#[must_use]
pub fn trace_figure<Alg: CurveAlgorithm>(
    algorithm: &Alg,
    depth: u32,
    start: Point,
    size: f64,
) -> VertexSequence {
    assert!(
        size.is_finite() && size >= 0.0,
        "curve size must be finite and non-negative, got {}",
        size
    );
    assert!(start.is_finite(), "curve start must be finite, got {:?}", start);

    let side_vertices = 4usize.pow(depth);
    let mut vertices =
        VertexSequence::with_capacity(algorithm.base_turns().len() * side_vertices + 1);
    vertices.push(start);

    let mut pen = Pen::new(start, 0.0);

    for &turn in algorithm.base_turns() {
        pen = pen.turned(turn);

        let side = trace_side(algorithm, depth, pen, size);
        pen = pen.moved_to(side.end.position);
        vertices.extend(side.vertices);
    }

    vertices
}

/// Generates the vertices of a curve of `kind` for validated parameters.
#[must_use]
pub fn generate_curve(
    kind: CurveKinds,
    params: BoundedParameters,
    start: Point,
    size: f64,
) -> VertexSequence {
    match kind {
        CurveKinds::Cesaro => trace_figure(
            &CesaroAlgorithm::new(params.angle_divisor()),
            params.depth(),
            start,
            size,
        ),
        CurveKinds::Koch => trace_figure(&KochAlgorithm::new(), params.depth(), start, size),
    }
}

/// Generates a curve from raw request parameters.
///
/// A missing pair falls back to the defaults; a pair outside the supported
/// ranges yields an empty sequence rather than an error.
#[must_use]
pub fn generate_requested_curve(
    kind: CurveKinds,
    params: Option<FractalParameters>,
    start: Point,
    size: f64,
) -> VertexSequence {
    let params = FractalParameters::normalize(params);

    match params.validate() {
        Ok(bounded) => generate_curve(kind, bounded, start, size),
        Err(err) => {
            debug!(curve = kind.display_name(), %err, "skipping curve generation");
            VertexSequence::new()
        }
    }
}
