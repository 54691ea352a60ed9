//! Recursive curve tracing.
//!
//! Every curve is a closed or open figure whose sides are replaced, level by
//! level, with smaller turned copies of themselves. The replacement rule is
//! supplied through the `CurveAlgorithm` port so the tracer stays independent
//! of any particular curve.

#[allow(clippy::module_inception)]
pub mod generate_curve;
pub mod ports;
