pub mod fractal_params;
pub mod pen;
pub mod point;
pub mod vertex_sequence;
