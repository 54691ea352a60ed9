pub mod canvas;
pub mod cesaro;
pub mod curve_kinds;
pub mod koch;
