pub mod curve_algorithm;
