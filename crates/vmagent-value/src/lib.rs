//! Untyped nested value model exchanged with the control plane.

mod value;

pub use value::{Mapping, Scalar, Value};
