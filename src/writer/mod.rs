//! Output emitters. Each one only reads an already computed trace.
pub mod json;
pub mod svg;
