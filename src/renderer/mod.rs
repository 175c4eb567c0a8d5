//! WebGPU rendering module
//!
//! Consumes `RenderSnapshot`s: builds a triangle list on the CPU and draws
//! it in one pass. Strictly a consumer of simulation state.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::scene;
pub use vertex::Vertex;
