// ============================================================
// Layer 3: Domain Layer
// ============================================================
// Plain Rust types and traits describing a hiring request and
// its prediction.
//
// Rules for this layer:
//   - NO file I/O
//   - NO knowledge of how the model is stored or evaluated
//   - Only structs, enums, and traits

// Errors shared by all layers
pub mod error;

// The form's input record and its closed label sets
pub mod hiring;

// The single-row table handed to the pipeline
pub mod features;

// The pipeline's output
pub mod prediction;

// Seams implemented by the ml and infra layers
pub mod traits;
