// ============================================================
// Layer 5: ML / Model Layer
// ============================================================
// Everything that touches the trained artifacts' contents.
// No other layer knows how a pipeline encodes or scores a row.
//
//   encoder.rs    : job role → training frequency lookup
//
//   pipeline.rs   : the serialised regression pipeline:
//                   column transforms, linear regressor, clip,
//                   and the training-schema check
//
//   inferencer.rs : invokes any InferencePipeline and rejects
//                   non-finite output

/// Frequency encoding of the free-text job role
pub mod encoder;

/// Deserialised regression pipeline artifact
pub mod pipeline;

/// Single-row inference over an opaque pipeline
pub mod inferencer;
