// ============================================================
// Layer 2: Application / Use Cases
// ============================================================
// Coordinates the other layers to turn a filled-in form into a
// logged prediction.
//
// Rules for this layer:
//   - No model math here (that's Layer 5)
//   - No printing or prompting here (that's Layer 1)
//   - No direct file format handling (that's Layer 6)
//   - Only workflow coordination

// The predict workflow, its config, and the loaded artifacts
pub mod predict_use_case;
