// ============================================================
// Layer 6: Infrastructure Layer
// ============================================================
// Everything that touches the filesystem:
//
//   artifacts.rs      : Loading the trained model pipeline and
//                       the job role frequency table at startup.
//                       Missing or corrupt artifacts are fatal.
//
//   prediction_log.rs : The append-only CSV prediction log.
//                       Creates data/ and the header on first
//                       write, then one row per prediction.

/// Model and frequency table loading
pub mod artifacts;

/// Append-only CSV prediction log
pub mod prediction_log;
