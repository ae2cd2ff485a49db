// ============================================================================
// Engine Module
// Expression evaluation and the interactive session around it
// ============================================================================

mod errors;
mod evaluator;
mod session;

pub use errors::{CalcError, CalcResult};
pub use evaluator::{Evaluation, Evaluator};
pub use session::{Session, SessionOutcome};
