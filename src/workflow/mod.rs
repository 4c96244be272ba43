//! Workflow module
//!
//! Declarative transition registry and the engine that executes
//! approval, rejection, reassignment and moderation transitions.

pub mod engine;
pub mod transitions;

// Re-export commonly used workflow components
pub use engine::{SubmitGuard, SubmitPermit, WorkflowEngine};
pub use transitions::{KindTransitions, SideData, TransitionRegistry, TransitionSpec};
