//! pagetrail Navigation
//!
//! Back/forward history modelled as two bounded stacks:
//! - Back stack: top is the current page, the entry below it is the previous page
//! - Forward stack: pages displaced by going backward, top is the next page
//!
//! Supported commands:
//! - `Backward`: move the current page onto the forward stack
//! - `Forward`: move the next page back onto the back stack

mod command;
mod error;
mod replay;
mod session;
mod stack;

pub use command::Command;
pub use error::NavigationError;
pub use replay::{CommandReplayer, StepOutcome, StepReport};
pub use session::{HistorySession, MovePolicy, Side, Transition};
pub use stack::NavigationStack;

pub type Result<T> = std::result::Result<T, NavigationError>;
