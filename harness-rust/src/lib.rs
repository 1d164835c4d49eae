mod dispatch;
mod notifier;
mod report;
mod session;
pub mod share_harness_test;

pub use dispatch::ShareDispatcher;
pub use notifier::{ConsoleNotifier, Notifier};
pub use report::{OutcomeReport, OutcomeStatus};
pub use session::{HarnessParams, HarnessSession};
