use crate::OutcomeReport;

/// The user-facing report channel: one synchronous call per outcome, the
/// generalization of a blocking alert dialog. Implementations decide how to
/// present the report; tests capture them instead.
pub trait Notifier: Send + Sync {
    fn notify(&self, report: &OutcomeReport);
}

/// Writes each report to stdout. The terminal analogue of an alert box when
/// the harness is driven interactively.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, report: &OutcomeReport) {
        println!("{report}");
    }
}
