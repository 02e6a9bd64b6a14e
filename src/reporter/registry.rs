//! Process-wide reporter selection.
//!
//! The reporter implementation is chosen once at process start and
//! never switched at runtime. Code that reports metrics asks the
//! registry for the current reporter; before any installation it gets
//! the no-op reporter, so reporting call sites need no wiring of their
//! own.

use std::sync::Arc;

use lazy_static::lazy_static;
use parking_lot::RwLock;

use crate::reporter::interface::{MetricsReporter, NoopMetricsReporter};

lazy_static! {
    static ref GLOBAL_REPORTER: RwLock<Option<Arc<dyn MetricsReporter>>> = RwLock::new(None);
}

/// Install the process-wide reporter.
///
/// The first installation wins; later calls are refused and logged so a
/// misconfigured double-init is visible without faulting anything.
pub fn install_reporter(reporter: Arc<dyn MetricsReporter>) -> bool {
    let mut slot = GLOBAL_REPORTER.write();
    if slot.is_some() {
        log::warn!("REPORTER_INSTALL_REFUSED reason=already_installed");
        return false;
    }
    *slot = Some(reporter);
    log::info!("REPORTER_INSTALLED");
    true
}

/// The installed reporter, or the no-op reporter when none is installed.
pub fn reporter() -> Arc<dyn MetricsReporter> {
    GLOBAL_REPORTER
        .read()
        .clone()
        .unwrap_or_else(|| Arc::new(NoopMetricsReporter::new()))
}
