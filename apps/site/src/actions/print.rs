//! Print / export trigger.
#![allow(dead_code)]
//!
//! The host owns the print flow. The page only asks for it; nothing is
//! returned and no state changes, so repeated requests are harmless.
//!
//! The served page binds the same behaviour in `render::assets::site_js`
//! (`data-action="print"` calls `window.print()`); this module is the
//! reference model that script is tested against.

use tracing::debug;

/// Opens the host environment's native print/export flow.
pub trait PrintHost: Send + Sync {
    fn print(&self);
}

/// Forwards one print request to the host.
pub fn request_print(host: &dyn PrintHost) {
    debug!("Print requested");
    host.print();
}

#[cfg(test)]
pub(crate) mod doubles {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::PrintHost;

    /// Counts print requests instead of opening a dialog.
    #[derive(Default)]
    pub struct RecordingPrinter {
        calls: AtomicUsize,
    }

    impl RecordingPrinter {
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl PrintHost for RecordingPrinter {
        fn print(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::doubles::RecordingPrinter;
    use super::*;

    #[test]
    fn test_request_print_invokes_host_once() {
        let printer = RecordingPrinter::default();
        request_print(&printer);
        assert_eq!(printer.calls(), 1);
    }

    #[test]
    fn test_repeated_requests_each_reach_host() {
        let printer = RecordingPrinter::default();
        for _ in 0..3 {
            request_print(&printer);
        }
        assert_eq!(printer.calls(), 3);
    }
}
