//! Cooperative shutdown signal checked by the frame loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable flag that asks the frame loop to stop.
///
/// The loop checks it once per frame, so a request takes effect before the
/// next frame is rendered.
#[derive(Debug, Clone, Default)]
pub struct Shutdown {
    flag: Arc<AtomicBool>,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Request shutdown when the process receives Ctrl+C.
    ///
    /// This should be called once at program startup.
    pub fn install_ctrlc_handler(&self) -> Result<(), ctrlc::Error> {
        let shutdown = self.clone();
        ctrlc::set_handler(move || {
            log::info!("received Ctrl+C, shutting down");
            shutdown.request();
        })
    }
}
