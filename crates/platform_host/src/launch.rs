//! Platform launch primitives: navigating the current browsing context and opening a new one.
//!
//! Both primitives are fire-and-forget. A successful return only means the request was handed
//! to the platform; whether a native handler picked up a custom-scheme navigation is never
//! observable.

use std::{cell::RefCell, rc::Rc};

/// Host service for handing URIs to the platform.
pub trait LaunchService {
    /// Directs the current browsing context to `uri` (used for custom URI schemes).
    ///
    /// # Errors
    ///
    /// Returns an error only when the request could not be issued at all.
    fn navigate_current(&self, uri: &str) -> Result<(), String>;

    /// Opens `url` in a new browsing context.
    ///
    /// # Errors
    ///
    /// Returns an error only when the request could not be issued at all.
    fn open_new_context(&self, url: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op launch service for unsupported targets.
pub struct NoopLaunchService;

impl LaunchService for NoopLaunchService {
    fn navigate_current(&self, _uri: &str) -> Result<(), String> {
        Ok(())
    }

    fn open_new_context(&self, _url: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One request observed by [`RecordingLaunchService`].
pub enum LaunchRecord {
    /// `navigate_current` was called with this URI.
    NavigateCurrent(String),
    /// `open_new_context` was called with this URL.
    OpenNewContext(String),
}

#[derive(Debug, Clone, Default)]
/// Launch service that records every request in call order.
///
/// Clones share the same log.
pub struct RecordingLaunchService {
    log: Rc<RefCell<Vec<LaunchRecord>>>,
}

impl RecordingLaunchService {
    /// Returns a copy of every request recorded so far.
    pub fn records(&self) -> Vec<LaunchRecord> {
        self.log.borrow().clone()
    }

    /// Drops all recorded requests.
    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

impl LaunchService for RecordingLaunchService {
    fn navigate_current(&self, uri: &str) -> Result<(), String> {
        self.log
            .borrow_mut()
            .push(LaunchRecord::NavigateCurrent(uri.to_string()));
        Ok(())
    }

    fn open_new_context(&self, url: &str) -> Result<(), String> {
        self.log
            .borrow_mut()
            .push(LaunchRecord::OpenNewContext(url.to_string()));
        Ok(())
    }
}
