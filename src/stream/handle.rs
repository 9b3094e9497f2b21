//! Create-once slot for a session.
//!
//! Hosts that allocate an object before constructing its session (language
//! bindings, FFI wrappers, long-lived service state) hold a [`Handle`]; it
//! turns "used before init" and "initialised twice" into typed errors.

use super::error::{Error, Result};

/// A slot that holds at most one session, set exactly once.
#[derive(Debug)]
pub struct Handle<S> {
    slot: Option<S>,
}

impl<S> Handle<S> {
    pub const fn empty() -> Self {
        Self { slot: None }
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.is_some()
    }

    /// Store `session`; fails if the slot is already occupied.
    pub fn init(&mut self, session: S) -> Result<&mut S> {
        if self.slot.is_some() {
            return Err(Error::AlreadyInitialized);
        }
        Ok(self.slot.insert(session))
    }

    pub fn get(&self) -> Result<&S> {
        self.slot.as_ref().ok_or(Error::UninitializedSession)
    }

    pub fn get_mut(&mut self) -> Result<&mut S> {
        self.slot.as_mut().ok_or(Error::UninitializedSession)
    }

    /// Release the session, leaving the slot empty.
    pub fn take(&mut self) -> Option<S> {
        self.slot.take()
    }
}

impl<S> Default for Handle<S> {
    fn default() -> Self {
        Self::empty()
    }
}
