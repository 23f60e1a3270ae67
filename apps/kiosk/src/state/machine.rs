//! # Machine State
//!
//! Shares one `VendingMachine` between callers.
//!
//! ## Thread Safety
//! `vend` is check-then-act: read stock and balance, then write both. Two
//! callers interleaving those steps could sell the last item twice. The
//! whole call therefore runs under a single `Mutex` acquisition.
//!
//! ```text
//! caller A ──► lock ──► vend(Soda, 1) ──► unlock
//! caller B ──────────── waits ─────────────────► lock ──► vend(Soda, 1) ──► unlock
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use vending_core::VendingMachine;

/// Shared handle to the session's machine.
///
/// Cloning the handle shares the same machine.
#[derive(Debug, Clone)]
pub struct MachineState {
    machine: Arc<Mutex<VendingMachine>>,
}

impl MachineState {
    pub fn new(machine: VendingMachine) -> Self {
        MachineState {
            machine: Arc::new(Mutex::new(machine)),
        }
    }

    /// Executes a function with read access to the machine.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let balance = state.with_machine(|m| m.amount_deposited());
    /// ```
    pub fn with_machine<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&VendingMachine) -> R,
    {
        // The machine validates before it writes, so a panic elsewhere
        // while holding the lock cannot leave it half-updated.
        let machine = self.machine.lock().unwrap_or_else(PoisonError::into_inner);
        f(&machine)
    }

    /// Executes a function with write access to the machine.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_machine_mut(|m| m.vend(&selection, quantity))?;
    /// ```
    pub fn with_machine_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut VendingMachine) -> R,
    {
        let mut machine = self.machine.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut machine)
    }
}
