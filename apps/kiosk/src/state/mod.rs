//! # State Module
//!
//! Session state for the kiosk.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │      MachineState        │        │      KioskConfig         │      │
//! │  │                          │        │                          │      │
//! │  │  Arc<Mutex<              │        │  catalog_path            │      │
//! │  │    VendingMachine        │        │  deposit_step            │      │
//! │  │  >>                      │        │                          │      │
//! │  └──────────────────────────┘        └──────────────────────────┘      │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • MachineState: one lock held across each whole command               │
//! │  • KioskConfig: read-only after startup                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod machine;

pub use machine::MachineState;
