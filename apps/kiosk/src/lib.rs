//! # Vending Kiosk Library
//!
//! The session layer of the vending machine: it reads configuration, loads
//! the catalog, owns the machine, and exposes the commands a front end
//! calls.
//!
//! ## Module Organization
//! ```text
//! vending_kiosk/
//! ├── lib.rs          ◄─── You are here (startup & tracing)
//! ├── config.rs       ◄─── Environment configuration
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── machine.rs  ◄─── Shared machine (Arc<Mutex<_>>)
//! ├── commands/
//! │   ├── balance.rs  ◄─── get_balance, deposit, deposit_step
//! │   ├── catalog.rs  ◄─── list_selections, get_item, quote
//! │   └── vend.rs     ◄─── vend
//! └── error.rs        ◄─── ApiError, StartupError
//! ```
//!
//! ## Example
//! ```rust,no_run
//! use vending_kiosk::{bootstrap, commands, init_tracing, KioskConfig};
//!
//! init_tracing();
//! let kiosk = bootstrap(KioskConfig::load()?)?;
//!
//! commands::balance::deposit_step(&kiosk.machine, &kiosk.config).ok();
//! let sodas = commands::vend::vend(&kiosk.machine, "soda", 2);
//! # Ok::<(), vending_kiosk::error::StartupError>(())
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use vending_core::VendingMachine;

pub use config::KioskConfig;
pub use error::{ApiError, StartupError};
pub use state::MachineState;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,vending_kiosk=debug,vending_catalog=debug";

/// A started session: configuration plus the shared machine.
#[derive(Debug, Clone)]
pub struct Kiosk {
    pub config: KioskConfig,
    pub machine: MachineState,
}

/// Starts a session.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Read catalog document ──────────────► CatalogError::Io             │
/// │  2. Parse + check shape ────────────────► CatalogError::Parse/Malformed│
/// │  3. Build VendingMachine (balance $0.00)                                │
/// │  4. Wrap in MachineState                                                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Any failure is returned; there is no fallback catalog.
pub fn bootstrap(config: KioskConfig) -> Result<Kiosk, StartupError> {
    info!(catalog = ?config.catalog_path, "Starting vending kiosk");

    let inventory = vending_catalog::from_path(&config.catalog_path)?;
    let machine = MachineState::new(VendingMachine::new(inventory));

    info!(
        selections = machine.with_machine(|m| m.selections().len()),
        deposit_step = %config.deposit_step,
        "Kiosk ready"
    );

    Ok(Kiosk { config, machine })
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=vending_kiosk=trace` - Trace for the kiosk only
/// - Default: INFO, DEBUG for the vending crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        debug!("Tracing subscriber already installed");
    }
}
