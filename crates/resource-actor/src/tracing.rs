//! # Observability
//!
//! Every actor logs through `tracing` with structured fields rather than module paths:
//!
//! ```text
//! INFO Actor started entity_type="Product"
//! INFO Action ok entity_type="Product" id=product_1
//! WARN Action failed entity_type="Product" id=product_2 error=Insufficient inventory for product_2: requested 5, available 1
//! INFO Created entity_type="Order" id=order_1 size=1
//! ```
//!
//! `RUST_LOG` controls verbosity (`debug` adds full request payloads). Without it the filter
//! falls back to `info`.

use tracing_subscriber::EnvFilter;

/// Installs the global compact subscriber. Call once, at process start.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type already says where a line came from
        .compact()
        .init();
}
