//! Protocol Constants for the Legacy Protocol
//!
//! This module centralizes all system-level constants: pallet IDs for
//! deriving protocol-owned accounts and the fundamental share-accounting
//! parameters.
//!
//! These constants are the single source of truth for the protocol and are
//! re-used across runtime configurations via the primitives crate.

/// Balance type alias for consistency across the protocol
pub type Balance = u128;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// These IDs are used by Polkadot SDK's `PalletId::into_account_truncating()`
/// to deterministically generate accounts for pallet-specific operations.
pub mod pallet_ids {
  /// Legacy pallet ID — the delegate account owners approve on the asset
  /// ledger so the pallet can spend their allowance at claim time.
  pub const LEGACY_PALLET_ID: &[u8; 8] = b"py/legcy";
}

/// Protocol parameters defining the share-accounting model.
///
/// These parameters are global and coordinate the economic properties of the
/// distribution engine.
pub mod params {
  use super::Balance;

  /// Precision scalar for fee amounts (10^12, one native unit).
  pub const PRECISION: Balance = 1_000_000_000_000;

  /// Denominator of the fixed-point share unit: 10_000 basis points = 100%.
  ///
  /// All beneficiary shares are expressed against this denominator and every
  /// successful configuration must allocate it exactly. Payment math always
  /// truncates, leaving bounded dust in the owner's balance.
  pub const TOTAL_SHARE_BPS: u32 = 10_000;

  /// Smallest share a beneficiary can hold (0.01%).
  pub const MIN_SHARE_BPS: u32 = 1;

  /// Maximum beneficiaries a single configuration call may register.
  pub const MAX_BENEFICIARIES: u32 = 10;

  /// Maximum assets a single claim call may process.
  pub const MAX_CLAIM_BATCH: u32 = 10;

  /// Bound on the beneficiary -> owners reverse-lookup list.
  ///
  /// Storage must be bounded; a beneficiary named by more owners than this
  /// cannot be added to further configurations.
  pub const MAX_TRACKED_OWNERS: u32 = 4_096;

  /// Default fee for registering or replacing a beneficiary configuration.
  pub const SETUP_FEE: Balance = PRECISION / 10; // 0.1

  /// Default flat fee for a claim transaction (per call, not per asset).
  pub const CLAIM_FEE: Balance = PRECISION / 100; // 0.01

  /// Default fee for a heartbeat deadline extension.
  pub const EXTENSION_FEE: Balance = PRECISION / 100; // 0.01
}
