use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// One owner -> beneficiary relationship in the share ledger.
///
/// Records are created on first configuration, flipped to `active = false`
/// (never destroyed) when a later configuration omits the beneficiary, and
/// reactivated with a fresh share but inherited claim history if the owner
/// re-adds the same beneficiary. The two indices locate the record inside
/// the swap-and-pop reverse-lookup lists for O(1) removal.
#[derive(
  Clone,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub struct LegacyAccount<AccountId> {
  pub owner: AccountId,
  pub beneficiary: AccountId,
  /// Share in basis points; in `[1, 10_000]` while the record is active.
  pub share: u32,
  pub active: bool,
  /// Position in `OwnerBeneficiaries[owner]`.
  pub beneficiary_index: u32,
  /// Position in `BeneficiaryOwners[beneficiary]`.
  pub owner_index: u32,
}

/// Per-owner configuration state: the aggregate allocation counter and the
/// deadline gating claims.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub struct OwnerRecord<BlockNumber> {
  /// Sum of all active shares; exactly `TOTAL_SHARE_BPS` after every
  /// successful configuration call.
  pub total_allocated_shares: u32,
  /// Claims are valid from this block onward (inclusive).
  pub unlock_at: BlockNumber,
}
