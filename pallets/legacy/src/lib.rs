//! Legacy Pallet
//!
//! Non-custodial, share-based asset distribution. An owner registers a set of
//! beneficiaries with basis-point shares against an inactivity deadline; once
//! the deadline passes without a heartbeat, any caller may trigger transfers
//! of the owner's externally-held assets to beneficiaries in proportion to
//! their shares. The pallet never holds claimable assets — it spends the
//! allowance the owner granted to the pallet-derived account on the asset
//! ledger.
//!
//! Payment amounts are computed against a virtual pool: the owner's current
//! balance plus everything already released on their behalf. Recomputing from
//! the lifetime total makes the accounting self-healing across balance
//! refills, partial claims, and share reconfigurations; truncating division
//! leaves bounded dust in the owner's balance.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
  fn create_asset(asset: u32) -> frame::deps::sp_runtime::DispatchResult;
  fn mint(
    asset: u32,
    who: &AccountId,
    amount: primitives::Balance,
  ) -> frame::deps::sp_runtime::DispatchResult;
  fn approve(
    asset: u32,
    owner: &AccountId,
    delegate: &AccountId,
    amount: primitives::Balance,
  ) -> frame::deps::sp_runtime::DispatchResult;
}

#[frame::pallet]
pub mod pallet {
  use super::WeightInfo;
  use frame::deps::{
    frame_support::{
      PalletId,
      traits::{
        fungible::{Inspect as NativeInspect, Mutate as NativeMutate},
        fungibles::{
          Inspect as FungiblesInspect,
          approvals::{Inspect as ApprovalsInspect, Mutate as ApprovalsMutate},
        },
        tokens::Preservation,
      },
    },
    sp_core::U256,
    sp_runtime::{
      DispatchError,
      traits::{AccountIdConversion, Saturating},
    },
  };
  use frame::prelude::*;
  use primitives::{Balance, LegacyAccount, OwnerRecord, params};

  use alloc::vec::Vec;

  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// The external asset ledger holding owner balances and allowances.
    /// Claims spend the allowance granted to the pallet account.
    type Assets: FungiblesInspect<Self::AccountId, AssetId = u32, Balance = Balance>
      + ApprovalsInspect<Self::AccountId>
      + ApprovalsMutate<Self::AccountId>;

    /// Native currency used for protocol fees.
    type Currency: NativeInspect<Self::AccountId, Balance = Balance>
      + NativeMutate<Self::AccountId, Balance = Balance>;

    /// Pallet ID deriving the delegate account owners approve on the asset
    /// ledger.
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// Fee collected for each configuration call.
    #[pallet::constant]
    type SetupFee: Get<Balance>;

    /// Flat fee collected once per claim call, regardless of batch size.
    #[pallet::constant]
    type ClaimFee: Get<Balance>;

    /// Fee collected for each heartbeat deadline extension.
    #[pallet::constant]
    type ExtensionFee: Get<Balance>;

    /// Maximum beneficiaries per configuration.
    #[pallet::constant]
    type MaxBeneficiaries: Get<u32>;

    /// Maximum assets per claim batch.
    #[pallet::constant]
    type MaxClaimBatch: Get<u32>;

    /// Bound on the beneficiary -> owners reverse-lookup list.
    #[pallet::constant]
    type MaxTrackedOwners: Get<u32>;

    /// Weight information for extrinsics.
    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AccountId>;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  /// Share ledger: one record per owner -> beneficiary pair ever configured.
  /// Deactivated records are kept so claim history survives reconfiguration.
  #[pallet::storage]
  #[pallet::getter(fn legacy)]
  pub type Legacies<T: Config> = StorageDoubleMap<
    _,
    Blake2_128Concat,
    T::AccountId,
    Blake2_128Concat,
    T::AccountId,
    LegacyAccount<T::AccountId>,
    OptionQuery,
  >;

  /// Per-owner allocation counter and deadline clock.
  #[pallet::storage]
  #[pallet::getter(fn owner_record)]
  pub type Owners<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, OwnerRecord<BlockNumberFor<T>>, OptionQuery>;

  /// Active beneficiaries of an owner, swap-and-pop maintained.
  #[pallet::storage]
  #[pallet::getter(fn owner_beneficiaries)]
  pub type OwnerBeneficiaries<T: Config> = StorageMap<
    _,
    Blake2_128Concat,
    T::AccountId,
    BoundedVec<T::AccountId, T::MaxBeneficiaries>,
    ValueQuery,
  >;

  /// Owners with an active legacy naming this beneficiary, swap-and-pop
  /// maintained.
  #[pallet::storage]
  #[pallet::getter(fn beneficiary_owners)]
  pub type BeneficiaryOwners<T: Config> = StorageMap<
    _,
    Blake2_128Concat,
    T::AccountId,
    BoundedVec<T::AccountId, T::MaxTrackedOwners>,
    ValueQuery,
  >;

  /// Lifetime amount of an asset actually transferred out on an owner's
  /// behalf, across all beneficiaries. Never decreases.
  #[pallet::storage]
  #[pallet::getter(fn released)]
  pub type Released<T: Config> = StorageDoubleMap<
    _,
    Blake2_128Concat,
    T::AccountId,
    Blake2_128Concat,
    u32,
    Balance,
    ValueQuery,
  >;

  /// Lifetime amount a beneficiary actually received for an asset from an
  /// owner. Never decreases.
  #[pallet::storage]
  #[pallet::getter(fn claimed)]
  pub type Claimed<T: Config> = StorageNMap<
    _,
    (
      NMapKey<Blake2_128Concat, T::AccountId>,
      NMapKey<Blake2_128Concat, T::AccountId>,
      NMapKey<Blake2_128Concat, u32>,
    ),
    Balance,
    ValueQuery,
  >;

  /// Recipient of all protocol fees. Only the current collector may replace
  /// it.
  #[pallet::storage]
  #[pallet::getter(fn fee_collector)]
  pub type FeeCollector<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// An owner replaced their beneficiary configuration.
    LegacyConfigured {
      owner: T::AccountId,
      beneficiaries: u32,
      unlock_at: BlockNumberFor<T>,
    },
    /// An owner proved activity and pushed their deadline.
    HeartbeatReceived {
      owner: T::AccountId,
      unlock_at: BlockNumberFor<T>,
    },
    /// A beneficiary received an asset payout; `amount` is the net amount
    /// actually received.
    LegacyClaimed {
      owner: T::AccountId,
      beneficiary: T::AccountId,
      asset: u32,
      amount: Balance,
    },
    /// The fee collector account was replaced.
    FeeCollectorUpdated {
      old: T::AccountId,
      new: T::AccountId,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// The beneficiary list is empty.
    NoBeneficiaries,
    /// More beneficiaries than the configuration cap allows.
    TooManyBeneficiaries,
    /// Beneficiary and share lists differ in length.
    LengthMismatch,
    /// A share is zero or exceeds the basis-point denominator.
    ShareOutOfRange,
    /// An owner cannot name themselves as beneficiary.
    SelfBeneficiary,
    /// The same beneficiary appears twice in one configuration.
    DuplicateBeneficiary,
    /// Shares do not sum to exactly 100%.
    SharesNotFullyAllocated,
    /// The beneficiary is already tracked by too many owners.
    TooManyTrackedOwners,
    /// The asset list is empty.
    NoAssets,
    /// More assets than the claim batch cap allows.
    TooManyAssets,
    /// No legacy exists for this owner/beneficiary pair.
    UnknownLegacy,
    /// The legacy exists but was deactivated by a later configuration.
    InactiveLegacy,
    /// The owner's inactivity deadline has not been reached.
    DeadlineNotReached,
    /// No asset in the batch produced a payout.
    NothingClaimable,
    /// The caller cannot cover the protocol fee.
    InsufficientFee,
    /// No fee collector has been configured.
    FeeCollectorNotSet,
    /// Only the current fee collector may do this.
    NotFeeCollector,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Atomically replace the caller's beneficiary configuration.
    ///
    /// Every currently active beneficiary is deactivated (claim history is
    /// retained), then the `(beneficiary, share)` pairs are registered with
    /// fresh reverse-lookup indices. Shares are basis points and must sum to
    /// exactly 10_000. The deadline is set to `now + delay` and the setup
    /// fee is drawn from the caller.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::configure(beneficiaries.len() as u32))]
    pub fn configure(
      origin: OriginFor<T>,
      beneficiaries: Vec<T::AccountId>,
      shares: Vec<u32>,
      delay: BlockNumberFor<T>,
    ) -> DispatchResult {
      let owner = ensure_signed(origin)?;

      ensure!(!beneficiaries.is_empty(), Error::<T>::NoBeneficiaries);
      ensure!(
        beneficiaries.len() as u32 <= T::MaxBeneficiaries::get(),
        Error::<T>::TooManyBeneficiaries
      );
      ensure!(beneficiaries.len() == shares.len(), Error::<T>::LengthMismatch);

      let mut total: u32 = 0;
      for (i, (beneficiary, share)) in beneficiaries.iter().zip(shares.iter()).enumerate() {
        ensure!(*beneficiary != owner, Error::<T>::SelfBeneficiary);
        ensure!(
          (params::MIN_SHARE_BPS..=params::TOTAL_SHARE_BPS).contains(share),
          Error::<T>::ShareOutOfRange
        );
        ensure!(
          !beneficiaries[..i].contains(beneficiary),
          Error::<T>::DuplicateBeneficiary
        );
        total = total.saturating_add(*share);
      }
      ensure!(
        total == params::TOTAL_SHARE_BPS,
        Error::<T>::SharesNotFullyAllocated
      );

      Self::collect_fee(&owner, T::SetupFee::get())?;
      Self::deactivate_all(&owner);

      let mut active: BoundedVec<T::AccountId, T::MaxBeneficiaries> = BoundedVec::new();
      for (beneficiary, share) in beneficiaries.iter().zip(shares.iter()) {
        let beneficiary_index = active.len() as u32;
        active
          .try_push(beneficiary.clone())
          .map_err(|_| Error::<T>::TooManyBeneficiaries)?;
        let owner_index =
          BeneficiaryOwners::<T>::try_mutate(beneficiary, |owners| -> Result<u32, DispatchError> {
            let index = owners.len() as u32;
            owners
              .try_push(owner.clone())
              .map_err(|_| Error::<T>::TooManyTrackedOwners)?;
            Ok(index)
          })?;
        // Claim counters are keyed separately, so a re-added beneficiary
        // inherits their history.
        Legacies::<T>::insert(
          &owner,
          beneficiary,
          LegacyAccount {
            owner: owner.clone(),
            beneficiary: beneficiary.clone(),
            share: *share,
            active: true,
            beneficiary_index,
            owner_index,
          },
        );
      }
      OwnerBeneficiaries::<T>::insert(&owner, active);

      let unlock_at = frame_system::Pallet::<T>::block_number().saturating_add(delay);
      Owners::<T>::insert(
        &owner,
        OwnerRecord {
          total_allocated_shares: total,
          unlock_at,
        },
      );

      Self::deposit_event(Event::LegacyConfigured {
        owner,
        beneficiaries: beneficiaries.len() as u32,
        unlock_at,
      });
      Ok(())
    }

    /// Prove activity: reset the caller's deadline to `now + delay`.
    ///
    /// Unconditional — an owner may re-lock claims even after the previous
    /// deadline has passed. Collects the extension fee.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::heartbeat())]
    pub fn heartbeat(origin: OriginFor<T>, delay: BlockNumberFor<T>) -> DispatchResult {
      let owner = ensure_signed(origin)?;
      let mut record = Owners::<T>::get(&owner).ok_or(Error::<T>::UnknownLegacy)?;

      Self::collect_fee(&owner, T::ExtensionFee::get())?;

      record.unlock_at = frame_system::Pallet::<T>::block_number().saturating_add(delay);
      Owners::<T>::insert(&owner, record);

      Self::deposit_event(Event::HeartbeatReceived {
        owner,
        unlock_at: record.unlock_at,
      });
      Ok(())
    }

    /// Trigger payouts of `assets` from `owner` to `beneficiary`.
    ///
    /// Callable by anyone once the owner's deadline has passed; the caller
    /// pays the flat claim fee, funds always flow to the beneficiary.
    /// Unknown assets, assets with nothing owed and transfers that deliver
    /// nothing are skipped; a failing transfer aborts the whole batch.
    /// Counters are reconciled with the beneficiary's actual balance delta,
    /// so fee-on-transfer assets stay consistent. If no asset produces a
    /// payout the call fails and the fee is not charged.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::claim(assets.len() as u32))]
    pub fn claim(
      origin: OriginFor<T>,
      owner: T::AccountId,
      beneficiary: T::AccountId,
      assets: Vec<u32>,
    ) -> DispatchResult {
      let caller = ensure_signed(origin)?;

      ensure!(!assets.is_empty(), Error::<T>::NoAssets);
      ensure!(
        assets.len() as u32 <= T::MaxClaimBatch::get(),
        Error::<T>::TooManyAssets
      );

      let legacy = Legacies::<T>::get(&owner, &beneficiary).ok_or(Error::<T>::UnknownLegacy)?;
      ensure!(legacy.active, Error::<T>::InactiveLegacy);

      let record = Owners::<T>::get(&owner).ok_or(Error::<T>::UnknownLegacy)?;
      ensure!(
        frame_system::Pallet::<T>::block_number() >= record.unlock_at,
        Error::<T>::DeadlineNotReached
      );

      Self::collect_fee(&caller, T::ClaimFee::get())?;

      let delegate = Self::account_id();
      let mut processed: u32 = 0;
      for asset in assets {
        if !T::Assets::asset_exists(asset) {
          continue;
        }
        let payment = Self::compute_payment(&owner, &beneficiary, asset, legacy.share);
        if payment == 0 {
          continue;
        }

        let before = T::Assets::balance(asset, &beneficiary);
        T::Assets::transfer_from(asset, &owner, &delegate, &beneficiary, payment)?;
        let received = T::Assets::balance(asset, &beneficiary).saturating_sub(before);
        // A transfer fully consumed in flight delivered nothing; it does not
        // count toward the batch.
        if received == 0 {
          continue;
        }

        Claimed::<T>::mutate((owner.clone(), beneficiary.clone(), asset), |claimed| {
          *claimed = claimed.saturating_add(received)
        });
        Released::<T>::mutate(&owner, asset, |released| {
          *released = released.saturating_add(received)
        });

        Self::deposit_event(Event::LegacyClaimed {
          owner: owner.clone(),
          beneficiary: beneficiary.clone(),
          asset,
          amount: received,
        });
        processed = processed.saturating_add(1);
      }

      ensure!(processed > 0, Error::<T>::NothingClaimable);
      Ok(())
    }

    /// Replace the fee collector. Only the current collector may call this.
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::update_fee_collector())]
    pub fn update_fee_collector(origin: OriginFor<T>, new: T::AccountId) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      let current = FeeCollector::<T>::get().ok_or(Error::<T>::FeeCollectorNotSet)?;
      ensure!(caller == current, Error::<T>::NotFeeCollector);

      FeeCollector::<T>::put(&new);
      Self::deposit_event(Event::FeeCollectorUpdated { old: current, new });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    /// The delegate account owners approve on the asset ledger.
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    /// Whether claims against `owner` are currently valid.
    pub fn is_unlocked(owner: &T::AccountId) -> bool {
      Owners::<T>::get(owner)
        .map(|record| frame_system::Pallet::<T>::block_number() >= record.unlock_at)
        .unwrap_or(false)
    }

    /// Amount `beneficiary` could receive for `asset` right now, ignoring
    /// the deadline gate and the active flag. Dry-run counterpart of the
    /// claim executor.
    pub fn claimable_amount(
      owner: &T::AccountId,
      beneficiary: &T::AccountId,
      asset: u32,
    ) -> Balance {
      match Legacies::<T>::get(owner, beneficiary) {
        Some(legacy) => Self::compute_payment(owner, beneficiary, asset, legacy.share),
        None => 0,
      }
    }

    /// Legacies configured by `owner`, paginated over the active list.
    pub fn legacies_of(
      owner: &T::AccountId,
      offset: u32,
      limit: u32,
    ) -> Vec<LegacyAccount<T::AccountId>> {
      let list = OwnerBeneficiaries::<T>::get(owner);
      Self::page(&list, offset, limit)
        .iter()
        .filter_map(|beneficiary| Legacies::<T>::get(owner, beneficiary))
        .collect()
    }

    /// Legacies benefiting `beneficiary`, paginated over the active list.
    pub fn benefits_of(
      beneficiary: &T::AccountId,
      offset: u32,
      limit: u32,
    ) -> Vec<LegacyAccount<T::AccountId>> {
      let list = BeneficiaryOwners::<T>::get(beneficiary);
      Self::page(&list, offset, limit)
        .iter()
        .filter_map(|owner| Legacies::<T>::get(owner, beneficiary))
        .collect()
    }

    fn page(list: &[T::AccountId], offset: u32, limit: u32) -> &[T::AccountId] {
      let start = offset as usize;
      if limit == 0 || start >= list.len() {
        return &[];
      }
      let end = start.saturating_add(limit as usize).min(list.len());
      &list[start..end]
    }

    /// Virtual-pool payment calculation.
    ///
    /// The pool is the owner's current balance plus everything already
    /// released for the asset — the lifetime total the shares apply to. The
    /// result is clamped to what the balance and the pallet's allowance can
    /// actually cover.
    fn compute_payment(
      owner: &T::AccountId,
      beneficiary: &T::AccountId,
      asset: u32,
      share: u32,
    ) -> Balance {
      let balance = T::Assets::balance(asset, owner);
      let released = Released::<T>::get(owner, asset);

      let pool = U256::from(balance).saturating_add(U256::from(released));
      let due = pool
        .saturating_mul(U256::from(share))
        .checked_div(U256::from(params::TOTAL_SHARE_BPS))
        .unwrap_or(U256::zero());
      let due = if due > U256::from(Balance::MAX) {
        Balance::MAX
      } else {
        due.as_u128()
      };

      let claimed = Claimed::<T>::get((owner.clone(), beneficiary.clone(), asset));
      // A share reduced below what was already claimed owes zero, never a
      // negative amount.
      let owed = due.saturating_sub(claimed);

      let allowance = T::Assets::allowance(asset, owner, &Self::account_id());
      owed.min(balance).min(allowance)
    }

    /// Move `amount` of native currency from `who` to the fee collector.
    /// Fail-closed: a failing fee transfer aborts the enclosing call.
    fn collect_fee(who: &T::AccountId, amount: Balance) -> DispatchResult {
      // A missing collector is an error regardless of the fee amount.
      let collector = FeeCollector::<T>::get().ok_or(Error::<T>::FeeCollectorNotSet)?;
      if amount == 0 {
        return Ok(());
      }
      T::Currency::transfer(who, &collector, amount, Preservation::Preserve)
        .map_err(|_| Error::<T>::InsufficientFee)?;
      Ok(())
    }

    /// Full wipe of an owner's active set: flip every record to inactive and
    /// prune both reverse-lookup lists.
    fn deactivate_all(owner: &T::AccountId) {
      let previous = OwnerBeneficiaries::<T>::take(owner);
      for beneficiary in previous.iter() {
        let Some(mut legacy) = Legacies::<T>::get(owner, beneficiary) else {
          continue;
        };
        Self::prune_beneficiary_owners(beneficiary, legacy.owner_index);
        legacy.active = false;
        Legacies::<T>::insert(owner, beneficiary, legacy);
      }
    }

    /// Swap-and-pop removal from `BeneficiaryOwners`, fixing up the moved
    /// element's stored index.
    fn prune_beneficiary_owners(beneficiary: &T::AccountId, index: u32) {
      BeneficiaryOwners::<T>::mutate(beneficiary, |owners| {
        let index = index as usize;
        if index >= owners.len() {
          return;
        }
        owners.swap_remove(index);
        if let Some(moved) = owners.get(index) {
          Legacies::<T>::mutate(moved.clone(), beneficiary, |maybe| {
            if let Some(record) = maybe {
              record.owner_index = index as u32;
            }
          });
        }
      });
    }
  }

  /// Genesis configuration — seeds the fee collector and gives the pallet
  /// account a provider reference so it survives with zero balance.
  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    pub fee_collector: Option<T::AccountId>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      if let Some(collector) = &self.fee_collector {
        FeeCollector::<T>::put(collector);
      }
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());
    }
  }
}
