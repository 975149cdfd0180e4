use crate as pallet_legacy;
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl,
  traits::{
    ConstU32, ConstU128, Get,
    fungibles::{
      Inspect as FungiblesInspect, Mutate as FungiblesMutate,
      approvals::{Inspect as ApprovalsInspect, Mutate as ApprovalsMutate},
    },
    tokens::{
      DepositConsequence, Fortitude, Precision, Preservation, Provenance, WithdrawConsequence,
    },
  },
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{
  BuildStorage, DispatchResult,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use std::cell::Cell;

pub const ALICE: u64 = 1;
pub const BOB: u64 = 2;
pub const CAROL: u64 = 3;
pub const DAVE: u64 = 4;
pub const FEE_COLLECTOR: u64 = 99;

pub const TOKEN: u32 = 1;
pub const OTHER_TOKEN: u32 = 2;

thread_local! {
    // Permille cut burned from the recipient on every transfer_from,
    // simulating fee-on-transfer assets. Zero by default.
    pub static TRANSFER_TAX_PERMILLE: Cell<u128> = const { Cell::new(0) };
}

pub fn set_transfer_tax_permille(tax: u128) {
  TRANSFER_TAX_PERMILLE.with(|t| t.set(tax));
}

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    Assets: polkadot_sdk::pallet_assets,
    Legacy: pallet_legacy,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = u64;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<u128>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = u128;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

impl polkadot_sdk::pallet_assets::Config for Test {
  type RuntimeEvent = RuntimeEvent;
  type Balance = u128;
  type AssetId = u32;
  type AssetIdParameter = u32;
  type Currency = Balances;
  type CreateOrigin = polkadot_sdk::frame_support::traits::AsEnsureOriginWithArg<
    frame_system::EnsureSigned<Self::AccountId>,
  >;
  type ForceOrigin = frame_system::EnsureRoot<Self::AccountId>;
  type AssetDeposit = ConstU128<1>;
  type AssetAccountDeposit = ConstU128<1>;
  type MetadataDepositBase = ConstU128<1>;
  type MetadataDepositPerByte = ConstU128<1>;
  type ApprovalDeposit = ConstU128<1>;
  type StringLimit = ConstU32<50>;
  type Freezer = ();
  type Extra = ();
  type ReserveData = ();
  type CallbackHandle = ();
  type WeightInfo = ();
  type RemoveItemsLimit = ConstU32<5>;
  type Holder = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = AssetBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct AssetBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl polkadot_sdk::pallet_assets::BenchmarkHelper<u32, ()> for AssetBenchmarkHelper {
  fn create_asset_id_parameter(id: u32) -> u32 {
    id
  }
  fn create_reserve_id_parameter(_id: u32) -> () {
    ()
  }
}

/// Adapter over pallet-assets that burns a configurable cut from the
/// recipient on every `transfer_from`, so claim reconciliation can be tested
/// against fee-on-transfer semantics.
pub struct TaxedAssets;

type AssetsPallet = polkadot_sdk::pallet_assets::Pallet<Test>;

impl FungiblesInspect<u64> for TaxedAssets {
  type AssetId = u32;
  type Balance = u128;

  fn total_issuance(asset: u32) -> u128 {
    <AssetsPallet as FungiblesInspect<u64>>::total_issuance(asset)
  }
  fn minimum_balance(asset: u32) -> u128 {
    <AssetsPallet as FungiblesInspect<u64>>::minimum_balance(asset)
  }
  fn total_balance(asset: u32, who: &u64) -> u128 {
    <AssetsPallet as FungiblesInspect<u64>>::total_balance(asset, who)
  }
  fn balance(asset: u32, who: &u64) -> u128 {
    <AssetsPallet as FungiblesInspect<u64>>::balance(asset, who)
  }
  fn reducible_balance(asset: u32, who: &u64, preservation: Preservation, force: Fortitude) -> u128 {
    <AssetsPallet as FungiblesInspect<u64>>::reducible_balance(asset, who, preservation, force)
  }
  fn can_deposit(asset: u32, who: &u64, amount: u128, provenance: Provenance) -> DepositConsequence {
    <AssetsPallet as FungiblesInspect<u64>>::can_deposit(asset, who, amount, provenance)
  }
  fn can_withdraw(asset: u32, who: &u64, amount: u128) -> WithdrawConsequence<u128> {
    <AssetsPallet as FungiblesInspect<u64>>::can_withdraw(asset, who, amount)
  }
  fn asset_exists(asset: u32) -> bool {
    <AssetsPallet as FungiblesInspect<u64>>::asset_exists(asset)
  }
}

impl ApprovalsInspect<u64> for TaxedAssets {
  fn allowance(asset: u32, owner: &u64, delegate: &u64) -> u128 {
    <AssetsPallet as ApprovalsInspect<u64>>::allowance(asset, owner, delegate)
  }
}

impl ApprovalsMutate<u64> for TaxedAssets {
  fn approve(asset: u32, owner: &u64, delegate: &u64, amount: u128) -> DispatchResult {
    <AssetsPallet as ApprovalsMutate<u64>>::approve(asset, owner, delegate, amount)
  }

  fn transfer_from(asset: u32, owner: &u64, delegate: &u64, dest: &u64, amount: u128) -> DispatchResult {
    <AssetsPallet as ApprovalsMutate<u64>>::transfer_from(asset, owner, delegate, dest, amount)?;
    let tax = TRANSFER_TAX_PERMILLE.with(|t| t.get());
    if tax > 0 {
      let cut = amount.saturating_mul(tax) / 1000;
      if cut > 0 {
        <AssetsPallet as FungiblesMutate<u64>>::burn_from(
          asset,
          dest,
          cut,
          Preservation::Expendable,
          Precision::Exact,
          Fortitude::Force,
        )?;
      }
    }
    Ok(())
  }
}

pub struct PalletIdStub;
impl Get<PalletId> for PalletIdStub {
  fn get() -> PalletId {
    PalletId(*primitives::pallet_ids::LEGACY_PALLET_ID)
  }
}

impl pallet_legacy::Config for Test {
  type Assets = TaxedAssets;
  type Currency = Balances;
  type PalletId = PalletIdStub;
  type SetupFee = ConstU128<{ primitives::params::SETUP_FEE }>;
  type ClaimFee = ConstU128<{ primitives::params::CLAIM_FEE }>;
  type ExtensionFee = ConstU128<{ primitives::params::EXTENSION_FEE }>;
  type MaxBeneficiaries = ConstU32<{ primitives::params::MAX_BENEFICIARIES }>;
  type MaxClaimBatch = ConstU32<{ primitives::params::MAX_CLAIM_BATCH }>;
  // Small bound so list saturation is reachable in tests.
  type MaxTrackedOwners = ConstU32<2>;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = LegacyBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct LegacyBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<u64> for LegacyBenchmarkHelper {
  fn create_asset(asset: u32) -> DispatchResult {
    let _ = Assets::force_create(frame_system::RawOrigin::Root.into(), asset, 1, true, 1);
    Ok(())
  }

  fn mint(asset: u32, who: &u64, amount: u128) -> DispatchResult {
    <AssetsPallet as FungiblesMutate<u64>>::mint_into(asset, who, amount)?;
    Ok(())
  }

  fn approve(asset: u32, owner: &u64, delegate: &u64, amount: u128) -> DispatchResult {
    <AssetsPallet as ApprovalsMutate<u64>>::approve(asset, owner, delegate, amount)
  }
}

/// Externalities with no fee collector seeded.
pub fn new_test_ext_without_collector() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_assets::GenesisConfig::<Test> {
    assets: vec![(TOKEN, ALICE, true, 1)],
    metadata: vec![],
    accounts: vec![],
    reserves: vec![],
    next_asset_id: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  set_transfer_tax_permille(0);

  t.into()
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_assets::GenesisConfig::<Test> {
    assets: vec![(TOKEN, ALICE, true, 1), (OTHER_TOKEN, ALICE, true, 1)],
    metadata: vec![],
    accounts: vec![],
    reserves: vec![],
    next_asset_id: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  pallet_legacy::GenesisConfig::<Test> {
    fee_collector: Some(FEE_COLLECTOR),
  }
  .assimilate_storage(&mut t)
  .unwrap();

  set_transfer_tax_permille(0);

  t.into()
}
