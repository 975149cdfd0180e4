#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use core::marker::PhantomData;
use polkadot_sdk::frame_support::{
  traits::Get,
  weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
  fn configure(beneficiaries: u32) -> Weight;
  fn heartbeat() -> Weight;
  fn claim(assets: u32) -> Weight;
  fn update_fee_collector() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
  fn configure(beneficiaries: u32) -> Weight {
    // Wipe of the previous set plus rebuild: two list writes and one record
    // write per beneficiary, bounded by the same cap on both sides.
    let per_entry = u64::from(beneficiaries);
    Weight::from_parts(30_000_000, 2400)
      .saturating_add(T::DbWeight::get().reads(per_entry.saturating_mul(2).saturating_add(3)))
      .saturating_add(T::DbWeight::get().writes(per_entry.saturating_mul(3).saturating_add(3)))
  }

  fn heartbeat() -> Weight {
    Weight::from_parts(12_000_000, 1200)
      .saturating_add(T::DbWeight::get().reads(2))
      .saturating_add(T::DbWeight::get().writes(2))
  }

  fn claim(assets: u32) -> Weight {
    // Per asset: balance/allowance reads, transfer, two counter writes.
    let per_asset = u64::from(assets);
    Weight::from_parts(35_000_000, 2800)
      .saturating_add(T::DbWeight::get().reads(per_asset.saturating_mul(4).saturating_add(4)))
      .saturating_add(T::DbWeight::get().writes(per_asset.saturating_mul(3).saturating_add(2)))
  }

  fn update_fee_collector() -> Weight {
    Weight::from_parts(8_000_000, 800)
      .saturating_add(T::DbWeight::get().reads(1))
      .saturating_add(T::DbWeight::get().writes(1))
  }
}

impl WeightInfo for () {
  fn configure(beneficiaries: u32) -> Weight {
    let per_entry = u64::from(beneficiaries);
    Weight::from_parts(30_000_000, 2400)
      .saturating_add(RocksDbWeight::get().reads(per_entry.saturating_mul(2).saturating_add(3)))
      .saturating_add(RocksDbWeight::get().writes(per_entry.saturating_mul(3).saturating_add(3)))
  }

  fn heartbeat() -> Weight {
    Weight::from_parts(12_000_000, 1200)
      .saturating_add(RocksDbWeight::get().reads(2))
      .saturating_add(RocksDbWeight::get().writes(2))
  }

  fn claim(assets: u32) -> Weight {
    let per_asset = u64::from(assets);
    Weight::from_parts(35_000_000, 2800)
      .saturating_add(RocksDbWeight::get().reads(per_asset.saturating_mul(4).saturating_add(4)))
      .saturating_add(RocksDbWeight::get().writes(per_asset.saturating_mul(3).saturating_add(2)))
  }

  fn update_fee_collector() -> Weight {
    Weight::from_parts(8_000_000, 800)
      .saturating_add(RocksDbWeight::get().reads(1))
      .saturating_add(RocksDbWeight::get().writes(1))
  }
}
