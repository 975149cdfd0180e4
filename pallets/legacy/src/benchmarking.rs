use crate::*;
use alloc::{vec, vec::Vec};
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_support::traits::fungible::Mutate as NativeMutate;
use polkadot_sdk::frame_system::RawOrigin;
use primitives::{Balance, params};

const SEED: u32 = 0;

fn funded_account<T: Config>(name: &'static str, index: u32) -> T::AccountId {
  let who: T::AccountId = account(name, index, SEED);
  T::Currency::mint_into(&who, 1_000u128.saturating_mul(params::PRECISION))
    .expect("minting native balance failed");
  who
}

fn split_shares(n: u32) -> Vec<u32> {
  let base = params::TOTAL_SHARE_BPS / n;
  let mut shares = vec![base; n as usize];
  shares[0] += params::TOTAL_SHARE_BPS - base * n;
  shares
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn configure(b: Linear<1, 10>) {
    let owner = funded_account::<T>("owner", 0);
    FeeCollector::<T>::put(account::<T::AccountId>("collector", 0, SEED));

    let beneficiaries: Vec<T::AccountId> =
      (0..b).map(|i| account("beneficiary", i, SEED)).collect();
    let shares = split_shares(b);
    // Pre-populate so the wipe of the previous set is exercised too.
    Pallet::<T>::configure(
      RawOrigin::Signed(owner.clone()).into(),
      beneficiaries.clone(),
      shares.clone(),
      100u32.into(),
    )
    .expect("pre-configuration failed");

    #[extrinsic_call]
    configure(
      RawOrigin::Signed(owner.clone()),
      beneficiaries,
      shares,
      100u32.into(),
    );

    assert!(Owners::<T>::contains_key(&owner));
  }

  #[benchmark]
  fn heartbeat() {
    let owner = funded_account::<T>("owner", 0);
    FeeCollector::<T>::put(account::<T::AccountId>("collector", 0, SEED));
    let beneficiary: T::AccountId = account("beneficiary", 0, SEED);
    Pallet::<T>::configure(
      RawOrigin::Signed(owner.clone()).into(),
      vec![beneficiary],
      vec![params::TOTAL_SHARE_BPS],
      100u32.into(),
    )
    .expect("configuration failed");

    #[extrinsic_call]
    heartbeat(RawOrigin::Signed(owner.clone()), 200u32.into());

    assert!(!Pallet::<T>::is_unlocked(&owner));
  }

  #[benchmark]
  fn claim(a: Linear<1, 10>) {
    let owner = funded_account::<T>("owner", 0);
    let caller = funded_account::<T>("caller", 0);
    let beneficiary: T::AccountId = account("beneficiary", 0, SEED);
    FeeCollector::<T>::put(account::<T::AccountId>("collector", 0, SEED));

    let delegate = Pallet::<T>::account_id();
    let assets: Vec<u32> = (1..=a).collect();
    for asset in assets.iter() {
      T::BenchmarkHelper::create_asset(*asset).expect("asset creation failed");
      T::BenchmarkHelper::mint(*asset, &owner, 1_000u128.saturating_mul(params::PRECISION))
        .expect("minting asset failed");
      T::BenchmarkHelper::approve(*asset, &owner, &delegate, Balance::MAX)
        .expect("approval failed");
    }

    Pallet::<T>::configure(
      RawOrigin::Signed(owner.clone()).into(),
      vec![beneficiary.clone()],
      vec![params::TOTAL_SHARE_BPS],
      0u32.into(),
    )
    .expect("configuration failed");

    #[extrinsic_call]
    claim(
      RawOrigin::Signed(caller),
      owner.clone(),
      beneficiary.clone(),
      assets,
    );

    assert!(Claimed::<T>::get((owner, beneficiary, 1u32)) > 0);
  }

  #[benchmark]
  fn update_fee_collector() {
    let current = funded_account::<T>("collector", 0);
    FeeCollector::<T>::put(current.clone());
    let new: T::AccountId = account("new", 0, SEED);

    #[extrinsic_call]
    update_fee_collector(RawOrigin::Signed(current), new.clone());

    assert_eq!(FeeCollector::<T>::get(), Some(new));
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
