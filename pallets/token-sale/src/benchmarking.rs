//! Benchmarking setup for pallet-token-sale

use super::*;

#[allow(unused)]
use crate::Pallet as TokenSale;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn setup_owner<T: Config>() -> T::AccountId {
    let owner: T::AccountId = account("owner", 0, 0);
    Owner::<T>::put(&owner);
    owner
}

fn accounts<T: Config>(n: u32) -> Vec<T::AccountId> {
    (0..n).map(|i| account("participant", i, 0)).collect()
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn add_to_whitelist() {
        let owner = setup_owner::<T>();
        let participant: T::AccountId = whitelisted_caller();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), participant.clone());

        assert_eq!(Whitelist::<T>::get(&participant), true);
    }

    #[benchmark]
    fn add_many_to_whitelist(n: Linear<1, { T::MaxWhitelistBatch::get() }>) {
        let owner = setup_owner::<T>();
        let participants = accounts::<T>(n);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), participants.clone());

        assert!(participants.iter().all(|p| Whitelist::<T>::get(p)));
    }

    #[benchmark]
    fn remove_from_whitelist() {
        let owner = setup_owner::<T>();
        let participant: T::AccountId = whitelisted_caller();
        Whitelist::<T>::insert(&participant, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), participant.clone());

        assert_eq!(Whitelist::<T>::get(&participant), false);
    }

    #[benchmark]
    fn remove_many_from_whitelist(n: Linear<1, { T::MaxWhitelistBatch::get() }>) {
        let owner = setup_owner::<T>();
        let participants = accounts::<T>(n);
        for participant in &participants {
            Whitelist::<T>::insert(participant, true);
        }

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), participants.clone());

        assert!(participants.iter().all(|p| !Whitelist::<T>::get(p)));
    }

    #[benchmark]
    fn set_pause() {
        let owner = setup_owner::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), true);

        assert_eq!(Paused::<T>::get(), true);
    }

    #[benchmark]
    fn set_sale_finished() {
        let owner = setup_owner::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), true);

        assert_eq!(SaleFinished::<T>::get(), true);
    }

    #[benchmark]
    fn set_minimum_purchase() {
        let owner = setup_owner::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), 450);

        assert_eq!(MinimumPurchase::<T>::get(), 450 * TOKEN_UNIT);
    }

    #[benchmark]
    fn set_minimum_sold() {
        let owner = setup_owner::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), 10_000);

        assert_eq!(MinimumSold::<T>::get(), 10_000 * TOKEN_UNIT);
    }

    #[benchmark]
    fn set_rate() {
        let owner = setup_owner::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), 2_000);

        assert_eq!(Rate::<T>::get(), 2_000);
    }

    #[benchmark]
    fn purchase() {
        setup_owner::<T>();
        let caller: T::AccountId = whitelisted_caller();
        Whitelist::<T>::insert(&caller, true);
        // Keep the minimum out of the way so any funded value is accepted
        MinimumPurchase::<T>::put(0);

        let value = T::Currency::minimum_balance() * 10u32.into();
        T::Currency::set_balance(&caller, value * 100u32.into());
        let expected = TokenSale::<T>::token_amount(value).expect("rate fits the test value");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), value);

        assert_eq!(TokenBalances::<T>::get(&caller), expected);
        assert_eq!(TokenSold::<T>::get(), expected);
    }

    #[benchmark]
    fn claim_tokens() {
        setup_owner::<T>();
        let caller: T::AccountId = whitelisted_caller();
        Whitelist::<T>::insert(&caller, true);
        SaleFinished::<T>::put(true);
        MinimumSold::<T>::put(0);
        let destination: DestinationOf<T> = (0..T::MaxDestinationLength::get())
            .map(|_| b'x')
            .collect::<Vec<u8>>()
            .try_into()
            .expect("fits the bound");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), destination);

        assert!(Claims::<T>::contains_key(&caller));
    }

    impl_benchmark_test_suite!(TokenSale, crate::mock::new_test_ext(), crate::mock::Test);
}
