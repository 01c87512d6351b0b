//! Weights for pallet-token-sale.
//!
//! Hand-estimated from the storage accesses of each call until benchmark output
//! from `benchmarking.rs` is generated against a production runtime.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{traits::Get, weights::Weight};
use sp_std::marker::PhantomData;

pub trait WeightInfo {
    fn add_to_whitelist() -> Weight;
    fn add_many_to_whitelist(n: u32) -> Weight;
    fn remove_from_whitelist() -> Weight;
    fn remove_many_from_whitelist(n: u32) -> Weight;
    fn set_pause() -> Weight;
    fn set_sale_finished() -> Weight;
    fn set_minimum_purchase() -> Weight;
    fn set_minimum_sold() -> Weight;
    fn set_rate() -> Weight;
    fn purchase() -> Weight;
    fn claim_tokens() -> Weight;
}

/// Weights scaled by the runtime's `DbWeight`.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Reads: Owner. Writes: Whitelist
    fn add_to_whitelist() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn add_many_to_whitelist(n: u32) -> Weight {
        Weight::from_parts(10_000_000, 0)
            .saturating_add(Weight::from_parts(3_000_000, 0).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(n.into()))
    }
    fn remove_from_whitelist() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn remove_many_from_whitelist(n: u32) -> Weight {
        Weight::from_parts(10_000_000, 0)
            .saturating_add(Weight::from_parts(3_000_000, 0).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(n.into()))
    }
    fn set_pause() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn set_sale_finished() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn set_minimum_purchase() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn set_minimum_sold() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn set_rate() -> Weight {
        Weight::from_parts(9_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    // Reads: Owner, Whitelist, Paused, SaleFinished, Rate, MinimumPurchase, TokenBalances,
    // TokenSold, two currency accounts. Writes: TokenBalances, TokenSold, two currency accounts
    fn purchase() -> Weight {
        Weight::from_parts(60_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(10, 4))
    }
    // Reads: Owner, Whitelist, Paused, SaleFinished, TokenSold, MinimumSold, Claims.
    // Writes: Claims
    fn claim_tokens() -> Weight {
        Weight::from_parts(25_000_000, 0).saturating_add(T::DbWeight::get().reads_writes(7, 1))
    }
}

impl WeightInfo for () {
    fn add_to_whitelist() -> Weight {
        Weight::from_parts(12_000_000, 0)
    }
    fn add_many_to_whitelist(n: u32) -> Weight {
        Weight::from_parts(10_000_000, 0)
            .saturating_add(Weight::from_parts(3_000_000, 0).saturating_mul(n.into()))
    }
    fn remove_from_whitelist() -> Weight {
        Weight::from_parts(12_000_000, 0)
    }
    fn remove_many_from_whitelist(n: u32) -> Weight {
        Weight::from_parts(10_000_000, 0)
            .saturating_add(Weight::from_parts(3_000_000, 0).saturating_mul(n.into()))
    }
    fn set_pause() -> Weight {
        Weight::from_parts(9_000_000, 0)
    }
    fn set_sale_finished() -> Weight {
        Weight::from_parts(9_000_000, 0)
    }
    fn set_minimum_purchase() -> Weight {
        Weight::from_parts(9_000_000, 0)
    }
    fn set_minimum_sold() -> Weight {
        Weight::from_parts(9_000_000, 0)
    }
    fn set_rate() -> Weight {
        Weight::from_parts(9_000_000, 0)
    }
    fn purchase() -> Weight {
        Weight::from_parts(60_000_000, 0)
    }
    fn claim_tokens() -> Weight {
        Weight::from_parts(25_000_000, 0)
    }
}
