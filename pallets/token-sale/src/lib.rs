//! # Token Sale Pallet
//!
//! A gated, fixed-rate token sale. Whitelisted participants send native currency to the sale,
//! which forwards it to the sale owner and credits `value * rate` tokens to the participant's
//! ledger entry. Once the owner has finished the sale and the aggregate sold amount reaches the
//! configured minimum, each participant may claim exactly once, binding their allocation to an
//! external destination address.
//!
//! Token and value amounts use 18 fractional decimal digits; owner setters for minimums take
//! whole units and scale them by [`TOKEN_UNIT`].

#![cfg_attr(not(feature = "std"), no_std)]
// `pallet::getter` and `Config::RuntimeEvent` are deprecated upstream
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{
        fungible::{Inspect, Mutate},
        tokens::Preservation,
    },
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::SaturatedConversion;
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub const LOG_TARGET: &str = "runtime::token-sale";

/// One whole token (or unit of value) in its smallest denomination.
pub const TOKEN_UNIT: u128 = 1_000_000_000_000_000_000;

pub type BalanceOf<T> =
    <<T as Config>::Currency as Inspect<<T as frame_system::Config>::AccountId>>::Balance;

/// External destination a participant binds their allocation to.
pub type DestinationOf<T> = BoundedVec<u8, <T as Config>::MaxDestinationLength>;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Currency purchases are paid in. Received value is forwarded to the owner.
        type Currency: Mutate<Self::AccountId>;

        /// Maximum number of accounts in a single batch whitelist call.
        #[pallet::constant]
        type MaxWhitelistBatch: Get<u32>;

        /// Maximum length in bytes of a claim destination.
        #[pallet::constant]
        type MaxDestinationLength: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    #[pallet::type_value]
    pub fn DefaultRate() -> u64 {
        1_000
    }

    #[pallet::type_value]
    pub fn DefaultMinimumPurchase() -> u128 {
        300 * TOKEN_UNIT
    }

    #[pallet::type_value]
    pub fn DefaultMinimumSold() -> u128 {
        5_000 * TOKEN_UNIT
    }

    /// Sale owner. Set at genesis, never changed afterwards.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Accounts approved to purchase and claim
    #[pallet::storage]
    #[pallet::getter(fn whitelist)]
    pub type Whitelist<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    /// Closes purchasing and, together with the sold minimum, opens claiming.
    #[pallet::storage]
    #[pallet::getter(fn is_sale_finished)]
    pub type SaleFinished<T> = StorageValue<_, bool, ValueQuery>;

    /// Tokens credited per smallest unit of value received
    #[pallet::storage]
    #[pallet::getter(fn rate)]
    pub type Rate<T> = StorageValue<_, u64, ValueQuery, DefaultRate>;

    /// Smallest token amount a single purchase must convert to (scaled).
    #[pallet::storage]
    #[pallet::getter(fn get_minimum_purchase)]
    pub type MinimumPurchase<T> = StorageValue<_, u128, ValueQuery, DefaultMinimumPurchase>;

    /// Aggregate sold amount required before claiming unlocks (scaled).
    #[pallet::storage]
    #[pallet::getter(fn get_minimum_sold)]
    pub type MinimumSold<T> = StorageValue<_, u128, ValueQuery, DefaultMinimumSold>;

    /// Tokens credited to each purchaser
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type TokenBalances<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Total tokens credited across all purchases
    #[pallet::storage]
    #[pallet::getter(fn token_sold)]
    pub type TokenSold<T> = StorageValue<_, u128, ValueQuery>;

    /// Claim destinations. Presence of an entry means the account has claimed.
    #[pallet::storage]
    pub type Claims<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, DestinationOf<T>, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Account added to whitelist
        Whitelisted { account: T::AccountId },
        /// Account removed from whitelist
        RemovedFromWhitelist { account: T::AccountId },
        /// Sale paused or resumed
        PauseSet { paused: bool },
        /// Sale marked finished or reopened
        SaleFinishedSet { finished: bool },
        /// Minimum purchase changed (scaled amount)
        MinimumPurchaseSet { amount: u128 },
        /// Minimum sold threshold changed (scaled amount)
        MinimumSoldSet { amount: u128 },
        /// Conversion rate changed
        RateSet { rate: u64 },
        /// Value received and converted into tokens
        TokenPurchase {
            purchaser: T::AccountId,
            beneficiary: T::AccountId,
            value: BalanceOf<T>,
            amount: u128,
        },
        /// Participant claimed their allocation to an external destination
        TokensClaimed { who: T::AccountId, destination: DestinationOf<T> },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the sale owner.
        AccessDenied,
        /// Caller is not whitelisted.
        NotWhitelisted,
        /// The owner cannot buy from its own sale.
        OwnerCannotPurchase,
        /// The owner cannot claim.
        OwnerCannotClaim,
        /// The sale is paused.
        SalePaused,
        /// The sale is finished; purchases are closed.
        SaleAlreadyFinished,
        /// The sale is not finished; claims are not open yet.
        SaleNotFinished,
        /// Value converts to fewer tokens than the minimum purchase.
        BelowMinimumPurchase,
        /// Total sold has not reached the minimum required for claiming.
        MinimumSoldNotReached,
        /// The account has already claimed.
        AlreadyClaimed,
        Overflow,
        /// No owner configured to receive purchase value.
        OwnerNotSet,
        /// Batch exceeds `MaxWhitelistBatch`.
        TooManyAccounts,
        ZeroRate,
        EmptyDestination,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::add_to_whitelist())]
        pub fn add_to_whitelist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::do_set_whitelisted(account, true);
            Ok(())
        }

        /// Whitelist every account in `accounts`, in order. Fails as a whole if the batch is
        /// larger than `MaxWhitelistBatch`.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::add_many_to_whitelist(accounts.len() as u32))]
        pub fn add_many_to_whitelist(
            origin: OriginFor<T>,
            accounts: Vec<T::AccountId>,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::ensure_batch_len(&accounts)?;
            for account in accounts {
                Self::do_set_whitelisted(account, true);
            }
            Ok(())
        }

        /// Revoke approval. Existing balances and claims are left untouched.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::remove_from_whitelist())]
        pub fn remove_from_whitelist(
            origin: OriginFor<T>,
            account: T::AccountId,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::do_set_whitelisted(account, false);
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::remove_many_from_whitelist(accounts.len() as u32))]
        pub fn remove_many_from_whitelist(
            origin: OriginFor<T>,
            accounts: Vec<T::AccountId>,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::ensure_batch_len(&accounts)?;
            for account in accounts {
                Self::do_set_whitelisted(account, false);
            }
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::set_pause())]
        pub fn set_pause(origin: OriginFor<T>, paused: bool) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Paused::<T>::put(paused);
            log::info!(target: LOG_TARGET, "sale paused: {paused}");
            Self::deposit_event(Event::PauseSet { paused });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::set_sale_finished())]
        pub fn set_sale_finished(origin: OriginFor<T>, finished: bool) -> DispatchResult {
            Self::ensure_owner(origin)?;
            SaleFinished::<T>::put(finished);
            log::info!(target: LOG_TARGET, "sale finished: {finished}");
            Self::deposit_event(Event::SaleFinishedSet { finished });
            Ok(())
        }

        /// Set the minimum purchase in whole tokens.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::set_minimum_purchase())]
        pub fn set_minimum_purchase(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            Self::ensure_owner(origin)?;
            let amount = Self::scale_whole_units(amount)?;
            MinimumPurchase::<T>::put(amount);
            Self::deposit_event(Event::MinimumPurchaseSet { amount });
            Ok(())
        }

        /// Set the claim threshold in whole tokens.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::set_minimum_sold())]
        pub fn set_minimum_sold(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            Self::ensure_owner(origin)?;
            let amount = Self::scale_whole_units(amount)?;
            MinimumSold::<T>::put(amount);
            Self::deposit_event(Event::MinimumSoldSet { amount });
            Ok(())
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::set_rate())]
        pub fn set_rate(origin: OriginFor<T>, rate: u64) -> DispatchResult {
            Self::ensure_owner(origin)?;
            ensure!(rate > 0, Error::<T>::ZeroRate);
            Rate::<T>::put(rate);
            Self::deposit_event(Event::RateSet { rate });
            Ok(())
        }

        /// Buy tokens with `value` of the sale currency.
        ///
        /// The value is forwarded to the owner and `value * rate` tokens are credited to the
        /// caller. Checks run in a fixed order and the first failure aborts the call:
        /// owner exclusion, whitelist, pause, sale phase, minimum purchase.
        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::purchase())]
        pub fn purchase(
            origin: OriginFor<T>,
            #[pallet::compact] value: BalanceOf<T>,
        ) -> DispatchResult {
            let purchaser = ensure_signed(origin)?;
            let owner = Owner::<T>::get().ok_or(Error::<T>::OwnerNotSet)?;

            ensure!(purchaser != owner, Error::<T>::OwnerCannotPurchase);
            ensure!(Whitelist::<T>::get(&purchaser), Error::<T>::NotWhitelisted);
            ensure!(!Paused::<T>::get(), Error::<T>::SalePaused);
            ensure!(!SaleFinished::<T>::get(), Error::<T>::SaleAlreadyFinished);

            let amount = Self::token_amount(value)?;
            ensure!(amount >= MinimumPurchase::<T>::get(), Error::<T>::BelowMinimumPurchase);

            let balance = TokenBalances::<T>::get(&purchaser)
                .checked_add(amount)
                .ok_or(Error::<T>::Overflow)?;
            let sold = TokenSold::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;

            T::Currency::transfer(&purchaser, &owner, value, Preservation::Preserve)?;

            TokenBalances::<T>::insert(&purchaser, balance);
            TokenSold::<T>::put(sold);

            log::debug!(
                target: LOG_TARGET,
                "{purchaser:?} bought {amount} tokens, total sold {sold}"
            );
            Self::deposit_event(Event::TokenPurchase {
                purchaser: purchaser.clone(),
                beneficiary: purchaser,
                value,
                amount,
            });
            Ok(())
        }

        /// Bind the caller's allocation to `destination`. Allowed once per account, after the
        /// sale is finished, unpaused, and the sold minimum is reached.
        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::claim_tokens())]
        pub fn claim_tokens(origin: OriginFor<T>, destination: DestinationOf<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_can_claim(&who)?;
            ensure!(!destination.is_empty(), Error::<T>::EmptyDestination);

            Claims::<T>::insert(&who, &destination);

            log::debug!(target: LOG_TARGET, "{who:?} claimed");
            Self::deposit_event(Event::TokensClaimed { who, destination });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Sale owner; receives all purchase value
        pub owner: Option<T::AccountId>,
        /// Conversion rate, storage default if unset
        pub rate: Option<u64>,
        /// Minimum purchase in whole tokens
        pub minimum_purchase: Option<u128>,
        /// Claim threshold in whole tokens
        pub minimum_sold: Option<u128>,
        /// Accounts to whitelist at genesis
        pub whitelisted_accounts: Vec<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            if let Some(ref owner) = self.owner {
                Owner::<T>::put(owner);
            }

            if let Some(rate) = self.rate {
                assert!(rate > 0, "Sale rate must be non-zero");
                Rate::<T>::put(rate);
            }

            if let Some(minimum) = self.minimum_purchase {
                let scaled = minimum.checked_mul(TOKEN_UNIT).expect("Minimum purchase too large");
                MinimumPurchase::<T>::put(scaled);
            }

            if let Some(minimum) = self.minimum_sold {
                let scaled = minimum.checked_mul(TOKEN_UNIT).expect("Minimum sold too large");
                MinimumSold::<T>::put(scaled);
            }

            for account in &self.whitelisted_accounts {
                Whitelist::<T>::insert(account, true);
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Destination recorded by `who`'s claim, or empty if they have not claimed.
    pub fn address_from_claim_tokens(who: &T::AccountId) -> Vec<u8> {
        Claims::<T>::get(who).map(|destination| destination.into_inner()).unwrap_or_default()
    }

    pub fn already_claim_tokens(who: &T::AccountId) -> bool {
        Claims::<T>::contains_key(who)
    }

    /// Tokens `value` converts to at the current rate.
    pub fn token_amount(value: BalanceOf<T>) -> Result<u128, DispatchError> {
        let value: u128 = value.saturated_into();
        value.checked_mul(u128::from(Rate::<T>::get())).ok_or_else(|| Error::<T>::Overflow.into())
    }

    /// Checks claim preconditions in order, returning the first one violated.
    pub fn ensure_can_claim(who: &T::AccountId) -> DispatchResult {
        ensure!(Owner::<T>::get().as_ref() != Some(who), Error::<T>::OwnerCannotClaim);
        ensure!(Whitelist::<T>::get(who), Error::<T>::NotWhitelisted);
        ensure!(!Paused::<T>::get(), Error::<T>::SalePaused);
        ensure!(SaleFinished::<T>::get(), Error::<T>::SaleNotFinished);
        ensure!(
            TokenSold::<T>::get() >= MinimumSold::<T>::get(),
            Error::<T>::MinimumSoldNotReached
        );
        ensure!(!Claims::<T>::contains_key(who), Error::<T>::AlreadyClaimed);
        Ok(())
    }

    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Owner::<T>::get().as_ref() == Some(&who), Error::<T>::AccessDenied);
        Ok(who)
    }

    fn ensure_batch_len(accounts: &[T::AccountId]) -> DispatchResult {
        ensure!(
            accounts.len() <= T::MaxWhitelistBatch::get() as usize,
            Error::<T>::TooManyAccounts
        );
        Ok(())
    }

    fn do_set_whitelisted(account: T::AccountId, approved: bool) {
        // Entries are flipped, never removed
        Whitelist::<T>::insert(&account, approved);
        if approved {
            Self::deposit_event(Event::Whitelisted { account });
        } else {
            Self::deposit_event(Event::RemovedFromWhitelist { account });
        }
    }

    fn scale_whole_units(amount: u128) -> Result<u128, DispatchError> {
        amount.checked_mul(TOKEN_UNIT).ok_or_else(|| Error::<T>::Overflow.into())
    }

    /// Ledger invariants: sold total equals the sum of balances, and the owner holds no
    /// balance or claim.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        let credited = TokenBalances::<T>::iter_values()
            .try_fold(0u128, |total, balance| total.checked_add(balance))
            .ok_or(DispatchError::Other("Sum of token balances overflows"))?;
        ensure!(
            credited == TokenSold::<T>::get(),
            DispatchError::Other("Token sold does not match the sum of balances")
        );

        if let Some(owner) = Owner::<T>::get() {
            ensure!(
                TokenBalances::<T>::get(&owner) == 0,
                DispatchError::Other("Owner holds a token balance")
            );
            ensure!(!Claims::<T>::contains_key(&owner), DispatchError::Other("Owner has claimed"));
        }
        Ok(())
    }
}
