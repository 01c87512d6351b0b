use crate as pallet_token_sale;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU128, ConstU32, ConstU64},
    BoundedVec,
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Balances: pallet_balances,
        TokenSale: pallet_token_sale,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type BlockHashCount = ConstU64<250>;
    type AccountData = pallet_balances::AccountData<u128>;
    type MaxConsumers = ConstU32<16>;
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Test {
    type Balance = u128;
    type ExistentialDeposit = ConstU128<1>;
    type AccountStore = System;
}

/// One whole unit of the sale currency.
pub const UNIT: u128 = crate::TOKEN_UNIT;

pub const OWNER: u64 = 1;
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
pub const CHARLIE: u64 = 4;
/// Whitelist-able but holds only the existential deposit.
pub const DAVE: u64 = 5;

parameter_types! {
    pub const MaxWhitelistBatch: u32 = 8;
    pub const MaxDestinationLength: u32 = 64;
}

impl pallet_token_sale::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Currency = Balances;
    type MaxWhitelistBatch = MaxWhitelistBatch;
    type MaxDestinationLength = MaxDestinationLength;
    type WeightInfo = ();
}

pub fn destination(address: &str) -> BoundedVec<u8, MaxDestinationLength> {
    address.as_bytes().to_vec().try_into().expect("test destination fits the bound")
}

/// Owner set, nobody whitelisted, storage defaults for rate and minimums.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build_ext(Some(OWNER), vec![])
}

pub fn build_ext(owner: Option<u64>, whitelisted_accounts: Vec<u64>) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_balances::GenesisConfig::<Test> {
        balances: vec![
            (OWNER, 100 * UNIT),
            (ALICE, 100 * UNIT),
            (BOB, 100 * UNIT),
            (CHARLIE, 100 * UNIT),
            (DAVE, 1),
        ],
        dev_accounts: None,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_token_sale::GenesisConfig::<Test> {
        owner,
        rate: None,
        minimum_purchase: None,
        minimum_sold: None,
        whitelisted_accounts,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}
