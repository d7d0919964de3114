multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Claim Record — per-address distribution state
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ClaimRecord<M: ManagedTypeApi> {
    /// Cumulative tokens received through the faucet
    pub received_tokens: BigUint<M>,
    /// Block timestamp of the last successful claim (0 = never claimed)
    pub last_update: u64,
    /// Referrer fixed at the first claim; zero address = none
    pub referral: ManagedAddress<M>,
}

impl<M: ManagedTypeApi> ClaimRecord<M> {
    /// Zero-value record for addresses with no stored state yet.
    pub fn empty() -> Self {
        ClaimRecord {
            received_tokens: BigUint::zero(),
            last_update: 0,
            referral: ManagedAddress::zero(),
        }
    }

    pub fn has_referral(&self) -> bool {
        !self.referral.is_zero()
    }
}
