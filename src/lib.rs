#![no_std]

multiversx_sc::imports!();

pub mod token_faucet_proxy;
pub mod types;

use types::ClaimRecord;

// ============================================================
// Constants
// ============================================================

/// Claim cooldown: 24 hours in seconds, rolling from the last claim
const CLAIM_COOLDOWN: u64 = 86_400;

/// Per-mille denominator for the referral bonus
const PER_MILLE_DENOMINATOR: u64 = 1_000;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait TokenFaucet {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        token_id: TokenIdentifier,
        daily_rate: BigUint,
        referral_per_mille: u64,
    ) {
        require!(
            token_id.is_valid_esdt_identifier(),
            "invalid token identifier"
        );
        self.faucet_token_id().set(&token_id);
        self.store_rates(daily_rate, referral_per_mille);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: getTokens
    // Claim the daily rate with no referral.
    // ========================================================

    #[endpoint(getTokens)]
    fn get_tokens(&self) {
        let caller = self.blockchain().get_caller();
        self.distribute_tokens(caller, ManagedAddress::zero());
    }

    // ========================================================
    // ENDPOINT: getTokensWithReferral
    // Claim the daily rate, proposing a referrer. The referrer
    // is fixed on the caller's first claim and earns the bonus
    // on this and every later claim by the caller.
    // ========================================================

    #[endpoint(getTokensWithReferral)]
    fn get_tokens_with_referral(&self, referral: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.distribute_tokens(caller, referral);
    }

    // ========================================================
    // ENDPOINT: request
    // Zero-value claim path, the counterpart of a payable
    // fallback: accepts the call only with no value attached
    // and then behaves exactly like getTokens.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(request)]
    fn request(&self) {
        let value = self.call_value().egld_value().clone_value();
        require!(value == 0u64, "sending a value is not allowed");

        let caller = self.blockchain().get_caller();
        self.distribute_tokens(caller, ManagedAddress::zero());
    }

    // ========================================================
    // ENDPOINT: setRates
    // Owner can retune the distribution at any time.
    // ========================================================

    #[only_owner]
    #[endpoint(setRates)]
    fn set_rates(&self, daily_rate: BigUint, referral_per_mille: u64) {
        self.store_rates(daily_rate, referral_per_mille);
        self.rates_changed_event(
            &self.daily_rate().get(),
            referral_per_mille,
            &self.referral_tokens().get(),
        );
    }

    // ========================================================
    // ENDPOINT: depositTokens
    // Refill the faucet. Anyone can fund it, but only with the
    // configured token.
    // ========================================================

    #[payable("*")]
    #[endpoint(depositTokens)]
    fn deposit_tokens(&self) {
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.faucet_token_id().get(),
            "wrong payment token"
        );
        require!(
            payment.amount > 0u64,
            "deposit amount must be greater than zero"
        );

        let caller = self.blockchain().get_caller();
        self.faucet_funded_event(&caller, &payment.amount);
    }

    // ========================================================
    // ENDPOINT: recoverTokens
    // Owner escape hatch for assets sent to the contract by
    // mistake. Sends to the owner, never to third parties.
    // ========================================================

    #[only_owner]
    #[endpoint(recoverTokens)]
    fn recover_tokens(&self, token: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        let owner = self.blockchain().get_owner_address();
        self.send().direct(&owner, &token, 0, &amount);
        self.tokens_recovered_event(&token, &amount);
    }

    // ========================================================
    // INTERNAL: distribution
    // Single claim routine shared by all entry points. All
    // checks run before any storage write, and all storage
    // writes run before the outgoing transfers.
    // ========================================================

    fn distribute_tokens(&self, account: ManagedAddress, referral: ManagedAddress) {
        require!(account != referral, "self referral is not allowed");
        require!(
            self.is_eligible(&account),
            "claim cooldown has not elapsed"
        );

        let first_claim = self.claim_record(&account).is_empty();
        let mut record = self.claim_record_or_default(&account);

        // Referrer fixed on the first claim; later proposals are ignored.
        let account_referral = if first_claim && !referral.is_zero() {
            referral
        } else {
            record.referral.clone()
        };

        let amount = self.daily_rate().get();
        let bonus = if account_referral.is_zero() {
            BigUint::zero()
        } else {
            self.referral_tokens().get()
        };

        let total_cost = &amount + &bonus;
        require!(
            total_cost <= self.remaining_tokens(),
            "insufficient faucet balance"
        );

        if first_claim {
            self.recipients().push(&account);
            if !account_referral.is_zero() {
                record.referral = account_referral.clone();
                self.referred_addresses(&account_referral).push(&account);
            }
        }

        let now = self.blockchain().get_block_timestamp();
        record.received_tokens += &amount;
        record.last_update = now;
        self.claim_record(&account).set(&record);

        if !account_referral.is_zero() {
            self.referral_earnings(&account_referral)
                .update(|earned| *earned += &bonus);
        }
        self.total_distributed().update(|total| *total += &total_cost);

        let token_id = self.faucet_token_id().get();
        self.send().direct_esdt(&account, &token_id, 0, &amount);
        if !account_referral.is_zero() {
            self.send().direct_esdt(&account_referral, &token_id, 0, &bonus);
        }

        self.tokens_claimed_event(&account, &account_referral, &amount, &bonus);
    }

    /// An address is eligible if it never claimed or its cooldown expired.
    fn is_eligible(&self, account: &ManagedAddress) -> bool {
        let now = self.blockchain().get_block_timestamp();
        now >= self.next_claim_time(account.clone())
    }

    /// Validates and stores both rates, recomputing the referral bonus.
    /// Shared by init and setRates so a zero rate can never be stored.
    fn store_rates(&self, daily_rate: BigUint, referral_per_mille: u64) {
        require!(daily_rate > 0u64, "daily rate must be greater than zero");
        require!(
            referral_per_mille > 0u64,
            "referral per mille must be greater than zero"
        );

        let referral_tokens = &daily_rate * referral_per_mille / PER_MILLE_DENOMINATOR;
        self.daily_rate().set(&daily_rate);
        self.referral_per_mille().set(referral_per_mille);
        self.referral_tokens().set(&referral_tokens);
    }

    /// Claim records are created implicitly on first claim; reads of
    /// unknown addresses get an explicit zero-value record.
    fn claim_record_or_default(&self, account: &ManagedAddress) -> ClaimRecord<Self::Api> {
        let mapper = self.claim_record(account);
        if mapper.is_empty() {
            ClaimRecord::empty()
        } else {
            mapper.get()
        }
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(token)]
    fn token(&self) -> TokenIdentifier {
        self.faucet_token_id().get()
    }

    #[view(dailyRate)]
    fn get_daily_rate(&self) -> BigUint {
        self.daily_rate().get()
    }

    #[view(referralTokens)]
    fn get_referral_tokens(&self) -> BigUint {
        self.referral_tokens().get()
    }

    #[view(receivedTokens)]
    fn received_tokens(&self, account: ManagedAddress) -> BigUint {
        self.claim_record_or_default(&account).received_tokens
    }

    #[view(lastUpdate)]
    fn last_update(&self, account: ManagedAddress) -> u64 {
        self.claim_record_or_default(&account).last_update
    }

    #[view(nextClaimTime)]
    fn next_claim_time(&self, account: ManagedAddress) -> u64 {
        let mapper = self.claim_record(&account);
        if mapper.is_empty() {
            0
        } else {
            mapper.get().last_update + CLAIM_COOLDOWN
        }
    }

    #[view(getReferral)]
    fn get_referral(&self, account: ManagedAddress) -> ManagedAddress {
        self.claim_record_or_default(&account).referral
    }

    #[view(earnedByReferral)]
    fn earned_by_referral(&self, referral: ManagedAddress) -> BigUint {
        self.referral_earnings(&referral).get()
    }

    #[view(totalDistributedTokens)]
    fn total_distributed_tokens(&self) -> BigUint {
        self.total_distributed().get()
    }

    #[view(remainingTokens)]
    fn remaining_tokens(&self) -> BigUint {
        self.blockchain().get_sc_balance(
            &EgldOrEsdtTokenIdentifier::esdt(self.faucet_token_id().get()),
            0,
        )
    }

    #[view(getRecipientsLength)]
    fn get_recipients_length(&self) -> u64 {
        self.recipients().len() as u64
    }

    #[view(getRecipientAddress)]
    fn get_recipient_address(&self, index: u64) -> ManagedAddress {
        let count = self.recipients().len() as u64;
        require!(index < count, "recipient index out of range");
        self.recipients().get((index + 1) as usize)
    }

    #[view(getReferredAddressesLength)]
    fn get_referred_addresses_length(&self, referral: ManagedAddress) -> u64 {
        self.referred_addresses(&referral).len() as u64
    }

    #[view(getReferredAddresses)]
    fn get_referred_addresses(
        &self,
        referral: ManagedAddress,
    ) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let count = self.referred_addresses(&referral).len();
        for i in 1..=count {
            result.push(self.referred_addresses(&referral).get(i));
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("tokensClaimed")]
    fn tokens_claimed_event(
        &self,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] referral: &ManagedAddress,
        #[indexed] amount: &BigUint,
        referral_bonus: &BigUint,
    );

    #[event("ratesChanged")]
    fn rates_changed_event(
        &self,
        #[indexed] daily_rate: &BigUint,
        #[indexed] referral_per_mille: u64,
        referral_tokens: &BigUint,
    );

    #[event("faucetFunded")]
    fn faucet_funded_event(
        &self,
        #[indexed] depositor: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("tokensRecovered")]
    fn tokens_recovered_event(
        &self,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("faucetTokenId")]
    fn faucet_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[storage_mapper("dailyRate")]
    fn daily_rate(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("referralPerMille")]
    fn referral_per_mille(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("referralTokens")]
    fn referral_tokens(&self) -> SingleValueMapper<BigUint>;

    // ── Claim ledger ──

    #[storage_mapper("claimRecord")]
    fn claim_record(&self, account: &ManagedAddress) -> SingleValueMapper<ClaimRecord<Self::Api>>;

    // ── Referral index ──

    #[storage_mapper("referralEarnings")]
    fn referral_earnings(&self, referral: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("referredAddresses")]
    fn referred_addresses(&self, referral: &ManagedAddress) -> VecMapper<ManagedAddress>;

    // ── Recipient registry ──

    #[storage_mapper("recipients")]
    fn recipients(&self) -> VecMapper<ManagedAddress>;

    // ── Totals ──

    #[storage_mapper("totalDistributedTokens")]
    fn total_distributed(&self) -> SingleValueMapper<BigUint>;
}
