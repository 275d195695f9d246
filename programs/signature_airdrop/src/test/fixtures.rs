use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use k256::ecdsa::SigningKey;
use std::collections::HashMap;

use crate::error::AirdropError;
use crate::event::AirdropClaimed;
use crate::instructions::{process_claim, ClaimArgs};
use crate::state::*;
use crate::utils::{claim_message_hash, eth_address_from_pubkey, to_eth_signed_message_hash};

/// secp256k1 key that signs the way the off-chain signer does.
pub struct TestSigner {
    key: SigningKey,
}

impl TestSigner {
    /// Key whose scalar is `seed` (1 => the well known 0x7E5F...5Bdf account).
    pub fn from_seed(seed: u8) -> Self {
        let mut bytes = [0u8; 32];
        bytes[31] = seed;
        Self {
            key: SigningKey::from_slice(&bytes).unwrap(),
        }
    }

    pub fn address(&self) -> [u8; 20] {
        let point = self.key.verifying_key().to_encoded_point(false);
        let mut pubkey = [0u8; 64];
        pubkey.copy_from_slice(&point.as_bytes()[1..]);
        eth_address_from_pubkey(&pubkey)
    }

    /// r || s || v with v in {27, 28}
    pub fn sign_hash(&self, hash: &[u8; 32]) -> [u8; 65] {
        let (signature, recovery_id) = self.key.sign_prehash_recoverable(hash).unwrap();
        let mut out = [0u8; 65];
        out[..64].copy_from_slice(&signature.to_bytes());
        out[64] = 27 + recovery_id.to_byte();
        out
    }

    pub fn sign_claim(&self, claimer: &Pubkey, amount: u64, profile: &str, sub_count: u64) -> [u8; 65] {
        let digest = claim_message_hash(claimer, amount, profile, sub_count);
        self.sign_hash(&to_eth_signed_message_hash(&digest))
    }
}

pub fn pubkey(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}

pub fn assert_airdrop_error<T: std::fmt::Debug>(result: Result<T>, expected: AirdropError) {
    match result {
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number,
            u32::from(expected),
            "expected {}, got {}",
            expected,
            err.error_name
        ),
        other => panic!("expected {expected}, got {other:?}"),
    }
}

/// In-memory model of the program's accounts.
///
/// Each call works on copies and commits them only when the whole
/// instruction succeeds, the same all-or-nothing rule the runtime applies
/// to a transaction.
pub struct TestLedger {
    pub airdrop_key: Pubkey,
    pub airdrop: Airdrop,
    pub claims: HashMap<Pubkey, ClaimStatus>,
    pub profiles: HashMap<String, ProfileClaim>,
    pub vault_balance: u64,
    pub balances: HashMap<Pubkey, u64>,
    pub events: Vec<AirdropClaimed>,
}

impl TestLedger {
    pub fn new(owner: Pubkey, signer_address: [u8; 20], funded: u64) -> Self {
        let token_mint = pubkey(200);
        let (airdrop_key, bump) = Airdrop::find_address(&token_mint, &owner);
        let mut airdrop = Airdrop::default();
        airdrop
            .initialize(
                bump,
                owner,
                signer_address,
                token_mint,
                Airdrop::find_vault_address(&airdrop_key).0,
                funded,
            )
            .unwrap();

        Self {
            airdrop_key,
            airdrop,
            claims: HashMap::new(),
            profiles: HashMap::new(),
            vault_balance: funded,
            balances: HashMap::new(),
            events: Vec::new(),
        }
    }

    pub fn claim(
        &mut self,
        claimer: Pubkey,
        amount: u64,
        profile: &str,
        sub_count: u64,
        signature: &[u8],
    ) -> Result<()> {
        let mut airdrop = self.airdrop.clone();
        let mut claim_status = self.claims.get(&claimer).cloned().unwrap_or_default();
        let mut profile_claim = self.profiles.get(profile).cloned().unwrap_or_default();

        process_claim(
            &mut airdrop,
            &mut claim_status,
            &mut profile_claim,
            &claimer,
            self.vault_balance,
            &ClaimArgs {
                amount,
                profile,
                sub_count,
                signature,
            },
        )?;

        // Token transfer; process_claim has already checked the vault covers it
        self.vault_balance -= amount;
        *self.balances.entry(claimer).or_default() += amount;

        self.airdrop = airdrop;
        self.claims.insert(claimer, claim_status);
        self.profiles.insert(profile.to_string(), profile_claim);
        self.events.push(AirdropClaimed {
            airdrop: self.airdrop_key,
            claimer,
            amount,
            profile: profile.to_string(),
            sub_count,
        });
        Ok(())
    }

    pub fn withdraw(&mut self, caller: Pubkey, amount: u64) -> Result<()> {
        let remaining = self.airdrop.check_withdrawal(&caller, self.vault_balance, amount)?;
        self.vault_balance = remaining;
        *self.balances.entry(caller).or_default() += amount;
        Ok(())
    }

    pub fn has_claimed(&self, claimer: &Pubkey) -> bool {
        self.claims.get(claimer).is_some_and(ClaimStatus::has_claimed)
    }

    pub fn is_profile_claimed(&self, profile: &str) -> bool {
        self.profiles.get(profile).is_some_and(ProfileClaim::is_claimed)
    }

    pub fn balance_of(&self, account: &Pubkey) -> u64 {
        self.balances.get(account).copied().unwrap_or_default()
    }
}
