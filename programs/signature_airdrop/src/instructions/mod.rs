pub mod create_airdrop;
pub mod claim_with_signature;
pub mod set_signer_address;
pub mod withdraw_tokens;
pub mod transfer_ownership;

pub use create_airdrop::*;
pub use claim_with_signature::*;
pub use set_signer_address::*;
pub use withdraw_tokens::*;
pub use transfer_ownership::*;
