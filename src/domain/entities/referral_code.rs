use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Symbols a referral code is drawn from. Excludes I, O, 0 and 1 so codes
/// survive being read aloud or copied by hand.
pub const REFERRAL_ALPHABET: &[u8; 32] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

pub const REFERRAL_CODE_LEN: usize = 6;

/// Short opaque token handed to each signup so later signups can attribute
/// themselves to it. Codes are random and never checked for collisions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferralCode(String);

impl ReferralCode {
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng>(rng: &mut R) -> Self {
        let code = (0..REFERRAL_CODE_LEN)
            .map(|_| REFERRAL_ALPHABET[rng.gen_range(0..REFERRAL_ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    /// Whether the code has the shape `generate` produces.
    /// Stored codes are not re-validated on read.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == REFERRAL_CODE_LEN && self.0.bytes().all(|b| REFERRAL_ALPHABET.contains(&b))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReferralCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ReferralCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}
