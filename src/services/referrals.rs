use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::services::clock::DemoRng;
use crate::services::i18n::{translate_with, Lang};
use crate::services::storage::{update_json, Storage};

/// No 0/O or 1/I.
const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const PREFIX_LEN: usize = 5;
const SUFFIX_LEN: usize = 4;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReferralCode {
    pub code: String,
}

pub fn generate_code(name: &str, rng: &mut impl Rng) -> String {
    let prefix: String = name
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .take(PREFIX_LEN)
        .collect::<String>()
        .to_uppercase();
    let prefix = if prefix.is_empty() {
        "FRIEND".to_string()
    } else {
        prefix
    };

    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect();

    format!("{prefix}-{suffix}")
}

/// Returns the client's code, minting one on first use.
pub fn code_for(storage: &dyn Storage, rng: &DemoRng, client_id: &str, name: &str) -> String {
    let key = format!("referral:{client_id}");
    update_json(storage, &key, |stored: &mut Option<ReferralCode>| {
        if let Some(existing) = stored {
            return existing.code.clone();
        }
        let code = rng.with(|r| generate_code(name, r));
        tracing::info!(client_id, code = %code, "issued referral code");
        *stored = Some(ReferralCode { code: code.clone() });
        code
    })
}

pub fn share_message(lang: Lang, business: &str, code: &str) -> String {
    translate_with(lang, "wa.referral.body", &[("business", business), ("code", code)])
}
