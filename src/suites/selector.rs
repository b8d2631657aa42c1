//! Preference-driven suite selection.
//!
//! The selector walks the caller's cipher tokens in order and, for each
//! base category of the requested group, offers the one suite that pairs
//! the category with that cipher. Within a category a suite is offered at
//! most once; across the categories of a composite group the passes are
//! simply concatenated, so one token can select a suite in each.
//!
//! Anonymous selection processes the full token list like every other
//! category.

use super::registry::{find, KeyExchange, SuiteGroup, SuiteId};
use super::CipherAlgorithm;
use crate::error::Result;

/// Build the ordered offer for `group` from preference tokens.
///
/// Unrecognized tokens are skipped; an empty or entirely unrecognized token
/// list yields an empty offer. Never fails.
pub fn select<S: AsRef<str>>(group: SuiteGroup, tokens: &[S]) -> Vec<SuiteId> {
    let ciphers = resolve_tokens(tokens);

    let offer: Vec<SuiteId> = group
        .constituents()
        .iter()
        .flat_map(|kx| select_in(*kx, &ciphers))
        .collect();

    tracing::debug!(group = %group, offered = offer.len(), "Suite selection complete");
    offer
}

/// Like [`select`], parsing the group token first.
///
/// Fails with `InvalidArgument` when `group` is outside the closed set.
pub fn select_named<S: AsRef<str>>(group: &str, tokens: &[S]) -> Result<Vec<SuiteId>> {
    let group: SuiteGroup = group.parse()?;
    Ok(select(group, tokens))
}

/// Map tokens to ciphers, preserving order and dropping unknown tokens.
///
/// Tokens must match the vocabulary exactly.
fn resolve_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<CipherAlgorithm> {
    tokens
        .iter()
        .filter_map(|token| {
            let cipher = CipherAlgorithm::from_token(token.as_ref());
            if cipher.is_none() {
                tracing::debug!(token = token.as_ref(), "Skipping unrecognized cipher token");
            }
            cipher
        })
        .collect()
}

/// One pass over a single base category
fn select_in(key_exchange: KeyExchange, ciphers: &[CipherAlgorithm]) -> Vec<SuiteId> {
    let mut offer = Vec::new();
    for cipher in ciphers {
        if let Some(entry) = find(key_exchange, *cipher) {
            if !offer.contains(&entry.id) {
                offer.push(entry.id);
            }
        }
    }
    offer
}
