//! Profile decryption.

use cicsdeploy_core::{ProfileDecrypter, ServerProfile};

/// Passes plaintext profiles through unchanged.
///
/// Values written as `{...}` are encrypted placeholders. This decrypter has no
/// key material, so a profile holding one cannot be decrypted.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextDecrypter;

impl ProfileDecrypter for PlaintextDecrypter {
    fn decrypt(&self, profile: &ServerProfile) -> Option<ServerProfile> {
        let secrets = [
            &profile.username,
            &profile.password,
            &profile.private_key,
            &profile.passphrase,
        ];
        if secrets.iter().any(|v| v.as_deref().is_some_and(is_encrypted)) {
            return None;
        }
        Some(profile.clone())
    }
}

fn is_encrypted(value: &str) -> bool {
    let value = value.trim();
    value.len() > 2 && value.starts_with('{') && value.ends_with('}')
}
