//! Nonce generation for KuCoin API authentication.
//!
//! KuCoin expects the nonce to be the request time in milliseconds since the
//! UNIX epoch. The same value is sent in the `KC-API-NONCE` header and mixed
//! into the signature.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing nonces for authenticated requests.
pub trait NonceProvider: Send + Sync {
    /// Generate the next nonce value.
    fn next_nonce(&self) -> u64;
}

/// Millisecond nonces that never repeat within one provider.
///
/// Requests issued in the same millisecond get `last + 1`, so a burst of
/// concurrent calls can run slightly ahead of the wall clock.
#[derive(Debug, Default)]
pub struct MillisNonce {
    last_nonce: AtomicU64,
}

impl MillisNonce {
    /// Create a new millisecond nonce provider.
    pub fn new() -> Self {
        Self {
            last_nonce: AtomicU64::new(0),
        }
    }

    fn current_time_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

impl NonceProvider for MillisNonce {
    fn next_nonce(&self) -> u64 {
        let time_nonce = Self::current_time_millis();

        loop {
            let last = self.last_nonce.load(Ordering::SeqCst);
            let next = time_nonce.max(last + 1);

            if self
                .last_nonce
                .compare_exchange(last, next, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                return next;
            }
        }
    }
}

/// Plain wall-clock milliseconds, with no uniqueness guarantee.
///
/// Concurrent calls in the same millisecond share a nonce.
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClockNonce;

impl NonceProvider for WallClockNonce {
    fn next_nonce(&self) -> u64 {
        MillisNonce::current_time_millis()
    }
}
