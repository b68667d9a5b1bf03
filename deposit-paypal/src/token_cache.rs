//! Optional in-memory reuse of bearer tokens.

use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

use deposit_types::AccessToken;

/// Tokens are dropped this long before the provider says they expire.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Upper bound on how long a token is reused, whatever the provider states.
const MAX_LIFETIME: Duration = Duration::from_secs(86_400);

struct CachedToken {
    token: AccessToken,
    valid_until: Instant,
}

/// Holds at most one token for the client's single credential set.
#[derive(Default)]
pub(crate) struct TokenCache {
    slot: Mutex<Option<CachedToken>>,
}

impl TokenCache {
    /// Returns the cached token if it is still inside its validity window.
    pub(crate) async fn get(&self) -> Option<AccessToken> {
        let slot = self.slot.lock().await;
        slot.as_ref()
            .filter(|cached| Instant::now() < cached.valid_until)
            .map(|cached| cached.token.clone())
    }

    /// Stores a token. Tokens without a stated lifetime, or with one shorter
    /// than the margin, are not cached. Longer lifetimes are capped.
    pub(crate) async fn put(&self, token: &AccessToken) {
        let Some(lifetime) = token
            .expires_in()
            .map(Duration::from_secs)
            .and_then(|d| d.checked_sub(EXPIRY_MARGIN))
            .filter(|d| !d.is_zero())
            .map(|d| d.min(MAX_LIFETIME))
        else {
            return;
        };
        let Some(valid_until) = Instant::now().checked_add(lifetime) else {
            return;
        };

        *self.slot.lock().await = Some(CachedToken {
            token: token.clone(),
            valid_until,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_cache_misses() {
        let cache = TokenCache::default();
        assert!(cache.get().await.is_none());
    }

    #[tokio::test]
    async fn test_token_with_lifetime_is_reused() {
        let cache = TokenCache::default();
        let token = AccessToken::new("abc", Some(32400));
        cache.put(&token).await;
        assert_eq!(cache.get().await, Some(token));
    }

    #[tokio::test]
    async fn test_short_or_unknown_lifetime_is_not_cached() {
        let cache = TokenCache::default();
        cache.put(&AccessToken::new("abc", None)).await;
        assert!(cache.get().await.is_none());
        cache.put(&AccessToken::new("abc", Some(30))).await;
        assert!(cache.get().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_huge_lifetime_is_capped_to_a_day() {
        let cache = TokenCache::default();
        let token = AccessToken::new("abc", Some(u64::MAX));
        cache.put(&token).await;
        assert_eq!(cache.get().await, Some(token));

        tokio::time::advance(MAX_LIFETIME).await;
        assert!(cache.get().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_token_expires_before_provider_deadline() {
        let cache = TokenCache::default();
        cache.put(&AccessToken::new("abc", Some(120))).await;
        assert!(cache.get().await.is_some());

        tokio::time::advance(Duration::from_secs(61)).await;
        assert!(cache.get().await.is_none());
    }
}
