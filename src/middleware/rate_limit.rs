//! In-memory token-bucket rate limiting keyed by client IP.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use tokio::sync::Mutex;

use crate::errors::AppError;

#[derive(Debug, Clone)]
struct Bucket {
    tokens: f64,
    last_refill: Instant,
}

/// Token-bucket limiter. One bucket per client key, refilled continuously.
#[derive(Debug)]
pub struct RateLimiter {
    capacity: f64,
    refill_per_sec: f64,
    buckets: Mutex<HashMap<String, Bucket>>,
}

impl RateLimiter {
    pub fn new(capacity: f64, refill_per_sec: f64) -> Arc<Self> {
        Arc::new(Self {
            capacity,
            refill_per_sec,
            buckets: Mutex::new(HashMap::new()),
        })
    }

    /// Registration endpoint: a small burst, refilling over 15 minutes.
    pub fn for_auth() -> Arc<Self> {
        Self::new(10.0, 10.0 / 900.0)
    }

    /// General API limiter sized for a browser dashboard.
    pub fn for_api() -> Arc<Self> {
        Self::new(300.0, 5.0)
    }

    pub async fn allow(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut buckets = self.buckets.lock().await;
        let bucket = buckets.entry(key.to_string()).or_insert_with(|| Bucket {
            tokens: self.capacity,
            last_refill: now,
        });
        let elapsed = now.duration_since(bucket.last_refill).as_secs_f64();
        bucket.last_refill = now;
        bucket.tokens = (bucket.tokens + elapsed * self.refill_per_sec).min(self.capacity);
        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

/// Axum middleware applying a shared limiter to the wrapped routes.
pub async fn limit(
    State(limiter): State<Arc<RateLimiter>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let key = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string())
        .unwrap_or_else(|| "local".to_string());

    if !limiter.allow(&key).await {
        tracing::warn!(client = %key, "Rate limit exceeded");
        return Err(AppError::RateLimited);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bucket_drains_and_denies() {
        let limiter = RateLimiter::new(2.0, 0.0);
        assert!(limiter.allow("1.2.3.4").await);
        assert!(limiter.allow("1.2.3.4").await);
        assert!(!limiter.allow("1.2.3.4").await);
    }

    #[tokio::test]
    async fn buckets_are_per_key() {
        let limiter = RateLimiter::new(1.0, 0.0);
        assert!(limiter.allow("1.2.3.4").await);
        assert!(!limiter.allow("1.2.3.4").await);
        assert!(limiter.allow("5.6.7.8").await);
    }

    #[tokio::test]
    async fn tokens_refill_over_time() {
        let limiter = RateLimiter::new(1.0, 1000.0);
        assert!(limiter.allow("k").await);
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        assert!(limiter.allow("k").await);
    }
}
