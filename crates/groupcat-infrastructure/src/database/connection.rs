//! Redis connection pool

use deadpool_redis::{Config, Pool, Runtime};

pub fn create_pool(url: &str, max_connections: u32) -> Result<Pool, deadpool_redis::CreatePoolError> {
    let mut config = Config::from_url(url);
    config.pool = Some(deadpool_redis::PoolConfig::new(max_connections as usize));
    config.create_pool(Some(Runtime::Tokio1))
}
