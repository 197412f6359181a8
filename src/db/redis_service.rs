use log::info;
use redis::aio::ConnectionManager;
use redis::RedisError;

/// Thin wrapper around one shared multiplexed Redis connection. All user
/// state lives server-side; this process keeps nothing but the handle.
pub struct RedisService {
    conn: ConnectionManager,
}

impl RedisService {
    pub async fn new(url: &str) -> Result<Self, RedisError> {
        info!("Connecting to Redis...");
        let client = redis::Client::open(url)?;
        let conn = client.get_connection_manager().await?;
        info!("Connected to Redis.");
        Ok(Self { conn })
    }

    /// ConnectionManager is a cheap clone over the same underlying
    /// connection; commands need `&mut`, so each call takes its own handle.
    pub(crate) fn conn(&self) -> ConnectionManager {
        self.conn.clone()
    }
}
