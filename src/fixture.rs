//! Connection lifecycle shared by the CRUD scenarios.
//!
//! One connection is opened for the run, the table is emptied before every
//! scenario, and the connection is closed once the run is over.

use std::sync::Once;

use sqlx::{Connection, MySqlConnection};
use tracing_subscriber::EnvFilter;

use crate::config::DbConfig;
use crate::store::subscribers;

pub struct Fixture {
    conn: MySqlConnection,
}

impl Fixture {
    pub async fn connect(config: &DbConfig) -> Result<Self, sqlx::Error> {
        let options = config.connect_options()?;
        let conn = MySqlConnection::connect_with(&options).await?;

        tracing::info!(
            host = %config.host,
            database = %config.database,
            "connected to subscriber database"
        );
        Ok(Self { conn })
    }

    /// Removes every row so the next scenario starts from an empty table.
    pub async fn set_up(&mut self) -> Result<(), sqlx::Error> {
        subscribers::delete_all(&mut self.conn).await?;
        Ok(())
    }

    pub fn conn(&mut self) -> &mut MySqlConnection {
        &mut self.conn
    }

    pub async fn close(self) -> Result<(), sqlx::Error> {
        self.conn.close().await?;
        tracing::info!("closed subscriber database connection");
        Ok(())
    }
}

static TRACING: Once = Once::new();

/// Routes `tracing` output through the test harness. Honours `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_test_writer()
            .try_init()
            .ok();
    });
}
