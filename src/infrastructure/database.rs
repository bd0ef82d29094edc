//! 数据库基础设施

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use tracing::info;

use super::config::Config;
use crate::core::error::StoreError;

/// 进程级共享的连接池，启动时建立一次，退出时关闭一次
pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.db_port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.db_name)
            .ssl_mode(PgSslMode::Disable);

        info!(
            "Connecting to database: {}@{}:{}/{}",
            config.user, config.host, config.db_port, config.db_name
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_db_connections)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// 复用已有的连接池
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 建表，已存在时跳过
    pub async fn migrate(&self) -> Result<(), StoreError> {
        info!("Creating database tables...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS people (
                id BIGSERIAL PRIMARY KEY,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                deleted_at TIMESTAMPTZ,
                name TEXT NOT NULL DEFAULT '',
                last_name TEXT NOT NULL DEFAULT '',
                age TEXT NOT NULL DEFAULT '',
                birthdate TEXT NOT NULL DEFAULT ''
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        // user_id 没有唯一约束
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id BIGSERIAL PRIMARY KEY,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                deleted_at TIMESTAMPTZ,
                name TEXT NOT NULL DEFAULT '',
                last_name TEXT NOT NULL DEFAULT '',
                age TEXT NOT NULL DEFAULT '',
                birthdate TEXT NOT NULL DEFAULT '',
                user_id BIGINT NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        for table in ["people", "users"] {
            sqlx::query(&format!(
                "CREATE INDEX IF NOT EXISTS idx_{table}_deleted_at ON {table} (deleted_at)"
            ))
            .execute(&self.pool)
            .await?;
        }

        info!("Database tables created successfully");
        Ok(())
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
