//! 环境变量配置，启动时读取一次

use std::str::FromStr;

use envconfig::Envconfig;

use crate::core::error::StartupError;

#[derive(Debug, Clone, Envconfig)]
pub struct Config {
    #[envconfig(from = "DIALECT", default = "postgres")]
    pub dialect: String,

    #[envconfig(from = "HOST", default = "localhost")]
    pub host: String,

    #[envconfig(from = "DBPORT", default = "5432")]
    pub db_port: u16,

    #[envconfig(from = "USER", default = "postgres")]
    pub user: String,

    #[envconfig(from = "NAME", default = "postgres")]
    pub db_name: String,

    #[envconfig(from = "PASSWORD", default = "")]
    pub password: String,

    #[envconfig(from = "BIND_ADDRESS", default = "0.0.0.0:8080")]
    pub bind_address: String,

    #[envconfig(from = "MAX_DB_CONNECTIONS", default = "20")]
    pub max_db_connections: u32,
}

impl Config {
    pub fn dialect(&self) -> Result<Dialect, StartupError> {
        self.dialect.parse()
    }
}

/// 后端方言
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    /// 进程内存储，不需要数据库
    Memory,
}

impl FromStr for Dialect {
    type Err = StartupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            "memory" => Ok(Dialect::Memory),
            other => Err(StartupError::UnsupportedDialect(other.to_string())),
        }
    }
}
