use std::sync::Arc;

use envconfig::Envconfig;
use tokio::net::TcpListener;
use tracing::{error, info};

use people_api::app::{person::Person, user::User};
use people_api::core::store::SharedStore;
use people_api::infrastructure::config::{Config, Dialect};
#[cfg(feature = "database")]
use people_api::infrastructure::{database::DatabaseManager, pg_store::PgStore};
use people_api::infrastructure::{logger::Logger, memory_store::MemoryStore};
use people_api::{router, StartupError};

/// 两个实体共用同一个后端
struct Stores {
    people: SharedStore<Person>,
    users: SharedStore<User>,
    #[cfg(feature = "database")]
    database: Option<DatabaseManager>,
}

impl Stores {
    async fn open(config: &Config) -> Result<Self, StartupError> {
        match config.dialect()? {
            #[cfg(feature = "database")]
            Dialect::Postgres => {
                let database = DatabaseManager::connect(config).await?;
                database.migrate().await?;
                let pool = database.get_pool().clone();
                Ok(Self {
                    people: Arc::new(PgStore::<Person>::new(pool.clone())),
                    users: Arc::new(PgStore::<User>::new(pool)),
                    database: Some(database),
                })
            }
            #[cfg(not(feature = "database"))]
            Dialect::Postgres => Err(StartupError::UnsupportedDialect(
                "postgres (built without the database feature)".to_string(),
            )),
            Dialect::Memory => Ok(Self {
                people: Arc::new(MemoryStore::<Person>::new()),
                users: Arc::new(MemoryStore::<User>::new()),
                #[cfg(feature = "database")]
                database: None,
            }),
        }
    }

    #[cfg(feature = "database")]
    async fn close(self) {
        if let Some(database) = self.database {
            database.close().await;
            info!("Database connection closed");
        }
    }

    #[cfg(not(feature = "database"))]
    async fn close(self) {}
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => {
            error!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::init_from_env()?;

    let stores = Stores::open(&config).await?;
    info!("Successfully connected to db ({})", config.dialect);

    let app = router(stores.people.clone(), stores.users.clone());

    let listener = TcpListener::bind(&config.bind_address).await?;
    info!("🚀 people-api running on http://{}", listener.local_addr()?);
    info!("   GET    /people              PUT /update/person/:id");
    info!("   POST   /create/person       DELETE /delete/person/:id");
    info!("   GET    /users               PUT /update/user/:id");
    info!("   POST   /create/user         DELETE /delete/user/:id");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    stores.close().await;
    info!("HTTP server stopped");
    Ok(())
}

#[tokio::main]
async fn main() {
    Logger::init("info");

    if let Err(err) = run().await {
        error!("{}", err);
        std::process::exit(1);
    }
}
