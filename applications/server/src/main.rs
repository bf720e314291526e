/// OpenMusic Server - music catalog HTTP service
use clap::{Parser, Subcommand};
use openmusic_core::{validation::UserPayload, CatalogError, CatalogServices, RandomIdGenerator};
use openmusic_server::{config::ServerConfig, services::AuthService, state::AppState};
use openmusic_storage::SqliteCatalog;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "openmusic-server")]
#[command(about = "OpenMusic catalog server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user
    AddUser {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
        /// Full name
        #[arg(short, long)]
        fullname: String,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "openmusic_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve => {
            serve(config).await?;
        }
        Commands::AddUser {
            username,
            password,
            fullname,
        } => {
            add_user(config, username, password, fullname).await?;
        }
        Commands::ListUsers => {
            list_users(config).await?;
        }
    }

    Ok(())
}

/// Open the database, apply migrations and wire every service to it
async fn open_catalog(config: &ServerConfig) -> anyhow::Result<CatalogServices> {
    let pool = openmusic_storage::create_pool(&config.storage.database_url).await?;
    openmusic_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    let store = Arc::new(SqliteCatalog::new(pool));
    Ok(CatalogServices::new(store, Arc::new(RandomIdGenerator)))
}

fn auth_service(config: &ServerConfig) -> AuthService {
    AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.access_token_expiration_hours,
        config.auth.refresh_token_expiration_days,
    )
    .with_bcrypt_cost(config.auth.bcrypt_cost)
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    config.validate()?;

    tracing::info!("Starting OpenMusic Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let catalog = Arc::new(open_catalog(&config).await?);
    let auth_service = Arc::new(auth_service(&config));
    tracing::info!("Auth service initialized");

    let app = openmusic_server::router(AppState::new(catalog, auth_service));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(
    config: ServerConfig,
    username: String,
    password: String,
    fullname: String,
) -> anyhow::Result<()> {
    let catalog = open_catalog(&config).await?;
    let auth_service = auth_service(&config);

    let user_id = catalog
        .users
        .add_user(
            UserPayload {
                username,
                password,
                fullname,
            },
            |password| {
                auth_service
                    .hash_password(password)
                    .map_err(|e| CatalogError::internal(e.to_string()))
            },
        )
        .await?;

    println!("Created user {user_id}");

    Ok(())
}

async fn list_users(config: ServerConfig) -> anyhow::Result<()> {
    let catalog = open_catalog(&config).await?;
    let users = catalog.users.list_users().await?;

    println!("Users:");
    for user in users {
        println!("  {} - {} ({})", user.id, user.username, user.fullname);
    }

    Ok(())
}
