/// UserHub Server - in-memory gRPC user registry
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use userhub_client::{ClientConfig, UserBridge, UserData, DEFAULT_ENDPOINT};
use userhub_core::User;
use userhub_server::{config::ServerConfig, server, AppState, Listeners};

#[derive(Parser)]
#[command(name = "userhub-server")]
#[command(about = "UserHub gRPC user registry", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the gRPC server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Override the listen address
        #[arg(long)]
        host: Option<String>,
        /// Override the gRPC port
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// List all users on a running server
    ListUsers {
        #[command(flatten)]
        remote: RemoteArgs,
    },
    /// Create a user on a running server
    AddUser {
        #[command(flatten)]
        remote: RemoteArgs,
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        /// Defaults to "active"
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Update fields of a user on a running server
    UpdateUser {
        #[command(flatten)]
        remote: RemoteArgs,
        #[arg(long)]
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Delete a user on a running server
    DeleteUser {
        #[command(flatten)]
        remote: RemoteArgs,
        #[arg(long)]
        id: String,
    },
}

#[derive(Args)]
struct RemoteArgs {
    /// Server endpoint
    #[arg(long, env = "USERHUB_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
}

impl RemoteArgs {
    fn bridge(&self) -> anyhow::Result<UserBridge> {
        Ok(UserBridge::new(ClientConfig::new(self.endpoint.clone()))?)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "userhub_server=info,userhub_core=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, host, port } => {
            serve(config, host, port).await?;
        }
        Commands::ListUsers { remote } => {
            let users = remote.bridge()?.get_users().await?;
            println!("Users:");
            for user in users {
                println!("  {} - {} <{}> [{}]", user.id, user.name, user.email, user.status);
            }
        }
        Commands::AddUser {
            remote,
            name,
            email,
            status,
        } => {
            let user = remote
                .bridge()?
                .add_user(UserData {
                    id: None,
                    name: Some(name),
                    email: Some(email),
                    status,
                })
                .await?;
            print_user(&user)?;
        }
        Commands::UpdateUser {
            remote,
            id,
            name,
            email,
            status,
        } => {
            let user = remote
                .bridge()?
                .update_user(UserData {
                    id: Some(id),
                    name,
                    email,
                    status,
                })
                .await?;
            print_user(&user)?;
        }
        Commands::DeleteUser { remote, id } => {
            remote.bridge()?.delete_user(id.clone()).await?;
            println!("Deleted {}", id);
        }
    }

    Ok(())
}

async fn serve(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    // Load configuration
    let mut config = ServerConfig::load_from(config_path.as_deref())?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate()?;

    tracing::info!("Starting UserHub Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let app_state = AppState::from_config(&config)?;
    tracing::info!(
        "Registry initialized with {} users",
        app_state.registry.store().len().await
    );

    let listeners = Listeners::bind(&config).await?;
    server::run(listeners, app_state, server::shutdown_signal()).await?;

    Ok(())
}

fn print_user(user: &User) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(user)?);
    Ok(())
}
