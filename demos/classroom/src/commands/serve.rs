use crudkit::{CrudConfig, ServerConfig};

use crate::app::{build_app, connect_store};

/// Command-line overrides for the loaded configuration.
#[derive(Debug, Default, clap::Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides `app.port`)
    #[arg(long)]
    pub port: Option<u16>,
    /// SQLite URL (overrides `app.database.url`)
    #[arg(long)]
    pub database_url: Option<String>,
    /// Configuration profile (`application-{profile}.yaml`)
    #[arg(long, default_value = "dev")]
    pub profile: String,
}

impl ServeArgs {
    pub fn resolve(&self, config: &CrudConfig) -> Result<ServerConfig, crudkit::ConfigError> {
        let mut server = config.section::<ServerConfig>()?;
        if let Some(port) = self.port {
            server.port = port;
        }
        if let Some(url) = &self.database_url {
            server.database_url = url.clone();
        }
        Ok(server)
    }
}

pub async fn run(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = CrudConfig::load(&args.profile)?;
    let server = args.resolve(&config)?;
    let pool = connect_store(&server.database_url).await?;
    build_app(pool).serve(&server.address()).await
}
