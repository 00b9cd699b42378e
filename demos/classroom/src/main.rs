use clap::{Parser, Subcommand};
use classroom::commands::{remote, serve};
use classroom::Collection;
use colored::Colorize;

#[derive(Parser)]
#[command(name = "classroom", version, about = "Classroom REST APIs and client")]
struct Cli {
    /// Server used by the client commands
    #[arg(long, global = true, default_value = "http://localhost:5000")]
    url: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve(serve::ServeArgs),
    /// Print every record of a collection
    List { collection: Collection },
    /// Print one record
    Get { collection: Collection, id: i64 },
    /// Create a record from a JSON object
    Create { collection: Collection, body: String },
    /// Change the fields present in a JSON object
    Update {
        collection: Collection,
        id: i64,
        body: String,
    },
    /// Delete one record
    Delete { collection: Collection, id: i64 },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let url = cli.url.as_str();

    let result = match cli.command {
        Commands::Serve(args) => serve::run(args).await,
        Commands::List { collection } => remote::list(url, collection).await,
        Commands::Get { collection, id } => remote::get(url, collection, id).await,
        Commands::Create { collection, body } => remote::create(url, collection, &body).await,
        Commands::Update {
            collection,
            id,
            body,
        } => remote::update(url, collection, id, &body).await,
        Commands::Delete { collection, id } => remote::delete(url, collection, id).await,
    };

    if let Err(e) = result {
        eprintln!("{}", format!("Error: {e}").red());
        std::process::exit(1);
    }
}
