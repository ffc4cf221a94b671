//! PodStore CLI
//!
//! Command-line access to resources kept in Redis by PodStore.
//!
//! # Commands
//!
//! - `get` - Print a document's payload
//! - `meta` - Print a resource's metadata
//! - `ls` - List a container's children
//! - `put` - Store a document from a file or stdin
//! - `mkdir` - Create a container
//! - `rm` - Delete a resource

mod commands;

use clap::{Parser, Subcommand};
use commands::{resolve, OutputFormat};
use podstore_core::{KvDataAccessor, SingleRootIdentifierStrategy};
use podstore_kv::{RedisClient, RedisConfig, DEFAULT_HOST, DEFAULT_PORT};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// PodStore command-line tools.
#[derive(Parser)]
#[command(name = "podstore")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Redis host
    #[arg(global = true, long, env = "REDIS_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Redis port
    #[arg(global = true, long, env = "REDIS_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Redis ACL user name
    #[arg(global = true, long, env = "REDIS_USERNAME")]
    username: Option<String>,

    /// Redis ACL password
    #[arg(global = true, long, env = "REDIS_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Redis logical database
    #[arg(global = true, long, env = "REDIS_DB")]
    db: Option<u32>,

    /// Root container URL; relative identifiers resolve against it
    #[arg(global = true, long, env = "PODSTORE_BASE", default_value = "http://localhost:3000/")]
    base: String,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a document's payload
    Get {
        /// Document identifier
        id: String,
    },

    /// Print a resource's metadata
    Meta {
        /// Resource identifier
        id: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List a container's children
    Ls {
        /// Container identifier
        #[arg(default_value = "")]
        container: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Store a document
    Put {
        /// Document identifier
        id: String,

        /// Content type; `internal/quads` reads one encoded triple per line
        #[arg(short, long, default_value = commands::put::DEFAULT_CONTENT_TYPE)]
        content_type: String,

        /// Read the payload from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Create a container
    Mkdir {
        /// Container identifier, ending in '/'
        container: String,
    },

    /// Delete a resource
    Rm {
        /// Resource identifier
        id: String,
    },
}

impl Cli {
    fn redis_config(&self) -> RedisConfig {
        let mut config = RedisConfig::new().host(self.host.clone()).port(self.port);
        if let (Some(username), Some(password)) = (&self.username, &self.password) {
            config = config.credentials(username.clone(), password.clone());
        }
        if let Some(db) = self.db {
            config = config.db(db);
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let client = RedisClient::new(cli.redis_config())?;
    let accessor = KvDataAccessor::new(client, SingleRootIdentifierStrategy::new(cli.base.as_str()));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Get { id } => {
            commands::get::run(&accessor, &resolve(&cli.base, id), &mut out)?;
        }
        Commands::Meta { id, format } => {
            commands::meta::run(&accessor, &resolve(&cli.base, id), *format, &mut out)?;
        }
        Commands::Ls { container, format } => {
            commands::ls::run(&accessor, &resolve(&cli.base, container), *format, &mut out)?;
        }
        Commands::Put {
            id,
            content_type,
            file,
        } => {
            let id = resolve(&cli.base, id);
            match file {
                Some(path) => commands::put::run(&accessor, &id, content_type, File::open(path)?)?,
                None => commands::put::run(&accessor, &id, content_type, io::stdin())?,
            }
        }
        Commands::Mkdir { container } => {
            commands::mkdir::run(&accessor, &resolve(&cli.base, container))?;
        }
        Commands::Rm { id } => {
            commands::rm::run(&accessor, &resolve(&cli.base, id))?;
        }
    }

    Ok(())
}
