mod commands;
mod terminal;

use std::process::ExitCode;
use std::sync::Arc;

use commands::{CartAction, CommandLine, Commands, ProfileAction, account, cart, catalog};
use storefront_common::account::Credentials;
use storefront_common::catalog::ProductId;
use storefront_common::config::Config;
use storefront_core::cart::CartStore;
use storefront_core::catalog::{Browse, CatalogService};
use storefront_core::http::HttpGateway;
use storefront_core::session::SessionStore;
use storefront_core::storage::FileStore;
use terminal::{logging, print};
use tracing::{debug, error};

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose);

    let cfg = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    match run(commands.command, &cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, cfg: &Config) -> anyhow::Result<()> {
    debug!("Using {} and data directory {}", cfg.api_base, cfg.data_dir.display());

    let storage = FileStore::new(cfg.data_dir.clone());
    let gateway = Arc::new(HttpGateway::new(&cfg.api_base)?);
    let catalog_service = CatalogService::new(gateway.clone());

    match command {
        Commands::Products {
            category,
            limit,
            search,
        } => {
            let browse = Browse {
                category,
                limit,
                search,
            };
            catalog::products(&catalog_service, browse, cfg).await
        }
        Commands::Categories => catalog::categories(&catalog_service, cfg).await,
        Commands::Product { id } => catalog::product(&catalog_service, ProductId(id), cfg).await,
        Commands::Cart { action } => {
            let mut store = CartStore::hydrate(&storage);
            match action.unwrap_or(CartAction::Show) {
                CartAction::Show => cart::show(&store, cfg),
                CartAction::Add { id } => {
                    cart::add(&mut store, &catalog_service, ProductId(id), cfg).await
                }
                CartAction::Remove { id } => cart::remove(&mut store, ProductId(id), cfg),
                CartAction::Set { id, quantity } => {
                    cart::set(&mut store, ProductId(id), quantity, cfg)
                }
                CartAction::Clear => cart::clear(&mut store, cfg),
            }
        }
        Commands::Login { username, password } => {
            let mut sessions = SessionStore::hydrate(&storage, gateway);
            account::login(&mut sessions, Credentials { username, password }, cfg).await
        }
        Commands::Logout => {
            let mut sessions = SessionStore::hydrate(&storage, gateway);
            account::logout(&mut sessions, cfg)
        }
        Commands::Profile { action } => {
            let mut sessions = SessionStore::hydrate(&storage, gateway);
            match action.unwrap_or(ProfileAction::Show { refresh: false }) {
                ProfileAction::Show { refresh } => account::show(&mut sessions, refresh, cfg).await,
                ProfileAction::Update(args) => account::update(&mut sessions, args, cfg).await,
            }
        }
        Commands::Signup(args) => {
            let sessions = SessionStore::hydrate(&storage, gateway);
            account::signup(&sessions, args, cfg).await
        }
    }
}
