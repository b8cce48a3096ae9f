pub mod account;
pub mod cart;
pub mod catalog;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use storefront_common::config::{self, Config, DEFAULT_API_BASE};

#[derive(Parser)]
#[command(name = "storefront", version)]
#[command(about = "Browse the demo store, keep a cart and manage your profile.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the catalog service
    #[arg(long, global = true, env = "STOREFRONT_API", default_value = DEFAULT_API_BASE)]
    pub api: String,

    /// Directory holding the saved cart and session
    #[arg(long, global = true, env = config::HOME_ENV)]
    pub data_dir: Option<PathBuf>,

    /// Print less. Repeat to print results only
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Log more. Repeat for trace output
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List products, optionally narrowed to a category or a title search
    #[command(alias = "p")]
    Products {
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        limit: Option<usize>,
        #[arg(short, long)]
        search: Option<String>,
    },
    /// List product categories
    #[command(alias = "c")]
    Categories,
    /// Show one product in detail
    Product { id: u64 },
    /// Show or change the cart
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
    /// Log in and keep the session on this machine
    Login {
        username: String,
        #[arg(short, long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the saved session
    Logout,
    /// Show or edit the logged-in profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },
    /// Register a new account
    Signup(SignupArgs),
}

#[derive(Subcommand)]
pub enum CartAction {
    /// List cart lines and the total
    Show,
    /// Add one unit of a product
    Add { id: u64 },
    /// Drop a product from the cart
    Remove { id: u64 },
    /// Set how many units of a product are in the cart
    Set {
        id: u64,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the saved profile
    Show {
        /// Fetch the record from the service before showing it
        #[arg(long)]
        refresh: bool,
    },
    /// Send changed profile fields to the service
    Update(ProfileArgs),
}

#[derive(Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub firstname: Option<String>,
    #[arg(long)]
    pub lastname: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub street: Option<String>,
    #[arg(long)]
    pub number: Option<u32>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub zipcode: Option<String>,
}

#[derive(Args)]
pub struct SignupArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub username: String,
    #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
    pub password: String,
    #[arg(long, default_value = "")]
    pub firstname: String,
    #[arg(long, default_value = "")]
    pub lastname: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub street: String,
    #[arg(long, default_value_t = 0)]
    pub number: u32,
    #[arg(long, default_value = "")]
    pub city: String,
    #[arg(long, default_value = "")]
    pub zipcode: String,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            api_base: self.api.clone(),
            data_dir: self
                .data_dir
                .clone()
                .unwrap_or_else(config::default_data_dir),
            quiet: self.quiet,
            no_banner: self.no_banner,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
