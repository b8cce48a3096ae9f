use colored::*;
use storefront_common::account::{Address, Credentials, Name, ProfileUpdate, Registration, Session};
use storefront_common::config::Config;
use storefront_common::storage::KeyValueStore;
use storefront_core::session::SessionStore;
use tracing::{Instrument, info};

use crate::commands::{ProfileArgs, SignupArgs};
use crate::terminal::{format, print, spinner};

pub async fn login<S: KeyValueStore>(
    sessions: &mut SessionStore<S>,
    credentials: Credentials,
    cfg: &Config,
) -> anyhow::Result<()> {
    let session: &Session = sessions
        .login(&credentials)
        .instrument(spinner::request_span("Logging in..."))
        .await?;

    info!("Logged in as {}", session.user.username.bold());
    print_profile(session, cfg);
    Ok(())
}

pub fn logout<S: KeyValueStore>(sessions: &mut SessionStore<S>, cfg: &Config) -> anyhow::Result<()> {
    let was_logged_in: bool = sessions.current().is_some();
    sessions.logout()?;

    if was_logged_in {
        info!("Logged out");
    } else if cfg.quiet < 2 {
        print::print_status("No session was saved");
    }
    Ok(())
}

pub async fn show<S: KeyValueStore>(
    sessions: &mut SessionStore<S>,
    refresh: bool,
    cfg: &Config,
) -> anyhow::Result<()> {
    let session: &Session = if refresh {
        sessions
            .refresh()
            .instrument(spinner::request_span("Refreshing profile..."))
            .await?
    } else {
        match sessions.current() {
            Some(session) => session,
            None => anyhow::bail!("not logged in, run `storefront login <username>` first"),
        }
    };

    print_profile(session, cfg);
    Ok(())
}

pub async fn update<S: KeyValueStore>(
    sessions: &mut SessionStore<S>,
    args: ProfileArgs,
    cfg: &Config,
) -> anyhow::Result<()> {
    let Some(current) = sessions.current() else {
        anyhow::bail!("not logged in, run `storefront login <username>` first");
    };
    let update: ProfileUpdate = apply_profile_args(ProfileUpdate::from(&current.user), args);

    let session: &Session = sessions
        .update_profile(&update)
        .instrument(spinner::request_span("Saving profile..."))
        .await?;

    info!("Profile updated");
    print_profile(session, cfg);
    Ok(())
}

fn apply_profile_args(mut update: ProfileUpdate, args: ProfileArgs) -> ProfileUpdate {
    let ProfileArgs {
        email,
        username,
        firstname,
        lastname,
        phone,
        street,
        number,
        city,
        zipcode,
    } = args;

    if let Some(email) = email {
        update.email = email;
    }
    if let Some(username) = username {
        update.username = username;
    }
    if let Some(firstname) = firstname {
        update.name.firstname = firstname;
    }
    if let Some(lastname) = lastname {
        update.name.lastname = lastname;
    }
    if let Some(phone) = phone {
        update.phone = phone;
    }
    if let Some(street) = street {
        update.address.street = street;
    }
    if let Some(number) = number {
        update.address.number = number;
    }
    if let Some(city) = city {
        update.address.city = city;
    }
    if let Some(zipcode) = zipcode {
        update.address.zipcode = zipcode;
    }
    update
}

pub async fn signup<S: KeyValueStore>(
    sessions: &SessionStore<S>,
    args: SignupArgs,
    cfg: &Config,
) -> anyhow::Result<()> {
    let username: String = args.username.clone();
    let registration: Registration = Registration {
        email: args.email,
        username: args.username,
        password: args.password,
        name: Name {
            firstname: args.firstname,
            lastname: args.lastname,
        },
        address: Address {
            city: args.city,
            street: args.street,
            number: args.number,
            zipcode: args.zipcode,
            geolocation: Default::default(),
        },
        phone: args.phone,
    };

    let id: u64 = sessions
        .register(registration)
        .instrument(spinner::request_span("Creating account..."))
        .await?;

    info!("Account {} created with id {}", username.bold(), id);
    if cfg.quiet < 2 {
        print::print_status(format!("Log in with `storefront login {username}`"));
    }
    Ok(())
}

fn print_profile(session: &Session, cfg: &Config) {
    let user = &session.user;
    let name: String = match user.full_name() {
        name if name.is_empty() => user.username.clone(),
        name => name,
    };

    print::header("Profile", cfg.quiet);
    print::tree_head(user.id, &name);
    print::as_tree_one_level(format::user_to_detail(user));
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
