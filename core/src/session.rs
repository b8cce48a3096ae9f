//! # Session Store
//!
//! Holds the authenticated user, if any, and mirrors it under [`USER_KEY`].
//! Logging in exchanges credentials for a token and then resolves the
//! matching user record; the pair is what gets cached.

use std::sync::Arc;

use storefront_common::account::{
    Address, Credentials, Geolocation, Name, ProfileUpdate, Registration, Session, User,
};
use storefront_common::gateway::{AccountGateway, GatewayError};
use storefront_common::storage::{self, KeyValueStore, Loaded, StorageError, USER_KEY};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("not logged in")]
    NotLoggedIn,
}

pub struct SessionStore<S: KeyValueStore> {
    session: Option<Session>,
    storage: S,
    gateway: Arc<dyn AccountGateway>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Restores the cached session, treating anything unreadable as logged
    /// out.
    pub fn hydrate(storage: S, gateway: Arc<dyn AccountGateway>) -> Self {
        let session = match storage::load_json::<_, Session>(&storage, USER_KEY) {
            Ok(Loaded::Found(session)) => Some(session),
            Ok(Loaded::Missing) => None,
            Ok(Loaded::Malformed(err)) => {
                warn!("Ignoring malformed saved session: {err}");
                None
            }
            Err(err) => {
                warn!("Could not read saved session: {err}");
                None
            }
        };

        Self {
            session,
            storage,
            gateway,
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    fn require(&self) -> Result<&Session, SessionError> {
        self.session.as_ref().ok_or(SessionError::NotLoggedIn)
    }

    /// Authenticates and caches the resulting session.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<&Session, SessionError> {
        let token = self.gateway.login(credentials).await?;
        debug!("Received session token for '{}'", credentials.username);

        let user = self
            .gateway
            .users()
            .await?
            .into_iter()
            .find(|user| user.username == credentials.username)
            .ok_or_else(|| GatewayError::UnknownUser(credentials.username.clone()))?;

        self.store(user, token)
    }

    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.session = None;
        self.storage.remove(USER_KEY)?;
        Ok(())
    }

    /// Re-reads the logged-in user's record, keeping the token.
    pub async fn refresh(&mut self) -> Result<&Session, SessionError> {
        let current = self.require()?;
        let token = current.token.clone();
        let user = self.gateway.user(current.user.id).await?;

        self.store(user, token)
    }

    /// Sends `update` for the logged-in user and caches what the service
    /// returns. Fields the response leaves empty take the value that was
    /// sent, so a field can be cleared by sending it empty.
    pub async fn update_profile(&mut self, update: &ProfileUpdate) -> Result<&Session, SessionError> {
        let current = self.require()?;
        let token = current.token.clone();
        let previous = current.user.clone();

        let returned = self.gateway.update_user(previous.id, update).await?;

        self.store(merge_user(&sent_user(previous, update), returned), token)
    }

    /// Registers a new account. Does not log in.
    pub async fn register(&self, registration: Registration) -> Result<u64, SessionError> {
        let registration = registration.with_default_geolocation();
        Ok(self.gateway.create_user(&registration).await?)
    }

    fn store(&mut self, mut user: User, token: String) -> Result<&Session, SessionError> {
        user.password = None;
        let session = Session { user, token };
        storage::save_json(&self.storage, USER_KEY, &session)?;
        Ok(self.session.insert(session))
    }
}

fn keep_if_empty(returned: String, previous: &str) -> String {
    if returned.is_empty() {
        previous.to_string()
    } else {
        returned
    }
}

/// The user record as it should look once `update` is applied.
fn sent_user(previous: User, update: &ProfileUpdate) -> User {
    User {
        email: update.email.clone(),
        username: update.username.clone(),
        name: update.name.clone(),
        address: update.address.clone(),
        phone: update.phone.clone(),
        ..previous
    }
}

fn merge_user(previous: &User, returned: User) -> User {
    let address = returned.address;
    let geolocation = address.geolocation;
    User {
        id: if returned.id == 0 { previous.id } else { returned.id },
        email: keep_if_empty(returned.email, &previous.email),
        username: keep_if_empty(returned.username, &previous.username),
        password: None,
        name: Name {
            firstname: keep_if_empty(returned.name.firstname, &previous.name.firstname),
            lastname: keep_if_empty(returned.name.lastname, &previous.name.lastname),
        },
        address: Address {
            city: keep_if_empty(address.city, &previous.address.city),
            street: keep_if_empty(address.street, &previous.address.street),
            number: if address.number == 0 {
                previous.address.number
            } else {
                address.number
            },
            zipcode: keep_if_empty(address.zipcode, &previous.address.zipcode),
            geolocation: Geolocation {
                lat: keep_if_empty(geolocation.lat, &previous.address.geolocation.lat),
                long: keep_if_empty(geolocation.long, &previous.address.geolocation.long),
            },
        },
        phone: keep_if_empty(returned.phone, &previous.phone),
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
