//! # Account Model
//!
//! Users as the remote service describes them, the cached session (a user
//! plus its token), and the request bodies sent when logging in, updating a
//! profile or registering.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Name {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Geolocation {
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub long: String,
}

impl Geolocation {
    /// Coordinates sent when registering without a location.
    pub fn placeholder() -> Self {
        Self {
            lat: "-37.3159".to_string(),
            long: "81.1496".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub geolocation: Geolocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub name: Name,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub phone: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name.firstname, self.name.lastname)
            .trim()
            .to_string()
    }
}

/// The authenticated user as cached after login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(flatten)]
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of a profile update.
///
/// Built from the current user so that fields the caller leaves alone are
/// sent unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub email: String,
    pub username: String,
    pub name: Name,
    pub address: Address,
    pub phone: String,
}

impl From<&User> for ProfileUpdate {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            username: user.username.clone(),
            name: user.name.clone(),
            address: user.address.clone(),
            phone: user.phone.clone(),
        }
    }
}

/// Body of a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub email: String,
    pub username: String,
    pub password: String,
    pub name: Name,
    pub address: Address,
    pub phone: String,
}

impl Registration {
    /// Fills in the placeholder location when none was given.
    pub fn with_default_geolocation(mut self) -> Self {
        if self.address.geolocation == Geolocation::default() {
            self.address.geolocation = Geolocation::placeholder();
        }
        self
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
