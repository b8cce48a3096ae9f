use std::sync::Arc;

use storefront_common::account::{Address, Credentials, Name, ProfileUpdate, Registration};
use storefront_common::gateway::GatewayError;
use storefront_common::storage::{KeyValueStore, USER_KEY};
use storefront_core::http::HttpGateway;
use storefront_core::session::{SessionError, SessionStore};
use storefront_core::storage::FileStore;

use crate::utils::{Route, StubServer, USERS};

fn credentials(username: &str, password: &str) -> Credentials {
    Credentials {
        username: username.to_string(),
        password: password.to_string(),
    }
}

fn gateway(server: &StubServer) -> Arc<HttpGateway> {
    Arc::new(HttpGateway::new(&server.base).unwrap())
}

fn login_routes() -> Vec<Route> {
    vec![
        Route::new("POST", "/auth/login", 200, r#"{"token":"eyJhbGciOi.fake.jwt"}"#),
        Route::new("GET", "/users", 200, USERS),
    ]
}

#[tokio::test]
async fn login_saves_profile_and_token() {
    let server = StubServer::start(login_routes()).await;
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStore::new(dir.path());
    let mut sessions = SessionStore::hydrate(&storage, gateway(&server));

    let session = sessions
        .login(&credentials("mor_2314", "83r5^_"))
        .await
        .unwrap();
    assert_eq!(session.user.id, 2);
    assert_eq!(session.token, "eyJhbGciOi.fake.jwt");

    let requests = server.requests();
    assert_eq!(requests[0].method, "POST");
    let sent: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(sent["username"], "mor_2314");
    assert_eq!(sent["password"], "83r5^_");

    let saved: serde_json::Value =
        serde_json::from_str(&storage.get(USER_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(saved["username"], "mor_2314");
    assert_eq!(saved["token"], "eyJhbGciOi.fake.jwt");
    assert_eq!(saved["address"]["number"], 7267);
    assert!(saved.get("password").is_none());
}

#[tokio::test]
async fn rejected_login_is_invalid_credentials() {
    let server = StubServer::start(vec![Route::new(
        "POST",
        "/auth/login",
        401,
        r#""username or password is incorrect""#,
    )])
    .await;
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStore::new(dir.path());
    let mut sessions = SessionStore::hydrate(&storage, gateway(&server));

    let result = sessions.login(&credentials("johnd", "nope")).await;

    assert!(matches!(
        result,
        Err(SessionError::Gateway(GatewayError::InvalidCredentials))
    ));
    assert_eq!(storage.get(USER_KEY).unwrap(), None);
}

#[tokio::test]
async fn session_is_restored_then_forgotten() {
    let server = StubServer::start(login_routes()).await;
    let dir = tempfile::tempdir().unwrap();

    {
        let mut sessions = SessionStore::hydrate(FileStore::new(dir.path()), gateway(&server));
        sessions.login(&credentials("johnd", "m38rmF$")).await.unwrap();
    }

    let mut sessions = SessionStore::hydrate(FileStore::new(dir.path()), gateway(&server));
    assert_eq!(sessions.current().unwrap().user.username, "johnd");

    sessions.logout().unwrap();
    assert!(!dir.path().join("user.json").exists());

    let sessions = SessionStore::hydrate(FileStore::new(dir.path()), gateway(&server));
    assert!(sessions.current().is_none());
}

#[tokio::test]
async fn profile_update_sends_put_and_keeps_token() {
    let mut routes = login_routes();
    routes.push(Route::new(
        "PUT",
        "/users/1",
        200,
        r#"{"id":1,"email":"john@example.com","username":"johnd","name":{"firstname":"john","lastname":"doe"},"address":{"city":"kilcoole","street":"7835 new road","number":3,"zipcode":"12926-3874","geolocation":{"lat":"-37.3159","long":"81.1496"}},"phone":"1-570-236-7033"}"#,
    ));
    let server = StubServer::start(routes).await;
    let dir = tempfile::tempdir().unwrap();
    let mut sessions = SessionStore::hydrate(FileStore::new(dir.path()), gateway(&server));
    sessions.login(&credentials("johnd", "m38rmF$")).await.unwrap();

    let mut update = ProfileUpdate::from(&sessions.current().unwrap().user);
    update.email = "john@example.com".to_string();
    let session = sessions.update_profile(&update).await.unwrap();

    assert_eq!(session.user.email, "john@example.com");
    assert_eq!(session.token, "eyJhbGciOi.fake.jwt");

    let put = server
        .requests()
        .into_iter()
        .find(|request| request.method == "PUT")
        .unwrap();
    let sent: serde_json::Value = serde_json::from_str(&put.body).unwrap();
    assert_eq!(sent["email"], "john@example.com");
    assert_eq!(sent["address"]["geolocation"]["lat"], "-37.3159");
}

#[tokio::test]
async fn signup_posts_registration_and_returns_id() {
    let server = StubServer::start(vec![Route::new("POST", "/users", 200, r#"{"id":11}"#)]).await;
    let dir = tempfile::tempdir().unwrap();
    let sessions = SessionStore::hydrate(FileStore::new(dir.path()), gateway(&server));

    let id = sessions
        .register(Registration {
            email: "jane@shop.test".to_string(),
            username: "janed".to_string(),
            password: "s3cret".to_string(),
            name: Name {
                firstname: "jane".to_string(),
                lastname: "doe".to_string(),
            },
            address: Address {
                city: "kilcoole".to_string(),
                street: "new road".to_string(),
                number: 12,
                zipcode: "12926".to_string(),
                geolocation: Default::default(),
            },
            phone: "555-0100".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(id, 11);
    let sent: serde_json::Value = serde_json::from_str(&server.requests()[0].body).unwrap();
    assert_eq!(sent["address"]["number"], 12);
    assert_eq!(sent["address"]["geolocation"]["long"], "81.1496");
    assert!(sessions.current().is_none());
}
