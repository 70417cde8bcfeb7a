//! Session service: owns the signed-in user for one browser tab.
//!
//! The session lives in three places: in memory, in local storage, and in a
//! cookie the edge guard can read. Local storage and cookie are always written
//! and removed together. The HTTP login handlers share `sign_in`/`sign_out`
//! with the service and write only the cookie.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::auth::role::Role;
use crate::auth::session::{Session, SESSION_KEY};
use crate::auth::storage::{KeyValueStore, StorageError};
use crate::navigation::routes::AppRoute;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Resolves the demo user for `role` and the page to land on after signing in.
pub fn sign_in(role: Role) -> (Session, AppRoute) {
    let session = role.demo_user();
    info!("Signed in as {} ({role})", session.email);
    (session, AppRoute::dashboard(role))
}

/// Where to go after signing out.
pub fn sign_out(session: Option<&Session>) -> AppRoute {
    if let Some(session) = session {
        info!("Signed out {}", session.email);
    }
    AppRoute::Login
}

pub struct SessionService {
    local: Arc<dyn KeyValueStore>,
    cookies: Arc<dyn KeyValueStore>,
    current: Option<Session>,
}

impl SessionService {
    pub fn new(local: Arc<dyn KeyValueStore>, cookies: Arc<dyn KeyValueStore>) -> Self {
        Self {
            local,
            cookies,
            current: None,
        }
    }

    /// Loads the persisted session.
    ///
    /// A readable session is restored and the cookie re-synced from it. A
    /// missing one clears any stale cookie. A corrupt one is deleted from both
    /// stores and leaves the service signed out.
    pub fn init(&mut self) -> Result<Option<&Session>, SessionError> {
        self.current = None;

        match self.local.get(SESSION_KEY)? {
            Some(raw) => match Session::from_json(&raw) {
                Ok(session) => {
                    self.cookies.set(SESSION_KEY, &session.to_cookie_value()?)?;
                    self.current = Some(session);
                }
                Err(e) => {
                    warn!("Discarding corrupt stored session: {e}");
                    self.local.remove(SESSION_KEY)?;
                    self.cookies.remove(SESSION_KEY)?;
                }
            },
            None => self.cookies.remove(SESSION_KEY)?,
        }

        Ok(self.current.as_ref())
    }

    /// Signs in as the demo user for `role` and returns where to navigate.
    pub fn login(&mut self, role: Role) -> Result<AppRoute, SessionError> {
        let (session, route) = sign_in(role);
        let json = session.to_json()?;
        let cookie = session.to_cookie_value()?;

        self.local.set(SESSION_KEY, &json)?;
        self.cookies.set(SESSION_KEY, &cookie)?;
        self.current = Some(session);

        Ok(route)
    }

    /// Signs out and returns the login route.
    pub fn logout(&mut self) -> Result<AppRoute, SessionError> {
        let route = sign_out(self.current.take().as_ref());
        self.local.remove(SESSION_KEY)?;
        self.cookies.remove(SESSION_KEY)?;
        Ok(route)
    }

    /// Drops in-memory state. Persisted copies are left for the next `init`.
    pub fn teardown(&mut self) {
        self.current = None;
    }

    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.current.as_ref().map(|s| s.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::storage::MemoryStorage;

    fn stores() -> (Arc<dyn KeyValueStore>, Arc<dyn KeyValueStore>) {
        (Arc::new(MemoryStorage::new()), Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_login_writes_memory_local_and_cookie() {
        let (local, cookies) = stores();
        let mut service = SessionService::new(local.clone(), cookies.clone());

        let route = service.login(Role::Recruiter).unwrap();

        assert_eq!(route.path(), "/dashboard/recruiter/overview");
        assert_eq!(service.role(), Some(Role::Recruiter));
        assert!(local.get(SESSION_KEY).unwrap().is_some());
        assert!(cookies.get(SESSION_KEY).unwrap().is_some());
    }

    #[test]
    fn test_session_round_trips_across_reload() {
        let (local, cookies) = stores();
        let mut first = SessionService::new(local.clone(), cookies.clone());
        first.login(Role::HiringManager).unwrap();
        first.teardown();

        let mut reloaded = SessionService::new(local.clone(), cookies.clone());
        let restored = reloaded.init().unwrap().cloned().unwrap();

        assert_eq!(restored.role, Role::HiringManager);
        let from_local = Session::from_json(&local.get(SESSION_KEY).unwrap().unwrap()).unwrap();
        let from_cookie =
            Session::from_cookie_value(&cookies.get(SESSION_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(from_local.role, Role::HiringManager);
        assert_eq!(from_cookie.role, Role::HiringManager);
    }

    #[test]
    fn test_init_resyncs_cookie_when_only_local_survived() {
        let (local, cookies) = stores();
        let mut service = SessionService::new(local.clone(), cookies.clone());
        service.login(Role::Admin).unwrap();
        cookies.remove(SESSION_KEY).unwrap();

        let mut reloaded = SessionService::new(local, cookies.clone());
        reloaded.init().unwrap();

        let cookie = cookies.get(SESSION_KEY).unwrap().unwrap();
        assert_eq!(Session::from_cookie_value(&cookie).unwrap().role, Role::Admin);
    }

    #[test]
    fn test_init_without_session_clears_stale_cookie() {
        let (local, cookies) = stores();
        cookies.set(SESSION_KEY, "stale").unwrap();

        let mut service = SessionService::new(local, cookies.clone());
        assert!(service.init().unwrap().is_none());
        assert_eq!(cookies.get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_corrupt_session_resets_to_signed_out() {
        let (local, cookies) = stores();
        local.set(SESSION_KEY, r#"{"id":"7a1e0000-00"#).unwrap();
        cookies.set(SESSION_KEY, "whatever").unwrap();

        let mut service = SessionService::new(local.clone(), cookies.clone());
        let restored = service.init().unwrap();

        assert!(restored.is_none());
        assert!(!service.is_authenticated());
        assert_eq!(local.get(SESSION_KEY).unwrap(), None);
        assert_eq!(cookies.get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_logout_clears_everything() {
        let (local, cookies) = stores();
        let mut service = SessionService::new(local.clone(), cookies.clone());
        service.login(Role::Candidate).unwrap();

        assert_eq!(service.logout().unwrap(), AppRoute::Login);
        assert!(service.session().is_none());
        assert_eq!(local.get(SESSION_KEY).unwrap(), None);
        assert_eq!(cookies.get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_shared_sign_in_helpers_pick_landing_routes() {
        let (session, route) = sign_in(Role::Recruiter);
        assert_eq!(session, Role::Recruiter.demo_user());
        assert_eq!(route, AppRoute::dashboard(Role::Recruiter));
        assert_eq!(sign_out(Some(&session)), AppRoute::Login);
        assert_eq!(sign_out(None), AppRoute::Login);
    }

    #[test]
    fn test_teardown_keeps_persisted_copies() {
        let (local, cookies) = stores();
        let mut service = SessionService::new(local.clone(), cookies.clone());
        service.login(Role::Admin).unwrap();
        service.teardown();

        assert!(!service.is_authenticated());
        assert!(local.get(SESSION_KEY).unwrap().is_some());
    }
}
