//! Session resolution for the review submission view.
use crate::errors::AuthError;
use crate::models::session::{AuthStatus, SessionStatus};
use crate::routes;
use futures::future::{self, FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use leptos::logging::{error, log};
use std::rc::Rc;

pub type Resolution = Result<AuthStatus, AuthError>;

/// Answers whether the visitor currently holds a valid login session.
pub trait SessionResolver {
    fn resolve(&self) -> LocalBoxFuture<'static, Resolution>;
}

/// Resolver handed around through the Leptos context.
pub type SharedSessionResolver = Rc<dyn SessionResolver>;

/// Asks the site's own session endpoint.
#[derive(Debug, Clone)]
pub struct HttpSessionResolver {
    endpoint: String,
}

impl HttpSessionResolver {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpSessionResolver {
    fn default() -> Self {
        Self::new(routes::SESSION_API)
    }
}

impl SessionResolver for HttpSessionResolver {
    fn resolve(&self) -> LocalBoxFuture<'static, Resolution> {
        let endpoint = self.endpoint.clone();
        async move {
            log!("[AUTH] Checking session at {}", endpoint);
            let response = Request::get(&endpoint)
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            if !response.ok() {
                return Err(AuthError::Status(response.status()));
            }
            let status = response
                .json::<SessionStatus>()
                .await
                .map_err(|e| AuthError::Decode(e.to_string()))?;
            Ok(AuthStatus::from(status))
        }
        .boxed_local()
    }
}

/// Always answers with the same resolution. Handy for tests and previews.
#[derive(Debug, Clone)]
pub struct FixedSessionResolver(pub Resolution);

impl FixedSessionResolver {
    pub fn authenticated() -> Self {
        Self(Ok(AuthStatus::Authenticated))
    }

    pub fn unauthenticated() -> Self {
        Self(Ok(AuthStatus::Unauthenticated))
    }
}

impl SessionResolver for FixedSessionResolver {
    fn resolve(&self) -> LocalBoxFuture<'static, Resolution> {
        future::ready(self.0.clone()).boxed_local()
    }
}

/// What the submission view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthGateState {
    Loading,
    LoginRequired,
    Granted,
}

impl AuthGateState {
    /// `None` means the resolver has not answered yet.
    ///
    /// Resolver errors are shown the same way as a missing session; only the log tells them apart.
    pub fn from_resolution(resolution: Option<&Resolution>) -> Self {
        match resolution {
            None => AuthGateState::Loading,
            Some(Ok(AuthStatus::Authenticated)) => AuthGateState::Granted,
            Some(Ok(AuthStatus::Unauthenticated)) => AuthGateState::LoginRequired,
            Some(Err(err)) => {
                error!("[AUTH] Session check failed, treating as logged out: {}", err);
                AuthGateState::LoginRequired
            }
        }
    }
}

/// Resolver provided by `App`, or the HTTP one when no one provided one.
pub fn use_session_resolver() -> SharedSessionResolver {
    leptos::use_context::<SharedSessionResolver>()
        .unwrap_or_else(|| Rc::new(HttpSessionResolver::default()))
}
