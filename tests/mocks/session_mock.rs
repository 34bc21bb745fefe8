use futures::future::{self, FutureExt, LocalBoxFuture};
use openheart::gates::auth::{Resolution, SessionResolver};

/// Resolver that never answers, keeping the auth gate in its loading state.
pub struct PendingSessionResolver;

impl SessionResolver for PendingSessionResolver {
    fn resolve(&self) -> LocalBoxFuture<'static, Resolution> {
        future::pending().boxed_local()
    }
}
