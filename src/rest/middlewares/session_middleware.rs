use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, COOKIE};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};
use task_local_extensions::Extensions;

/// Attaches the driver's session cookie to every request.
///
/// The backend resolves the current driver from its login session, so requests without the
/// cookie are treated as anonymous.
pub struct SessionMiddleware {
    cookie: HeaderValue,
}

impl SessionMiddleware {
    /// `cookie` is a `name=value` pair, e.g. `session=eyJfZnJlc2giOmZhbHNlfQ`.
    pub fn new(cookie: &str) -> anyhow::Result<Self> {
        if !cookie.contains('=') {
            return Err(anyhow!("Session cookie must be a name=value pair"));
        }

        let mut cookie = HeaderValue::from_str(cookie)
            .context("Unable to create Cookie header from the session cookie")?;
        cookie.set_sensitive(true);

        Ok(Self { cookie })
    }
}

#[async_trait]
impl Middleware for SessionMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        req.headers_mut().append(COOKIE, self.cookie.clone());
        next.run(req, extensions).await
    }
}
