use crate::{encoding::encode, Expiration, EXPIRED};

/**
Builds `Set-Cookie` header values from shared attribute defaults.

A builder holds the domain, path, and security flags that every cookie
it renders carries, typically taken from server-wide configuration.
Configuration happens once, through the chained `with_domain`,
`with_path`, [`secure`](CookieBuilder::secure), and
[`http_only`](CookieBuilder::http_only) methods; after that the builder
is read-only and every [`build`](CookieBuilder::build) or
[`remove`](CookieBuilder::remove) call is an independent, pure
rendering.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieBuilder {
    domain: String,
    path: String,
    secure: bool,
    http_only: bool,
}

impl CookieBuilder {
    /// constructs a cookie builder with no domain or path and both
    /// security flags off
    pub fn new() -> Self {
        Self::default()
    }

    /// sets the `Domain` attribute emitted on every cookie
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// sets the `Path` attribute emitted on every cookie
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// marks every cookie `Secure`, restricting it to https contexts
    pub fn secure(mut self) -> Self {
        self.secure = true;
        self
    }

    /// marks every cookie `HttpOnly`, hiding it from client-side
    /// scripts
    pub fn http_only(mut self) -> Self {
        self.http_only = true;
        self
    }

    /**
    Builds a `Set-Cookie` header value for `name` and `value`.

    `name` and `value` are percent-encoded independently and joined
    with `=`. Attributes follow in a fixed order: `Domain` and `Path`
    (each omitted entirely when unset), the expiration attribute (none
    for [`Expiration::Session`]), `Secure`, `HttpOnly`. Pass a
    [`Duration`](std::time::Duration) for `Max-Age`, a
    [`SystemTime`](std::time::SystemTime) or preformatted http-date
    string for `Expires`, or [`Expiration::Session`] for a session
    cookie.
    */
    pub fn build(&self, name: &str, value: &str, expiration: impl Into<Expiration>) -> String {
        let mut cookie = format!("{}={}", encode(name), encode(value));

        if !self.domain.is_empty() {
            cookie.push_str("; Domain=");
            cookie.push_str(&self.domain);
        }

        if !self.path.is_empty() {
            cookie.push_str("; Path=");
            cookie.push_str(&self.path);
        }

        cookie.push_str(&expiration.into().to_string());

        if self.secure {
            cookie.push_str("; Secure");
        }

        if self.http_only {
            cookie.push_str("; HttpOnly");
        }

        log::trace!("built set-cookie value: {cookie}");
        cookie
    }

    /**
    Builds a `Set-Cookie` header value that deletes the cookie `name`.

    Equivalent to [`build`](CookieBuilder::build) with an empty value
    and an [`EXPIRED`] expiration: the already-elapsed `Expires` date
    instructs the client to drop the cookie immediately.
    */
    pub fn remove(&self, name: &str) -> String {
        self.build(name, "", EXPIRED)
    }
}
