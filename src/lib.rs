#![forbid(unsafe_code)]
#![deny(
    missing_copy_implementations,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    unused_qualifications
)]

/*!

# set-cookie-builder

Builds `Set-Cookie` header values from a cookie name, a value, and
attribute defaults shared across an application (domain, path, security
flags). The output is a plain [`String`] intended to be placed as the
value of a `Set-Cookie` response header; this crate never touches
headers, sockets, or responses itself.

A [`CookieBuilder`] is immutable once configured, so a single instance
can be shared freely across threads and reused for every response.

## example

```
use set_cookie_builder::{CookieBuilder, Expiration};
use std::time::Duration;

let cookies = CookieBuilder::new()
    .with_domain("localhost")
    .with_path("/")
    .secure()
    .http_only();

assert_eq!(
    cookies.build("name", "value", Expiration::Session),
    "name=value; Domain=localhost; Path=/; Secure; HttpOnly"
);

assert_eq!(
    cookies.build("name", "value", Duration::from_secs(3600)),
    "name=value; Domain=localhost; Path=/; Max-Age=3600; Secure; HttpOnly"
);

assert_eq!(
    CookieBuilder::new().remove("name"),
    "name=; Expires=Thu, 01 Jan 1970 00:00:00 GMT"
);
```
*/

mod builder;
pub use builder::CookieBuilder;

mod expiration;
pub use expiration::{Expiration, EXPIRED};

mod encoding;
