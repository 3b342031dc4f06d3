use std::{
    borrow::Cow,
    fmt::{Display, Formatter},
    time::{Duration, SystemTime},
};
use Expiration::*;

/// The unix epoch as an http-date. Setting this as a cookie's
/// `Expires` attribute instructs the client to delete the cookie
/// immediately; [`CookieBuilder::remove`](crate::CookieBuilder::remove)
/// does exactly that.
pub const EXPIRED: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/**
When a cookie should expire.

Determines which expiration attribute
[`CookieBuilder::build`](crate::CookieBuilder::build) emits, if
any. Callers usually construct one through the `From` conversions:
a [`Duration`] becomes [`MaxAge`], a [`SystemTime`] becomes
[`Instant`], and a string becomes a verbatim [`HttpDate`].

[`MaxAge`]: Expiration::MaxAge
[`Instant`]: Expiration::Instant
[`HttpDate`]: Expiration::HttpDate
*/
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Expiration {
    /// no expiration attribute; the client discards the cookie when
    /// the session ends
    Session,

    /// a `Max-Age` attribute with a lifetime in whole seconds,
    /// relative to receipt
    MaxAge(Duration),

    /// an `Expires` attribute with a preformatted http-date, emitted
    /// verbatim. The caller is responsible for its correctness.
    HttpDate(Cow<'static, str>),

    /// an `Expires` attribute for a point in time, formatted as an
    /// RFC 1123 http-date in GMT
    Instant(SystemTime),
}

impl Default for Expiration {
    fn default() -> Self {
        Session
    }
}

impl Display for Expiration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Session => Ok(()),
            MaxAge(duration) => write!(f, "; Max-Age={}", duration.as_secs()),
            HttpDate(date) => write!(f, "; Expires={date}"),
            Instant(time) => write!(f, "; Expires={}", httpdate::fmt_http_date(*time)),
        }
    }
}

impl From<Duration> for Expiration {
    fn from(duration: Duration) -> Self {
        MaxAge(duration)
    }
}

impl From<SystemTime> for Expiration {
    fn from(time: SystemTime) -> Self {
        Instant(time)
    }
}

impl From<&'static str> for Expiration {
    fn from(date: &'static str) -> Self {
        HttpDate(Cow::Borrowed(date))
    }
}

impl From<String> for Expiration {
    fn from(date: String) -> Self {
        HttpDate(Cow::Owned(date))
    }
}

impl<T> From<Option<T>> for Expiration
where
    T: Into<Expiration>,
{
    fn from(expiration: Option<T>) -> Self {
        expiration.map_or(Session, Into::into)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::time::UNIX_EPOCH;

    #[test]
    fn rendering() {
        assert_eq!(Session.to_string(), "");
        assert_eq!(
            MaxAge(Duration::from_secs(86400)).to_string(),
            "; Max-Age=86400"
        );
        assert_eq!(
            Expiration::from(EXPIRED).to_string(),
            "; Expires=Thu, 01 Jan 1970 00:00:00 GMT"
        );
        assert_eq!(
            Instant(UNIX_EPOCH).to_string(),
            "; Expires=Thu, 01 Jan 1970 00:00:00 GMT"
        );
    }

    #[test]
    fn subsecond_durations_truncate() {
        assert_eq!(
            MaxAge(Duration::from_millis(1500)).to_string(),
            "; Max-Age=1"
        );
    }

    #[test]
    fn conversions() {
        assert_eq!(Expiration::from(Duration::ZERO), MaxAge(Duration::ZERO));
        assert_eq!(Expiration::from(UNIX_EPOCH), Instant(UNIX_EPOCH));
        assert_eq!(
            Expiration::from(String::from(EXPIRED)),
            HttpDate(Cow::Owned(String::from(EXPIRED)))
        );
        assert_eq!(Expiration::from(None::<Duration>), Session);
        assert_eq!(
            Expiration::from(Some(Duration::from_secs(1))),
            MaxAge(Duration::from_secs(1))
        );
        assert_eq!(Expiration::default(), Session);
    }
}
