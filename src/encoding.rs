use percent_encoding::{AsciiSet, CONTROLS};

/// Characters escaped in cookie names and values: everything outside
/// the rfc 6265 `cookie-octet` grammar, plus `%` so that encoded
/// output round-trips, plus the separators that would break
/// `name=value; attr` framing.
const COOKIE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'(')
    .add(b')')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

pub(crate) fn encode(string: &str) -> impl std::fmt::Display + '_ {
    percent_encoding::percent_encode(string.as_bytes(), COOKIE)
}
