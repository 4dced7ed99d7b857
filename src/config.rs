//! Fixed navigation destinations and return-to handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! The access gate and the login page agree on these paths. The return-to
//! location travels as the `redirect` query parameter of the login path so it
//! survives a full page reload.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Query parameter carrying the post-login return location.
pub const REDIRECT_PARAM: &str = "redirect";

/// Named navigation targets used by redirects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Login,
    Home,
    AdminHome,
    MyTickets,
}

impl Destination {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Home => "/",
            Self::AdminHome => "/admin",
            Self::MyTickets => "/tickets",
        }
    }
}

/// Build the login href remembering `return_to`.
///
/// The root location (and an empty one) is not worth remembering since it is
/// the default landing page anyway.
#[must_use]
pub fn login_href(return_to: &str) -> String {
    let login = Destination::Login.path();
    if return_to.is_empty() || return_to == Destination::Home.path() {
        return login.to_owned();
    }
    format!("{login}?{REDIRECT_PARAM}={}", urlencoding::encode(return_to))
}

/// Accept only same-origin absolute paths; anything else lands on home.
#[must_use]
pub fn sanitize_return_to(raw: Option<&str>) -> String {
    let home = Destination::Home.path();
    let Some(raw) = raw.map(str::trim) else {
        return home.to_owned();
    };
    let is_local = raw.starts_with('/') && !raw.starts_with("//") && !raw.contains('\\');
    // Never bounce back into the login page itself.
    let is_login = raw == Destination::Login.path()
        || raw.starts_with(&format!("{}?", Destination::Login.path()));
    if is_local && !is_login { raw.to_owned() } else { home.to_owned() }
}

/// Join router path and query string into a single location.
#[must_use]
pub fn current_location(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { pathname.to_owned() } else { format!("{pathname}?{search}") }
}
