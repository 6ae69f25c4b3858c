//! Route table and the authentication guard in front of it.

/// A navigable location in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`, forwards to login or chat.
    Root,
    /// `/login`
    Login,
    /// `/register`
    Register,
    /// `/chat`, requires a stored token.
    Chat,
    /// Any other path.
    NotFound,
}

/// A page that can actually be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    Chat,
}

/// Outcome of running a route through [`guard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the page in place.
    Render(Page),
    /// Replace the current history entry with another route.
    Redirect(Route),
}

impl Route {
    /// Parse a URL path. Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Root,
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/chat" => Route::Chat,
            _ => Route::NotFound,
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Chat => "/chat",
            // Never a redirect target, but still needs a concrete path.
            Route::NotFound => "/404",
        }
    }
}

/// Decide what to show for `route` given whether a token is stored.
pub fn guard(route: Route, authenticated: bool) -> RouteDecision {
    match route {
        Route::Root if authenticated => RouteDecision::Redirect(Route::Chat),
        Route::Root => RouteDecision::Redirect(Route::Login),
        Route::Login => RouteDecision::Render(Page::Login),
        Route::Register => RouteDecision::Render(Page::Register),
        Route::Chat if authenticated => RouteDecision::Render(Page::Chat),
        Route::Chat => RouteDecision::Redirect(Route::Login),
        Route::NotFound => RouteDecision::Redirect(Route::Login),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Route::Root);
        assert_eq!(Route::from_path(""), Route::Root);
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/login/"), Route::Login);
        assert_eq!(Route::from_path("/register"), Route::Register);
        assert_eq!(Route::from_path("/chat"), Route::Chat);
        assert_eq!(Route::from_path("/settings"), Route::NotFound);
        assert_eq!(Route::from_path("/chat/42"), Route::NotFound);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [Route::Root, Route::Login, Route::Register, Route::Chat] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_unauthenticated_redirects_to_login() {
        assert_eq!(guard(Route::Root, false), RouteDecision::Redirect(Route::Login));
        assert_eq!(guard(Route::Chat, false), RouteDecision::Redirect(Route::Login));
        assert_eq!(guard(Route::NotFound, false), RouteDecision::Redirect(Route::Login));
    }

    #[test]
    fn test_authenticated_reaches_chat() {
        assert_eq!(guard(Route::Root, true), RouteDecision::Redirect(Route::Chat));
        assert_eq!(guard(Route::Chat, true), RouteDecision::Render(Page::Chat));
    }

    #[test]
    fn test_auth_pages_always_reachable() {
        for authenticated in [false, true] {
            assert_eq!(guard(Route::Login, authenticated), RouteDecision::Render(Page::Login));
            assert_eq!(
                guard(Route::Register, authenticated),
                RouteDecision::Render(Page::Register)
            );
        }
    }

    #[test]
    fn test_unknown_path_goes_to_login_even_when_authenticated() {
        assert_eq!(guard(Route::NotFound, true), RouteDecision::Redirect(Route::Login));
    }
}
