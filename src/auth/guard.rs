use std::fmt;

use tracing::debug;

use crate::auth::session::Session;

/// 客户端路由
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    SignIn,
    Dashboard,
    Unknown(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.trim();
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Landing,
            "/sign-in" => Route::SignIn,
            p if p.starts_with("/sign-in/") => Route::SignIn,
            "/dashboard" => Route::Dashboard,
            other => Route::Unknown(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Landing => "/",
            Route::SignIn => "/sign-in",
            Route::Dashboard => "/dashboard",
            Route::Unknown(path) => path,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// 可渲染的页面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    SignIn,
    Dashboard,
}

/// 路由解析后的访问决定
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Render(View),
    Redirect(Route),
    /// 条件不满足时什么也不渲染
    Blank,
}

/// 每次解析路由时检查一次登录状态，在渲染受保护页面之前给出结论
pub fn resolve(route: &Route, session: Option<&Session>) -> Access {
    let signed_in = session.is_some();
    let access = match route {
        Route::Landing => Access::Render(View::Landing),
        Route::SignIn if signed_in => Access::Blank,
        Route::SignIn => Access::Render(View::SignIn),
        Route::Dashboard if signed_in => Access::Render(View::Dashboard),
        Route::Dashboard => Access::Blank,
        Route::Unknown(_) => Access::Redirect(Route::Landing),
    };
    debug!(route = %route, signed_in, ?access, "Route resolved");
    access
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parse() {
        assert_eq!(Route::parse("/"), Route::Landing);
        assert_eq!(Route::parse(""), Route::Landing);
        assert_eq!(Route::parse("/sign-in"), Route::SignIn);
        assert_eq!(Route::parse("/sign-in/factor-one"), Route::SignIn);
        assert_eq!(Route::parse("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::parse("/dashboard?tab=1"), Route::Dashboard);
        assert_eq!(Route::parse("/settings"), Route::Unknown("/settings".into()));
    }

    #[test]
    fn test_signed_in_access() {
        let session = Session::new("user_1", None);
        let session = Some(&session);
        assert_eq!(resolve(&Route::Landing, session), Access::Render(View::Landing));
        assert_eq!(resolve(&Route::SignIn, session), Access::Blank);
        assert_eq!(resolve(&Route::Dashboard, session), Access::Render(View::Dashboard));
    }

    #[test]
    fn test_signed_out_access() {
        assert_eq!(resolve(&Route::Landing, None), Access::Render(View::Landing));
        assert_eq!(resolve(&Route::SignIn, None), Access::Render(View::SignIn));
        assert_eq!(resolve(&Route::Dashboard, None), Access::Blank);
    }

    #[test]
    fn test_unknown_route_redirects_home() {
        assert_eq!(
            resolve(&Route::parse("/nope"), None),
            Access::Redirect(Route::Landing)
        );
    }
}
