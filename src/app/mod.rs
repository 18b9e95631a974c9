pub mod mount;
pub mod pages;

use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    auth::{Access, Route, Session, View, resolve},
    client::{HttpTaskApi, TaskApi},
    dashboard::{Dashboard, DashboardState},
    error::{Result, dashboard_error::DashboardError},
    settings::{AppConfig, Palette, PreferenceStore, ThemeState},
};

pub use mount::MountTarget;

/// 应用入口：持有配置、会话、主题状态和输出位置
pub struct App {
    config: AppConfig,
    session: Option<Session>,
    theme: ThemeState,
    store: Arc<dyn PreferenceStore>,
    mount: MountTarget,
}

impl App {
    /// 启动应用，缺少认证配置或输出位置不存在时中止
    pub fn start(config: AppConfig, store: Arc<dyn PreferenceStore>, mount: MountTarget) -> Result<Self> {
        config.validate()?;
        mount.check()?;

        let theme = ThemeState::init(store.as_ref())?;
        let session = Session::from_config(&config);
        info!(
            api_url = %config.api_url,
            signed_in = session.is_some(),
            dark_mode = theme.is_dark(),
            "Application started"
        );

        Ok(Self {
            config,
            session,
            theme,
            store,
            mount,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    pub fn palette(&self) -> Palette {
        if self.config.color {
            Palette::for_theme(self.theme.theme())
        } else {
            Palette::plain()
        }
    }

    pub fn toggle_theme(&mut self) -> Result<bool> {
        self.theme.toggle(self.store.as_ref())
    }

    pub fn resolve(&self, path: &str) -> Access {
        resolve(&Route::parse(path), self.session.as_ref())
    }

    /// 使用默认的 HTTP 客户端创建仪表盘
    pub fn dashboard(&self) -> Result<Dashboard<HttpTaskApi>> {
        let api = Arc::new(HttpTaskApi::new(&self.config)?);
        self.dashboard_with(api)
    }

    /// 仪表盘是受保护页面，必须先通过路由检查
    pub fn dashboard_with<A: TaskApi>(&self, api: Arc<A>) -> Result<Dashboard<A>> {
        match (self.resolve(Route::Dashboard.path()), &self.session) {
            (Access::Render(View::Dashboard), Some(session)) => Ok(Dashboard::new(api, session.clone())),
            _ => Err(DashboardError::AccessDenied("sign in to use the dashboard".into()).into()),
        }
    }

    /// 渲染指定路径的页面，重定向最多跟随一次
    pub async fn open(&self, path: &str) -> Result<String> {
        let access = match self.resolve(path) {
            Access::Redirect(route) => {
                info!(from = path, to = %route, "Redirecting");
                self.resolve(route.path())
            }
            access => access,
        };

        let palette = self.palette();
        let body = match access {
            Access::Render(View::Landing) => pages::landing(&palette),
            Access::Render(View::SignIn) => pages::sign_in(&palette),
            Access::Render(View::Dashboard) => {
                let dashboard = self.dashboard()?;
                if let Err(e) = dashboard.refresh_history().await {
                    warn!(error = %e, "Opening dashboard without history");
                }
                pages::dashboard(&dashboard.snapshot().await, &palette)
            }
            Access::Redirect(_) | Access::Blank => return Ok(String::new()),
        };
        Ok(self.page(&body))
    }

    pub fn render_dashboard(&self, state: &DashboardState) -> String {
        self.page(&pages::dashboard(state, &self.palette()))
    }

    fn page(&self, body: &str) -> String {
        let palette = self.palette();
        format!("{}{}", pages::navbar(&self.theme, self.session.as_ref(), &palette), body)
    }

    /// 把内容写到输出位置
    pub fn present(&self, content: &str) -> Result<()> {
        self.mount.write(content)
    }
}
