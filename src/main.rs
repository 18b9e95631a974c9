use std::{path::PathBuf, sync::Arc};

use agent_workshop::{
    app::{App, MountTarget},
    error::Result,
    settings::{AppConfig, FilePreferenceStore},
    visualization::{SectionState, StageKind},
};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{Map, Value};
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "workshop", about = "AI Agent Workshop terminal dashboard")]
struct Cli {
    /// Agent backend base URL
    #[arg(long, env = "WORKSHOP_API_URL", default_value = "http://localhost:8000")]
    api_url: String,

    /// Authentication provider publishable key (required)
    #[arg(long, env = "WORKSHOP_PUBLISHABLE_KEY")]
    publishable_key: Option<String>,

    /// Signed-in user id; omit to browse signed out
    #[arg(long, env = "WORKSHOP_USER_ID")]
    user_id: Option<String>,

    /// Bearer token sent with task submissions
    #[arg(long, env = "WORKSHOP_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Preference file (dark mode flag)
    #[arg(long, env = "WORKSHOP_PREFERENCES")]
    preferences: Option<PathBuf>,

    /// Write rendered output to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 300)]
    timeout: u64,

    #[arg(long, env = "WORKSHOP_LOG", default_value = "info")]
    log_level: String,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit a task and show the decision process
    Run {
        #[arg(long)]
        task: String,

        /// Context as JSON text
        #[arg(long, default_value = "{}")]
        context: String,

        /// Backend provider, merged into the context as "api"
        #[arg(long, value_enum)]
        api: Option<Provider>,

        /// Model name, merged into the context as "model"
        #[arg(long)]
        model: Option<String>,

        /// Expand a stage (repeatable); planning is expanded by default
        #[arg(long, value_enum)]
        expand: Vec<StageArg>,

        #[arg(long)]
        expand_all: bool,
    },
    /// Show task history and the performance chart
    History,
    /// Render a page by route, e.g. "/" or "/dashboard"
    Open {
        #[arg(default_value = "/")]
        path: String,
    },
    /// Show or toggle dark mode
    Theme {
        #[arg(long)]
        toggle: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Provider {
    Groq,
    #[value(name = "openai")]
    OpenAi,
    #[value(name = "openrouter")]
    OpenRouter,
}

impl Provider {
    fn as_str(&self) -> &'static str {
        match self {
            Provider::Groq => "groq",
            Provider::OpenAi => "openai",
            Provider::OpenRouter => "openrouter",
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum StageArg {
    Planning,
    Execution,
    Evaluation,
}

impl From<StageArg> for StageKind {
    fn from(arg: StageArg) -> Self {
        match arg {
            StageArg::Planning => StageKind::Planning,
            StageArg::Execution => StageKind::Execution,
            StageArg::Evaluation => StageKind::Evaluation,
        }
    }
}

impl Cli {
    fn config(&self) -> AppConfig {
        AppConfig {
            api_url: self.api_url.clone(),
            publishable_key: self.publishable_key.clone(),
            user_id: self.user_id.clone(),
            token: self.token.clone(),
            preferences_path: self.preferences.clone(),
            request_timeout_secs: self.timeout,
            log_level: self.log_level.clone(),
            color: !self.no_color,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .with_writer(std::io::stderr)
        .init();

    let preferences = config
        .preferences_path
        .clone()
        .or_else(FilePreferenceStore::default_path)
        .unwrap_or_else(|| PathBuf::from(FilePreferenceStore::FILE_NAME));
    let store = Arc::new(FilePreferenceStore::new(preferences));
    let mount = cli.output.clone().map(MountTarget::File).unwrap_or_default();

    let mut app = App::start(config, store, mount)?;

    match cli.command {
        Command::Run {
            task,
            context,
            api,
            model,
            expand,
            expand_all,
        } => {
            let mut overrides = Map::new();
            if let Some(api) = api {
                overrides.insert("api".into(), Value::String(api.as_str().into()));
            }
            if let Some(model) = model {
                overrides.insert("model".into(), Value::String(model));
            }

            let dashboard = app.dashboard()?.with_overrides(overrides);
            let sections = if expand_all {
                SectionState::all_expanded()
            } else {
                SectionState::default()
            };
            for kind in StageKind::ALL {
                dashboard.set_section_expanded(kind, sections.is_expanded(kind)).await;
            }
            for stage in expand {
                dashboard.set_section_expanded(stage.into(), true).await;
            }

            // 与页面打开时一样先拉取一次历史
            if let Err(e) = dashboard.refresh_history().await {
                debug!(error = %e, "Initial history load failed");
            }
            dashboard.set_form(task, context).await;
            let outcome = dashboard.submit().await;

            app.present(&app.render_dashboard(&dashboard.snapshot().await))?;
            if let Err(e) = outcome {
                error!(error = %e, "Task submission failed");
                return Err(e);
            }
        }
        Command::History => {
            let dashboard = app.dashboard()?;
            let outcome = dashboard.refresh_history().await;
            app.present(&app.render_dashboard(&dashboard.snapshot().await))?;
            outcome?;
        }
        Command::Open { path } => {
            let page = app.open(&path).await?;
            app.present(&page)?;
        }
        Command::Theme { toggle } => {
            if toggle {
                app.toggle_theme()?;
            }
            let mode = if app.theme().is_dark() { "dark" } else { "light" };
            app.present(&format!("Theme: {}\n", mode))?;
        }
    }

    Ok(())
}
