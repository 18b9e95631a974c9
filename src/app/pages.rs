use std::fmt::Write;

use crate::{
    auth::Session,
    chart::{performance_series, render_chart},
    dashboard::DashboardState,
    settings::{Palette, ThemeState},
    visualization::{render, text},
};

pub const APP_TITLE: &str = "AI Agent Workshop";

/// 首页的功能卡片
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🤖",
        title: "Create Custom AI Agents",
        description: "Build AI agents tailored to your specific needs and tasks.",
    },
    Feature {
        icon: "🧠",
        title: "Advanced Training",
        description: "Train your agents using state-of-the-art machine learning models.",
    },
    Feature {
        icon: "🚀",
        title: "Easy Deployment",
        description: "Deploy your agents seamlessly to solve real-world problems.",
    },
    Feature {
        icon: "📊",
        title: "Performance Monitoring",
        description: "Track and improve your agents' performance over time.",
    },
];

/// 顶部导航栏，显示主题和登录状态
pub fn navbar(theme: &ThemeState, session: Option<&Session>, palette: &Palette) -> String {
    let mode = if theme.is_dark() { "☀ light mode" } else { "☾ dark mode" };
    let account = match session {
        Some(session) => format!("signed in as {}", session.user_id),
        None => "Sign Up / Log In".to_string(),
    };
    format!(
        "{}  [{}]  [{}]\n\n",
        palette.paint(palette.heading, APP_TITLE),
        mode,
        account
    )
}

pub fn landing(palette: &Palette) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        palette.paint(palette.accent, "Welcome to AI Agent Workshop")
    );
    let _ = writeln!(
        out,
        "Build, train, and deploy your own AI agents with our cutting-edge platform.\n"
    );
    for feature in &FEATURES {
        let _ = writeln!(out, "{} {}", feature.icon, palette.paint(palette.heading, feature.title));
        let _ = writeln!(out, "   {}", feature.description);
    }
    out
}

pub fn sign_in(palette: &Palette) -> String {
    format!(
        "{}\nSign-in is handled by the authentication provider. \
         Set WORKSHOP_USER_ID (and WORKSHOP_TOKEN) to continue.\n",
        palette.paint(palette.heading, "Sign In")
    )
}

/// 仪表盘页面：提示、表单、可视化、原始结果、历史图表
pub fn dashboard(state: &DashboardState, palette: &Palette) -> String {
    let mut out = String::new();

    if let Some(banner) = &state.banner {
        let _ = writeln!(out, "{}\n", palette.paint(palette.failed, &format!("! {}", banner)));
    }

    if !state.task.is_empty() {
        let _ = writeln!(out, "Task: {}", state.task);
        let _ = writeln!(out, "Context (JSON): {}", state.context.trim());
        let _ = writeln!(out, "[ {} ]\n", state.submit_label());
    }

    match render(state.result.as_ref()) {
        Ok(Some(view)) => {
            out.push_str(&text::render_view(&view, &state.sections, palette));
            if let Some(result) = &state.result
                && let Ok(raw) = text::render_raw(result, palette)
            {
                out.push_str(&raw);
                out.push('\n');
            }
        }
        Ok(None) => {}
        Err(e) => {
            let _ = writeln!(
                out,
                "{}\n",
                palette.paint(palette.failed, &format!("! Result could not be displayed: {}", e))
            );
        }
    }

    out.push_str(&render_chart(&performance_series(&state.history), palette));
    out
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::dashboard::HISTORY_FETCH_FAILED;

    #[test]
    fn test_empty_dashboard_has_only_chart() {
        let state = DashboardState::default();
        let page = dashboard(&state, &Palette::plain());
        assert!(!page.contains("Decision Process Visualization"));
        assert!(page.contains("Performance Over Time"));
    }

    #[test]
    fn test_dashboard_with_result_and_banner() {
        let mut state = DashboardState {
            task: "summarize".into(),
            context: "{}".into(),
            result: Some(
                serde_json::from_value(json!({
                    "plan": [{"action": "Read", "description": "d"}],
                    "results": [{"result": "ok", "time_taken": 2}],
                    "evaluation": {"score": 90, "summary": "good", "lessons": ["l1"]}
                }))
                .unwrap(),
            ),
            ..DashboardState::default()
        };
        state.set_banner(HISTORY_FETCH_FAILED);

        let page = dashboard(&state, &Palette::plain());
        assert!(page.starts_with("! Failed to load task history."));
        assert!(page.contains("[ Run Task ]"));
        assert!(page.contains("Decision Process Visualization"));
        assert!(page.contains("Raw Result:"));
        assert!(page.contains("No task history yet."));
    }

    #[test]
    fn test_incomplete_result_is_reported() {
        let state = DashboardState {
            result: Some(serde_json::from_value(json!({"plan": []})).unwrap()),
            ..DashboardState::default()
        };
        let page = dashboard(&state, &Palette::plain());
        assert!(page.contains("! Result could not be displayed"));
        assert!(!page.contains("Planning Stage"));
    }

    #[test]
    fn test_landing_lists_features() {
        let page = landing(&Palette::plain());
        for feature in &FEATURES {
            assert!(page.contains(feature.title));
        }
    }
}
