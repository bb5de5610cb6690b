// ============================================================================
// Pathfinder API - Views
// File: crates/pathfinder-api/src/views.rs
// Description: Handlebars page rendering
// ============================================================================

use axum::response::Html;
use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;
use serde_json::Value;

use pathfinder_core::AuthUser;
use pathfinder_shared::AppConfig;

const TEMPLATES: &[(&str, &str)] = &[
    ("header", include_str!("../templates/header.hbs")),
    ("footer", include_str!("../templates/footer.hbs")),
    ("menu_list", include_str!("../templates/menu_list.hbs")),
    ("index", include_str!("../templates/index.hbs")),
    ("submenu", include_str!("../templates/submenu.hbs")),
    ("login", include_str!("../templates/login.hbs")),
    ("register", include_str!("../templates/register.hbs")),
    ("account-settings", include_str!("../templates/account-settings.hbs")),
    ("change-password", include_str!("../templates/change-password.hbs")),
    ("error", include_str!("../templates/error.hbs")),
];

#[derive(Debug, Serialize)]
struct Branding<'a> {
    title: &'a str,
    subtitle: &'a str,
}

/// Fields every page receives, plus the page's own `data`.
#[derive(Debug, Serialize)]
struct PageContext<'a> {
    branding: Branding<'a>,
    user: Option<&'a AuthUser>,
    auth_enabled: bool,
    auth_server_url: &'a str,
    admin_panel_url: Option<&'a str>,
    #[serde(flatten)]
    data: Value,
}

pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        for (name, source) in TEMPLATES {
            registry.register_template_string(name, *source)?;
        }
        Ok(Self { registry })
    }

    /// Renders `template` with the common page context. `data` must
    /// serialize to a JSON object; its keys are merged into the context.
    pub fn render(
        &self,
        template: &str,
        config: &AppConfig,
        user: Option<&AuthUser>,
        data: Value,
    ) -> Result<Html<String>, RenderError> {
        let context = PageContext {
            branding: Branding {
                title: config.branding.title(),
                subtitle: config.branding.subtitle(),
            },
            user,
            auth_enabled: config.auth.enabled,
            auth_server_url: &config.auth.auth_server_url,
            admin_panel_url: config.admin.panel_url.as_deref(),
            data,
        };
        self.registry.render(template, &context).map(Html)
    }
}
