//! The `index.theme` manifest that makes a bundle selectable.
//!
//! The manifest is a desktop-entry file naming the theme for the desktop's
//! appearance settings, with one section for the metatheme and one for GTK4
//! consumers, rendered from a MiniJinja template.

use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::RenderError;

/// File name of the manifest inside a bundle.
pub const MANIFEST_FILE: &str = "index.theme";

const TEMPLATE_NAME: &str = "index.theme";

const TEMPLATE: &str = "\
[Desktop Entry]
Type=X-GNOME-Metatheme
Name={{ title }}
Comment=CDE Motif theme with {{ name }} palette
Encoding=UTF-8

[X-GNOME-Metatheme]
GtkTheme={{ title }}
ButtonLayout={{ button_layout }}

[X-GNOME-Metatheme-GTK4]
GtkTheme={{ title }}
ButtonLayout={{ button_layout }}
";

const BUTTON_LAYOUT: &str = "close,minimize,maximize:menu";

static ENV: Lazy<Result<Environment<'static>, minijinja::Error>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template(TEMPLATE_NAME, TEMPLATE)?;
    Ok(env)
});

#[derive(Debug, Serialize)]
struct ManifestContext<'a> {
    name: &'a str,
    title: String,
    button_layout: &'a str,
}

/// Display title of the theme for a palette, `CDE - <name>`.
pub fn theme_title(palette_name: &str) -> String {
    format!("CDE - {palette_name}")
}

/// Renders the manifest for the bundle of the named palette.
pub fn render(palette_name: &str) -> Result<String, RenderError> {
    let env = ENV
        .as_ref()
        .map_err(|err| RenderError::TemplateError(err.to_string()))?;
    let template = env.get_template(TEMPLATE_NAME)?;
    let output = template.render(ManifestContext {
        name: palette_name,
        title: theme_title(palette_name),
        button_layout: BUTTON_LAYOUT,
    })?;
    Ok(output)
}
