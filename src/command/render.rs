//! Print the indicator as an HTML fragment or JSON.

use anyhow::Result;
use serde::Serialize;

use crate::config::Config;
use crate::indicator::RunningIndicator;
use crate::skin::{Rendered, Skin};
use crate::theme::Theme;

#[derive(Serialize)]
struct RenderOutput<'a> {
    skin: Skin,
    class: &'a str,
    html: String,
    css: &'a str,
}

pub struct RenderArgs {
    pub skin: Option<Skin>,
    pub faded_color: Option<String>,
    pub primary_color: Option<String>,
    pub json: bool,
}

pub fn run(config: &Config, args: RenderArgs) -> Result<()> {
    let skin = config.resolve_skin(args.skin)?;
    let theme = config.theme.clone().merge(Theme {
        faded_text_60: args.faded_color,
        primary: args.primary_color,
    });

    let rendered = RunningIndicator::new(skin, &theme).render();
    println!("{}", format_output(skin, &rendered, args.json)?);
    Ok(())
}

fn format_output(skin: Skin, rendered: &Rendered, json: bool) -> Result<String> {
    if !json {
        return Ok(rendered.to_html());
    }
    let output = RenderOutput {
        skin,
        class: rendered.class(),
        html: rendered.markup_html().to_string(),
        css: &rendered.style.css,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}
