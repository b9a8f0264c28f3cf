//! Agency Deck - a terminal tour of a digital-services studio
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;

use agdeck_app::EngineOptions;
use agdeck_core::prelude::*;
use agdeck_core::{ThemePreference, ViewState};

/// Agency Deck - browse the studio, talk to AG-Bot
#[derive(Parser, Debug)]
#[command(name = "agdeck", version)]
#[command(about = "A terminal tour of a digital-services studio", long_about = None)]
struct Args {
    /// View to open: home, about, contact or portfolio
    #[arg(long, value_parser = parse_view)]
    view: Option<ViewState>,

    /// Home section to scroll to (hero, services, portfolio, process, testimonials, contact)
    #[arg(long, value_name = "ANCHOR")]
    section: Option<String>,

    /// Open a service detail page by id (web, design, video)
    #[arg(long, value_name = "ID")]
    service: Option<String>,

    /// Theme preference for this session; saved like any other change
    #[arg(long, value_parser = parse_theme)]
    theme: Option<ThemePreference>,

    /// Never show the AG-Bot companion
    #[arg(long)]
    no_assistant: bool,
}

fn parse_view(s: &str) -> std::result::Result<ViewState, String> {
    ViewState::parse(s).ok_or_else(|| format!("unknown view '{s}'"))
}

fn parse_theme(s: &str) -> std::result::Result<ThemePreference, String> {
    ThemePreference::parse(s).ok_or_else(|| format!("expected light, dark or system, got '{s}'"))
}

impl Args {
    fn into_options(self) -> EngineOptions {
        EngineOptions {
            initial_view: self.view,
            section: self.section,
            service: self.service,
            theme: self.theme,
            no_assistant: self.no_assistant,
            ..EngineOptions::load()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    agdeck_core::logging::init().context("initializing logging")?;
    debug!("Arguments: {:?}", args);

    let result = agdeck_tui::run(args.into_options()).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    info!("Agency Deck exiting");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_all_flags() {
        let args = Args::try_parse_from([
            "agdeck",
            "--view",
            "about",
            "--section",
            "process",
            "--service",
            "web",
            "--theme",
            "system",
            "--no-assistant",
        ])
        .unwrap();

        assert_eq!(args.view, Some(ViewState::About));
        assert_eq!(args.section.as_deref(), Some("process"));
        assert_eq!(args.service.as_deref(), Some("web"));
        assert_eq!(args.theme, Some(ThemePreference::System));
        assert!(args.no_assistant);
    }

    #[test]
    fn test_args_default_to_nothing() {
        let args = Args::try_parse_from(["agdeck"]).unwrap();
        assert_eq!(args.view, None);
        assert_eq!(args.theme, None);
        assert!(!args.no_assistant);
    }

    #[test]
    fn test_args_reject_unknown_values() {
        assert!(Args::try_parse_from(["agdeck", "--theme", "sepia"]).is_err());
        assert!(Args::try_parse_from(["agdeck", "--view", "blog"]).is_err());
    }
}
