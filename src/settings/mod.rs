use crate::data_model::settings::AppSettings;
use clap::Parser;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "utmlink")]
#[command(about = "Generate clean, trackable campaign URLs", long_about = None)]
pub struct CliArgs {
    /// Destination URL; when given, compose and print without the TUI
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Campaign source (utm_source), e.g. google
    #[arg(long, value_name = "VALUE")]
    source: Option<String>,

    /// Campaign medium (utm_medium), e.g. cpc
    #[arg(long, value_name = "VALUE")]
    medium: Option<String>,

    /// Campaign name (utm_campaign), e.g. summer_sale
    #[arg(long, value_name = "VALUE")]
    campaign: Option<String>,

    /// Paid keyword (utm_term)
    #[arg(long, value_name = "VALUE")]
    term: Option<String>,

    /// Ad variant (utm_content)
    #[arg(long, value_name = "VALUE")]
    content: Option<String>,

    /// Print the one-shot result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("--json only applies to one-shot mode; pass --url as well")]
    JsonWithoutUrl,
}

pub fn load_from_cli() -> Result<AppSettings, SettingsError> {
    let args = CliArgs::parse();
    from_args(args)
}

pub fn from_args(args: CliArgs) -> Result<AppSettings, SettingsError> {
    if args.json && args.url.is_none() {
        return Err(SettingsError::JsonWithoutUrl);
    }

    Ok(AppSettings {
        url: args.url,
        source: args.source,
        medium: args.medium,
        campaign: args.campaign,
        term: args.term,
        content: args.content,
        json: args.json,
    })
}

#[cfg(test)]
mod tests {
    use super::{SettingsError, from_args};

    fn args(argv: &[&str]) -> super::CliArgs {
        use clap::Parser;
        super::CliArgs::try_parse_from(
            std::iter::once("utmlink").chain(argv.iter().copied()),
        )
        .expect("args should parse")
    }

    #[test]
    fn from_args_without_url_stays_interactive() {
        let settings = from_args(args(&["--source", "newsletter"])).expect("settings");
        assert!(!settings.one_shot());
        assert_eq!(settings.source.as_deref(), Some("newsletter"));
    }

    #[test]
    fn from_args_with_url_selects_one_shot() {
        let settings =
            from_args(args(&["--url", "example.com", "--source", "google"])).expect("settings");
        assert!(settings.one_shot());
        assert_eq!(settings.url.as_deref(), Some("example.com"));
    }

    #[test]
    fn from_args_rejects_json_without_url() {
        let err = from_args(args(&["--json"])).expect_err("should error");
        match err {
            SettingsError::JsonWithoutUrl => {}
        }
    }
}
