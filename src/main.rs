use utmlink::app::AppState;
use utmlink::clipboard::spawn_clipboard_worker;
use utmlink::compose;
use utmlink::data_model::campaign::ComposeReport;
use utmlink::data_model::settings::AppSettings;
use utmlink::form::FormState;
use utmlink::logging;
use utmlink::settings::load_from_cli;
use utmlink::ui::run_ui;

fn main() -> std::io::Result<()> {
    let settings = load_from_cli()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string()))?;

    if let Err(err) = logging::init() {
        eprintln!("utmlink: logging disabled: {err}");
    }

    if settings.one_shot() {
        return run_one_shot(&settings);
    }

    let (outcome_tx, outcome_rx) = crossbeam_channel::unbounded();
    let clipboard = spawn_clipboard_worker(outcome_tx);
    let app = AppState::new(FormState::from_settings(&settings));

    run_ui(app, outcome_rx, clipboard)?;
    Ok(())
}

/// Compose straight from the flags: the URL (or a JSON report) goes to
/// stdout; field-scoped validation errors go to stderr with exit code 2.
fn run_one_shot(settings: &AppSettings) -> std::io::Result<()> {
    let form = FormState::from_settings(settings);

    let submission = match form.validate() {
        Ok(submission) => submission,
        Err(errors) => {
            for (field, error) in &errors {
                eprintln!("utmlink: {}", error.message(*field));
            }
            std::process::exit(2);
        }
    };

    let url = match compose::compose(&submission.website_url, &submission.params) {
        Ok(url) => url,
        Err(err) => {
            eprintln!("utmlink: {err}");
            std::process::exit(2);
        }
    };

    if settings.json {
        let report = ComposeReport {
            url: &url,
            params: &submission.params,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{url}");
    }
    Ok(())
}
