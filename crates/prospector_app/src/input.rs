use prospector_core::{GeographyMode, Msg};

/// What the app loop should do with one line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Dispatch(Msg),
    Help,
    Quit,
    Unknown(String),
}

pub const HELP_TEXT: &str = "\
Commands:
  keywords <a, b, ...>   set search keywords (comma separated)
  state <XX>             set two-letter state code
  mode <state|city>      choose state-wide or per-city search
  cities <a, b, ...>     set cities (city mode only)
  min <n>                set minimum results target (default 500)
  submit                 start the search
  csv                    download the CSV for a completed search
  dismiss                dismiss the submission-error banner
  help                   show this help
  quit                   exit";

/// Parses one trimmed input line into an action. The first word selects the
/// command; the rest is the argument verbatim.
pub fn parse(line: &str) -> Action {
    let line = line.trim();
    if line.is_empty() {
        return Action::Dispatch(Msg::NoOp);
    }
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "keywords" => Action::Dispatch(Msg::KeywordsChanged(rest.to_string())),
        "state" => Action::Dispatch(Msg::StateSelected(rest.to_string())),
        "mode" => match rest {
            "state" => Action::Dispatch(Msg::GeographyModeChanged(GeographyMode::State)),
            "city" => Action::Dispatch(Msg::GeographyModeChanged(GeographyMode::City)),
            other => Action::Unknown(format!("unknown mode '{other}', expected state or city")),
        },
        "cities" => Action::Dispatch(Msg::CitiesChanged(rest.to_string())),
        "min" => Action::Dispatch(Msg::MinResultsChanged(rest.to_string())),
        "submit" => Action::Dispatch(Msg::SubmitClicked),
        "csv" => Action::Dispatch(Msg::DownloadCsvClicked),
        "dismiss" => Action::Dispatch(Msg::ErrorDismissed),
        "help" => Action::Help,
        "quit" | "exit" => Action::Quit,
        other => Action::Unknown(format!("unknown command '{other}', try 'help'")),
    }
}
