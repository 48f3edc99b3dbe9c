use clap::App;
use clap::Arg;
use clap::ArgMatches;

pub fn init() -> ArgMatches<'static> {
    app().get_matches()
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn app() -> App<'static, 'static> {
    App::new("Document Workspace")
        .version(VERSION)
        .name("tabstrip")
        .author("Austin Jones <implAustin@gmail.com>")
        .about("`tabstrip`, a workspace of document tabs with back/forward navigation.")
        .after_help(AFTER_HELP)
        .arg(
            Arg::with_name("LOG")
                .long("log")
                .required(false)
                .takes_value(true)
                .possible_values(&["trace", "debug", "info", "warn", "error", "off"])
                .help("Sets the log level.  Logs are written to stderr."),
        )
        .arg(
            Arg::with_name("LOG-FILE")
                .long("log-file")
                .required(false)
                .takes_value(false)
                .help("Also writes logs to ~/.tabstrip/tabstrip.log"),
        )
        .arg(
            Arg::with_name("CONFIG")
                .long("config")
                .short("c")
                .required(false)
                .takes_value(true)
                .value_name("PATH")
                .help("Loads the workspace config from the given file, instead of ~/.tabstrip/tabstrip.yml"),
        )
        .arg(
            Arg::with_name("BASE-PATH")
                .long("base-path")
                .required(false)
                .takes_value(true)
                .value_name("PATH")
                .validator(validate_base_path)
                .help("Overrides the path portion of locations written to the navigation stack"),
        )
}

const AFTER_HELP: &str = "Commands are read from stdin, one per line:
    open <id> <component> <url> [title...]
    close <id>
    activate <id>
    close-all
    clear-closed
    reopen [id]
    set <id> <key> <value>
    purge <id>
    back
    forward
    list
    closed
    quit";

fn validate_base_path(path: String) -> Result<(), String> {
    if path.is_empty() {
        return Err("the base path cannot be empty".to_string());
    }

    if path.contains('#') {
        return Err("the base path cannot contain a fragment".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{app, validate_base_path};

    #[test]
    fn parses_args() {
        let matches = app()
            .get_matches_from_safe(vec!["tabstrip", "--log", "debug", "--base-path", "/app"])
            .expect("valid args");

        assert_eq!(Some("debug"), matches.value_of("LOG"));
        assert_eq!(Some("/app"), matches.value_of("BASE-PATH"));
        assert!(!matches.is_present("CONFIG"));
    }

    #[test]
    fn rejects_unknown_level() {
        let result = app().get_matches_from_safe(vec!["tabstrip", "--log", "loud"]);
        assert!(result.is_err());
    }

    #[test]
    fn base_path_validation() {
        assert!(validate_base_path("/app".into()).is_ok());
        assert!(validate_base_path("".into()).is_err());
        assert!(validate_base_path("/app#tab=a".into()).is_err());
    }
}
