use site_health::config::ConfigWarning;

pub fn format_error(err: &anyhow::Error) -> String {
    format!("Error: {}\n", err)
}

pub fn print_error(err: &anyhow::Error) {
    eprint!("{}", format_error(err));
}

pub fn format_config_warning(warning: &ConfigWarning) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut message = format!("unknown config key '{}' in {}", warning.key, location);
    if let Some(suggestion) = &warning.suggestion {
        message.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    message
}
