use super::runner::OutputMode;

pub fn parse_output_mode(s: &Option<String>) -> OutputMode {
    match s.as_ref().map(|x| x.to_lowercase()).as_deref() {
        Some("json") => OutputMode::Json,
        _ => OutputMode::Plain,
    }
}
