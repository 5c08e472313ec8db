use std::path::PathBuf;

use json::JsonValue;

use crate::theme;

// theme preference, persisted as a tiny json object so it survives restarts
// anything malformed in the file is treated the same as the file not existing

const PREFS_FILE: &str = "prefs.json";
const THEME_KEY: &str = "theme";

fn prefs_path() -> Option<PathBuf> {
    let config_dir = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(std::env::var_os("HOME")?).join(".config"),
    };
    Some(config_dir.join("gatelab").join(PREFS_FILE))
}

pub(crate) fn load_theme() -> Option<theme::Variant> {
    let source = std::fs::read_to_string(prefs_path()?).ok()?;
    parse_theme(&source)
}

fn parse_theme(source: &str) -> Option<theme::Variant> {
    let JsonValue::Object(prefs) = json::parse(source).ok()? else {
        return None;
    };
    theme::Variant::from_str(prefs.get(THEME_KEY)?.as_str()?)
}

pub(crate) fn store_theme(variant: theme::Variant) -> Result<(), Box<dyn std::error::Error>> {
    let path = prefs_path().ok_or("no home directory to store preferences under")?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let mut prefs = JsonValue::new_object();
    prefs[THEME_KEY] = variant.as_str().into();
    std::fs::write(path, prefs.dump())?;
    Ok(())
}

// with no stored preference the original tool followed the operating system's color scheme
// the closest portable-enough equivalent here is asking gsettings; when that is unavailable, default to light
pub(crate) fn system_prefers_dark() -> bool {
    match std::process::Command::new("gsettings").args(["get", "org.gnome.desktop.interface", "color-scheme"]).output() {
        Ok(output) => String::from_utf8_lossy(&output.stdout).contains("dark"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod test {
    use super::parse_theme;
    use crate::theme::Variant;

    #[test]
    fn parses_stored_variants() {
        assert_eq!(parse_theme(r#"{"theme":"dark"}"#), Some(Variant::Dark));
        assert_eq!(parse_theme(r#"{"theme":"light"}"#), Some(Variant::Light));
    }

    #[test]
    fn malformed_prefs_are_ignored() {
        assert_eq!(parse_theme(""), None);
        assert_eq!(parse_theme("[]"), None);
        assert_eq!(parse_theme(r#"{"theme":"blue"}"#), None);
        assert_eq!(parse_theme(r#"{"theme":3}"#), None);
        assert_eq!(parse_theme(r#"{"other":"dark"}"#), None);
    }
}
