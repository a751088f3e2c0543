use once_cell::sync::Lazy;
use regex::Regex;

/// SGR color/style sequences dev servers sprinkle through their banners
static ANSI_SGR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").unwrap());

static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());

/// Strip terminal escape sequences from a line of child output.
pub fn strip_ansi(line: &str) -> String {
    ANSI_SGR.replace_all(line, "").into_owned()
}

/// Look for the served URL in one line of dev server output.
///
/// A `Local:` line yields the URL printed on it. Any other line mentioning
/// `localhost` over http means the server is up at `default_url`.
pub fn scan_line(line: &str, default_url: &str) -> Option<String> {
    let line = strip_ansi(line);

    if line.contains("Local:") && line.contains("http") {
        if let Some(found) = URL.find(&line) {
            return Some(found.as_str().to_string());
        }
    }

    if line.to_lowercase().contains("localhost") && line.contains("http") {
        return Some(default_url.to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "http://localhost:5173";

    #[test]
    fn picks_up_vite_local_line() {
        let line = "  ➜  Local:   http://localhost:5174/";
        assert_eq!(scan_line(line, DEFAULT), Some("http://localhost:5174/".to_string()));
    }

    #[test]
    fn strips_colors_before_matching() {
        let line = "  \x1b[32m➜\x1b[39m  \x1b[1mLocal\x1b[22m:   \x1b[36mhttp://localhost:\x1b[1m5173\x1b[22m/\x1b[39m";
        assert_eq!(scan_line(line, DEFAULT), Some("http://localhost:5173/".to_string()));
    }

    #[test]
    fn network_line_is_not_a_local_url() {
        let line = "  ➜  Network: http://192.168.1.20:5173/";
        assert_eq!(scan_line(line, DEFAULT), None);
    }

    #[test]
    fn other_localhost_mentions_use_default() {
        let line = "Server ready at HTTP://LOCALHOST";
        assert_eq!(scan_line(line, DEFAULT), None);

        let line = "Listening on http://LocalHost:3000";
        assert_eq!(scan_line(line, DEFAULT), Some(DEFAULT.to_string()));
    }

    #[test]
    fn unrelated_lines_are_ignored() {
        assert_eq!(scan_line("VITE v5.0.0  ready in 312 ms", DEFAULT), None);
        assert_eq!(scan_line("", DEFAULT), None);
    }
}
