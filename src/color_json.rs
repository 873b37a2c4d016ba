//! Purpose: ANSI painting for CLI output: pretty JSON documents and short labels.
//! Exports: `Painter`, `Style`.
//! Role: Small, pure formatter used by the render and error emission paths.
//! Invariants: With painting disabled, `json_pretty` equals `serde_json::to_string_pretty`.
//! Invariants: ANSI escapes appear only when painting is enabled.
use serde_json::{Map, Value};

const INDENT: &str = "  ";

// 8/16-color palette only; bright variants lose contrast on some themes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Style {
    Key,
    Text,
    Number,
    Literal,
    Punct,
    Error,
    Warn,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Key => "36",
            Style::Text => "32",
            Style::Number => "33",
            Style::Literal => "35",
            Style::Punct => "39",
            Style::Error => "31",
            Style::Warn => "33",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Painter {
    enabled: bool,
}

impl Painter {
    pub(crate) fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub(crate) fn paint(&self, text: &str, style: Style) -> String {
        let mut out = String::with_capacity(text.len() + 9);
        self.push(text, style, &mut out);
        out
    }

    pub(crate) fn json_pretty(&self, value: &Value) -> String {
        let mut out = String::new();
        self.value(value, 0, &mut out);
        out
    }

    fn value(&self, value: &Value, depth: usize, out: &mut String) {
        match value {
            Value::Null => self.push("null", Style::Punct, out),
            Value::Bool(flag) => self.push(if *flag { "true" } else { "false" }, Style::Literal, out),
            Value::Number(num) => self.push(&num.to_string(), Style::Number, out),
            Value::String(text) => self.push(&quoted(text), Style::Text, out),
            Value::Array(items) => self.array(items, depth, out),
            Value::Object(map) => self.object(map, depth, out),
        }
    }

    fn array(&self, items: &[Value], depth: usize, out: &mut String) {
        if items.is_empty() {
            self.push("[]", Style::Punct, out);
            return;
        }
        self.push("[", Style::Punct, out);
        for (idx, item) in items.iter().enumerate() {
            if idx > 0 {
                self.push(",", Style::Punct, out);
            }
            newline(depth + 1, out);
            self.value(item, depth + 1, out);
        }
        newline(depth, out);
        self.push("]", Style::Punct, out);
    }

    fn object(&self, map: &Map<String, Value>, depth: usize, out: &mut String) {
        if map.is_empty() {
            self.push("{}", Style::Punct, out);
            return;
        }
        self.push("{", Style::Punct, out);
        for (idx, (key, item)) in map.iter().enumerate() {
            if idx > 0 {
                self.push(",", Style::Punct, out);
            }
            newline(depth + 1, out);
            self.push(&quoted(key), Style::Key, out);
            self.push(":", Style::Punct, out);
            out.push(' ');
            self.value(item, depth + 1, out);
        }
        newline(depth, out);
        self.push("}", Style::Punct, out);
    }

    fn push(&self, text: &str, style: Style, out: &mut String) {
        if !self.enabled {
            out.push_str(text);
            return;
        }
        out.push_str("\u{1b}[");
        out.push_str(style.code());
        out.push('m');
        out.push_str(text);
        out.push_str("\u{1b}[0m");
    }
}

fn quoted(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string())
}

fn newline(depth: usize, out: &mut String) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

#[cfg(test)]
mod tests {
    use super::{Painter, Style};
    use serde_json::json;

    #[test]
    fn plain_output_matches_serde_pretty() {
        let value = json!({
            "count": 2,
            "records": [{"id": 1, "email": "a@x.com", "vip": true, "note": null}],
            "empty": [],
            "meta": {}
        });
        let plain = Painter::new(false).json_pretty(&value);
        let pretty = serde_json::to_string_pretty(&value).expect("pretty");
        assert_eq!(plain, pretty);
    }

    #[test]
    fn enabled_painter_wraps_tokens_in_ansi() {
        let painter = Painter::new(true);
        let colored = painter.json_pretty(&json!({"k":"v","n":1,"b":true,"z":null}));
        assert!(colored.contains("\u{1b}[36m\"k\"\u{1b}[0m"));
        assert!(colored.contains("\u{1b}[32m\"v\"\u{1b}[0m"));
        assert!(colored.contains("\u{1b}[33m1\u{1b}[0m"));
        assert!(colored.contains("\u{1b}[35mtrue\u{1b}[0m"));
        assert!(colored.contains("\u{1b}[39mnull\u{1b}[0m"));
        assert_eq!(painter.paint("error:", Style::Error), "\u{1b}[31merror:\u{1b}[0m");
    }

    #[test]
    fn disabled_painter_returns_text_unchanged() {
        assert_eq!(Painter::new(false).paint("hint:", Style::Warn), "hint:");
    }
}
