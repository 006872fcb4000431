use std::collections::HashMap;

/// Trait for formatting different types of data
pub trait Formatter<T> {
    fn format(&self, input: T) -> String;
}

/// Serializes a map as `"key=value"` tokens, sorted by key and joined with `", "`
pub struct KeyValsFormatter;

impl Formatter<&HashMap<String, String>> for KeyValsFormatter {
    fn format(&self, input: &HashMap<String, String>) -> String {
        let mut keys: Vec<&String> = input.keys().collect();
        keys.sort();

        keys.into_iter()
            .map(|key| format!("\"{}={}\"", key, input[key]))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Prefixes every line with a fixed number of spaces and terminates it with `\n`
pub struct IndentFormatter {
    pub spaces: usize,
}

impl Formatter<&str> for IndentFormatter {
    fn format(&self, input: &str) -> String {
        let indent = " ".repeat(self.spaces);
        let mut out = String::with_capacity(input.len() + indent.len());

        for line in input.lines() {
            out.push_str(&indent);
            out.push_str(line);
            out.push('\n');
        }

        out
    }
}

/// Wraps text in the `',` ... `,'` delimiters the template renderer treats as verbatim
pub struct VerbatimFormatter;

impl Formatter<&str> for VerbatimFormatter {
    fn format(&self, input: &str) -> String {
        format!("',{},'", input)
    }
}

pub fn ordered_escaped_key_vals(config: &HashMap<String, String>) -> String {
    KeyValsFormatter.format(config)
}

/// Empty input yields an empty string; anything else gains a trailing newline.
pub fn indent_string(original: &str, spaces: usize) -> String {
    IndentFormatter { spaces }.format(original)
}

pub fn wrap_as_verbatim(s: &str) -> String {
    VerbatimFormatter.format(s)
}
