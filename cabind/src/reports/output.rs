//! Where reports are rendered.

/// Semantic sink for report lines.
///
/// Reports say what a line is; the implementation picks its look and stream.
pub trait Output {
    fn title(&mut self, text: &str);

    fn section(&mut self, name: &str);

    fn key_value(&mut self, key: &str, value: &str);

    fn numbered_item(&mut self, index: usize, text: &str);

    fn list_item(&mut self, text: &str);

    /// A file that was written.
    fn added_item(&mut self, text: &str);

    /// Goes to stderr on a terminal.
    fn error(&mut self, msg: &str);

    fn warning(&mut self, msg: &str);

    /// Separates the files of a dry run.
    fn divider(&mut self, label: &str);

    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// Data gathered by an operation, renderable to any [`Output`].
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Plain text on stdout, errors and warnings on stderr.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn title(&mut self, text: &str) {
        println!("{}", text);
        println!("{}", "=".repeat(text.len()));
    }

    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn numbered_item(&mut self, index: usize, text: &str) {
        println!("  {}. {}", index, text);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("error: {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Collects rendered lines for report tests.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn title(&mut self, text: &str) {
        self.lines.push(format!("# {text}"));
    }

    fn section(&mut self, name: &str) {
        self.lines.push(format!("{name}:"));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.lines.push(format!("{key}: {value}"));
    }

    fn numbered_item(&mut self, index: usize, text: &str) {
        self.lines.push(format!("{index}. {text}"));
    }

    fn list_item(&mut self, text: &str) {
        self.lines.push(format!("- {text}"));
    }

    fn added_item(&mut self, text: &str) {
        self.lines.push(format!("+ {text}"));
    }

    fn error(&mut self, msg: &str) {
        self.lines.push(format!("error: {msg}"));
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push(format!("warning: {msg}"));
    }

    fn divider(&mut self, label: &str) {
        self.lines.push(format!("-- {label} --"));
    }

    fn preformatted(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn newline(&mut self) {
        self.lines.push(String::new());
    }
}
