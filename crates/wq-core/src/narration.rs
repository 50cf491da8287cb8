/// Lines of text produced by one world operation.
///
/// An operation may also ask the caller to follow up with a full status
/// render (after moving, or when the vault opens).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Narration {
    lines: Vec<String>,
    show_status: bool,
}

impl Narration {
    /// Create an empty narration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a narration holding a single line.
    pub fn line(text: impl Into<String>) -> Self {
        let mut narration = Self::new();
        narration.say(text);
        narration
    }

    /// Append a line.
    pub fn say(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// Ask the caller to render the full status after these lines.
    pub fn request_status(&mut self) {
        self.show_status = true;
    }

    /// Whether a status render was requested.
    pub fn wants_status(&self) -> bool {
        self.show_status
    }

    /// The narrated lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any line contains the given text.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Consume the narration, returning its lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
