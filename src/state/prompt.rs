/// Prompt composer state: the free-text input and the template picker

/// Canned prompts offered by the "AI Prompts" picker, in display order
pub const PROMPT_TEMPLATES: [&str; 2] = [
    "Generate testing instructions based on the screenshot to verify the login functionality of the app.",
    "Create detailed testing steps for the registration feature, including error handling based on the provided screenshots.",
];

#[derive(Debug, Default)]
pub struct PromptComposer {
    /// Current contents of the prompt input
    input: String,
    /// Whether the template picker dialog is showing
    picker_open: bool,
}

impl PromptComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    /// Bind text typed by the user
    pub fn edit(&mut self, text: String) {
        self.input = text;
    }

    pub fn open_picker(&mut self) {
        self.picker_open = true;
    }

    pub fn close_picker(&mut self) {
        self.picker_open = false;
    }

    /// Overwrite the input with a template and close the picker
    ///
    /// Anything typed but not yet submitted is discarded.
    pub fn insert_prompt(&mut self, text: &str) {
        self.input = text.to_string();
        self.close_picker();
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }

    pub fn templates(&self) -> &'static [&'static str] {
        &PROMPT_TEMPLATES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_and_closes_picker() {
        let mut composer = PromptComposer::new();
        composer.edit("half-typed thought".to_string());
        composer.open_picker();

        composer.insert_prompt(PROMPT_TEMPLATES[1]);

        assert_eq!(composer.input(), PROMPT_TEMPLATES[1]);
        assert!(!composer.is_picker_open());
    }

    #[test]
    fn test_closing_picker_keeps_input() {
        let mut composer = PromptComposer::new();
        composer.edit("keep me".to_string());
        composer.open_picker();

        composer.close_picker();

        assert_eq!(composer.input(), "keep me");
    }

    #[test]
    fn test_templates_keep_order() {
        let composer = PromptComposer::new();
        let templates = composer.templates();

        assert_eq!(templates.len(), 2);
        assert!(templates[0].contains("login"));
        assert!(templates[1].contains("registration"));
    }
}
