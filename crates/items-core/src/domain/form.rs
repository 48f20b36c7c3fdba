//! Form State
//!
//! Transient drafts and validation flags. Never persisted.
//! Flags are raised only by `validate` and cleared only by an edit of the
//! same field; whitespace is not re-checked until the next validation.

use super::error::ValidationError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft_title: String,
    pub draft_description: String,
    pub title_invalid_visible: bool,
    pub description_invalid_visible: bool,
}

impl FormState {
    pub fn set_title(&mut self, val: impl Into<String>) {
        if self.title_invalid_visible {
            self.title_invalid_visible = false;
        }
        self.draft_title = val.into();
    }

    pub fn set_description(&mut self, val: impl Into<String>) {
        if self.description_invalid_visible {
            self.description_invalid_visible = false;
        }
        self.draft_description = val.into();
    }

    /// Check title, then description. Only the first failing field gets its flag.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        if self.draft_title.trim().is_empty() {
            self.title_invalid_visible = true;
            return Err(ValidationError::EmptyTitle);
        }
        if self.draft_description.trim().is_empty() {
            self.description_invalid_visible = true;
            return Err(ValidationError::EmptyDescription);
        }
        Ok(())
    }

    /// Hand out the untrimmed drafts and leave both inputs empty
    pub fn take_drafts(&mut self) -> (String, String) {
        (
            std::mem::take(&mut self.draft_title),
            std::mem::take(&mut self.draft_description),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_only_flags_title() {
        let mut form = FormState::default();
        form.set_description("   ");
        assert_eq!(form.validate(), Err(ValidationError::EmptyTitle));
        assert!(form.title_invalid_visible);
        assert!(!form.description_invalid_visible);
        assert_eq!(form.draft_description, "   ");
    }

    #[test]
    fn test_blank_description_flags_description() {
        let mut form = FormState::default();
        form.set_title("Milk");
        form.set_description("\t\n");
        assert_eq!(form.validate(), Err(ValidationError::EmptyDescription));
        assert!(!form.title_invalid_visible);
        assert!(form.description_invalid_visible);
    }

    #[test]
    fn test_edit_clears_flag_regardless_of_value() {
        let mut form = FormState::default();
        let _ = form.validate();
        assert!(form.title_invalid_visible);

        form.set_title("  ");
        assert!(!form.title_invalid_visible);
        assert_eq!(form.draft_title, "  ");
    }

    #[test]
    fn test_edit_does_not_touch_other_flag() {
        let mut form = FormState::default();
        form.set_title("Milk");
        let _ = form.validate();
        assert!(form.description_invalid_visible);

        form.set_title("Eggs");
        assert!(form.description_invalid_visible);
    }

    #[test]
    fn test_take_drafts_keeps_whitespace() {
        let mut form = FormState::default();
        form.set_title("  Milk ");
        form.set_description(" 2L");
        assert!(form.validate().is_ok());

        let (title, description) = form.take_drafts();
        assert_eq!(title, "  Milk ");
        assert_eq!(description, " 2L");
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn test_validation_message() {
        assert_eq!(ValidationError::EmptyTitle.to_string(), "Title should not be empty");
        assert_eq!(ValidationError::EmptyDescription.message(), "Description should not be empty");
    }
}
