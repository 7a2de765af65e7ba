//! Pre-submit checks for file inputs

use contracts::shared::upload_rules::{UploadRejection, UploadRules};
use web_sys::HtmlInputElement;

use super::prompt::UserPrompt;

/// The file currently chosen in an upload control
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    /// Size in bytes
    pub size: f64,
}

/// An upload control holding at most one relevant file
pub trait FileInput {
    fn selected_file(&self) -> Option<SelectedFile>;
    /// Drop the selection so nothing gets submitted
    fn clear(&self);
}

impl FileInput for HtmlInputElement {
    fn selected_file(&self) -> Option<SelectedFile> {
        let file = self.files()?.get(0)?;
        Some(SelectedFile {
            name: file.name(),
            size: file.size(),
        })
    }

    fn clear(&self) {
        self.set_value("");
    }
}

/// Check the selected file without touching the input or the user.
///
/// `None` means nothing is selected.
pub fn check_selected_file(
    input: &impl FileInput,
    rules: &UploadRules,
) -> Option<Result<SelectedFile, UploadRejection>> {
    let file = input.selected_file()?;
    Some(rules.check(&file.name, file.size).map(|()| file))
}

/// Alert-and-clear validation used by upload forms.
///
/// No file: `false`, silently. Rejected file: the user sees the reason,
/// the input is cleared and `false` is returned.
pub fn validate_file_input(
    input: &impl FileInput,
    prompt: &impl UserPrompt,
    rules: &UploadRules,
) -> bool {
    match check_selected_file(input, rules) {
        None => false,
        Some(Ok(_)) => true,
        Some(Err(rejection)) => {
            log::warn!("Upload rejected: {}", rejection);
            prompt.alert(&rejection.message());
            input.clear();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::shared::prompt::testing::RecordingPrompt;
    use super::*;
    use std::cell::RefCell;

    const MB: f64 = 1024.0 * 1024.0;

    struct FakeInput {
        file: RefCell<Option<SelectedFile>>,
    }

    impl FakeInput {
        fn with(name: &str, size: f64) -> Self {
            Self {
                file: RefCell::new(Some(SelectedFile {
                    name: name.to_string(),
                    size,
                })),
            }
        }

        fn empty() -> Self {
            Self {
                file: RefCell::new(None),
            }
        }

        fn is_cleared(&self) -> bool {
            self.file.borrow().is_none()
        }
    }

    impl FileInput for FakeInput {
        fn selected_file(&self) -> Option<SelectedFile> {
            self.file.borrow().clone()
        }

        fn clear(&self) {
            *self.file.borrow_mut() = None;
        }
    }

    #[test]
    fn test_accepts_report_pdf() {
        let input = FakeInput::with("report.PDF", 3.0 * MB);
        let prompt = RecordingPrompt::default();
        assert!(validate_file_input(&input, &prompt, &UploadRules::default()));
        assert!(!input.is_cleared());
        assert!(prompt.alerts.borrow().is_empty());
    }

    #[test]
    fn test_rejects_gif_with_format_message() {
        let input = FakeInput::with("image.gif", 1.0 * MB);
        let prompt = RecordingPrompt::default();
        assert!(!validate_file_input(&input, &prompt, &UploadRules::default()));
        assert!(input.is_cleared());
        assert_eq!(
            *prompt.alerts.borrow(),
            vec!["Formato de archivo no permitido. Use PDF, JPG o PNG".to_string()]
        );
    }

    #[test]
    fn test_rejects_large_png_with_size_message() {
        let input = FakeInput::with("scan.png", 12.0 * MB);
        let prompt = RecordingPrompt::default();
        assert!(!validate_file_input(&input, &prompt, &UploadRules::default()));
        assert!(input.is_cleared());
        assert_eq!(
            *prompt.alerts.borrow(),
            vec!["El archivo no debe superar 10 MB".to_string()]
        );
    }

    #[test]
    fn test_no_file_is_silent() {
        let input = FakeInput::empty();
        let prompt = RecordingPrompt::default();
        assert!(!validate_file_input(&input, &prompt, &UploadRules::default()));
        assert!(prompt.alerts.borrow().is_empty());
        assert!(prompt.confirms.borrow().is_empty());
    }

    #[test]
    fn test_check_leaves_input_alone() {
        let input = FakeInput::with("photo.gif", 1.0);
        let result = check_selected_file(&input, &UploadRules::default());
        assert!(matches!(result, Some(Err(UploadRejection::UnsupportedFormat { .. }))));
        assert!(!input.is_cleared());

        let input = FakeInput::with("photo.jpeg", 1.0);
        let result = check_selected_file(&input, &UploadRules::default());
        assert_eq!(result.and_then(Result::ok).map(|f| f.name), Some("photo.jpeg".to_string()));
    }
}
