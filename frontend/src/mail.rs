use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlAnchorElement};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("required page element `{0}` is missing")]
    MissingElement(&'static str),
    #[error("booking is missing `{0}`")]
    Incomplete(&'static str),
    #[error("could not open the mail client: {0}")]
    Dispatch(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailDraft {
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    pub fn to_mailto(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

/// Hands a `mailto:` URI to whatever the platform uses to open mail drafts.
#[cfg_attr(test, mockall::automock)]
pub trait MailHandler {
    fn open(&self, uri: &str) -> Result<(), SubmissionError>;
}

/// Clicks a hidden, throwaway link so the browser opens the default mail client.
pub struct BrowserMailHandler;

impl MailHandler for BrowserMailHandler {
    fn open(&self, uri: &str) -> Result<(), SubmissionError> {
        let window = window().ok_or(SubmissionError::MissingElement("window"))?;
        let document = window
            .document()
            .ok_or(SubmissionError::MissingElement("document"))?;
        let body = document
            .body()
            .ok_or(SubmissionError::MissingElement("body"))?;

        let link = document
            .create_element("a")
            .map_err(|e| SubmissionError::Dispatch(format!("{:?}", e)))?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| SubmissionError::Dispatch("created element is not a link".to_string()))?;
        link.set_href(uri);
        link.style()
            .set_property("display", "none")
            .map_err(|e| SubmissionError::Dispatch(format!("{:?}", e)))?;

        body.append_child(&link)
            .map_err(|e| SubmissionError::Dispatch(format!("{:?}", e)))?;
        link.click();
        body.remove_child(&link)
            .map_err(|e| SubmissionError::Dispatch(format!("{:?}", e)))?;

        log::debug!("Mail handler invoked ({} bytes)", uri.len());
        Ok(())
    }
}
