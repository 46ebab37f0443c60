//! "Reset" control injected next to the admin search button.

use url::Url;

use crate::admin::error::AdminError;

/// Query parameters the reset control drops: the search term and the page number.
const CLEARED_PARAMS: [&str; 2] = ["q", "p"];

/// Computed style of the search submit button.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmitButton {
    pub class_name: String,
    pub border_radius: String,
    pub padding: String,
    pub font_size: String,
    pub font_weight: String,
    pub font_family: String,
    pub height: String,
    pub line_height: String,
    pub vertical_align: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResetButton {
    pub value: String,
    pub class_name: String,
    pub style: String,
}

impl ResetButton {
    fn from_submit(submit: &SubmitButton) -> Self {
        let class_name = format!("{} reset-search-btn", submit.class_name)
            .trim()
            .to_string();

        let style = format!(
            "background-color: #d4edda; color: #155724; border: 1px solid #c3e6cb; \
             border-radius: {}; padding: {}; font-size: {}; font-weight: {}; font-family: {}; \
             height: {}; line-height: {}; vertical-align: {}; cursor: pointer; margin-left: 5px;",
            submit.border_radius,
            submit.padding,
            submit.font_size,
            submit.font_weight,
            submit.font_family,
            submit.height,
            submit.line_height,
            submit.vertical_align,
        );

        Self {
            value: "Reset".to_string(),
            class_name,
            style,
        }
    }

    /// URL to navigate to when activated: `current_url` without `q` and `p`.
    pub fn activate(&self, current_url: &str) -> Result<String, AdminError> {
        let mut url = Url::parse(current_url)?;

        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| !CLEARED_PARAMS.contains(&&**key))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        if kept.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(kept);
        }

        Ok(url.to_string())
    }
}

#[derive(Debug, Default)]
pub struct ResetInjector {
    injected: bool,
}

impl ResetInjector {
    /// Build the reset control from the submit button, at most once.
    pub fn inject(&mut self, submit: Option<&SubmitButton>) -> Option<ResetButton> {
        if self.injected {
            return None;
        }

        let button = ResetButton::from_submit(submit?);
        self.injected = true;

        Some(button)
    }
}
