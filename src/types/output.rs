//! `output` items of a Responses API body

use serde::Deserialize;

/// One entry of the `output` list, dispatched on its `type` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputItem {
    Message {
        #[serde(default)]
        content: Vec<ContentPart>,
    },
    FunctionCall {
        id: String,
        name: String,
        #[serde(default)]
        arguments: String,
    },
    /// Reasoning summary; carries no result value.
    Reasoning,
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    OutputText {
        #[serde(default)]
        text: String,
    },
    Refusal {
        #[serde(default)]
        refusal: String,
    },
    #[serde(other)]
    Other,
}

impl OutputItem {
    /// Concatenated `output_text` of a message; `None` for other item types.
    ///
    /// A message without any `output_text` part falls back to its refusal text.
    pub fn output_text(&self) -> Option<String> {
        let OutputItem::Message { content } = self else {
            return None;
        };

        let texts: Vec<&str> = content
            .iter()
            .filter_map(|part| match part {
                ContentPart::OutputText { text } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        if !texts.is_empty() {
            return Some(texts.concat());
        }

        Some(
            content
                .iter()
                .filter_map(|part| match part {
                    ContentPart::Refusal { refusal } => Some(refusal.as_str()),
                    _ => None,
                })
                .collect(),
        )
    }
}
