use serde::{Deserialize, Serialize};
use std::fmt;

/// The three values the user supplies for one blog post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputParameters {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub source_link: String,
    #[serde(default)]
    pub image_link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Keyword,
    SourceLink,
    ImageLink,
}

impl FormField {
    pub const ALL: [FormField; 3] = [Self::Keyword, Self::SourceLink, Self::ImageLink];
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword => write!(f, "keyword"),
            Self::SourceLink => write!(f, "source_link"),
            Self::ImageLink => write!(f, "image_link"),
        }
    }
}

impl InputParameters {
    pub fn new(
        keyword: impl Into<String>,
        source_link: impl Into<String>,
        image_link: impl Into<String>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            source_link: source_link.into(),
            image_link: image_link.into(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Keyword => &self.keyword,
            FormField::SourceLink => &self.source_link,
            FormField::ImageLink => &self.image_link,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Keyword => self.keyword = value,
            FormField::SourceLink => self.source_link = value,
            FormField::ImageLink => self.image_link = value,
        }
    }

    /// True when every field has a value. URLs are not checked for well-formedness.
    pub fn is_complete(&self) -> bool {
        FormField::ALL.iter().all(|field| !self.get(*field).is_empty())
    }
}
