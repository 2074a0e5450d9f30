use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::ErrorCore;

pub const KIND_STORYTELLING: &str = "storytelling";
pub const KIND_BUSINESS: &str = "business";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    Storytelling,
    Business,
}

impl Display for ResponseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseKind::Storytelling => write!(f, "{KIND_STORYTELLING}"),
            ResponseKind::Business => write!(f, "{KIND_BUSINESS}"),
        }
    }
}

impl TryFrom<&str> for ResponseKind {
    type Error = ErrorCore;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            KIND_STORYTELLING => Ok(ResponseKind::Storytelling),
            KIND_BUSINESS => Ok(ResponseKind::Business),
            other => Err(ErrorCore::UnknownResponseKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedResponse {
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    pub content: String,
}

impl GeneratedResponse {
    pub fn storytelling(content: impl Into<String>) -> Self {
        GeneratedResponse {
            kind: ResponseKind::Storytelling,
            content: content.into(),
        }
    }

    pub fn business(content: impl Into<String>) -> Self {
        GeneratedResponse {
            kind: ResponseKind::Business,
            content: content.into(),
        }
    }
}

/// The two variants produced by one generation: storytelling first, business second.
///
/// Built only through [`ResponsePair::new`] or a checked conversion from a
/// `Vec`, so a pair always holds exactly one response of each kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<GeneratedResponse>",
    into = "Vec<GeneratedResponse>"
)]
pub struct ResponsePair {
    storytelling: GeneratedResponse,
    business: GeneratedResponse,
}

impl ResponsePair {
    pub fn new(storytelling: impl Into<String>, business: impl Into<String>) -> Self {
        ResponsePair {
            storytelling: GeneratedResponse::storytelling(storytelling),
            business: GeneratedResponse::business(business),
        }
    }

    pub fn storytelling(&self) -> &GeneratedResponse {
        &self.storytelling
    }

    pub fn business(&self) -> &GeneratedResponse {
        &self.business
    }

    pub fn to_vec(&self) -> Vec<GeneratedResponse> {
        vec![self.storytelling.clone(), self.business.clone()]
    }
}

impl From<ResponsePair> for Vec<GeneratedResponse> {
    fn from(pair: ResponsePair) -> Self {
        vec![pair.storytelling, pair.business]
    }
}

impl TryFrom<Vec<GeneratedResponse>> for ResponsePair {
    type Error = ErrorCore;

    fn try_from(responses: Vec<GeneratedResponse>) -> Result<Self, Self::Error> {
        if responses.len() != 2 {
            return Err(ErrorCore::InvalidResponses(format!(
                "expected 2 responses, got {}",
                responses.len()
            )));
        }
        let mut storytelling = None;
        let mut business = None;
        for response in responses {
            let slot = match response.kind {
                ResponseKind::Storytelling => &mut storytelling,
                ResponseKind::Business => &mut business,
            };
            if slot.is_some() {
                return Err(ErrorCore::InvalidResponses(format!(
                    "duplicate {} response",
                    response.kind
                )));
            }
            *slot = Some(response);
        }
        match (storytelling, business) {
            (Some(storytelling), Some(business)) => Ok(ResponsePair {
                storytelling,
                business,
            }),
            _ => Err(ErrorCore::InvalidResponses(
                "missing storytelling or business response".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_under_type_field() {
        let value = serde_json::to_value(GeneratedResponse::business("hello")).unwrap();
        assert_eq!(value["type"], "business");
        assert_eq!(value["content"], "hello");
    }

    #[test]
    fn test_pair_is_ordered_storytelling_then_business() {
        let responses = vec![
            GeneratedResponse::business("b"),
            GeneratedResponse::storytelling("s"),
        ];
        let pair = ResponsePair::try_from(responses).unwrap();
        let kinds: Vec<ResponseKind> = pair.to_vec().iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![ResponseKind::Storytelling, ResponseKind::Business]);
    }

    #[test]
    fn test_pair_rejects_duplicate_kind() {
        let responses = vec![
            GeneratedResponse::business("a"),
            GeneratedResponse::business("b"),
        ];
        assert!(ResponsePair::try_from(responses).is_err());
    }

    #[test]
    fn test_pair_rejects_wrong_length() {
        let responses = vec![GeneratedResponse::storytelling("only one")];
        assert!(ResponsePair::try_from(responses).is_err());
    }

    #[test]
    fn test_pair_deserialization_is_checked() {
        let json = r#"[{"type":"storytelling","content":"a"},{"type":"storytelling","content":"b"}]"#;
        assert!(serde_json::from_str::<ResponsePair>(json).is_err());

        let json = r#"[{"type":"storytelling","content":"a"},{"type":"business","content":"b"}]"#;
        let pair: ResponsePair = serde_json::from_str(json).unwrap();
        assert_eq!(pair.business().content, "b");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(
            ResponseKind::try_from("storytelling").unwrap(),
            ResponseKind::Storytelling
        );
        assert!(ResponseKind::try_from("poem").is_err());
    }
}
