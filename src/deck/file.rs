// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pitchdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! On-disk JSON representation of a deck.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{AdvanceSynonym, RevealStart};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DeckFile {
    /// Shown in the presenter footer.
    #[serde(default)]
    pub title: String,
    /// Slide id mounted first; defaults to the first listed slide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    pub slides: Vec<SlideFile>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SlideFile {
    /// Route path, e.g. `/problem`.
    pub id: String,
    /// `null` or absent at the end of the deck.
    #[serde(default)]
    pub next: Option<String>,
    /// `null` or absent at the start of the deck.
    #[serde(default)]
    pub previous: Option<String>,
    pub heading: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reveal: Option<RevealFile>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RevealFile {
    pub stages: Vec<StageFile>,
    #[serde(default)]
    pub start: RevealStartFile,
    /// Keys that advance the reveal in addition to the right arrow and clicks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<SynonymFile>,
    /// Stage whose arrival scrolls the slide body into view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_at: Option<usize>,
    /// Shown once the last stage is revealed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finale: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct StageFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RevealStartFile {
    #[default]
    Unstarted,
    First,
}

impl From<RevealStartFile> for RevealStart {
    fn from(value: RevealStartFile) -> Self {
        match value {
            RevealStartFile::Unstarted => RevealStart::Unstarted,
            RevealStartFile::First => RevealStart::First,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SynonymFile {
    Space,
    Enter,
}

impl From<SynonymFile> for AdvanceSynonym {
    fn from(value: SynonymFile) -> Self {
        match value {
            SynonymFile::Space => AdvanceSynonym::Space,
            SynonymFile::Enter => AdvanceSynonym::Enter,
        }
    }
}

/// JSON Schema for [`DeckFile`], printed by `pitchdeck --print-schema`.
pub fn deck_file_schema() -> schemars::Schema {
    schemars::schema_for!(DeckFile)
}

#[cfg(test)]
mod tests {
    use super::{deck_file_schema, DeckFile, RevealStartFile, SynonymFile};

    #[test]
    fn null_links_and_missing_links_both_decode_as_none() {
        let file: DeckFile = serde_json::from_str(
            r#"{
                "slides": [
                    { "id": "/a", "next": null, "heading": "A" },
                    { "id": "/b", "heading": "B" }
                ]
            }"#,
        )
        .expect("deck file");

        assert_eq!(file.slides[0].next, None);
        assert_eq!(file.slides[0].previous, None);
        assert_eq!(file.slides[1].next, None);
    }

    #[test]
    fn reveal_defaults_to_unstarted_without_synonyms() {
        let file: DeckFile = serde_json::from_str(
            r#"{ "slides": [ { "id": "/a", "heading": "A", "reveal": { "stages": [ { "text": "one" } ] } } ] }"#,
        )
        .expect("deck file");

        let reveal = file.slides[0].reveal.as_ref().expect("reveal");
        assert_eq!(reveal.start, RevealStartFile::Unstarted);
        assert!(reveal.synonyms.is_empty());
    }

    #[test]
    fn synonyms_decode_in_snake_case() {
        let file: DeckFile = serde_json::from_str(
            r#"{ "slides": [ { "id": "/a", "heading": "A", "reveal": { "stages": [ { "text": "one" } ], "synonyms": ["space", "enter"] } } ] }"#,
        )
        .expect("deck file");

        let reveal = file.slides[0].reveal.as_ref().expect("reveal");
        assert_eq!(reveal.synonyms, vec![SynonymFile::Space, SynonymFile::Enter]);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = serde_json::from_str::<DeckFile>(
            r#"{ "slides": [ { "id": "/a", "heading": "A", "nextSlide": "/b" } ] }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("nextSlide"), "unexpected error: {err}");
    }

    #[test]
    fn schema_names_the_slide_fields() {
        let schema = serde_json::to_string(&deck_file_schema()).expect("schema json");
        for field in ["slides", "next", "previous", "reveal", "scroll_at"] {
            assert!(schema.contains(field), "schema is missing {field}");
        }
    }
}
