//! Story seeding from JSON files.
//!
//! A story file is either `{"claudiate": [{text, language}, ...]}` or a bare
//! array of the same entries. Seeded ids are `{lang}-{n}`, counting from 1
//! within each file.

use companion_core::language::Language;
use companion_db::models::story::CreateStory;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Invalid story file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Story {index} has no text")]
    EmptyStory { index: usize },
}

/// One entry of a story file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedStory {
    pub text: String,
    /// Falls back to the file's language when absent.
    #[serde(default)]
    pub language: Option<Language>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoryFile {
    Wrapped { claudiate: Vec<SeedStory> },
    Bare(Vec<SeedStory>),
}

/// Parse the contents of a story file.
pub fn parse_story_file(json: &str) -> Result<Vec<SeedStory>, SeedError> {
    let stories = match serde_json::from_str::<StoryFile>(json)? {
        StoryFile::Wrapped { claudiate } => claudiate,
        StoryFile::Bare(stories) => stories,
    };

    if let Some(index) = stories.iter().position(|s| s.text.trim().is_empty()) {
        return Err(SeedError::EmptyStory { index });
    }
    Ok(stories)
}

/// Turn the entries of one file into insertable records.
pub fn build_records(file_language: Language, stories: Vec<SeedStory>) -> Vec<CreateStory> {
    stories
        .into_iter()
        .enumerate()
        .map(|(i, story)| CreateStory {
            id: format!("{}-{}", file_language.as_str(), i + 1),
            text: story.text,
            language: story.language.unwrap_or(file_language),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn wrapped_and_bare_files_parse_alike() {
        let wrapped = r#"{"claudiate": [{"text": "Ciao", "language": "it"}]}"#;
        let bare = r#"[{"text": "Ciao", "language": "it"}]"#;

        let a = parse_story_file(wrapped).unwrap();
        let b = parse_story_file(bare).unwrap();

        assert_eq!(a.len(), 1);
        assert_eq!(a[0].text, b[0].text);
        assert_eq!(a[0].language, Some(Language::It));
    }

    #[test]
    fn ids_count_from_one_per_file() {
        let stories = parse_story_file(r#"[{"text": "one"}, {"text": "two"}]"#).unwrap();
        let records = build_records(Language::En, stories);

        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["en-1", "en-2"]);
        assert!(records.iter().all(|r| r.language == Language::En));
    }

    #[test]
    fn entry_language_wins_over_file_language() {
        let stories = parse_story_file(r#"[{"text": "Hello", "language": "en"}]"#).unwrap();
        let records = build_records(Language::It, stories);
        assert_eq!(records[0].id, "it-1");
        assert_eq!(records[0].language, Language::En);
    }

    #[test]
    fn blank_story_is_rejected() {
        let err = parse_story_file(r#"[{"text": "ok"}, {"text": "  "}]"#).unwrap_err();
        assert_matches!(err, SeedError::EmptyStory { index: 1 });
    }

    #[test]
    fn unknown_shape_is_rejected() {
        let err = parse_story_file(r#"{"stories": []}"#).unwrap_err();
        assert_matches!(err, SeedError::Json(_));
    }
}
