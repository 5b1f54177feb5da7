//! Site languages and the UI translation table.
//!
//! The site ships in exactly two languages. Italian is the primary language:
//! stories without an explicit tag are Italian, and the fallback story list
//! is Italian first. The UI itself starts in English until the visitor
//! switches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the two languages the site is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Italian, the primary language.
    It,
    /// English, the secondary language.
    En,
}

impl Language {
    /// Language assumed for stories that carry no tag.
    pub const PRIMARY: Language = Language::It;

    /// Language the UI starts in.
    pub const UI_DEFAULT: Language = Language::En;

    pub fn as_str(self) -> &'static str {
        match self {
            Language::It => "it",
            Language::En => "en",
        }
    }

    /// The other language; what the language switcher flips to.
    pub fn toggled(self) -> Language {
        match self {
            Language::It => Language::En,
            Language::En => Language::It,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "it" => Ok(Language::It),
            "en" => Ok(Language::En),
            other => Err(CoreError::Validation(format!(
                "Unsupported language '{other}', expected 'it' or 'en'"
            ))),
        }
    }
}

/// Look up the UI string for `key` in `language`.
///
/// Unknown keys resolve to the key itself so a missing entry shows up on the
/// page instead of an empty label.
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    let table = match language {
        Language::En => EN,
        Language::It => IT,
    };
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}

const EN: &[(&str, &str)] = &[
    // Landing page
    ("greeting", "Hello Claudia! 👋"),
    ("askClaudia", "Ask Claudia"),
    ("askClaudiaDesc", "Get a random story from Claudia about her day"),
    ("takePic", "Take a Pic with Claudia"),
    ("takePicDesc", "Take a photo with Claudia's silhouette"),
    ("madeWithLove", "Made with ❤️ for Claudia"),
    // Stories
    ("claudiaStories", "Claudia's Stories"),
    ("tellMeStory", "Tell me a story, Claudia!"),
    ("noStories", "No stories available"),
    ("loading", "Loading..."),
    // Camera
    ("loadingCamera", "Loading camera..."),
    ("takePicWithClaudia", "Take a Pic with Claudia"),
    ("backToHome", "Back to Home"),
    ("switchCamera", "Switch Camera"),
    ("takePhoto", "Take Photo"),
    ("retake", "Retake"),
    ("download", "Download"),
    (
        "positionYourself",
        "Position yourself next to Claudia's photo and take a picture!",
    ),
    (
        "greatShot",
        "Great shot! You can download it or take another one.",
    ),
    // Gallery
    ("gallery", "Gallery"),
    ("saveToGallery", "Save to the gallery?"),
    ("yes", "Yes"),
    ("no", "No"),
];

const IT: &[(&str, &str)] = &[
    ("greeting", "Ciao Claudia! 👋"),
    ("askClaudia", "Chiedi a Claudia"),
    (
        "askClaudiaDesc",
        "Ricevi una storia casuale da Claudia sulla sua giornata",
    ),
    ("takePic", "Fai una Foto con Claudia"),
    ("takePicDesc", "Scatta una foto con la silhouette di Claudia"),
    ("madeWithLove", "Fatto con ❤️ per Claudia"),
    ("claudiaStories", "Le Storie di Claudia"),
    ("tellMeStory", "Raccontami una storia, Claudia!"),
    ("noStories", "Nessuna storia disponibile"),
    ("loading", "Caricamento..."),
    ("loadingCamera", "Caricamento fotocamera..."),
    ("takePicWithClaudia", "Fai una Foto con Claudia"),
    ("backToHome", "Torna alla Home"),
    ("switchCamera", "Cambia Fotocamera"),
    ("takePhoto", "Scatta Foto"),
    ("retake", "Riscatta"),
    ("download", "Scarica"),
    (
        "positionYourself",
        "Posizionati accanto alla foto di Claudia e scatta una foto!",
    ),
    (
        "greatShot",
        "Ottimo scatto! Puoi scaricarla o farne un'altra.",
    ),
    ("gallery", "Galleria"),
    ("saveToGallery", "Salvare nella galleria?"),
    ("yes", "Sì"),
    ("no", "No"),
];
