//! Per-view state driven by the pages.
//!
//! [`AppContext`] is created once at application start and handed to every
//! view; it is the only place the current language lives. [`StorySession`]
//! and [`CameraSession`] hold the state of the story and camera views.

use companion_core::capture::{CaptureError, CaptureLayout, CaptureState, CapturedFrame, FrameSource};
use companion_core::deck::StoryDeck;
use companion_core::ids::capture_download_name;
use companion_core::language::{translate, Language};
use companion_core::story::Story;
use image::RgbaImage;
use serde::Serialize;

use crate::stories::StoryClient;

/// Viewports narrower than this get portrait video constraints.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Application-wide view context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppContext {
    language: Language,
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(Language::UI_DEFAULT)
    }
}

impl AppContext {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// UI string for `key` in the current language.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(self.language, key)
    }

    pub fn switch_language(&mut self, language: Language) {
        if self.language != language {
            tracing::debug!(from = %self.language, to = %language, "Language switched");
            self.language = language;
        }
    }

    /// Flip to the other language and return it.
    pub fn toggle_language(&mut self) -> Language {
        self.switch_language(self.language.toggled());
        self.language
    }
}

/// State of the story view: the loaded deck and the story on screen.
#[derive(Debug, Clone)]
pub struct StorySession {
    deck: StoryDeck,
    current: Option<Story>,
}

impl StorySession {
    pub fn new(stories: Vec<Story>) -> Self {
        Self {
            deck: StoryDeck::new(stories),
            current: None,
        }
    }

    /// Load stories through `client`, falling back to the built-in list.
    pub async fn load(client: &StoryClient) -> Self {
        Self::new(client.load_stories().await)
    }

    /// Advance to the next story in the context's language.
    pub fn next(&mut self, ctx: &AppContext) -> Option<&Story> {
        self.current = self.deck.next_story(ctx.language()).cloned();
        self.current.as_ref()
    }

    pub fn current(&self) -> Option<&Story> {
        self.current.as_ref()
    }

    pub fn deck(&self) -> &StoryDeck {
        &self.deck
    }
}

/// Which camera the browser should open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FacingMode {
    /// Front camera.
    #[default]
    User,
    /// Back camera.
    Environment,
}

impl FacingMode {
    pub fn toggled(self) -> FacingMode {
        match self {
            FacingMode::User => FacingMode::Environment,
            FacingMode::Environment => FacingMode::User,
        }
    }
}

/// Constraints passed to the browser's media request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoConstraints {
    pub width: u32,
    pub height: u32,
    pub facing_mode: FacingMode,
}

/// State of the camera view.
#[derive(Debug, Clone, Default)]
pub struct CameraSession {
    facing_mode: FacingMode,
    state: CaptureState,
}

impl CameraSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn facing_mode(&self) -> FacingMode {
        self.facing_mode
    }

    /// Switch between the front and back camera.
    pub fn switch_camera(&mut self) -> FacingMode {
        self.facing_mode = self.facing_mode.toggled();
        self.facing_mode
    }

    /// Portrait 720x1280 on narrow viewports, landscape 1280x720 otherwise.
    pub fn constraints(&self, viewport_width: u32) -> VideoConstraints {
        let (width, height) = if viewport_width < MOBILE_BREAKPOINT_PX {
            (720, 1280)
        } else {
            (1280, 720)
        };
        VideoConstraints {
            width,
            height,
            facing_mode: self.facing_mode,
        }
    }

    /// Capture and composite. Returns `false` when the camera had no frame.
    pub fn capture<S: FrameSource + ?Sized>(
        &mut self,
        source: &mut S,
        overlay: &RgbaImage,
        layout: &CaptureLayout,
    ) -> Result<bool, CaptureError> {
        self.state.capture(source, overlay, layout)
    }

    pub fn retake(&mut self) {
        self.state.retake();
    }

    pub fn captured(&self) -> Option<&CapturedFrame> {
        self.state.frame()
    }

    /// File name offered for downloading the current capture.
    pub fn download_name(&self) -> Option<String> {
        self.captured()
            .map(|_| capture_download_name(chrono::Utc::now().timestamp_millis()))
    }
}
