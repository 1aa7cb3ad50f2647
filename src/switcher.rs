//! Language switcher widget logic, kept free of any display surface.
//!
//! The widget itself is two toggle links pointing at the sibling-language
//! version of the current page, shown only once the visitor has scrolled
//! past a fixed threshold. Everything here is a pure function of its inputs
//! so the behavior is testable without a DOM.

use std::time::{Duration, Instant};

/// Client-storage key the widget persists the chosen language under.
pub const STORAGE_KEY: &str = "equi-parents-lang";

/// Page used when the current path ends in a bare directory.
pub const DEFAULT_PAGE: &str = "landing.html";

/// Vertical scroll offset (px) past which the switcher becomes visible.
pub const SCROLL_THRESHOLD: u32 = 100;

/// Quiet period for scroll-event debouncing.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Es,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Es => "ES",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::En => "\u{1F1FA}\u{1F1F8}", // 🇺🇸
            Language::Es => "\u{1F1EA}\u{1F1F8}", // 🇪🇸
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
        }
    }

    pub fn opposite(&self) -> Language {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }

    /// Detect the language from a URL path. Paths outside both language
    /// trees default to English.
    pub fn from_path(path: &str) -> Language {
        if path.contains("/es/") {
            Language::Es
        } else {
            Language::En
        }
    }
}

/// Relative link to the same page in `lang`'s directory tree.
pub fn sibling_href(current_path: &str, lang: Language) -> String {
    let file = current_path
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(DEFAULT_PAGE);
    format!("../{}/{}", lang.code(), file)
}

/// One toggle link in the rendered widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    pub lang: Language,
    pub href: String,
    pub active: bool,
}

/// The two toggle links for the given page, active one marked.
pub fn toggles(current_path: &str, current: Language) -> [Toggle; 2] {
    [Language::En, Language::Es].map(|lang| Toggle {
        lang,
        href: sibling_href(current_path, lang),
        active: lang == current,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

/// Visibility as a pure function of vertical scroll position.
pub fn visibility(scroll_y: u32) -> Visibility {
    if scroll_y > SCROLL_THRESHOLD {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}

/// Trailing-edge debouncer for scroll events.
///
/// Each `event` arms (or pushes back) a deadline one interval away; `due`
/// reports whether the deadline has passed and clears it, so a burst of
/// events yields exactly one firing once the burst goes quiet.
#[derive(Debug)]
pub struct Debouncer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn event(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    pub fn due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_INTERVAL)
    }
}
