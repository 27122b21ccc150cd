//! Card accent resolution.
//!
//! Single-axis counterpart of button resolution: the accent colour alone
//! selects the border, top accent line and gradient stops.

use serde::Serialize;

use crate::classes::ClassList;
use crate::options::{AccentColor, CardVariant};

pub const CARD_BASE_CLASSES: &str = "relative p-4 rounded-md backdrop-blur-sm \
     bg-white dark:bg-gray-900";
pub const CARD_SHADOW_CLASSES: &str = "shadow-sm hover:shadow-md transition-shadow duration-200";
/// Pseudo-element geometry for the one pixel accent line.
pub const ACCENT_LINE_GEOMETRY: &str = "before:content-[\"\"] before:absolute before:top-[0px] \
     before:left-[0px] before:right-[0px] before:h-[1px]";

/// Concrete class bundle for one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAppearance {
    pub frame: &'static str,
    pub border: &'static str,
    pub line: Option<&'static str>,
    pub gradient_from: &'static str,
    pub gradient_to: &'static str,
}

impl CardAppearance {
    pub fn classes(&self) -> ClassList {
        let mut list = ClassList::new();
        list.push(CARD_BASE_CLASSES)
            .push(self.frame)
            .push(self.border)
            .push(CARD_SHADOW_CLASSES);
        if let Some(line) = self.line {
            list.push(ACCENT_LINE_GEOMETRY).push(line);
        }
        list
    }

    #[inline]
    pub fn class_name(&self) -> String {
        self.classes().to_string()
    }
}

/// Resolve a card appearance.
///
/// Both card variants currently produce the same frame; the parameter is
/// kept so callers can pass it through unchanged.
pub fn resolve_accent(accent: AccentColor, variant: CardVariant) -> CardAppearance {
    let (line, border, gradient_from) = accent_classes(accent);
    CardAppearance {
        frame: frame_classes(variant),
        border,
        line,
        gradient_from,
        gradient_to: "to-white dark:to-transparent",
    }
}

const fn frame_classes(variant: CardVariant) -> &'static str {
    match variant {
        CardVariant::Default => "border",
        CardVariant::Bordered => "border",
    }
}

const fn accent_classes(accent: AccentColor) -> (Option<&'static str>, &'static str, &'static str) {
    match accent {
        AccentColor::Purple => (
            Some("before:bg-slate-400"),
            "border-slate-200 dark:border-slate-700",
            "from-slate-50 dark:from-slate-900/20",
        ),
        AccentColor::Green => (
            Some("before:bg-green-600"),
            "border-green-200 dark:border-green-800",
            "from-green-50 dark:from-green-900/20",
        ),
        AccentColor::Pink => (
            Some("before:bg-pink-600"),
            "border-pink-200 dark:border-pink-800",
            "from-pink-50 dark:from-pink-900/20",
        ),
        AccentColor::Blue => (
            Some("before:bg-blue-600"),
            "border-blue-200 dark:border-blue-800",
            "from-blue-50 dark:from-blue-900/20",
        ),
        AccentColor::Cyan => (
            Some("before:bg-cyan-600"),
            "border-cyan-200 dark:border-cyan-800",
            "from-cyan-50 dark:from-cyan-900/20",
        ),
        AccentColor::Orange => (
            Some("before:bg-orange-600"),
            "border-orange-200 dark:border-orange-800",
            "from-orange-50 dark:from-orange-900/20",
        ),
        AccentColor::None => (
            None,
            "border-gray-200 dark:border-gray-700",
            "from-gray-50 dark:from-gray-900/20",
        ),
    }
}
