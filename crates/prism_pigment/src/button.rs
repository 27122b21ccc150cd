//! Button variant resolution.
//!
//! Resolution is a pair of total lookups followed by structural rules:
//!
//! 1. `size` selects spacing and typography.
//! 2. `(variant, color)` selects the tone (background, text, border colour).
//! 3. *Ghost draws no border*: the `border` class follows
//!    [`VariantOption::draws_border`], never the tone table.
//! 4. `full_width` and `disabled` append their modifiers.
//!
//! Every lookup is an exhaustive `match`, so a new enumeration value cannot
//! compile without a table entry.

use serde::{Deserialize, Serialize};

use crate::classes::ClassList;
use crate::options::{ColorOption, SizeOption, VariantOption};

/// Structural classes shared by every button.
pub const BASE_CLASSES: &str = "relative inline-flex items-center justify-center \
     rounded-md font-medium \
     transition-colors duration-200 \
     focus:outline-none focus:ring-2 focus:ring-offset-2 \
     focus:ring-gray-500 dark:focus:ring-gray-400";

pub const BORDER_CLASS: &str = "border";
pub const FULL_WIDTH_CLASS: &str = "w-full";
pub const DISABLED_CLASSES: &str = "opacity-50 cursor-not-allowed";

/// The three orthogonal style parameters of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleParameters {
    pub color: ColorOption,
    pub size: SizeOption,
    pub variant: VariantOption,
}

impl StyleParameters {
    #[inline]
    pub const fn new(color: ColorOption, size: SizeOption, variant: VariantOption) -> Self {
        Self {
            color,
            size,
            variant,
        }
    }

    /// Resolve these parameters with the given structural modifiers.
    #[inline]
    pub fn resolve(self, disabled: bool, full_width: bool) -> ResolvedAppearance {
        resolve(self.variant, self.color, self.size, disabled, full_width)
    }
}

/// Concrete class bundle for one button instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAppearance {
    pub base: &'static str,
    pub size: &'static str,
    pub tone: &'static str,
    pub border: bool,
    pub full_width: bool,
    pub disabled: bool,
}

impl ResolvedAppearance {
    #[inline]
    pub const fn has_border(&self) -> bool {
        self.border
    }

    /// Whether hover and press feedback may apply.
    #[inline]
    pub const fn is_interactive(&self) -> bool {
        !self.disabled
    }

    /// Composed class list, in the order base, border, size, tone, modifiers.
    pub fn classes(&self) -> ClassList {
        let mut list = ClassList::new();
        list.push(self.base)
            .push_if(self.border, BORDER_CLASS)
            .push(self.size)
            .push(self.tone)
            .push_if(self.full_width, FULL_WIDTH_CLASS)
            .push_if(self.disabled, DISABLED_CLASSES);
        list
    }

    #[inline]
    pub fn class_name(&self) -> String {
        self.classes().to_string()
    }
}

/// Resolve a button appearance.
///
/// Pure and total over the declared enumerations.
pub fn resolve(
    variant: VariantOption,
    color: ColorOption,
    size: SizeOption,
    disabled: bool,
    full_width: bool,
) -> ResolvedAppearance {
    ResolvedAppearance {
        base: BASE_CLASSES,
        size: size_classes(size),
        tone: tone_classes(variant, color),
        border: variant.draws_border(),
        full_width,
        disabled,
    }
}

/// Spacing and typography for a size.
pub const fn size_classes(size: SizeOption) -> &'static str {
    match size {
        SizeOption::Sm => "px-3 py-1.5 text-sm",
        SizeOption::Md => "px-4 py-2 text-base",
        SizeOption::Lg => "px-6 py-3 text-lg",
        SizeOption::Xl => "px-8 py-4 text-xl",
    }
}

/// Colour classes for a (variant, color) cell.
pub const fn tone_classes(variant: VariantOption, color: ColorOption) -> &'static str {
    use ColorOption as C;
    use VariantOption as V;

    match (variant, color) {
        (V::Solid, C::Default) => "bg-gray-600 hover:bg-gray-700 text-white border-gray-600",
        (V::Solid, C::Primary) => "bg-blue-600 hover:bg-blue-700 text-white border-blue-600",
        (V::Solid, C::Secondary) => "bg-slate-600 hover:bg-slate-700 text-white border-slate-600",
        (V::Solid, C::Success) => "bg-green-600 hover:bg-green-700 text-white border-green-600",
        (V::Solid, C::Danger) => "bg-red-600 hover:bg-red-700 text-white border-red-600",
        (V::Solid, C::Warning) => "bg-amber-600 hover:bg-amber-700 text-white border-amber-600",

        (V::Outline, C::Default) => "bg-transparent hover:bg-gray-100 dark:hover:bg-gray-800 text-gray-700 dark:text-gray-300 border-gray-300 dark:border-gray-600",
        (V::Outline, C::Primary) => "bg-transparent hover:bg-blue-50 dark:hover:bg-blue-900/20 text-blue-600 dark:text-blue-400 border-blue-300 dark:border-blue-700",
        (V::Outline, C::Secondary) => "bg-transparent hover:bg-slate-50 dark:hover:bg-slate-900/20 text-slate-600 dark:text-slate-400 border-slate-300 dark:border-slate-700",
        (V::Outline, C::Success) => "bg-transparent hover:bg-green-50 dark:hover:bg-green-900/20 text-green-600 dark:text-green-400 border-green-300 dark:border-green-700",
        (V::Outline, C::Danger) => "bg-transparent hover:bg-red-50 dark:hover:bg-red-900/20 text-red-600 dark:text-red-400 border-red-300 dark:border-red-700",
        (V::Outline, C::Warning) => "bg-transparent hover:bg-amber-50 dark:hover:bg-amber-900/20 text-amber-600 dark:text-amber-400 border-amber-300 dark:border-amber-700",

        (V::Ghost, C::Default) => "bg-transparent hover:bg-gray-100 dark:hover:bg-gray-800 text-gray-700 dark:text-gray-300",
        (V::Ghost, C::Primary) => "bg-transparent hover:bg-blue-50 dark:hover:bg-blue-900/20 text-blue-600 dark:text-blue-400",
        (V::Ghost, C::Secondary) => "bg-transparent hover:bg-slate-50 dark:hover:bg-slate-900/20 text-slate-600 dark:text-slate-400",
        (V::Ghost, C::Success) => "bg-transparent hover:bg-green-50 dark:hover:bg-green-900/20 text-green-600 dark:text-green-400",
        (V::Ghost, C::Danger) => "bg-transparent hover:bg-red-50 dark:hover:bg-red-900/20 text-red-600 dark:text-red-400",
        (V::Ghost, C::Warning) => "bg-transparent hover:bg-amber-50 dark:hover:bg-amber-900/20 text-amber-600 dark:text-amber-400",
    }
}
