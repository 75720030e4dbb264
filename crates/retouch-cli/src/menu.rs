//! Numbered session menu.

use std::fmt;

/// One entry of the session menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    /// Shift every sample by a delta.
    Brightness,
    /// Contrast from a level.
    Contrast,
    /// Luma conversion.
    Grayscale,
    /// Up/down or left/right mirror.
    Flip,
    /// Average a second catalog image into the working image.
    Stacking,
    /// 3×3 box blur.
    Blurring,
    /// Discard every edit.
    Reset,
    /// Load a different catalog image.
    ChangeImage,
    /// Leave the session.
    Exit,
}

impl MenuChoice {
    /// Every entry in menu order; the index is the menu code.
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::Brightness,
        MenuChoice::Contrast,
        MenuChoice::Grayscale,
        MenuChoice::Flip,
        MenuChoice::Stacking,
        MenuChoice::Blurring,
        MenuChoice::Reset,
        MenuChoice::ChangeImage,
        MenuChoice::Exit,
    ];

    /// Looks up the entry for a menu code.
    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    /// Menu code of this entry.
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Highest valid menu code.
    pub fn max_code() -> i64 {
        Self::ALL.len() as i64 - 1
    }

    /// Label shown in the menu.
    pub fn label(self) -> &'static str {
        match self {
            Self::Brightness => "Brightness",
            Self::Contrast => "Contrast",
            Self::Grayscale => "Grayscale",
            Self::Flip => "Flip",
            Self::Stacking => "Stacking",
            Self::Blurring => "Blurring",
            Self::Reset => "Reset",
            Self::ChangeImage => "Change image",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Menu text, one `code : label` line per entry.
pub fn render() -> String {
    let mut out = String::from("Index\t:\tAction\n");
    for choice in MenuChoice::ALL {
        out.push_str(&format!("{}\t:\t{}\n", choice.code(), choice));
    }
    out
}
