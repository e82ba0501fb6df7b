//! Screens and the navigation outcomes controllers return.

use std::fmt;

use super::EntryId;

/// The screens of the journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Auth,
    EntryList,
    EntryCreate,
    /// Edit screen for one entry; the id travels as a query parameter.
    EntryEdit(EntryId),
}

impl Screen {
    /// Path (with query string where needed) that displays this screen.
    ///
    /// # Examples
    /// ```
    /// use journal::domain::Screen;
    ///
    /// assert_eq!(Screen::EntryList.path(), "/dashboard");
    /// ```
    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".to_owned(),
            Self::Auth => "/auth".to_owned(),
            Self::EntryList => "/dashboard".to_owned(),
            Self::EntryCreate => "/new-entry".to_owned(),
            Self::EntryEdit(id) => format!("/edit-entry?id={id}"),
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Result of a controller lifecycle hook or operation.
///
/// `Stay` means the controller's own view should be rendered with its current
/// state; `NavigateTo` preempts rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    NavigateTo(Screen),
}

impl Navigation {
    pub fn target(&self) -> Option<Screen> {
        match self {
            Self::Stay => None,
            Self::NavigateTo(screen) => Some(screen.clone()),
        }
    }
}

/// Where the create screen goes after a successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostCreateTarget {
    /// Landing screen (which forwards signed-in users to the list).
    #[default]
    Landing,
    /// Entry list directly.
    EntryList,
}

impl PostCreateTarget {
    pub fn screen(self) -> Screen {
        match self {
            Self::Landing => Screen::Landing,
            Self::EntryList => Screen::EntryList,
        }
    }
}

/// Error returned when parsing an unknown post-create target.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown post-create target '{0}'; expected landing|entry-list")]
pub struct PostCreateTargetParseError(pub String);

impl std::str::FromStr for PostCreateTarget {
    type Err = PostCreateTargetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "landing" => Ok(Self::Landing),
            "entry-list" | "entry_list" | "dashboard" => Ok(Self::EntryList),
            _ => Err(PostCreateTargetParseError(s.to_owned())),
        }
    }
}
