// Thu Oct 15 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fmt;

/// Plain C++ access specifier, used for inheritance and parser labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessSpecifier {
    Public,
    Protected,
    Private,
}

impl AccessSpecifier {
    pub fn keyword(self) -> &'static str {
        match self {
            AccessSpecifier::Public => "public",
            AccessSpecifier::Protected => "protected",
            AccessSpecifier::Private => "private",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "public" => Some(AccessSpecifier::Public),
            "protected" => Some(AccessSpecifier::Protected),
            "private" => Some(AccessSpecifier::Private),
            _ => None,
        }
    }
}

impl fmt::Display for AccessSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Section a declaration renders under. Slot composes with the three plain
/// specifiers; signal replaces everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessLevel {
    Public,
    Protected,
    Private,
    Signal,
    SlotPublic,
    SlotProtected,
    SlotPrivate,
}

impl AccessLevel {
    /// Order of access sections in a rendered declaration.
    pub const RENDER_ORDER: [AccessLevel; 7] = [
        AccessLevel::Public,
        AccessLevel::Signal,
        AccessLevel::SlotPublic,
        AccessLevel::Protected,
        AccessLevel::SlotProtected,
        AccessLevel::Private,
        AccessLevel::SlotPrivate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AccessLevel::Public => "public",
            AccessLevel::Protected => "protected",
            AccessLevel::Private => "private",
            AccessLevel::Signal => "signals",
            AccessLevel::SlotPublic => "public slots",
            AccessLevel::SlotProtected => "protected slots",
            AccessLevel::SlotPrivate => "private slots",
        }
    }

    /// Parses a section label without the trailing colon.
    pub fn from_label(label: &str) -> Option<Self> {
        let words: Vec<&str> = label.split_whitespace().collect();
        match words.as_slice() {
            ["signals"] | ["Q_SIGNALS"] => Some(AccessLevel::Signal),
            [keyword] => AccessSpecifier::from_keyword(keyword).map(AccessLevel::from),
            [keyword, "slots"] | [keyword, "Q_SLOTS"] => {
                AccessSpecifier::from_keyword(keyword).map(|s| AccessLevel::from(s).into_slot())
            }
            _ => None,
        }
    }

    pub fn is_slot(self) -> bool {
        matches!(
            self,
            AccessLevel::SlotPublic | AccessLevel::SlotProtected | AccessLevel::SlotPrivate
        )
    }

    pub fn is_signal(self) -> bool {
        self == AccessLevel::Signal
    }

    /// Applies a plain specifier, keeping the slot flag. A signal becomes
    /// the plain specifier.
    pub fn with_specifier(self, specifier: AccessSpecifier) -> Self {
        match (self.is_slot(), specifier) {
            (true, AccessSpecifier::Public) => AccessLevel::SlotPublic,
            (true, AccessSpecifier::Protected) => AccessLevel::SlotProtected,
            (true, AccessSpecifier::Private) => AccessLevel::SlotPrivate,
            (false, specifier) => AccessLevel::from(specifier),
        }
    }

    pub fn into_slot(self) -> Self {
        match self {
            AccessLevel::Protected | AccessLevel::SlotProtected => AccessLevel::SlotProtected,
            AccessLevel::Private | AccessLevel::SlotPrivate => AccessLevel::SlotPrivate,
            AccessLevel::Public | AccessLevel::SlotPublic | AccessLevel::Signal => {
                AccessLevel::SlotPublic
            }
        }
    }
}

impl From<AccessSpecifier> for AccessLevel {
    fn from(specifier: AccessSpecifier) -> Self {
        match specifier {
            AccessSpecifier::Public => AccessLevel::Public,
            AccessSpecifier::Protected => AccessLevel::Protected,
            AccessSpecifier::Private => AccessLevel::Private,
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
