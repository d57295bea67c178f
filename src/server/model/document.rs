//! The closed set of document kinds and the collections they live in.

use std::fmt;

/// Kind of a stored document.
///
/// Each kind maps to exactly one named collection; `collection()` is the single
/// source of that mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Player,
    Club,
    TransferListing,
    TransferOffer,
}

impl DocumentKind {
    /// Name of the collection holding documents of this kind.
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Club => "club",
            Self::TransferListing => "transferlisting",
            Self::TransferOffer => "transferoffer",
        }
    }

    /// Name used in client-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Club => "Club",
            Self::TransferListing => "Listing",
            Self::TransferOffer => "Offer",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
