use crate::read_state::read_position_tag;
use crate::store::traits::ContentScope;
use crate::types::account::AccountId;
use serde::{Deserialize, Serialize};

/// The view kinds a client tab can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TabKind {
    HomeTimeline,
    NotificationsTimeline,
    Favorites,
    Search,
    DirectMessages,
}

/// How unread items are counted for a tab kind: which item collection to
/// query and which read-position base tag bounds the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountingRule {
    pub scope: ContentScope,
    pub base_tag: &'static str,
}

impl TabKind {
    /// The counting rule for this kind, or `None` for kinds that never
    /// carry a badge. Making a kind countable means adding an arm here.
    pub fn counting_rule(self) -> Option<CountingRule> {
        match self {
            TabKind::HomeTimeline => Some(CountingRule {
                scope: ContentScope::Statuses,
                base_tag: read_position_tag::HOME_TIMELINE,
            }),
            TabKind::NotificationsTimeline => Some(CountingRule {
                scope: ContentScope::Activities,
                base_tag: read_position_tag::ACTIVITIES_ABOUT_ME,
            }),
            TabKind::Favorites | TabKind::Search | TabKind::DirectMessages => None,
        }
    }
}

/// Per-tab item filters, forwarded verbatim to the item store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterArgs {
    pub include_replies: bool,
    pub include_reposts: bool,
}

impl Default for FilterArgs {
    fn default() -> Self {
        Self {
            include_replies: true,
            include_reposts: true,
        }
    }
}

/// One tab of the pager: a view kind, the accounts it is restricted to
/// (empty means "all currently active accounts"), and item filters.
///
/// A tab with `kind: None` was never configured with a view; it still
/// occupies an index and resolves to "no badge".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSpec {
    pub kind: Option<TabKind>,
    pub accounts: Vec<AccountId>,
    pub args: FilterArgs,
}

impl TabSpec {
    pub fn new(kind: TabKind) -> Self {
        Self {
            kind: Some(kind),
            accounts: Vec::new(),
            args: FilterArgs::default(),
        }
    }

    /// A tab with no configured view kind.
    pub fn unset() -> Self {
        Self {
            kind: None,
            accounts: Vec::new(),
            args: FilterArgs::default(),
        }
    }

    pub fn with_accounts(mut self, accounts: Vec<AccountId>) -> Self {
        self.accounts = accounts;
        self
    }

    pub fn with_args(mut self, args: FilterArgs) -> Self {
        self.args = args;
        self
    }
}
