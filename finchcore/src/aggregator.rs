use crate::store::error::Result;
use crate::store::traits::{ItemStore, ReadStateStore};
use crate::types::account::AccountId;
use crate::types::badge::{AggregationResult, NO_BADGE, TabBadge};
use crate::types::tab::TabSpec;
use crate::read_state::ReadPositionTag;
use log::{debug, warn};

/// Compute the unread count for every tab, invoking `on_tab` once per tab
/// in index order as each badge becomes known.
///
/// Tabs are processed strictly sequentially. For a counted kind, the
/// threshold is the maximum read position across the tab's resolved
/// account set, max-folded from 0 so accounts with no recorded position
/// contribute the floor. A store failure while resolving one tab degrades
/// that tab to `NO_BADGE`; it never aborts the pass.
pub async fn aggregate(
    tabs: &[TabSpec],
    active_accounts: &[AccountId],
    items: &dyn ItemStore,
    read_state: &dyn ReadStateStore,
    mut on_tab: impl FnMut(TabBadge),
) -> AggregationResult {
    let mut result = AggregationResult::new();
    for (index, tab) in tabs.iter().enumerate() {
        let count = match count_tab(tab, active_accounts, items, read_state).await {
            Ok(Some(count)) => count,
            Ok(None) => NO_BADGE,
            Err(e) => {
                warn!(target: "Unread/Aggregate", "Tab {index} failed, dropping its badge: {e}");
                NO_BADGE
            }
        };
        result.insert(index, count);
        on_tab(TabBadge { index, count });
    }
    debug!(target: "Unread/Aggregate", "Pass complete over {} tabs", tabs.len());
    result
}

/// `Ok(None)` means the tab's kind has no counting rule and carries no
/// badge; that is an expected outcome, not a failure.
async fn count_tab(
    tab: &TabSpec,
    active_accounts: &[AccountId],
    items: &dyn ItemStore,
    read_state: &dyn ReadStateStore,
) -> Result<Option<i64>> {
    let Some(kind) = tab.kind else {
        return Ok(None);
    };
    let Some(rule) = kind.counting_rule() else {
        return Ok(None);
    };

    let accounts: &[AccountId] = if tab.accounts.is_empty() {
        active_accounts
    } else {
        &tab.accounts
    };

    let mut threshold = 0i64;
    for account in accounts {
        let tag = ReadPositionTag::new(rule.base_tag, account.clone());
        threshold = threshold.max(read_state.get_position(&tag).await?);
    }

    let count = items
        .count(rule.scope, &tab.args, threshold, true, accounts)
        .await?;
    Ok(Some(count))
}
