use chrono::{DateTime, Utc};

use crate::commands::CmdResult;
use crate::error::Result;
use crate::expiry;
use crate::store::ItemStore;

use super::helpers::indexed_items;

pub async fn run<S: ItemStore>(store: &S, now: DateTime<Utc>) -> Result<CmdResult> {
    let listed = indexed_items(store).await?;
    let items: Vec<_> = listed.iter().map(|di| di.item.clone()).collect();
    let report = expiry::classify(&items, now);

    Ok(CmdResult::default().with_listed(listed).with_report(report))
}
