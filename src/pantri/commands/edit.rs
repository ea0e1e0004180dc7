use chrono::{DateTime, Utc};

use crate::commands::{list, CmdMessage, CmdResult, ItemChanges};
use crate::error::Result;
use crate::store::ItemStore;

use super::helpers::resolve_indexes;

pub async fn run<S: ItemStore>(
    store: &S,
    index: usize,
    changes: ItemChanges,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    if changes.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning("Nothing to change."));
        return Ok(result);
    }

    let resolved = resolve_indexes(store, &[index]).await?;
    let current = &resolved[0].item;

    // The remote update replaces every mutable field, so unset flags are
    // filled in from the item as it stands right now.
    let draft = changes.apply_to(current);
    store.update(&current.id, &draft).await?;

    let mut result = list::run(store, now).await?;
    result.add_message(CmdMessage::success(format!(
        "Item updated ({}): {}",
        index, draft.name
    )));
    Ok(result)
}
