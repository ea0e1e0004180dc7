use chrono::{DateTime, Utc};

use crate::commands::{list, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ItemDraft;
use crate::store::ItemStore;

pub async fn run<S: ItemStore>(
    store: &S,
    draft: ItemDraft,
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    store.create(&draft).await?;

    // The store assigned the id; the re-fetch is our only view of it.
    let mut result = list::run(store, now).await?;
    result.add_message(CmdMessage::success(format!("Item added: {}", draft.name)));
    Ok(result)
}
