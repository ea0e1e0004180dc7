use chrono::{DateTime, Utc};

use crate::commands::{list, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ItemStore;

use super::helpers::resolve_indexes;

pub async fn run<S: ItemStore>(
    store: &S,
    indexes: &[usize],
    now: DateTime<Utc>,
) -> Result<CmdResult> {
    let resolved = resolve_indexes(store, indexes).await?;

    // One independent call per item; the store has no batch delete we use.
    for di in &resolved {
        store.delete(&di.item.id).await?;
    }

    let mut result = list::run(store, now).await?;
    for di in resolved {
        result.add_message(CmdMessage::success(format!(
            "Item removed: {}",
            di.item.name
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PantriError;
    use crate::model::{Category, ItemDraft, Unit};
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;

    fn draft(name: &str) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            category: Category::Vegetable,
            quantity: 1.0,
            unit: Unit::Piece,
            expiry: None,
        }
    }

    fn now() -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2026, 8, 7)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
    }

    #[tokio::test]
    async fn removes_items_by_index() {
        let store = InMemoryStore::new();
        store.create(&draft("Bayam")).await.unwrap();
        store.create(&draft("Wortel")).await.unwrap();
        store.create(&draft("Timun")).await.unwrap();

        let result = run(&store, &[1, 3], now()).await.unwrap();

        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].item.name, "Wortel");
        // The survivor is re-indexed from the fresh listing.
        assert_eq!(result.listed[0].index, 1);
        assert_eq!(result.messages.len(), 2);
    }

    #[tokio::test]
    async fn unknown_index_removes_nothing() {
        let store = InMemoryStore::new();
        store.create(&draft("Bayam")).await.unwrap();

        let err = run(&store, &[1, 9], now()).await.unwrap_err();
        assert!(matches!(err, PantriError::Validation(_)));
        assert_eq!(store.list().await.unwrap().len(), 1);
    }
}
