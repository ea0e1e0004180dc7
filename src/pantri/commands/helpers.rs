use crate::commands::DisplayItem;
use crate::error::{PantriError, Result};
use crate::store::ItemStore;

/// Fetch all items and number them 1..n in the store's order.
pub async fn indexed_items<S: ItemStore>(store: &S) -> Result<Vec<DisplayItem>> {
    let items = store.list().await?;
    Ok(items
        .into_iter()
        .enumerate()
        .map(|(i, item)| DisplayItem {
            index: i + 1,
            item,
        })
        .collect())
}

/// Resolve display indexes to items against ONE fresh listing, so a batch of
/// indexes always refers to the same snapshot.
pub async fn resolve_indexes<S: ItemStore>(
    store: &S,
    indexes: &[usize],
) -> Result<Vec<DisplayItem>> {
    let listed = indexed_items(store).await?;

    indexes
        .iter()
        .map(|&index| {
            listed
                .iter()
                .find(|di| di.index == index)
                .cloned()
                .ok_or_else(|| PantriError::Validation(format!("No item at index {}", index)))
        })
        .collect()
}
