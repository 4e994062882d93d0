//! Flat filtering of operator batches down to line items.

use crate::model::{LineItem, Service, ServiceData};

/// Concatenates the line items of every batch matching `service`, in source
/// order. `None` keeps every batch.
pub fn filter_by_service(batches: Vec<ServiceData>, service: Option<Service>) -> Vec<LineItem> {
    batches
        .into_iter()
        .filter(|batch| service.is_none_or(|svc| svc.matches(&batch.kind)))
        .flat_map(|batch| batch.list_item)
        .collect()
}
