use serde::{Deserialize, Serialize};

use super::record::Shipment;

/// Newest-first or oldest-first
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    New,
    Old,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    All,
    Accepted,
    Declined,
}

/// Read-side projection of a shipment list: filter, then a stable total
/// sort by effective date. Ties keep their input order. The input list
/// is never mutated; the view is re-derived on every call.
pub fn view(list: &[Shipment], sort_order: SortOrder, filter: StatusFilter) -> Vec<Shipment> {
    let mut out: Vec<Shipment> = list
        .iter()
        .filter(|shipment| match filter {
            StatusFilter::All => true,
            StatusFilter::Accepted => shipment.is_accepted(),
            StatusFilter::Declined => shipment.is_declined(),
        })
        .cloned()
        .collect();

    match sort_order {
        SortOrder::New => out.sort_by(|a, b| b.effective_date().cmp(&a.effective_date())),
        SortOrder::Old => out.sort_by(|a, b| a.effective_date().cmp(&b.effective_date())),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(id: &str, epoch_secs: i64) -> Shipment {
        Shipment {
            id: id.to_string(),
            created_at: Some(Utc.timestamp_opt(epoch_secs, 0).unwrap()),
            ..Shipment::default()
        }
    }

    fn ids(list: &[Shipment]) -> Vec<&str> {
        list.iter().map(|shipment| shipment.id.as_str()).collect()
    }

    #[test]
    fn new_sorts_descending_old_ascending() {
        let list = vec![at("a", 100), at("b", 300), at("c", 200)];

        assert_eq!(ids(&view(&list, SortOrder::New, StatusFilter::All)), ["b", "c", "a"]);
        assert_eq!(ids(&view(&list, SortOrder::Old, StatusFilter::All)), ["a", "c", "b"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let list = vec![at("a", 100), at("b", 100), at("c", 100)];

        assert_eq!(ids(&view(&list, SortOrder::New, StatusFilter::All)), ["a", "b", "c"]);
        assert_eq!(ids(&view(&list, SortOrder::Old, StatusFilter::All)), ["a", "b", "c"]);
    }

    #[test]
    fn dateless_records_sort_as_the_epoch() {
        let list = vec![at("a", 100), Shipment { id: "bare".to_string(), ..Shipment::default() }];

        assert_eq!(ids(&view(&list, SortOrder::Old, StatusFilter::All)), ["bare", "a"]);
    }

    #[test]
    fn filters_use_the_classification_predicates() {
        let accepted = Shipment {
            accepted: Some(true),
            ..at("acc", 100)
        };
        let declined = Shipment {
            rejection_reason: Some("damaged box".to_string()),
            ..at("dec", 200)
        };
        let pending = at("pen", 300);
        let list = vec![accepted, declined, pending];

        assert_eq!(ids(&view(&list, SortOrder::New, StatusFilter::Accepted)), ["acc"]);
        assert_eq!(ids(&view(&list, SortOrder::New, StatusFilter::Declined)), ["dec"]);
        assert_eq!(
            ids(&view(&list, SortOrder::New, StatusFilter::All)),
            ["pen", "dec", "acc"]
        );
    }

    #[test]
    fn input_list_is_left_untouched() {
        let list = vec![at("a", 100), at("b", 300)];
        let before = list.clone();

        let _ = view(&list, SortOrder::New, StatusFilter::All);

        assert_eq!(list, before);
    }
}
