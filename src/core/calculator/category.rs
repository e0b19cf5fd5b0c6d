//! Stable grouping of records by category.

use crate::models::record::{Categorized, RecordCategory};

/// Groups in first-seen category order; each group keeps input order.
#[derive(Debug)]
pub struct CategoryGroups<'a, T> {
    groups: Vec<(RecordCategory, Vec<&'a T>)>,
}

impl<'a, T> CategoryGroups<'a, T> {
    pub fn get(&self, category: RecordCategory) -> Option<&[&'a T]> {
        self.groups
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, items)| items.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = RecordCategory> + '_ {
        self.groups.iter().map(|(c, _)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RecordCategory, &[&'a T])> {
        self.groups.iter().map(|(c, items)| (*c, items.as_slice()))
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of records across all groups.
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|(_, items)| items.len()).sum()
    }
}

/// Records without a category land in `RecordCategory::Other`.
pub fn group_by_category<T: Categorized>(records: &[T]) -> CategoryGroups<'_, T> {
    let mut groups: Vec<(RecordCategory, Vec<&T>)> = Vec::new();

    for rec in records {
        let key = rec.category().unwrap_or(RecordCategory::Other);

        match groups.iter_mut().find(|(c, _)| *c == key) {
            Some((_, items)) => items.push(rec),
            None => groups.push((key, vec![rec])),
        }
    }

    CategoryGroups { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{CategorizedRecord, RecordKind};

    fn doc(title: &str, cat: Option<RecordCategory>) -> CategorizedRecord {
        CategorizedRecord::new(RecordKind::Document, title, cat)
    }

    fn titles(items: &[&CategorizedRecord]) -> Vec<String> {
        items.iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn empty_input() {
        let recs: Vec<CategorizedRecord> = Vec::new();
        let g = group_by_category(&recs);
        assert!(g.is_empty());
        assert_eq!(g.record_count(), 0);
    }

    #[test]
    fn stable_first_seen_order() {
        let recs = vec![
            doc("payslip jan", Some(RecordCategory::Payroll)),
            doc("contract", Some(RecordCategory::Contract)),
            doc("payslip feb", Some(RecordCategory::Payroll)),
            doc("untagged", None),
            doc("addendum", Some(RecordCategory::Contract)),
        ];
        let g = group_by_category(&recs);

        let order: Vec<_> = g.categories().collect();
        assert_eq!(
            order,
            vec![RecordCategory::Payroll, RecordCategory::Contract, RecordCategory::Other]
        );
        assert_eq!(
            titles(g.get(RecordCategory::Payroll).unwrap()),
            vec!["payslip jan", "payslip feb"]
        );
        assert_eq!(
            titles(g.get(RecordCategory::Contract).unwrap()),
            vec!["contract", "addendum"]
        );
        assert_eq!(g.record_count(), recs.len());
    }

    #[test]
    fn missing_category_merges_with_explicit_other() {
        let recs = vec![doc("a", Some(RecordCategory::Other)), doc("b", None)];
        let g = group_by_category(&recs);
        assert_eq!(g.len(), 1);
        assert_eq!(titles(g.get(RecordCategory::Other).unwrap()), vec!["a", "b"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let r = doc("same", Some(RecordCategory::Medical));
        let recs = vec![r.clone(), r];
        let g = group_by_category(&recs);
        assert_eq!(g.get(RecordCategory::Medical).unwrap().len(), 2);
    }
}
