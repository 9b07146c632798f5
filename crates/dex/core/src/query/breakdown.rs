//! Hierarchical category counts for the summary chart.

use crate::category::Category;
use crate::record::CreatureRecord;

/// Count of records sharing a primary category.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakdownNode {
    pub primary: Category,
    pub count: usize,
    /// Secondary split; `None` groups single-category records.
    pub secondaries: Vec<(Option<Category>, usize)>,
}

/// Groups records by primary then secondary category.
///
/// Groups appear in order of first occurrence, so the output is stable for a
/// given load order.
pub fn category_breakdown<'a, I>(records: I) -> Vec<BreakdownNode>
where
    I: IntoIterator<Item = &'a CreatureRecord>,
{
    let mut nodes: Vec<BreakdownNode> = Vec::new();
    for record in records {
        let primary = &record.categories.primary;
        let secondary = &record.categories.secondary;

        let node = match nodes.iter().position(|n| &n.primary == primary) {
            Some(i) => &mut nodes[i],
            None => {
                nodes.push(BreakdownNode {
                    primary: primary.clone(),
                    count: 0,
                    secondaries: Vec::new(),
                });
                let last = nodes.len() - 1;
                &mut nodes[last]
            }
        };
        node.count += 1;

        match node.secondaries.iter_mut().find(|(s, _)| s == secondary) {
            Some((_, count)) => *count += 1,
            None => node.secondaries.push((secondary.clone(), 1)),
        }
    }
    nodes
}
