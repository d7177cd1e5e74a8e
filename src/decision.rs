use crate::dataset::{AttributeSchema, Dataset, Record};
use crate::distribution::Distribution;
use crate::error::{Result, TreeError};
use crate::majority::majority_of;
use crate::selector::select_best_attribute;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainConfig {
    pub max_depth: usize,
}

impl FromStr for TrainConfig {
    type Err = TreeError;

    fn from_str(raw: &str) -> Result<Self> {
        raw.trim()
            .parse::<usize>()
            .map(|max_depth| TrainConfig { max_depth })
            .map_err(|_| TreeError::InvalidDepth(raw.to_owned()))
    }
}

/// A child together with the attribute value that routes to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub value: String,
    pub node: Box<TreeNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub attribute: usize,
    pub left: Option<Branch>,
    pub right: Option<Branch>,
}

impl Split {
    pub fn branches(&self) -> impl Iterator<Item = &Branch> {
        self.left.iter().chain(self.right.iter())
    }

    fn route(&self, value: &str) -> Option<&TreeNode> {
        self.branches()
            .find(|branch| branch.value == value)
            .map(|branch| &*branch.node)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Leaf,
    Internal(Split),
}

/// Every node carries the majority label of the rows that reached it.
/// Internal nodes answer with it when a record matches neither child.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    depth: usize,
    class_label: String,
    distribution: Distribution,
    kind: NodeKind,
}

impl TreeNode {
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn class_label(&self) -> &str {
        &self.class_label
    }

    /// Label counts of the training rows that reached this node.
    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    pub fn is_leaf(&self) -> bool {
        match self.kind {
            NodeKind::Leaf => true,
            NodeKind::Internal(_) => false,
        }
    }

    pub fn split(&self) -> Option<&Split> {
        match &self.kind {
            NodeKind::Leaf => None,
            NodeKind::Internal(split) => Some(split),
        }
    }

    /// Deepest node depth in this subtree.
    pub fn height(&self) -> usize {
        self.split()
            .into_iter()
            .flat_map(|split| split.branches())
            .map(|branch| branch.node.height())
            .max()
            .unwrap_or(self.depth)
    }
}

struct Builder {
    max_depth: usize,
}

impl Builder {
    fn grow(&self, data: &Dataset, candidates: &[usize], depth: usize) -> Result<TreeNode> {
        let distribution = data.label_distribution();
        let class_label = majority_of(&distribution)
            .map(str::to_owned)
            .ok_or(TreeError::Precondition("majority label of an empty subset"))?;
        let leaf = |distribution, class_label| TreeNode {
            depth,
            class_label,
            distribution,
            kind: NodeKind::Leaf,
        };
        if depth >= self.max_depth || candidates.is_empty() {
            return Ok(leaf(distribution, class_label));
        }

        let attribute = select_best_attribute(data, candidates)
            .ok_or(TreeError::Precondition("attribute selection without candidates"))?;
        let remaining: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|candidate| *candidate != attribute)
            .collect();

        let split = match data.distinct_values(attribute).as_slice() {
            [] => return Err(TreeError::Precondition("split of an empty subset")),
            // Constant within this subset, so there is nothing to branch on.
            [_] => return Ok(leaf(distribution, class_label)),
            [left, right] => {
                let (left_rows, right_rows) = data.split(attribute, left);
                Split {
                    attribute,
                    left: self.branch(&left_rows, left, &remaining, depth + 1)?,
                    right: self.branch(&right_rows, right, &remaining, depth + 1)?,
                }
            }
            values => {
                return Err(TreeError::NonBinaryAttribute {
                    attribute: data
                        .schema()
                        .name(attribute)
                        .unwrap_or_default()
                        .to_owned(),
                    values: values.iter().map(|value| value.to_string()).collect(),
                })
            }
        };

        Ok(TreeNode {
            depth,
            class_label,
            distribution,
            kind: NodeKind::Internal(split),
        })
    }

    fn branch(
        &self,
        rows: &Dataset,
        value: &str,
        candidates: &[usize],
        depth: usize,
    ) -> Result<Option<Branch>> {
        if rows.is_empty() {
            return Ok(None);
        }
        Ok(Some(Branch {
            value: value.to_owned(),
            node: Box::new(self.grow(rows, candidates, depth)?),
        }))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    schema: Arc<AttributeSchema>,
    max_depth: usize,
    root: TreeNode,
}

impl DecisionTree {
    /// Grows a binary tree over every non-label attribute of `data`.
    ///
    /// Fails on an empty dataset, and on any attribute that shows more than
    /// two distinct values where it is chosen for a split.
    pub fn train(data: &Dataset, config: TrainConfig) -> Result<Self> {
        if data.is_empty() {
            return Err(TreeError::EmptyDataset);
        }
        let candidates: Vec<usize> = data.schema().features().collect();
        let builder = Builder {
            max_depth: config.max_depth,
        };
        Ok(DecisionTree {
            schema: Arc::clone(data.schema()),
            max_depth: config.max_depth,
            root: builder.grow(data, &candidates, 0)?,
        })
    }

    pub fn schema(&self) -> &AttributeSchema {
        &self.schema
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Walks from the root to a leaf. A record whose value matches neither
    /// child, or that is too short to have one, gets the label of the
    /// internal node where the walk stopped.
    pub fn classify(&self, record: &Record) -> &str {
        let mut node = &self.root;
        loop {
            match &node.kind {
                NodeKind::Leaf => return &node.class_label,
                NodeKind::Internal(split) => {
                    match record.value(split.attribute).and_then(|value| split.route(value)) {
                        Some(child) => node = child,
                        None => return &node.class_label,
                    }
                }
            }
        }
    }

    /// One label per record, in order. Any label column present is ignored.
    pub fn predict(&self, records: &[Record]) -> Vec<String> {
        records
            .iter()
            .map(|record| self.classify(record).to_owned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::{dataset, scenario};
    use proptest::prelude::*;

    fn train(data: &Dataset, max_depth: usize) -> DecisionTree {
        DecisionTree::train(data, TrainConfig { max_depth }).expect("train")
    }

    fn nodes(node: &TreeNode) -> Vec<&TreeNode> {
        let mut all = vec![node];
        if let Some(split) = node.split() {
            for branch in split.branches() {
                all.extend(nodes(&branch.node));
            }
        }
        all
    }

    #[test]
    fn scenario_splits_on_first_tied_attribute() {
        let data = scenario();
        let tree = train(&data, 1);
        let root = tree.root();
        assert!(!root.is_leaf());
        assert_eq!(root.class_label(), "N");

        let split = root.split().expect("root split");
        assert_eq!(split.attribute, 0);
        let left = split.left.as_ref().expect("left");
        let right = split.right.as_ref().expect("right");
        assert_eq!((left.value.as_str(), right.value.as_str()), ("a1", "a2"));
        assert!(left.node.is_leaf() && right.node.is_leaf());
        assert_eq!(left.node.class_label(), "Y");
        assert_eq!(right.node.class_label(), "N");
        assert_eq!(left.node.depth(), 1);

        assert_eq!(tree.predict(data.records()), vec!["Y", "Y", "N", "N"]);
    }

    #[test]
    fn zero_depth_is_a_single_majority_leaf() {
        let tree = train(&scenario(), 0);
        assert!(tree.root().is_leaf());
        assert_eq!(tree.root().class_label(), "N");
        assert_eq!(tree.root().height(), 0);
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let data = dataset(&["A", "Label"], &[]);
        assert!(matches!(
            DecisionTree::train(&data, TrainConfig { max_depth: 2 }),
            Err(TreeError::EmptyDataset)
        ));
    }

    #[test]
    fn exhausted_candidates_stop_each_path_independently() {
        let data = scenario();
        let tree = train(&data, 10);
        assert_eq!(tree.root().height(), 2);

        let split = tree.root().split().unwrap();
        for branch in split.branches() {
            assert_eq!(branch.node.split().map(|s| s.attribute), Some(1));
        }
        assert_eq!(tree.predict(data.records()), vec!["Y", "N", "N", "N"]);
    }

    #[test]
    fn locally_constant_attribute_becomes_a_leaf() {
        let data = dataset(
            &["A", "B", "Label"],
            &[
                &["a1", "b1", "y"],
                &["a1", "b1", "n"],
                &["a2", "b2", "n"],
                &["a2", "b1", "n"],
            ],
        );
        let tree = train(&data, 5);
        let split = tree.root().split().unwrap();
        assert_eq!(split.attribute, 0);

        let left = &split.left.as_ref().unwrap().node;
        assert!(left.is_leaf());
        assert!(left.split().is_none());
        assert_eq!(left.class_label(), "y");
    }

    #[test]
    fn constant_root_attribute_becomes_a_leaf() {
        let data = dataset(&["A", "Label"], &[&["a", "n"], &["a", "y"], &["a", "y"]]);
        let tree = train(&data, 3);
        assert!(tree.root().is_leaf());
        assert_eq!(tree.root().class_label(), "y");
    }

    #[test]
    fn more_than_two_values_cannot_be_split() {
        let data = dataset(
            &["color", "Label"],
            &[&["red", "y"], &["green", "n"], &["blue", "y"]],
        );
        match DecisionTree::train(&data, TrainConfig { max_depth: 1 }) {
            Err(TreeError::NonBinaryAttribute { attribute, values }) => {
                assert_eq!(attribute, "color");
                assert_eq!(values, vec!["red", "green", "blue"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn unseen_values_fall_back_to_the_internal_label() {
        let tree = train(&scenario(), 1);
        assert_eq!(tree.classify(&Record::from(vec!["a3", "b1", "?"])), "N");
        assert_eq!(tree.classify(&Record::from(Vec::<String>::new())), "N");
        assert_eq!(tree.classify(&Record::from(vec!["a1", "b9"])), "Y");
    }

    #[test]
    fn max_depth_parses_from_text() {
        assert_eq!("3".parse::<TrainConfig>().unwrap().max_depth, 3);
        assert!(matches!(
            "-1".parse::<TrainConfig>(),
            Err(TreeError::InvalidDepth(_))
        ));
        assert!("deep".parse::<TrainConfig>().is_err());
    }

    #[test]
    fn trained_tree_is_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DecisionTree>();

        let data = scenario();
        let tree = train(&data, 2);
        let expected = tree.predict(data.records());
        let (tree, data) = (&tree, &data);
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(move || tree.predict(data.records())))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    fn table() -> impl Strategy<Value = (usize, Vec<(Vec<bool>, usize)>)> {
        (1usize..5).prop_flat_map(|width| {
            (
                Just(width),
                prop::collection::vec(
                    (prop::collection::vec(any::<bool>(), width), 0usize..3),
                    1..30,
                ),
            )
        })
    }

    fn build(width: usize, rows: &[(Vec<bool>, usize)]) -> Dataset {
        let mut names: Vec<String> = (0..width).map(|i| format!("f{}", i)).collect();
        names.push("label".to_owned());
        let schema = Arc::new(AttributeSchema::new(names).unwrap());
        let records = rows
            .iter()
            .map(|(flags, label)| {
                let mut fields: Vec<String> = flags
                    .iter()
                    .enumerate()
                    .map(|(i, flag)| format!("{}{}", if *flag { "t" } else { "f" }, i))
                    .collect();
                fields.push(["x", "y", "z"][*label].to_owned());
                Record::new(fields)
            })
            .collect();
        Dataset::new(schema, records).unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_tree_respects_structure((width, rows) in table(), max_depth in 0usize..6) {
            let data = build(width, &rows);
            let tree = train(&data, max_depth);
            prop_assert!(tree.root().height() <= max_depth);
            for node in nodes(tree.root()) {
                prop_assert!(!node.class_label().is_empty());
                if let Some(split) = node.split() {
                    prop_assert!(split.branches().count() > 0);
                    if let (Some(left), Some(right)) = (&split.left, &split.right) {
                        prop_assert_ne!(&left.value, &right.value);
                    }
                    for branch in split.branches() {
                        prop_assert_eq!(branch.node.depth(), node.depth() + 1);
                        prop_assert!(branch.node.split().map_or(true, |s| s.attribute != split.attribute));
                    }
                }
            }
        }

        #[test]
        fn prop_training_and_prediction_are_deterministic((width, rows) in table(), max_depth in 0usize..6) {
            let data = build(width, &rows);
            let first = train(&data, max_depth);
            let second = train(&data, max_depth);
            prop_assert_eq!(&first, &second);
            for record in data.records() {
                prop_assert_eq!(first.classify(record), first.classify(record));
            }
        }
    }
}
