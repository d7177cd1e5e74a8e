use crate::decision::{DecisionTree, TreeNode};
use crate::distribution::Distribution;
use itertools::Itertools;

/// Text outline of a trained tree, one line per node, depth first:
///
/// ```text
/// [1 Y/3 N]
/// | A = a1: [1 Y/1 N]
/// | A = a2: [0 Y/2 N]
/// ```
///
/// Counts list every label seen at the root, in first-seen order, so that
/// sibling lines line up.
pub fn render(tree: &DecisionTree) -> String {
    let labels: Vec<&str> = tree.root().distribution().iter().map(|(label, _)| label).collect();
    let mut out = format!("{}\n", counts(&labels, tree.root().distribution()));
    outline(tree, tree.root(), &labels, &mut out);
    out
}

fn outline(tree: &DecisionTree, node: &TreeNode, labels: &[&str], out: &mut String) {
    let split = match node.split() {
        Some(split) => split,
        None => return,
    };
    let name = tree.schema().name(split.attribute).unwrap_or("?");
    for branch in split.branches() {
        out.push_str(&"| ".repeat(branch.node.depth()));
        out.push_str(&format!(
            "{} = {}: {}\n",
            name,
            branch.value,
            counts(labels, branch.node.distribution())
        ));
        outline(tree, &branch.node, labels, out);
    }
}

fn counts(labels: &[&str], distribution: &Distribution) -> String {
    format!(
        "[{}]",
        labels
            .iter()
            .map(|label| format!("{} {}", distribution.count(label), label))
            .join("/")
    )
}
