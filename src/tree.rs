//! Tree
//!
//! Growing, evaluating, and serializing ID3 decision trees.
use crate::data::Dataset;
use crate::errors::ArbolError;
use crate::node::Node;
use crate::splitter::{best_split, count_positive, partition};
use crate::utils::majority_label;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::fs;

/// A fitted ID3 decision tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Root of the owned node hierarchy.
    pub root: Node,
    /// The attribute names the tree was grown with, for display.
    pub attribute_names: Vec<String>,
}

impl DecisionTree {
    /// Grow a tree over every row of `data` by recursive information-gain
    /// partitioning.
    ///
    /// * `data` - The validated training table.
    ///
    /// Fails with [`ArbolError::EmptyDataset`] when `data` has no rows.
    pub fn fit(data: &Dataset) -> Result<Self, ArbolError> {
        if data.n_rows() == 0 {
            return Err(ArbolError::EmptyDataset);
        }
        let subset = data.full_subset();
        let attributes = (0..data.n_attributes()).collect::<Vec<usize>>();
        let root = grow(data, subset, attributes)?;
        debug!(
            "grew a tree with {} leaves at depth {}",
            root.n_leaves(),
            root.depth()
        );
        Ok(DecisionTree {
            root,
            attribute_names: data.attribute_names().to_vec(),
        })
    }

    /// Predict the class label for a single row of attribute values.
    ///
    /// * `row` - Attribute values indexed by column; a trailing class
    ///   label, if present, is ignored.
    pub fn predict_row(&self, row: &[u8]) -> bool {
        self.root.predict(row)
    }

    /// Predict class labels for every row of `data`.
    pub fn predict(&self, data: &Dataset) -> Vec<bool> {
        (0..data.n_rows())
            .into_par_iter()
            .map(|i| self.root.predict(data.get_row(i)))
            .collect()
    }

    /// Count predictions that match each row's own class label.
    /// Returns `(correct, total)`.
    pub fn evaluate(&self, data: &Dataset) -> (usize, usize) {
        let correct = (0..data.n_rows())
            .into_par_iter()
            .filter(|&i| self.root.predict(data.get_row(i)) == data.label(i))
            .count();
        (correct, data.n_rows())
    }

    /// Walk the tree depth first, the 1-branch before the 0-branch,
    /// yielding one rendered line per visited node. The caller decides
    /// where the lines go; [`DecisionTree::save_text`] and the `Display`
    /// impl are the two consumers in this crate.
    pub fn render(&self) -> Render<'_> {
        Render {
            stack: vec![Item::Visit(0, &self.root)],
        }
    }

    /// Dump the tree as a json object.
    pub fn json_dump(&self) -> Result<String, ArbolError> {
        match serde_json::to_string(self) {
            Ok(s) => Ok(s),
            Err(e) => Err(ArbolError::UnableToWrite(e.to_string())),
        }
    }

    /// Load a tree from a json string.
    ///
    /// * `json_str` - String object, which can be serialized to json.
    pub fn from_json(json_str: &str) -> Result<Self, ArbolError> {
        match serde_json::from_str::<DecisionTree>(json_str) {
            Ok(t) => Ok(t),
            Err(e) => Err(ArbolError::UnableToRead(e.to_string())),
        }
    }

    /// Save the tree as a json object to a file.
    ///
    /// * `path` - Path to save the tree.
    pub fn save(&self, path: &str) -> Result<(), ArbolError> {
        let model = self.json_dump()?;
        match fs::write(path, model) {
            Err(e) => Err(ArbolError::UnableToWrite(e.to_string())),
            Ok(_) => Ok(()),
        }
    }

    /// Load a tree from a path to a json tree object.
    ///
    /// * `path` - Path to load the tree from.
    pub fn load(path: &str) -> Result<Self, ArbolError> {
        let json_str = match fs::read_to_string(path) {
            Ok(s) => Ok(s),
            Err(e) => Err(ArbolError::UnableToRead(e.to_string())),
        }?;
        Self::from_json(&json_str)
    }

    /// Write the human-readable model text to a file.
    ///
    /// * `path` - Path to save the rendered model.
    pub fn save_text(&self, path: &str) -> Result<(), ArbolError> {
        match fs::write(path, self.to_string()) {
            Err(e) => Err(ArbolError::UnableToWrite(e.to_string())),
            Ok(_) => Ok(()),
        }
    }
}

/// Recursive ID3 partitioning over an owned subset and attribute set.
///
/// Base cases are checked in a fixed order: a pure subset collapses to a
/// leaf, an exhausted attribute set yields the majority label, and only
/// then is the max-gain attribute selected and split on. A split side with
/// no rows becomes a majority-label leaf of the subset being split, on
/// both sides alike.
fn grow(data: &Dataset, subset: Vec<usize>, mut attributes: Vec<usize>) -> Result<Node, ArbolError> {
    let total = subset.len();
    debug_assert!(total > 0, "grow called with an empty subset");
    let num_positive = count_positive(data, &subset);

    if num_positive == 0 {
        return Ok(Node::leaf(false));
    }
    if num_positive == total {
        return Ok(Node::leaf(true));
    }
    if attributes.is_empty() {
        return Ok(Node::leaf(majority_label(num_positive, total)));
    }

    let best = match best_split(data, &subset, &attributes) {
        Some(a) => a,
        None => return Err(ArbolError::NoSplitCandidate(attributes.len())),
    };
    let (ones, zeros) = partition(data, &subset, best);

    // Both children receive the same attribute set, reduced once.
    attributes.retain(|&a| a != best);
    let fallback = majority_label(num_positive, total);

    let left = if ones.is_empty() {
        Node::leaf(fallback)
    } else {
        grow(data, ones, attributes.clone())?
    };
    let right = if zeros.is_empty() {
        Node::leaf(fallback)
    } else {
        grow(data, zeros, attributes)?
    };

    let name = data.attribute_names()[best].clone();
    Ok(Node::decision(best, name, left, right))
}

/// One line of the rendered model text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLine {
    /// Depth of the visited node, which is also the indentation width.
    pub depth: usize,
    /// Line text, without the indentation prefix.
    pub text: String,
}

enum Item<'a> {
    Visit(usize, &'a Node),
    Line(usize, String),
}

/// Lazy depth-first line iterator over a tree; see [`DecisionTree::render`].
pub struct Render<'a> {
    stack: Vec<Item<'a>>,
}

impl<'a> Iterator for Render<'a> {
    type Item = RenderLine;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Item::Line(depth, text) => return Some(RenderLine { depth, text }),
                Item::Visit(depth, node) => match node {
                    Node::Leaf { label } => {
                        return Some(RenderLine {
                            depth,
                            text: Node::label_text(*label).to_string(),
                        })
                    }
                    Node::Decision {
                        name, left, right, ..
                    } => {
                        // Pushed in reverse so the 1-branch renders first.
                        self.stack.push(Item::Visit(depth + 1, right.as_ref()));
                        self.stack.push(Item::Line(depth, format!("{name} = 0 : ")));
                        self.stack.push(Item::Visit(depth + 1, left.as_ref()));
                        self.stack.push(Item::Line(depth, format!("{name} = 1 : ")));
                    }
                },
            }
        }
    }
}

impl Display for DecisionTree {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{}{}", "|".repeat(line.depth), line.text)?;
        }
        Ok(())
    }
}
