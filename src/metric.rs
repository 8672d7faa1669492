use crate::constants::N_CLASSES;
use crate::data::Datapoint;
use crate::errors::Id3Error;
use crate::tree::DTree;

/// Score a built tree on labeled examples.
///
/// Returns `(total, accuracy)` where `accuracy` is the fraction of examples
/// whose predicted class equals their label.
///
/// * `tree` - A built decision tree.
/// * `examples` - Labeled examples to score; must not be empty.
/// * `parallel` - Classify in parallel.
pub fn accuracy(tree: &DTree, examples: &[Datapoint], parallel: bool) -> Result<(usize, f64), Id3Error> {
    if examples.is_empty() {
        return Err(Id3Error::InvalidInput("no examples to score".to_string()));
    }
    let preds = tree.classify_all(examples, parallel)?;
    let correct = preds
        .iter()
        .zip(examples.iter())
        .filter(|(p, e)| **p == e.classification)
        .count();
    Ok((examples.len(), correct as f64 / examples.len() as f64))
}

/// Count predictions per true class.
///
/// Entry `[t][p]` is the number of examples of class `t` predicted as `p`.
pub fn confusion_matrix(tree: &DTree, examples: &[Datapoint]) -> Result<[[usize; N_CLASSES]; N_CLASSES], Id3Error> {
    if examples.is_empty() {
        return Err(Id3Error::InvalidInput("no examples to score".to_string()));
    }
    let mut matrix = [[0; N_CLASSES]; N_CLASSES];
    for e in examples {
        let p = tree.classify(e)?;
        matrix[e.classification as usize][p as usize] += 1;
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::read_dataset;
    use approx::assert_relative_eq;

    #[test]
    fn test_accuracy_on_files() {
        let train = read_dataset("resources/train.dat").unwrap();
        let test = read_dataset("resources/test.dat").unwrap();
        let train_examples = train.examples.clone();

        let mut tree = DTree::new(train);
        let root = tree.build_tree().unwrap();
        assert_eq!(root.splitting_param, Some(0));
        assert_eq!(tree.n_nodes(), 9);
        assert_eq!(tree.n_leaves(), 6);
        assert_eq!(tree.depth(), 2);

        let (total, acc) = accuracy(&tree, &train_examples, false).unwrap();
        assert_eq!(total, 24);
        assert_relative_eq!(acc, 1.0);

        let (total, acc) = accuracy(&tree, &test.examples, true).unwrap();
        assert_eq!(total, 16);
        assert_relative_eq!(acc, 0.75);

        // Humidity 1 never reached the outlook 1 branch in training, so those
        // examples fall back to the global majority, class 0.
        let matrix = confusion_matrix(&tree, &test.examples).unwrap();
        assert_eq!(matrix, [[9, 0, 0], [4, 0, 0], [0, 0, 3]]);
    }

    #[test]
    fn test_accuracy_errors() {
        let train = read_dataset("resources/train.dat").unwrap();
        let probe = train.examples[0].clone();
        let mut tree = DTree::new(train);
        assert_eq!(accuracy(&tree, &[probe.clone()], false), Err(Id3Error::UninitializedTree));
        tree.build_tree().unwrap();
        assert!(matches!(accuracy(&tree, &[], false), Err(Id3Error::InvalidInput(_))));
        assert!(matches!(confusion_matrix(&tree, &[]), Err(Id3Error::InvalidInput(_))));
        assert_eq!(confusion_matrix(&tree, &[probe]).unwrap().iter().flatten().sum::<usize>(), 1);
    }
}
