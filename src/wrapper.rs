use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{IntoPyDict, PyDict, PyFrozenSet};

use crate::{
    itemsets::Lattice, mine, rules::Rule, transactions::Inventory, MiningConfig,
};

#[pyclass(name = "Rule")]
#[derive(Clone)]
pub struct PyRule {
    #[pyo3(get)]
    antecedent: Vec<String>,
    #[pyo3(get)]
    consequent: Vec<String>,
    #[pyo3(get)]
    confidence: f32,
    #[pyo3(get)]
    lift: f32,
}

#[pymethods]
impl PyRule {
    fn __repr__(&self) -> String {
        format!(
            "{{{}}} -> {{{}}} (conf: {:.3}, lift: {:.3})",
            self.antecedent.join(", "),
            self.consequent.join(", "),
            self.confidence,
            self.lift
        )
    }
}

/// Apriori algorithm for association rules.
///
/// Returns `({size: {frozenset(items): count}}, [Rule])`.
#[pyfunction]
#[pyo3(signature = (transactions, min_support, min_confidence, max_len = None))]
pub fn apriori(
    py: Python,
    transactions: Vec<Vec<String>>,
    min_support: f32,
    min_confidence: f32,
    max_len: Option<usize>,
) -> PyResult<(Py<PyDict>, Vec<PyRule>)> {
    let mut config = MiningConfig::new(min_support, min_confidence)
        .map_err(|err| PyValueError::new_err(err.to_string()))?;
    if let Some(max_len) = max_len {
        config = config
            .with_max_len(max_len)
            .map_err(|err| PyValueError::new_err(err.to_string()))?;
    }

    let store = crate::TransactionStore::from_raw(transactions);
    let mined = py.allow_threads(|| mine(&store, &config));
    let inventory = store.inventory();

    let itemsets = convert_itemset_counts(py, &mined.lattice, inventory)?;
    let rules = convert_rules(&mined.rules, inventory);
    Ok((itemsets, rules))
}

fn convert_itemset_counts(
    py: Python,
    lattice: &Lattice,
    inventory: &Inventory,
) -> PyResult<Py<PyDict>> {
    let levels = PyDict::new(py);
    for (size, itemset_counts) in lattice.levels() {
        if itemset_counts.is_empty() {
            continue;
        }
        let py_itemset_counts = itemset_counts
            .iter()
            .map(|(itemset, &count)| {
                let set: Py<PyFrozenSet> = PyFrozenSet::new(py, &inventory.names(itemset))?.into();
                Ok((set, count))
            })
            .collect::<PyResult<Vec<(Py<PyFrozenSet>, u32)>>>()?
            .into_py_dict(py);
        levels.set_item(size, py_itemset_counts)?;
    }
    Ok(levels.into())
}

fn convert_rules(rules: &[Rule], inventory: &Inventory) -> Vec<PyRule> {
    let owned = |itemset: &[usize]| -> Vec<String> {
        inventory
            .names(itemset)
            .into_iter()
            .map(str::to_owned)
            .collect()
    };

    rules
        .iter()
        .map(|rule| PyRule {
            antecedent: owned(rule.get_antecedent()),
            consequent: owned(rule.get_consequent()),
            confidence: rule.confidence,
            lift: rule.lift,
        })
        .collect()
}
