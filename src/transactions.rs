use std::{
    collections::HashMap,
    fs::File,
    io::{self, BufRead, BufReader},
    mem,
    path::Path,
};

use itertools::Itertools;
use log::info;

use crate::{
    errors::AprioriError,
    misc::log::targets,
    types::{ItemId, ItemName},
};

/// Item names, indexed by [ItemId].
///
/// Names are kept sorted so that id order and name order agree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    names: Vec<ItemName>,
}

impl Inventory {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, id: ItemId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn id(&self, name: &str) -> Option<ItemId> {
        self.names
            .binary_search_by(|probe| probe.as_str().cmp(name))
            .ok()
    }

    /// Names of the items in `itemset`, in itemset order.
    pub fn names(&self, itemset: &[ItemId]) -> Vec<&str> {
        itemset.iter().filter_map(|&id| self.name(id)).collect()
    }

    /// `a,b,c` form used in reports.
    pub fn format(&self, itemset: &[ItemId]) -> String {
        self.names(itemset).iter().join(",")
    }
}

/// One basket, as the sorted ids of its distinct items.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    items: Vec<ItemId>,
}

impl Transaction {
    fn from_ids(ids: impl IntoIterator<Item = ItemId>) -> Self {
        let mut items: Vec<ItemId> = ids.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        items.shrink_to_fit();
        Transaction { items }
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.binary_search(&item).is_ok()
    }

    /// Whether the sorted `itemset` is a subset of this transaction.
    pub fn contains_all(&self, itemset: &[ItemId]) -> bool {
        if itemset.len() > self.items.len() {
            return false;
        }
        let mut items = self.items.iter();
        itemset
            .iter()
            .all(|item| items.find(|&candidate| candidate >= item) == Some(item))
    }

    pub fn items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().copied()
    }
}

/// Assigns ids in first-seen order while transactions stream in, then
/// renumbers them by name once every name is known.
#[derive(Default)]
struct Interner {
    ids: HashMap<ItemName, ItemId>,
    names: Vec<ItemName>,
    transactions: Vec<Vec<ItemId>>,
}

impl Interner {
    fn push<S: AsRef<str>>(&mut self, raw_transaction: impl IntoIterator<Item = S>) {
        let transaction: Vec<ItemId> = raw_transaction
            .into_iter()
            .map(|name| self.intern(name.as_ref()))
            .collect();
        self.transactions.push(transaction);
    }

    fn intern(&mut self, name: &str) -> ItemId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_owned());
        self.ids.insert(name.to_owned(), id);
        id
    }

    fn finish(self) -> TransactionStore {
        let Interner {
            mut names,
            transactions,
            ..
        } = self;

        let order: Vec<ItemId> = (0..names.len())
            .sorted_by(|&a, &b| names[a].cmp(&names[b]))
            .collect();
        let mut renumber = vec![0; order.len()];
        for (id, &first_seen) in order.iter().enumerate() {
            renumber[first_seen] = id;
        }

        let inventory = Inventory {
            names: order
                .iter()
                .map(|&first_seen| mem::take(&mut names[first_seen]))
                .collect(),
        };
        let transactions = transactions
            .into_iter()
            .map(|transaction| {
                Transaction::from_ids(transaction.into_iter().map(|id| renumber[id]))
            })
            .collect();

        TransactionStore {
            transactions,
            inventory,
        }
    }
}

/// Read-only transaction database shared by every pass of the miner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    inventory: Inventory,
}

impl TransactionStore {
    pub fn from_raw<T, S>(raw_transactions: impl IntoIterator<Item = T>) -> Self
    where
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut interner = Interner::default();
        for raw_transaction in raw_transactions {
            interner.push(raw_transaction);
        }
        interner.finish()
    }

    /// One transaction per line, items separated by whitespace.
    pub fn load<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut interner = Interner::default();
        for line in reader.lines() {
            interner.push(line?.split_whitespace());
        }
        let store = interner.finish();

        info!(
            target: targets::TRANSACTIONS,
            "Loaded {} transactions over {} items",
            store.len(),
            store.inventory.len()
        );

        Ok(store)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AprioriError> {
        let path = path.as_ref();
        let unavailable = |source| AprioriError::InputUnavailable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unavailable)?;
        Self::load(BufReader::new(file)).map_err(unavailable)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn item_id(&self, name: &str) -> Option<ItemId> {
        self.inventory.id(name)
    }
}
