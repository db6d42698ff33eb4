use std::collections::BTreeMap;
use std::io::Write;

/// Flat variable namespace for one program run. Unknown names read as 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolTable {
    variables: BTreeMap<String, i64>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable {
            variables: BTreeMap::new(),
        }
    }

    /// Returns the value bound to `name`, binding it to 0 first if it is unknown.
    pub fn get_or_insert(&mut self, name: &str) -> i64 {
        if let Some(value) = self.variables.get(name) {
            return *value;
        }

        self.variables.insert(name.to_owned(), 0);
        0
    }

    pub fn update(&mut self, name: &str, value: i64) {
        match self.variables.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.variables.insert(name.to_owned(), value);
            },
        }
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), *value))
    }

    /// Writes one ` name: value` line per binding, sorted by name.
    pub fn dump(&self, out: &mut impl Write) -> Result<(), std::io::Error> {
        for (name, value) in self.iter() {
            writeln!(out, " {}: {}", name, value)?;
        }

        Ok(())
    }
}
