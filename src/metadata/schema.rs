use super::*;

/// Table name → field names, as last loaded from the metadata collaborator.
///
/// Table names are case-sensitive. Tables keep the order they were inserted in
/// and each field list keeps the order it was received in. A loaded map is
/// never mutated in place; a reload builds a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaMap {
    fields: HashMap<String, Vec<String>>,
    // Preserve insertion order of tables.
    table_order: Vec<String>,
}

impl SchemaMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or overwrite) a table with its ordered field list.
    ///
    /// Overwriting keeps the table's original position.
    pub fn insert_table(
        &mut self,
        name: impl Into<String>,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) {
        let name = name.into();
        let fields = fields.into_iter().map(Into::into).collect();
        if self.fields.insert(name.clone(), fields).is_none() {
            self.table_order.push(name);
        }
    }

    /// Append a single field, creating the table if it is not known yet.
    pub fn push_field(&mut self, table: impl Into<String>, field: impl Into<String>) {
        let table = table.into();
        if !self.fields.contains_key(&table) {
            self.table_order.push(table.clone());
        }
        self.fields.entry(table).or_default().push(field.into());
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Fields of `table` in load order.
    pub fn fields(&self, table: &str) -> Option<&[String]> {
        self.fields.get(table).map(Vec::as_slice)
    }

    /// Table names in load order.
    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.table_order.iter().map(String::as_str)
    }

    /// `(table, fields)` pairs in load order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.table_order
            .iter()
            .filter_map(|t| self.fields.get(t).map(|f| (t.as_str(), f.as_slice())))
    }

    pub fn len(&self) -> usize {
        self.table_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table_order.is_empty()
    }
}

impl<K, I> FromIterator<(K, I)> for SchemaMap
where
    K: Into<String>,
    I: IntoIterator,
    I::Item: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut map = SchemaMap::new();
        for (table, fields) in iter {
            map.insert_table(table, fields);
        }
        map
    }
}
