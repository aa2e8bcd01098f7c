/// A target column and its rendered literal or expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub column: String,
    pub value: String,
}

/// Ordered `column → rendered value` list, unique by column name
/// (ASCII case-insensitive).
///
/// Setting a column again replaces its value in place; the first-seen
/// position and spelling of the column are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignments {
    entries: Vec<Assignment>,
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the value for `column`.
    pub fn set(&mut self, column: &str, value: String) {
        match self
            .entries
            .iter_mut()
            .find(|a| a.column.eq_ignore_ascii_case(column))
        {
            Some(existing) => existing.value = value,
            None => self.entries.push(Assignment {
                column: column.to_string(),
                value,
            }),
        }
    }

    /// Rendered value for `column`, if set.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.column.eq_ignore_ascii_case(column))
            .map(|a| a.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// `a, b, c`
    pub fn column_list(&self) -> String {
        self.join(|a| a.column.as_str())
    }

    /// `1, 'x', NULL`
    pub fn value_list(&self) -> String {
        self.join(|a| a.value.as_str())
    }

    /// `a=1, b='x'`
    pub fn set_list(&self) -> String {
        self.entries
            .iter()
            .map(|a| format!("{}={}", a.column, a.value))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn join<'a>(&'a self, f: impl Fn(&'a Assignment) -> &'a str) -> String {
        self.entries.iter().map(f).collect::<Vec<_>>().join(", ")
    }
}
