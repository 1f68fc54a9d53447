//! Tabular rendering of the user list

use prettytable::format::consts::FORMAT_BOX_CHARS;
use prettytable::{Cell, Row, Table};

use crate::core::types::User;

/// Build a grid with an `(index)` column followed by `name` and `age`
pub fn users_table(users: &[User]) -> Table {
    let mut table = Table::new();
    table.set_format(*FORMAT_BOX_CHARS);
    table.set_titles(Row::new(vec![
        Cell::new("(index)"),
        Cell::new("name"),
        Cell::new("age"),
    ]));

    for (index, user) in users.iter().enumerate() {
        table.add_row(Row::new(vec![
            Cell::new(&index.to_string()),
            Cell::new(&user.name),
            Cell::new(&user.age.to_string()),
        ]));
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_one_row_per_user() {
        let users = vec![User::new("Anna", 30), User::new("Max", 20)];
        let table = users_table(&users);

        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_table_renders_headers_and_rows_in_order() {
        let users = vec![User::new("Anna", 30), User::new("Max", 20)];
        let rendered = users_table(&users).to_string();

        assert!(rendered.contains("(index)"));
        assert!(rendered.contains("name"));
        assert!(rendered.contains("age"));

        let anna = rendered.find("Anna").unwrap();
        let max = rendered.find("Max").unwrap();
        assert!(anna < max);
        assert!(rendered.contains("30"));
        assert!(rendered.contains("20"));
    }

    #[test]
    fn test_table_keeps_empty_names() {
        let users = vec![User::new("", 5)];
        let table = users_table(&users);

        assert_eq!(table.len(), 1);
        assert!(table.to_string().contains('5'));
    }
}
