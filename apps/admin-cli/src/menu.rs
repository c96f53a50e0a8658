//! The fixed admin menu and its command codes.

/// Menu text, printed before every selection. No trailing newline: the
/// selection is typed on the same line.
pub const MENU: &str = "=== Product Admin Menu ===
1) List All Products
2) Add A Product
3) Delete A Product
4) Search For Product
5) Update A Product
0) Exit
Enter Your Selection: ";

/// One menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    ListAll,
    Add,
    Delete,
    Search,
    Update,
    Exit,
}

impl MenuOption {
    /// Maps a command code (`"0"`–`"5"`) to its option.
    ///
    /// The line must be exactly the code: `" 1"` is not a selection.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(MenuOption::ListAll),
            "2" => Some(MenuOption::Add),
            "3" => Some(MenuOption::Delete),
            "4" => Some(MenuOption::Search),
            "5" => Some(MenuOption::Update),
            "0" => Some(MenuOption::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(MenuOption::from_code("1"), Some(MenuOption::ListAll));
        assert_eq!(MenuOption::from_code("5"), Some(MenuOption::Update));
        assert_eq!(MenuOption::from_code("0"), Some(MenuOption::Exit));

        assert_eq!(MenuOption::from_code("6"), None);
        assert_eq!(MenuOption::from_code("01"), None);
        assert_eq!(MenuOption::from_code("list"), None);
        assert_eq!(MenuOption::from_code(""), None);
    }

    #[test]
    fn test_padded_codes_are_not_selections() {
        assert_eq!(MenuOption::from_code(" 1 "), None);
        assert_eq!(MenuOption::from_code("1 "), None);
        assert_eq!(MenuOption::from_code("\t0"), None);
    }

    #[test]
    fn test_menu_lists_every_code() {
        for code in ["1)", "2)", "3)", "4)", "5)", "0)"] {
            assert!(MENU.contains(code));
        }
        assert!(MENU.starts_with("=== Product Admin Menu ===\n"));
        assert!(MENU.ends_with("Enter Your Selection: "));
    }
}
