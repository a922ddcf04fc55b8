//! Menu entries offered by the console

/// Text printed before every prompt
pub const MENU: &str = "\nhow can we help you today? \n\
1. Add book\n\
2. Borrow book\n\
3. Return Book\n\
4. List books\n\
5. Show available books\n\
6. List borrowed books\n\
7. find book by author\n\
8. exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    BorrowBook,
    ReturnBook,
    ListBooks,
    ListAvailable,
    ListBorrowed,
    FindByAuthor,
    Exit,
}

impl MenuChoice {
    /// Parse the positional menu number typed by the user
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddBook),
            "2" => Some(MenuChoice::BorrowBook),
            "3" => Some(MenuChoice::ReturnBook),
            "4" => Some(MenuChoice::ListBooks),
            "5" => Some(MenuChoice::ListAvailable),
            "6" => Some(MenuChoice::ListBorrowed),
            "7" => Some(MenuChoice::FindByAuthor),
            "8" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}
