//! Built-in catalog

use crate::book::Book;

/// The ten records a store starts with when no catalog file is given
pub(crate) fn builtin() -> Vec<Book> {
    vec![
        Book::new(1, "Harry Potter", "JK Rowling", 1980),
        Book::new(2, "King Athur", "Ham Hames", 1940),
        Book::new(3, "Sloppy Shlop", "Shooter Mcgavin", 1950),
        Book::new(4, "Drive Home", "Randy Moolton", 1960),
        Book::new(5, "Cops", "Officer Toodles", 1990),
        Book::new(6, "Screen Dismount", "Hiya Byeya", 2022),
        Book::new(7, "Potter Lofter", "Rowling Money", 1924),
        Book::new(8, "Running Low", "Oil Gasoline", 1830),
        Book::new(9, "Second Coming", "Lord Christ", 1709),
        Book::new(10, "Bunion Onion", "Strawberry Pie", 1410),
    ]
}
