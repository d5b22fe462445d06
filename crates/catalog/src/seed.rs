//! Startup catalog contents.

use crate::Book;

const SEED: &[(&str, &str, &str)] = &[
    ("12345", "The Great Gatsby", "F. Scott Fitzgerald"),
    ("23456", "To Kill a Mockingbird", "Harper Lee"),
    ("34567", "1984", "George Orwell"),
    ("45678", "Pride and Prejudice", "Jane Austen"),
    ("56789", "The Catcher in the Rye", "J.D. Salinger"),
    ("67890", "The Hobbit", "J.R.R. Tolkien"),
    ("78901", "Moby Dick", "Herman Melville"),
    ("89012", "War and Peace", "Leo Tolstoy"),
    ("90123", "The Odyssey", "Homer"),
    ("01234", "Ulysses", "James Joyce"),
    ("11234", "The Brothers Karamazov", "Fyodor Dostoevsky"),
    ("12234", "The Iliad", "Homer"),
    ("13234", "Crime and Punishment", "Fyodor Dostoevsky"),
    ("14234", "Anna Karenina", "Leo Tolstoy"),
    ("15234", "Brave New World", "Aldous Huxley"),
    ("16234", "Wuthering Heights", "Emily Brontë"),
    ("17234", "The Divine Comedy", "Dante Alighieri"),
    ("18234", "One Hundred Years of Solitude", "Gabriel García Márquez"),
    ("19234", "The Sound and the Fury", "William Faulkner"),
    ("20234", "Madame Bovary", "Gustave Flaubert"),
];

/// The fixed list of books the service starts with, in catalog order.
pub fn seed_books() -> Vec<Book> {
    SEED.iter()
        .map(|(isbn, title, author)| Book::new(*isbn, *title, *author))
        .collect()
}
