use libris_core::Book;

#[test]
fn book_new_sets_fields() {
    let book = Book::new(1, "Dune", "Herbert", 1965);

    assert_eq!(book.id, 1);
    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Herbert");
    assert_eq!(book.year, 1965);
}

#[test]
fn book_serialization_uses_expected_wire_fields() {
    let book = Book::new(7, "1984", "Orwell", 1949);

    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["title"], "1984");
    assert_eq!(json["author"], "Orwell");
    assert_eq!(json["year"], 1949);

    let decoded: Book = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, book);
}
