use library_core::{Author, BookId, Library};

fn bronte_and_lee() -> (Author, Author, Vec<BookId>) {
    let mut bronte = Author::new("Charlotte", "Bronte");
    let mut lee = Author::new("Harper", "Lee");

    let books = vec![
        bronte.write("Jane Eyre", "October 16, 1847").id(),
        bronte.write("The Professor", "1857").id(),
        bronte.write("Villette", "1853").id(),
        lee.write("To Kill a Mockingbird", "July 11, 1960").id(),
    ];

    (bronte, lee, books)
}

fn book_ids(library: &Library) -> Vec<BookId> {
    library.books().iter().map(|book| book.id()).collect()
}

#[test]
fn new_library_is_empty() {
    let dpl = Library::new("Denver Public Library");

    assert_eq!(dpl.name(), "Denver Public Library");
    assert!(dpl.books().is_empty());
    assert!(dpl.authors().is_empty());
}

#[test]
fn books_follow_author_registration_then_write_order() {
    let (bronte, lee, expected_books) = bronte_and_lee();
    let expected_authors = vec![bronte.id(), lee.id()];

    let mut dpl = Library::new("Denver Public Library");
    assert!(dpl.add_author(bronte));
    assert!(dpl.add_author(lee));

    let authors: Vec<_> = dpl.authors().iter().map(|author| author.id()).collect();
    assert_eq!(authors, expected_authors);
    assert_eq!(book_ids(&dpl), expected_books);
}

#[test]
fn registration_order_drives_book_order() {
    let (bronte, lee, books) = bronte_and_lee();

    let mut dpl = Library::new("Denver Public Library");
    dpl.add_author(lee);
    dpl.add_author(bronte);

    assert_eq!(
        book_ids(&dpl),
        vec![books[3], books[0], books[1], books[2]]
    );
}

#[test]
fn duplicate_registration_is_ignored() {
    let (bronte, _lee, _books) = bronte_and_lee();
    let copy = bronte.clone();

    let mut dpl = Library::new("Denver Public Library");
    assert!(dpl.add_author(bronte));
    assert!(!dpl.add_author(copy));

    assert_eq!(dpl.authors().len(), 1);
    assert_eq!(dpl.books().len(), 3);
}

#[test]
fn books_written_after_registration_are_visible() {
    let (bronte, _lee, _books) = bronte_and_lee();
    let bronte_id = bronte.id();

    let mut dpl = Library::new("Denver Public Library");
    dpl.add_author(bronte);

    let shirley = dpl
        .author_mut(bronte_id)
        .expect("author should be registered")
        .write("Shirley", "October 26, 1849")
        .id();

    assert_eq!(book_ids(&dpl).last(), Some(&shirley));
    assert_eq!(dpl.book(shirley).map(|book| book.title()), Some("Shirley"));
}

#[test]
fn unregistered_author_books_are_invisible() {
    let (bronte, lee, books) = bronte_and_lee();
    let lee_id = lee.id();

    let mut dpl = Library::new("Denver Public Library");
    dpl.add_author(bronte);

    assert!(dpl.author(lee_id).is_none());
    assert!(dpl.book(books[3]).is_none());
    assert_eq!(dpl.books().len(), 3);
}
