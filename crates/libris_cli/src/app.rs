//! Interactive coordinator loop.
//!
//! # Responsibility
//! - Drive the menu loop and dispatch catalog operations.
//! - Own input parsing and error translation.
//!
//! # Invariants
//! - A failed integer coercion reports an error and mutates nothing.
//! - Every transition returns to the menu, except exit and end-of-input.

use libris_core::{BookId, BookRepository, CatalogService};
use log::info;

use crate::input::parse_integer;
use crate::view::View;

/// Menu coordinator: the sole caller of catalog and view.
pub struct App<R: BookRepository, V: View> {
    catalog: CatalogService<R>,
    view: V,
}

impl<R: BookRepository, V: View> App<R, V> {
    pub fn new(catalog: CatalogService<R>, view: V) -> Self {
        Self { catalog, view }
    }

    /// Runs the menu loop until exit is chosen or input ends.
    pub fn run(&mut self) {
        info!("event=session_start module=app status=ok");
        self.view.welcome(libris_core::core_version());

        loop {
            let Some(choice) = self.view.menu_choice() else {
                break;
            };
            match choice.trim() {
                "1" => self.add_book(),
                "2" => self.find_book_by_id(),
                "3" => self.find_book_by_title(),
                "4" => self.list_books(),
                "5" => self.remove_book(),
                "0" => {
                    self.view.show_message("Shutting down.");
                    break;
                }
                _ => self.view.show_message("Invalid option."),
            }
        }

        info!("event=session_end module=app status=ok");
    }

    fn add_book(&mut self) {
        let Some(input) = self.view.book_input() else {
            return;
        };
        match parse_integer::<i32>("year", &input.year) {
            Ok(year) => {
                let id = self.catalog.add_book(&input.title, &input.author, year);
                self.view
                    .show_message(&format!("Book added with id {id}."));
            }
            Err(err) => self.view.show_message(&err.to_string()),
        }
    }

    fn find_book_by_id(&mut self) {
        let Some(raw_id) = self.view.book_id() else {
            return;
        };
        match parse_integer::<BookId>("id", &raw_id) {
            Ok(id) => {
                let book = self.catalog.get_book(id);
                self.view.show_book(book.as_ref());
            }
            Err(err) => self.view.show_message(&err.to_string()),
        }
    }

    fn find_book_by_title(&mut self) {
        let Some(query) = self.view.title_query() else {
            return;
        };
        let matches = self.catalog.find_by_title(&query);
        self.view.show_books(&matches);
    }

    fn list_books(&mut self) {
        let books = self.catalog.list_books();
        self.view.show_books(&books);
    }

    fn remove_book(&mut self) {
        let Some(raw_id) = self.view.book_id() else {
            return;
        };
        match parse_integer::<BookId>("id", &raw_id) {
            Ok(id) => {
                if self.catalog.remove_book(id) {
                    self.view.show_message(&format!("Book {id} removed."));
                } else {
                    self.view.show_message(&format!("Book {id} not found."));
                }
            }
            Err(err) => self.view.show_message(&err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use libris_core::{Book, CatalogService, MemoryBookRepository};

    use super::App;
    use crate::view::{RawBookInput, View};

    /// Scripted stand-in for the terminal: feeds canned input lines and
    /// records everything the coordinator asks it to render.
    struct ScriptedView {
        inputs: VecDeque<String>,
        output: Vec<String>,
    }

    impl ScriptedView {
        fn with_inputs(inputs: &[&str]) -> Self {
            Self {
                inputs: inputs.iter().map(|line| line.to_string()).collect(),
                output: Vec::new(),
            }
        }

        fn next_input(&mut self) -> Option<String> {
            self.inputs.pop_front()
        }
    }

    impl View for ScriptedView {
        fn welcome(&mut self, version: &str) {
            self.output.push(format!("welcome {version}"));
        }

        fn menu_choice(&mut self) -> Option<String> {
            self.next_input()
        }

        fn book_input(&mut self) -> Option<RawBookInput> {
            let title = self.next_input()?;
            let author = self.next_input()?;
            let year = self.next_input()?;
            Some(RawBookInput {
                title,
                author,
                year,
            })
        }

        fn book_id(&mut self) -> Option<String> {
            self.next_input()
        }

        fn title_query(&mut self) -> Option<String> {
            self.next_input()
        }

        fn show_book(&mut self, book: Option<&Book>) {
            match book {
                Some(book) => self.output.push(format!("book #{} {}", book.id, book.title)),
                None => self.output.push("not found".to_string()),
            }
        }

        fn show_books(&mut self, books: &[Book]) {
            if books.is_empty() {
                self.output.push("empty".to_string());
            } else {
                let titles: Vec<&str> = books.iter().map(|book| book.title.as_str()).collect();
                self.output.push(format!("list: {}", titles.join(", ")));
            }
        }

        fn show_message(&mut self, message: &str) {
            self.output.push(message.to_string());
        }
    }

    fn run_session(inputs: &[&str]) -> Vec<String> {
        let catalog = CatalogService::new(MemoryBookRepository::new());
        let mut app = App::new(catalog, ScriptedView::with_inputs(inputs));
        app.run();
        app.view.output
    }

    #[test]
    fn exit_option_terminates_with_farewell() {
        let output = run_session(&["0"]);
        assert_eq!(output.last().map(String::as_str), Some("Shutting down."));
    }

    #[test]
    fn end_of_input_terminates_the_loop() {
        let output = run_session(&["4"]);
        assert!(output.contains(&"empty".to_string()));
    }

    #[test]
    fn invalid_menu_choice_reports_invalid_option() {
        let output = run_session(&["9", "0"]);
        assert!(output.contains(&"Invalid option.".to_string()));
    }

    #[test]
    fn add_reports_assigned_id() {
        let output = run_session(&["1", "Dune", "Herbert", "1965", "0"]);
        assert!(output.contains(&"Book added with id 1.".to_string()));
    }

    #[test]
    fn add_with_bad_year_reports_error_and_mutates_nothing() {
        let output = run_session(&["1", "Dune", "Herbert", "ninteen sixty-five", "4", "0"]);
        assert!(output
            .contains(&"Error: year must be an integer, got `ninteen sixty-five`.".to_string()));
        assert!(output.contains(&"empty".to_string()));
    }

    #[test]
    fn find_by_id_shows_record_or_not_found() {
        let output = run_session(&[
            "1", "Dune", "Herbert", "1965", // add
            "2", "1", // exact hit
            "2", "7", // miss
            "0",
        ]);
        assert!(output.contains(&"book #1 Dune".to_string()));
        assert!(output.contains(&"not found".to_string()));
    }

    #[test]
    fn find_by_id_with_bad_id_reports_error() {
        let output = run_session(&["2", "first", "0"]);
        assert!(output.contains(&"Error: id must be an integer, got `first`.".to_string()));
    }

    #[test]
    fn title_search_is_case_insensitive_and_partial() {
        let output = run_session(&[
            "1", "The Great Gatsby", "Fitzgerald", "1925", // add
            "3", "GREAT", // search
            "3", "gatsby", // search
            "3", "solaris", // miss
            "0",
        ]);
        let hits = output
            .iter()
            .filter(|line| line.as_str() == "list: The Great Gatsby")
            .count();
        assert_eq!(hits, 2);
        assert!(output.contains(&"empty".to_string()));
    }

    #[test]
    fn remove_reports_success_then_not_found() {
        let output = run_session(&[
            "1", "Dune", "Herbert", "1965", // add
            "5", "1", // remove
            "5", "1", // already gone
            "0",
        ]);
        assert!(output.contains(&"Book 1 removed.".to_string()));
        assert!(output.contains(&"Book 1 not found.".to_string()));
    }

    #[test]
    fn remove_with_bad_id_reports_error() {
        let output = run_session(&["5", "last", "0"]);
        assert!(output.contains(&"Error: id must be an integer, got `last`.".to_string()));
    }

    #[test]
    fn full_session_keeps_later_records_after_removal() {
        let output = run_session(&[
            "1", "Dune", "Herbert", "1965", // id 1
            "1", "1984", "Orwell", "1949", // id 2
            "5", "1", // remove id 1
            "2", "1", // lookup removed id
            "4", // list
            "0",
        ]);
        assert!(output.contains(&"Book added with id 1.".to_string()));
        assert!(output.contains(&"Book added with id 2.".to_string()));
        assert!(output.contains(&"Book 1 removed.".to_string()));
        assert!(output.contains(&"not found".to_string()));
        assert!(output.contains(&"list: 1984".to_string()));
    }

    #[test]
    fn menu_choice_is_trimmed_before_dispatch() {
        let output = run_session(&[" 4 ", "0"]);
        assert!(output.contains(&"empty".to_string()));
    }
}
