//! Terminal presentation layer.
//!
//! # Responsibility
//! - Render the menu, prompts and results.
//! - Collect raw user input as text; no parsing, no business logic.
//!
//! # Invariants
//! - Input methods return exactly what the user typed; interpretation is
//!   the coordinator's job.
//! - End of input (Ctrl-D) and interrupts (Ctrl-C) surface as `None`.
//! - Rendering never panics.

use colored::Colorize;
use libris_core::Book;
use log::warn;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Raw field values collected for a new book, prior to any coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBookInput {
    pub title: String,
    pub author: String,
    pub year: String,
}

/// Presentation contract between the coordinator and the terminal.
///
/// Implementations return raw text (possibly empty or malformed) and
/// `None` once the input stream ends.
pub trait View {
    /// Shows the one-time session banner.
    fn welcome(&mut self, version: &str);
    /// Shows the main menu and returns the raw selected option.
    fn menu_choice(&mut self) -> Option<String>;
    /// Prompts for the fields of a new book.
    fn book_input(&mut self) -> Option<RawBookInput>;
    /// Prompts for a raw book identifier.
    fn book_id(&mut self) -> Option<String>;
    /// Prompts for a raw title search string.
    fn title_query(&mut self) -> Option<String>;
    /// Renders a single lookup result, or the not-found message.
    fn show_book(&mut self, book: Option<&Book>);
    /// Renders a list of books, or the empty-catalog message.
    fn show_books(&mut self, books: &[Book]);
    /// Renders a status or error message.
    fn show_message(&mut self, message: &str);
}

/// Interactive terminal view backed by a readline editor.
pub struct TerminalView {
    editor: DefaultEditor,
}

impl TerminalView {
    /// Creates a view with line editing and in-session history.
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    /// Reads one raw line, echoing `prompt` first.
    ///
    /// Ctrl-C and Ctrl-D end the input stream; other readline failures are
    /// logged and also end the stream rather than propagate.
    fn read(&mut self, prompt: &str) -> Option<String> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Some(line)
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!();
                None
            }
            Err(err) => {
                warn!("event=readline_failed module=view status=error error={err}");
                None
            }
        }
    }
}

impl View for TerminalView {
    fn welcome(&mut self, version: &str) {
        println!();
        println!("{}", format!("libris book catalog v{version}").bright_cyan().bold());
        println!(
            "{}",
            "Catalog contents live in memory for this session only.".dimmed()
        );
    }

    fn menu_choice(&mut self) -> Option<String> {
        println!();
        println!("{}", "===== Book Catalog =====".bright_cyan().bold());
        println!("  {} Add book", "1.".yellow());
        println!("  {} Find book by id", "2.".yellow());
        println!("  {} Find book by title", "3.".yellow());
        println!("  {} List all books", "4.".yellow());
        println!("  {} Remove book", "5.".yellow());
        println!("  {} Exit", "0.".yellow());
        self.read("Choose an option: ")
    }

    fn book_input(&mut self) -> Option<RawBookInput> {
        println!();
        println!("{}", "--- Register Book ---".bright_cyan());
        let title = self.read("Title: ")?;
        let author = self.read("Author: ")?;
        let year = self.read("Publication year: ")?;
        Some(RawBookInput {
            title,
            author,
            year,
        })
    }

    fn book_id(&mut self) -> Option<String> {
        println!();
        self.read("Book id: ")
    }

    fn title_query(&mut self) -> Option<String> {
        println!();
        self.read("Title to search: ")
    }

    fn show_book(&mut self, book: Option<&Book>) {
        println!();
        match book {
            Some(book) => println!("{}", render_book(book)),
            None => println!("{}", "Book not found.".yellow()),
        }
    }

    fn show_books(&mut self, books: &[Book]) {
        println!();
        if books.is_empty() {
            println!("{}", "No books registered.".yellow());
            return;
        }
        println!("{}", "--- Book List ---".bright_cyan());
        for book in books {
            println!("{}", render_book(book));
        }
    }

    fn show_message(&mut self, message: &str) {
        println!();
        println!("{message}");
    }
}

fn render_book(book: &Book) -> String {
    format!(
        "{} {} by {} ({})",
        format!("#{}", book.id).yellow(),
        book.title.bright_white(),
        book.author,
        book.year
    )
}
