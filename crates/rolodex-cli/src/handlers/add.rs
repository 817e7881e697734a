use crate::dialog::{self, DialogMode};
use crate::session::Session;
use crate::ui::console::Console;
use anyhow::Result;
use rolodex_store::ContactBook;
use rolodex_types::Contact;
use std::io::{BufRead, Write};

/// Collect a new contact; anything with at least one filled field is
/// added and the book is saved
pub fn handle<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &mut ContactBook,
    session: &mut Session,
) -> Result<()> {
    session.reset(book);
    console.writeln("\nNew contact:------------------------")?;

    let fields = dialog::collect_contact_fields(console, DialogMode::New)?;
    if fields.is_blank() {
        console.writeln("Contact must contain at least one filled field")?;
        return Ok(());
    }

    book.add_contact(Contact::new(fields));
    book.save()?;
    console.writeln("Contacts saved\n")?;
    Ok(())
}
