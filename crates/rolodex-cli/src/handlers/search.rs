use crate::dialog::{self, DialogMode};
use crate::session::{PageMove, Session};
use crate::ui::console::Console;
use crate::ui::views;
use anyhow::Result;
use rolodex_store::ContactBook;
use rolodex_types::SearchCriteria;
use std::io::{BufRead, Write};

/// Collect search criteria and browse the filtered result
pub fn handle<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &ContactBook,
    session: &mut Session,
) -> Result<()> {
    session.reset(book);
    console.writeln("\nSearch:-----------------------------")?;

    let entered = dialog::collect_contact_fields(console, DialogMode::Search)?;
    let criteria = SearchCriteria::from_fields(&entered);
    session.contacts = book.search(&criteria);

    views::show_page(console.out(), session, PageMove::Stay)?;
    Ok(())
}
