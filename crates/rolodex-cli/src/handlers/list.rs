use crate::session::{PageMove, Session};
use crate::ui::console::Console;
use crate::ui::views;
use anyhow::Result;
use rolodex_store::ContactBook;
use std::io::{BufRead, Write};

/// Reload the full contact list and enter browse mode at page 1
pub fn handle<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &ContactBook,
    session: &mut Session,
) -> Result<()> {
    session.reset(book);
    views::show_page(console.out(), session, PageMove::Stay)?;
    Ok(())
}
