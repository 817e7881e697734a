use crate::dialog::{self, DialogMode};
use crate::session::{PageMove, Session};
use crate::ui::console::Console;
use crate::ui::views;
use anyhow::Result;
use rolodex_store::ContactBook;
use rolodex_types::{ContactFields, ContactId};
use std::io::{BufRead, Write};

/// Which modification the shared flow performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Remove,
    Edit,
}

impl Action {
    fn verb(self) -> &'static str {
        match self {
            Action::Remove => "delete",
            Action::Edit => "edit",
        }
    }

    fn header(self) -> &'static str {
        match self {
            Action::Remove => "\nRemove:-----------------------------",
            Action::Edit => "\nEdit:-------------------------------",
        }
    }
}

/// Shared removal/edit flow: render the page, ask for a card number (or a
/// navigation command), confirm against the selected card, then act and
/// save. The index is 1-based into the full displayed list, not the page.
pub fn handle<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &mut ContactBook,
    session: &mut Session,
    action: Action,
) -> Result<()> {
    console.writeln(action.header())?;
    views::show_page(console.out(), session, PageMove::Stay)?;

    if session.page == 0 {
        console.writeln(&format!("No contacts to {}\n", action.verb()))?;
        return Ok(());
    }

    console.write(views::NAV_MENU)?;
    let input = console.prompt(&format!(
        "Enter card number to {} the contact\nor press Enter to skip\n:",
        action.verb()
    ))?;

    let nav = match input.as_str() {
        "p" => Some(PageMove::Prev),
        "n" => Some(PageMove::Next),
        "b" | "" => Some(PageMove::Stay),
        _ => None,
    };
    if let Some(mv) = nav {
        console.writeln("You returned to browser mode\n")?;
        views::show_page(console.out(), session, mv)?;
        return Ok(());
    }

    let Ok(number) = input.parse::<usize>() else {
        views::warn_wrong_command(console.out())?;
        return Ok(());
    };
    if number == 0 || number > session.contacts.len() {
        views::warn_wrong_card_number(console.out())?;
        return Ok(());
    }

    let contact = session.contacts[number - 1].clone();
    console.writeln(&contact.card_with_number(number))?;
    if !dialog::confirm(console)? {
        return Ok(());
    }

    match action {
        Action::Remove => {
            book.delete_by_id(contact.id())?;
            book.save()?;
            console.writeln("Changes saved\n")?;
        }
        Action::Edit => edit_contact(console, book, contact.id())?,
    }
    Ok(())
}

/// Run the editing dialog against the stored record and replace it.
/// Merging happens here, not in the repository: an empty answer keeps the
/// old value and a single space forces the field empty.
fn edit_contact<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &mut ContactBook,
    id: &ContactId,
) -> Result<()> {
    let old = book.find_by_id(id)?.clone();
    let entered = dialog::collect_contact_fields(console, DialogMode::Editing)?;
    let merged = merge_fields(&old, entered);

    if merged.is_blank() {
        console.writeln("Contact must contain at least one filled field\n")?;
        return Ok(());
    }

    console.writeln("Save changes?")?;
    if dialog::confirm(console)? {
        book.edit_by_id(id, merged)?;
        book.save()?;
        console.writeln("Changes saved\n")?;
    } else {
        console.writeln("No changes have been made\n")?;
    }
    Ok(())
}

fn merge_fields(old: &ContactFields, entered: ContactFields) -> ContactFields {
    fn pick(old: &str, entered: String) -> String {
        match entered.as_str() {
            "" => old.to_string(),
            " " => String::new(),
            _ => entered,
        }
    }

    ContactFields {
        first_name: pick(&old.first_name, entered.first_name),
        last_name: pick(&old.last_name, entered.last_name),
        patronymic: pick(&old.patronymic, entered.patronymic),
        company: pick(&old.company, entered.company),
        work: pick(&old.work, entered.work),
        mobile: pick(&old.mobile, entered.mobile),
    }
}
