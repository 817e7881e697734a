use crate::config::{CONFIG_FILE_NAME, Config};
use crate::handlers;
use crate::handlers::modify::Action;
use crate::session::{PageMove, Session};
use crate::ui::console::Console;
use crate::ui::views;
use anyhow::Result;
use rolodex_store::{ContactBook, STORE_FILE_NAME, resolve_data_dir};
use std::io::{BufRead, Write};

pub fn run() -> Result<()> {
    let data_dir = resolve_data_dir(None)?;
    let config = Config::load_from(&data_dir.join(CONFIG_FILE_NAME))?;
    let store_path = config
        .store_path
        .clone()
        .unwrap_or_else(|| data_dir.join(STORE_FILE_NAME));

    let mut book = ContactBook::open(store_path)?;
    let mut console = Console::stdio();
    run_loop(&mut console, &mut book, config.per_page)
}

/// The interactive session loop. Commands are single characters, matched
/// exactly; `p`/`n`/`b` are only accepted while browsing.
fn run_loop<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    book: &mut ContactBook,
    per_page: usize,
) -> Result<()> {
    let mut session = Session::new(book, per_page);

    console.write(views::MAIN_MENU)?;
    loop {
        let Some(input) = console.prompt_opt("Type command and press Enter\n:")? else {
            // stdin closed; nothing more to read
            break;
        };

        match input.as_str() {
            "q" => break,
            "l" => handlers::list::handle(console, book, &mut session)?,
            "a" => handlers::add::handle(console, book, &mut session)?,
            "r" => handlers::modify::handle(console, book, &mut session, Action::Remove)?,
            "e" => handlers::modify::handle(console, book, &mut session, Action::Edit)?,
            "s" => handlers::search::handle(console, book, &mut session)?,
            "b" => {
                if session.browsing {
                    // Back to the full unfiltered list
                    handlers::list::handle(console, book, &mut session)?;
                } else {
                    views::warn_wrong_command(console.out())?;
                }
            }
            "p" | "n" => {
                if session.browsing {
                    let mv = if input == "p" {
                        PageMove::Prev
                    } else {
                        PageMove::Next
                    };
                    views::show_page(console.out(), &mut session, mv)?;
                } else {
                    views::warn_wrong_command(console.out())?;
                }
            }
            _ => views::warn_wrong_command(console.out())?,
        }

        if session.browsing {
            console.write(views::NAV_MENU)?;
        }
        console.write(views::MAIN_MENU)?;
    }
    Ok(())
}
