//! Interactive numbered menu

use crate::application::JournalStore;
use crate::cli::output::format_entry_list;
use crate::error::Result;
use std::io::{BufRead, Write};

const MENU: &str = "
Welcome to Scribe
What would you like to do today?
1. Show journal entries
2. Add journal entry
3. Search journal entries
4. Search by tags
5. Delete journal entry
6. Quit program
";

/// One line of the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowEntries,
    AddEntry,
    SearchEntries,
    SearchTags,
    DeleteEntry,
    Quit,
}

/// Whether the menu loop continues after a choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFlow {
    Continue,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::ShowEntries),
            "2" => Some(MenuChoice::AddEntry),
            "3" => Some(MenuChoice::SearchEntries),
            "4" => Some(MenuChoice::SearchTags),
            "5" => Some(MenuChoice::DeleteEntry),
            "6" => Some(MenuChoice::Quit),
            _ => None,
        }
    }

    pub fn execute<R: BufRead, W: Write>(&self, menu: &mut Menu<'_, R, W>) -> Result<MenuFlow> {
        match self {
            MenuChoice::ShowEntries => {
                let entries = menu.store.all();
                writeln!(menu.output, "{}", format_entry_list(&entries).trim_end())?;
            }
            MenuChoice::AddEntry => {
                let content = menu.prompt("Your entry: ")?.unwrap_or_default();
                let tags = menu.prompt("Tags (comma separated): ")?.unwrap_or_default();
                let entry = menu.store.add(content, parse_tag_list(&tags))?;
                writeln!(menu.output, "Your entry has been added (id {})", entry.id)?;
            }
            MenuChoice::SearchEntries => {
                let query = menu.prompt("Search for: ")?.unwrap_or_default();
                let entries = menu.store.search_by_keyword(&query);
                writeln!(menu.output, "{}", format_entry_list(&entries).trim_end())?;
            }
            MenuChoice::SearchTags => {
                let tags = menu.prompt("Tags (comma separated): ")?.unwrap_or_default();
                let entries = menu.store.search_by_tags(&parse_tag_list(&tags));
                writeln!(menu.output, "{}", format_entry_list(&entries).trim_end())?;
            }
            MenuChoice::DeleteEntry => {
                let answer = menu.prompt("Entry id: ")?.unwrap_or_default();
                match answer.trim().parse::<u64>() {
                    Ok(id) => {
                        if menu.store.delete(id)? {
                            writeln!(menu.output, "Entry {} deleted", id)?;
                        } else {
                            writeln!(menu.output, "No entry with id {}", id)?;
                        }
                    }
                    Err(_) => writeln!(menu.output, "{} is not a valid id", answer.trim())?,
                }
            }
            MenuChoice::Quit => {
                writeln!(menu.output, "Thank you for using Scribe today")?;
                return Ok(MenuFlow::Exit);
            }
        }
        Ok(MenuFlow::Continue)
    }
}

/// Menu session over any line reader and writer
pub struct Menu<'a, R, W> {
    store: &'a JournalStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a JournalStore, input: R, output: W) -> Self {
        Menu {
            store,
            input,
            output,
        }
    }

    /// Show the menu and run choices until quit or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let Some(answer) = self.prompt("Enter an option: ")? else {
                writeln!(self.output)?;
                return Ok(());
            };

            match MenuChoice::parse(&answer) {
                Some(choice) => {
                    if choice.execute(self)? == MenuFlow::Exit {
                        return Ok(());
                    }
                }
                None => writeln!(self.output, "{} is not a valid choice", answer.trim())?,
            }
        }
    }

    /// Print `label` and read one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

/// Split a comma separated tag list, dropping blanks
pub fn parse_tag_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_menu(store: &JournalStore, script: &str) -> String {
        let mut output = Vec::new();
        Menu::new(store, Cursor::new(script.as_bytes()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::ShowEntries));
        assert_eq!(MenuChoice::parse(" 6 "), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse("quit"), None);
    }

    #[test]
    fn test_parse_tag_list() {
        assert_eq!(
            parse_tag_list(" work, home ,,"),
            vec!["work".to_string(), "home".to_string()]
        );
        assert!(parse_tag_list("").is_empty());
    }

    #[test]
    fn test_add_then_show_then_quit() {
        let temp = TempDir::new().unwrap();
        let store = JournalStore::load(temp.path().join("j.json")).unwrap();

        let output = run_menu(&store, "2\nbuy milk\nerrand\n1\n6\n");

        assert!(output.contains("Your entry has been added (id 1)"));
        assert!(output.contains("buy milk  [errand]"));
        assert!(output.contains("Thank you for using Scribe today"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_search_and_delete() {
        let temp = TempDir::new().unwrap();
        let store = JournalStore::load(temp.path().join("j.json")).unwrap();
        store.add("buy milk", vec!["errand".into()]).unwrap();
        store.add("write code", vec!["work".into()]).unwrap();

        let output = run_menu(&store, "3\nmilk\n4\nwork\n5\n1\n5\nabc\n6\n");

        assert!(output.contains("buy milk  [errand]"));
        assert!(output.contains("write code  [work]"));
        assert!(output.contains("Entry 1 deleted"));
        assert!(output.contains("abc is not a valid id"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_invalid_choice_and_end_of_input() {
        let temp = TempDir::new().unwrap();
        let store = JournalStore::load(temp.path().join("j.json")).unwrap();

        let output = run_menu(&store, "9\n");

        assert!(output.contains("9 is not a valid choice"));
        assert!(!output.contains("Thank you"));
    }
}
