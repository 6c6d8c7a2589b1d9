use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display as DisplayDerive, EnumIter as EnumIterDerive, EnumString};

/// The closed set of first tokens the parser recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, DisplayDerive, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum CommandFamily {
    List,
    Add,
    Delete,
    Load,
    Purge,
    Choose,
    Confirm,
    Unconfirm,
    Find,
    Help,
    Exit,
}

impl CommandFamily {
    pub fn usage(&self) -> &'static str {
        match self {
            CommandFamily::List => "list companies|venues|unconfirmed",
            CommandFamily::Add => "add n/<name> i/<industry> c/<8-digit number> e/<email>",
            CommandFamily::Delete => "delete <index>",
            CommandFamily::Load => "load samples",
            CommandFamily::Purge => "purge",
            CommandFamily::Choose => "choose venue <index>",
            CommandFamily::Confirm => "confirm <index>",
            CommandFamily::Unconfirm => "unconfirm <index>",
            CommandFamily::Find => "find industry <term> | find company <term>",
            CommandFamily::Help => "help",
            CommandFamily::Exit => "exit",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            CommandFamily::List => "Show companies, venues, or unconfirmed companies",
            CommandFamily::Add => "Add a company to the roster",
            CommandFamily::Delete => "Remove the company at the given position",
            CommandFamily::Load => "Load the canned sample roster",
            CommandFamily::Purge => "Clear every company and venue",
            CommandFamily::Choose => "Assign a venue to the current company",
            CommandFamily::Confirm => "Mark a company's attendance as confirmed",
            CommandFamily::Unconfirm => "Mark a company's attendance as unconfirmed",
            CommandFamily::Find => "Search by company name or industry",
            CommandFamily::Help => "Show this guide",
            CommandFamily::Exit => "Save nothing further and leave",
        }
    }
}

/// The `help` page: one line per command family.
pub fn render_guide() -> String {
    let width = CommandFamily::iter()
        .map(|f| f.usage().len())
        .max()
        .unwrap_or(0);

    let mut out = String::from("Commands:\n");
    for family in CommandFamily::iter() {
        out.push_str(&format!(
            "  {:<width$}  {}\n",
            family.usage(),
            family.summary()
        ));
    }
    out.push_str("\nIndexes are 1-based and refer to 'list companies' order.");
    out
}
