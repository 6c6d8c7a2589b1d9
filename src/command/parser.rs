use std::str::FromStr;

use strum_macros::{AsRefStr, EnumIter as EnumIterDerive, EnumString};

use crate::command::commands::Command;
use crate::command::fields::extract_ordered;
use crate::command::guide::CommandFamily;
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use crate::extensions::string::ToIndustryKey;

/// Tag markers for the `add` command, in the only order they are accepted.
pub const ADD_TAGS: [&str; 4] = ["n/", "i/", "c/", "e/"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
enum ListTarget {
    Companies,
    Venues,
    Unconfirmed,
}

/// Translates one line of user text into exactly one [`Command`], or a typed
/// failure. All field validation happens here; a returned Command never needs
/// further parsing. User-facing indices are 1-based and converted to 0-based
/// before the Command is built.
#[derive(Debug, Default, Clone)]
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, line: &str) -> Result<Command> {
        let line = line.trim();
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            return Ok(Command::Unrecognized);
        };

        let family = CommandFamily::from_str(first).map_err(|_| {
            Error::unknown(format!(
                "{first}. Valid commands: {}",
                valid_csv::<CommandFamily>()
            ))
        })?;

        match family {
            CommandFamily::List => {
                let target = tokens
                    .next()
                    .ok_or_else(|| Self::usage_error(CommandFamily::List))?;
                match ListTarget::from_str(target) {
                    Ok(ListTarget::Companies) => Ok(Command::ListCompanies),
                    Ok(ListTarget::Venues) => Ok(Command::ListVenues),
                    Ok(ListTarget::Unconfirmed) => Ok(Command::ListUnconfirmed),
                    Err(_) => Err(Error::parse(format!(
                        "Cannot list '{target}'. Valid targets: {}",
                        valid_csv::<ListTarget>()
                    ))),
                }
            }
            CommandFamily::Add => Self::parse_add(line),
            CommandFamily::Delete => Ok(Command::Delete {
                index: Self::parse_index(tokens.next(), CommandFamily::Delete)?,
            }),
            CommandFamily::Load => match tokens.next() {
                Some("samples") => Ok(Command::LoadSamples),
                _ => Err(Self::usage_error(CommandFamily::Load)),
            },
            CommandFamily::Purge => Ok(Command::Purge),
            CommandFamily::Choose => {
                let keyword = tokens.next();
                let index = tokens.next();
                let extra = tokens.next();
                if keyword != Some("venue") || index.is_none() || extra.is_some() {
                    return Err(Self::usage_error(CommandFamily::Choose));
                }
                Ok(Command::ChooseVenue {
                    index: Self::parse_index(index, CommandFamily::Choose)?,
                })
            }
            CommandFamily::Confirm => Ok(Command::Confirm {
                index: Self::parse_index(tokens.next(), CommandFamily::Confirm)?,
            }),
            CommandFamily::Unconfirm => Ok(Command::Unconfirm {
                index: Self::parse_index(tokens.next(), CommandFamily::Unconfirm)?,
            }),
            CommandFamily::Find => {
                let target = tokens
                    .next()
                    .ok_or_else(|| Self::usage_error(CommandFamily::Find))?;
                let term = tokens.collect::<Vec<_>>().join(" ");
                if term.is_empty() {
                    return Err(Error::parse(format!(
                        "Search term must not be empty. Usage: {}",
                        CommandFamily::Find.usage()
                    )));
                }
                match target {
                    "industry" => Ok(Command::FindIndustry {
                        term: term.to_industry_key(),
                    }),
                    "company" => Ok(Command::FindCompany { term }),
                    _ => Err(Self::usage_error(CommandFamily::Find)),
                }
            }
            CommandFamily::Help => Ok(Command::Help),
            CommandFamily::Exit => Ok(Command::Exit),
        }
    }

    /// `add` keeps the raw line: tagged values may span whitespace, so the
    /// token iterator is no use here.
    fn parse_add(line: &str) -> Result<Command> {
        let rest = match line.split_once(char::is_whitespace) {
            Some((_, rest)) => rest.trim(),
            None => return Err(Self::usage_error(CommandFamily::Add)),
        };

        let [name, industry, contact_number, contact_email] = extract_ordered(rest, &ADD_TAGS)?;

        if name.is_empty() {
            return Err(Error::parse("Company name must not be empty."));
        }
        if industry.is_empty() {
            return Err(Error::parse("Industry must not be empty."));
        }
        if contact_number.len() != 8 || !contact_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::parse(format!(
                "Contact number must be exactly 8 digits, got '{contact_number}'."
            )));
        }
        if contact_email.matches('@').count() != 1
            || contact_email.contains(char::is_whitespace)
            || contact_email.ends_with('@')
        {
            return Err(Error::parse(format!(
                "Invalid email address: '{contact_email}'."
            )));
        }

        Ok(Command::Add {
            name,
            industry: industry.to_industry_key(),
            contact_number,
            contact_email,
        })
    }

    /// User-facing 1-based index token, converted to 0-based.
    fn parse_index(token: Option<&str>, family: CommandFamily) -> Result<usize> {
        let token = token.ok_or_else(|| Self::usage_error(family))?;
        let n: usize = token
            .parse()
            .map_err(|_| Error::parse(format!("Expected a number, got '{token}'.")))?;
        if n == 0 {
            return Err(Error::parse("Indexes start at 1."));
        }
        Ok(n - 1)
    }

    fn usage_error(family: CommandFamily) -> Error {
        Error::parse(format!("Usage: {}", family.usage()))
    }
}
