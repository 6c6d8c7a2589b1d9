use crate::command::guide::render_guide;
use crate::core::models::{Company, Venue};
use crate::core::roster::Roster;
use crate::core::samples;
use crate::errors::Result;
use crate::ui::presenter::Presenter;

/// What the session loop should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Read-only; nothing to persist.
    None,
    /// The roster changed; snapshot it.
    Mutated,
    /// Finish the session with exit status 0.
    Exit,
}

/// One fully-validated operation, ready to apply. Variants carry only data
/// the parser already checked; execution does no text parsing of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        name: String,
        industry: String,
        contact_number: String,
        contact_email: String,
    },
    Delete {
        index: usize,
    },
    Confirm {
        index: usize,
    },
    Unconfirm {
        index: usize,
    },
    ChooseVenue {
        index: usize,
    },
    ListCompanies,
    ListVenues,
    ListUnconfirmed,
    FindCompany {
        term: String,
    },
    FindIndustry {
        term: String,
    },
    LoadSamples,
    Purge,
    Help,
    Exit,
    /// Built only when input could not be classified; executing it does
    /// nothing.
    Unrecognized,
}

impl Command {
    /// Applies the operation. Collaborators are passed in explicitly so
    /// execution has no hidden I/O and stays unit-testable; persistence is
    /// the session loop's job, driven by the returned [`Effect`].
    pub fn execute(&self, roster: &mut Roster, presenter: &dyn Presenter) -> Result<Effect> {
        match self {
            Command::Add {
                name,
                industry,
                contact_number,
                contact_email,
            } => {
                let stored = roster.add_company(Company::new(
                    name.clone(),
                    industry,
                    contact_number.clone(),
                    contact_email.clone(),
                ));
                let line = format!("Added {stored}.");
                presenter.info(&format!(
                    "{line} Roster now has {} company(ies).",
                    roster.company_count()
                ));
                Ok(Effect::Mutated)
            }
            Command::Delete { index } => {
                let removed = roster.delete_company(*index)?;
                presenter.info(&format!("Deleted entry {}: {removed}", index + 1));
                Ok(Effect::Mutated)
            }
            Command::Confirm { index } => {
                let company = roster.set_confirmed(*index, true)?;
                presenter.info(&format!("Confirmed attendance for {}.", company.name));
                Ok(Effect::Mutated)
            }
            Command::Unconfirm { index } => {
                let company = roster.set_confirmed(*index, false)?;
                presenter.info(&format!("Unconfirmed attendance for {}.", company.name));
                Ok(Effect::Mutated)
            }
            Command::ChooseVenue { index } => {
                let (company_index, venue) = roster.assign_venue(*index)?;
                let venue_name = venue.name.clone();
                let company_name = roster.company(company_index)?.name.clone();
                presenter.info(&format!(
                    "Assigned venue '{venue_name}' to {company_name}."
                ));
                Ok(Effect::Mutated)
            }
            Command::ListCompanies => {
                let entries: Vec<(usize, &Company)> = roster.companies().enumerate().collect();
                presenter.company_table("Companies", &entries, "No companies on the roster.");
                Ok(Effect::None)
            }
            Command::ListVenues => {
                let entries = venue_entries(roster);
                presenter.venue_table(&entries, "No venues on file.");
                Ok(Effect::None)
            }
            Command::ListUnconfirmed => {
                let entries: Vec<(usize, &Company)> = roster.unconfirmed().collect();
                presenter.company_table("Unconfirmed", &entries, "No unconfirmed companies.");
                Ok(Effect::None)
            }
            Command::FindCompany { term } => {
                let entries: Vec<(usize, &Company)> = roster.find_company(term).collect();
                presenter.company_table(
                    &format!("Companies matching '{term}'"),
                    &entries,
                    "No matching companies.",
                );
                Ok(Effect::None)
            }
            Command::FindIndustry { term } => {
                let entries: Vec<(usize, &Company)> = roster.find_industry(term).collect();
                presenter.company_table(
                    &format!("Companies in industry '{term}'"),
                    &entries,
                    "No matching companies.",
                );
                Ok(Effect::None)
            }
            Command::LoadSamples => {
                let added = samples::load_into(roster);
                presenter.info(&format!(
                    "Loaded {added} sample companies ({} total).",
                    roster.company_count()
                ));
                Ok(Effect::Mutated)
            }
            Command::Purge => {
                roster.purge();
                presenter.info("Cleared every company and venue.");
                Ok(Effect::Mutated)
            }
            Command::Help => {
                presenter.guide(&render_guide());
                Ok(Effect::None)
            }
            Command::Exit => {
                presenter.info("Goodbye, see you at the fair!");
                Ok(Effect::Exit)
            }
            Command::Unrecognized => Ok(Effect::None),
        }
    }
}

fn venue_entries(roster: &Roster) -> Vec<(usize, &Venue, Option<&str>)> {
    roster
        .venues()
        .enumerate()
        .map(|(i, venue)| {
            let assigned = venue
                .assigned_company
                .and_then(|ci| roster.company(ci).ok())
                .map(|c| c.name.as_str());
            (i, venue, assigned)
        })
        .collect()
}
