use crate::core::models::{Company, Venue};
use crate::errors::{Error, Result};

/// In-memory session state: the ordered company roster plus the venue list.
/// Insertion order is display order; indexed commands address companies by
/// position. All mutations validate their index before touching anything, so
/// a failed operation leaves the roster unchanged.
#[derive(Debug, Default)]
pub struct Roster {
    companies: Vec<Company>,
    venues: Vec<Venue>,
    /// Most recently added or index-referenced company; the target of
    /// `choose venue`.
    selected: Option<usize>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(companies: Vec<Company>, venues: Vec<Venue>) -> Self {
        Self {
            companies,
            venues,
            selected: None,
        }
    }

    pub fn company_count(&self) -> usize {
        self.companies.len()
    }

    pub fn venue_count(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    fn check_company_index(&self, index: usize) -> Result<()> {
        if self.companies.is_empty() {
            return Err(Error::EmptyList);
        }
        if index >= self.companies.len() {
            return Err(Error::invalid_index(index, self.companies.len()));
        }
        Ok(())
    }

    pub fn company(&self, index: usize) -> Result<&Company> {
        self.check_company_index(index)?;
        Ok(&self.companies[index])
    }

    pub fn add_company(&mut self, company: Company) -> &Company {
        self.companies.push(company);
        self.selected = Some(self.companies.len() - 1);
        self.companies.last().expect("company missing after push")
    }

    /// Removes the company at `index`, closing the gap. Venue assignments and
    /// the selection pointing past the removed slot shift down with it.
    pub fn delete_company(&mut self, index: usize) -> Result<Company> {
        self.check_company_index(index)?;
        let removed = self.companies.remove(index);

        for venue in &mut self.venues {
            venue.assigned_company = match venue.assigned_company {
                Some(i) if i == index => None,
                Some(i) if i > index => Some(i - 1),
                other => other,
            };
        }
        self.selected = match self.selected {
            Some(i) if i == index => None,
            Some(i) if i > index => Some(i - 1),
            other => other,
        };
        Ok(removed)
    }

    /// Confirm or unconfirm attendance. Re-applying the current state is a
    /// successful no-op.
    pub fn set_confirmed(&mut self, index: usize, confirmed: bool) -> Result<&Company> {
        self.check_company_index(index)?;
        self.companies[index].confirmed = confirmed;
        self.selected = Some(index);
        Ok(&self.companies[index])
    }

    /// Records the venue assignment for the currently selected company.
    pub fn assign_venue(&mut self, venue_index: usize) -> Result<(usize, &Venue)> {
        let company = self.selected.ok_or(Error::EmptyList)?;
        if venue_index >= self.venues.len() {
            return Err(Error::invalid_index(venue_index, self.venues.len()));
        }
        self.venues[venue_index].assigned_company = Some(company);
        Ok((company, &self.venues[venue_index]))
    }

    pub fn purge(&mut self) {
        self.companies.clear();
        self.venues.clear();
        self.selected = None;
    }

    pub fn extend_companies(&mut self, companies: impl IntoIterator<Item = Company>) {
        self.companies.extend(companies);
        if !self.companies.is_empty() {
            self.selected = Some(self.companies.len() - 1);
        }
    }

    pub fn extend_venues(&mut self, venues: impl IntoIterator<Item = Venue>) {
        self.venues.extend(venues);
    }

    // ---- queries (restartable: call again for a fresh pass) -----------------

    pub fn companies(&self) -> impl Iterator<Item = &Company> {
        self.companies.iter()
    }

    pub fn venues(&self) -> impl Iterator<Item = &Venue> {
        self.venues.iter()
    }

    pub fn unconfirmed(&self) -> impl Iterator<Item = (usize, &Company)> {
        self.companies
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.confirmed)
    }

    /// Case-sensitive substring match on the company name.
    pub fn find_company<'a>(
        &'a self,
        term: &'a str,
    ) -> impl Iterator<Item = (usize, &'a Company)> + 'a {
        self.companies
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.name.contains(term))
    }

    /// Equality match on the stored (upper-cased) industry. Callers pass the
    /// term already upper-cased, which makes the comparison case-insensitive.
    pub fn find_industry<'a>(
        &'a self,
        term: &'a str,
    ) -> impl Iterator<Item = (usize, &'a Company)> + 'a {
        self.companies
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.industry == term)
    }
}
