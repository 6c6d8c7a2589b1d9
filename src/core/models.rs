use crate::extensions::string::ToIndustryKey;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub industry: String,
    pub contact_number: String,
    pub contact_email: String,
    #[serde(default)]
    pub confirmed: bool,
}

impl Company {
    /// Industry is stored upper-cased so lookups can compare directly.
    /// Attendance starts unconfirmed.
    pub fn new(
        name: impl Into<String>,
        industry: impl AsRef<str>,
        contact_number: impl Into<String>,
        contact_email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            industry: industry.as_ref().to_industry_key(),
            contact_number: contact_number.into(),
            contact_email: contact_email.into(),
            confirmed: false,
        }
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Company(name='{}', industry={}, contact={}, email={}, confirmed={})",
            self.name, self.industry, self.contact_number, self.contact_email, self.confirmed
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    /// Index into the company list; a reference, not ownership. Assigning a
    /// venue never removes it from the venue list.
    #[serde(default)]
    pub assigned_company: Option<usize>,
}

impl Venue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            assigned_company: None,
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.assigned_company {
            Some(idx) => write!(f, "Venue(name='{}', assigned_company={})", self.name, idx + 1),
            None => write!(f, "Venue(name='{}', unassigned)", self.name),
        }
    }
}
