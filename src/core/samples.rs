use crate::core::models::{Company, Venue};
use crate::core::roster::Roster;

/// Canned records for `load samples`: handy for demos and for exercising the
/// list/find/confirm commands without typing a roster in by hand.
pub fn sample_companies() -> Vec<Company> {
    vec![
        Company::new("Huawei", "Tech", "61000000", "apac@huawei.com"),
        Company::new("Grab", "Tech", "61234567", "hello@grab.com"),
        Company::new("DBS Bank", "Finance", "62224444", "talent@dbs.com"),
        Company::new("Shopee", "E-Commerce", "65436543", "careers@shopee.sg"),
        Company::new("Changi Airport Group", "Aviation", "68886888", "people@cag.sg"),
    ]
}

pub fn sample_venues() -> Vec<Venue> {
    vec![
        Venue::new("Main Hall"),
        Venue::new("Atrium East"),
        Venue::new("Atrium West"),
        Venue::new("Auditorium Foyer"),
    ]
}

/// Appends the sample companies; sample venues are added only when the venue
/// list is empty so repeated loads do not stack duplicate venues.
pub fn load_into(roster: &mut Roster) -> usize {
    let companies = sample_companies();
    let added = companies.len();
    roster.extend_companies(companies);
    if roster.venue_count() == 0 {
        roster.extend_venues(sample_venues());
    }
    added
}
