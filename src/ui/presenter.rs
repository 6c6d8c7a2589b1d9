use crate::core::models::{Company, Venue};
use crate::ui::table_printer::TablePrinter;

/// Rendering seam between command execution and the terminal. Commands hand
/// over results and errors; how they look is entirely the implementation's
/// business. Tests substitute a recording implementation.
pub trait Presenter {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
    fn company_table(&self, title: &str, entries: &[(usize, &Company)], empty_message: &str);
    fn venue_table(&self, entries: &[(usize, &Venue, Option<&str>)], empty_message: &str);

    fn guide(&self, text: &str) {
        self.info(text);
    }
}

#[derive(Debug, Default, Clone)]
pub struct ConsolePresenter {
    printer: TablePrinter,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self {
            printer: TablePrinter::new(),
        }
    }
}

impl Presenter for ConsolePresenter {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{message}");
    }

    fn company_table(&self, title: &str, entries: &[(usize, &Company)], empty_message: &str) {
        let headers = ["ID", "NAME", "INDUSTRY", "CONTACT", "EMAIL", "CONFIRMED"];
        let rows: Vec<Vec<String>> = entries
            .iter()
            .map(|(index, company)| {
                vec![
                    (index + 1).to_string(),
                    company.name.clone(),
                    company.industry.clone(),
                    company.contact_number.clone(),
                    company.contact_email.clone(),
                    if company.confirmed { "yes" } else { "no" }.to_string(),
                ]
            })
            .collect();

        self.printer.print_table(title, &headers, &rows, empty_message);
    }

    fn venue_table(&self, entries: &[(usize, &Venue, Option<&str>)], empty_message: &str) {
        let headers = ["ID", "NAME", "ASSIGNED TO"];
        let rows: Vec<Vec<String>> = entries
            .iter()
            .map(|(index, venue, assigned)| {
                vec![
                    (index + 1).to_string(),
                    venue.name.clone(),
                    assigned.unwrap_or("-").to_string(),
                ]
            })
            .collect();

        self.printer.print_table("Venues", &headers, &rows, empty_message);
    }
}
