use crate::ui::width_util::WidthUtil;
use std::io::Write;

#[derive(Debug, Default, Clone)]
pub struct TablePrinter {
    util: WidthUtil,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print_table<T: AsRef<str>>(
        &self,
        title: &str,
        headers: &[&str],
        rows: &[Vec<T>],
        empty_message: &str,
    ) {
        let mut stdout = std::io::stdout();
        let _ = self.render_table(title, headers, rows, empty_message, &mut stdout);
    }

    /// Render into any writer (used by tests to capture output).
    pub fn render_table<T: AsRef<str>, W: Write + ?Sized>(
        &self,
        title: &str,
        headers: &[&str],
        rows: &[Vec<T>],
        empty_message: &str,
        out: &mut W,
    ) -> std::io::Result<()> {
        let col_widths = self.col_widths(headers, rows);
        let natural = self.natural_width(&col_widths);
        let total = natural
            .max(self.util.visible_width(title))
            .max(if rows.is_empty() {
                self.util.visible_width(empty_message)
            } else {
                0
            });

        self.separator(out, total)?;
        writeln!(out, "{}", title.to_uppercase())?;
        self.separator(out, total)?;

        if rows.is_empty() {
            writeln!(out, "{empty_message}")?;
            return self.separator(out, total);
        }

        writeln!(out, "{}", self.joined_line(headers.iter().copied(), &col_widths))?;
        self.separator(out, total)?;
        for row in rows {
            let line = self.joined_line(row.iter().map(|c| c.as_ref()), &col_widths);
            writeln!(out, "{line}")?;
        }
        self.separator(out, total)
    }

    fn col_widths<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> Vec<usize> {
        let mut widths: Vec<usize> = headers
            .iter()
            .map(|h| self.util.visible_width(h))
            .collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(self.util.visible_width(cell.as_ref()));
            }
        }
        widths
    }

    fn natural_width(&self, col_widths: &[usize]) -> usize {
        if col_widths.is_empty() {
            0
        } else {
            col_widths.iter().copied().sum::<usize>() + (col_widths.len() - 1) * 3
        }
    }

    fn joined_line<'a>(
        &self,
        cells: impl Iterator<Item = &'a str>,
        col_widths: &[usize],
    ) -> String {
        cells
            .enumerate()
            .map(|(i, cell)| self.util.pad_visible(cell, col_widths.get(i).copied().unwrap_or(0)))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    fn separator<W: Write + ?Sized>(&self, out: &mut W, width: usize) -> std::io::Result<()> {
        writeln!(out, "{}", "-".repeat(width.max(1)))
    }
}
