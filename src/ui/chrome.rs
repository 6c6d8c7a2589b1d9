use crate::ui::ansi::{FG_LIGHT_GRAY, STYLE_BOLD, STYLE_ITALIC, STYLE_RESET};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

/// Screen-level helpers (banner and prompt).
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self {
            util: WidthUtil::default(),
        }
    }

    pub fn print_banner(&self) {
        const INNER_WIDTH: usize = 50;
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}F A I R D E S K{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let subtitle = format!("{STYLE_ITALIC}Career-fair rosters, sorted{STYLE_RESET}");
        let pad = " ".repeat(self.util.center_pad(INNER_WIDTH + 2));

        println!("{pad}╭{}╮", "─".repeat(INNER_WIDTH));
        println!("{pad}│{}│", " ".repeat(INNER_WIDTH));
        println!("{pad}│{}│", self.center_in_box(&title, INNER_WIDTH));
        println!("{pad}│{}│", self.center_in_box(&subtitle, INNER_WIDTH));
        println!("{pad}│{}│", " ".repeat(INNER_WIDTH));
        println!("{pad}╰{}╯", "─".repeat(INNER_WIDTH));
    }

    pub fn print_prompt(&self, prompt: &str) {
        print!("{prompt}");
        let _ = io::stdout().flush();
    }

    fn center_in_box(&self, content: &str, width: usize) -> String {
        let content_width = self.util.visible_width(content);
        if content_width >= width {
            return content.to_string();
        }
        let left = (width - content_width) / 2;
        let right = width - content_width - left;
        format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
    }
}
