// UI layer: an interactive menu built with `dialoguer`. Each filter
// button is an entry of the select list; picking one is the "click".
// The gallery is printed to the terminal after every render.

use crate::api::PortfolioSource;
use crate::gallery::Gallery;
use crate::html;
use crate::page::Page;
use anyhow::{Context, Result};
use crossterm::style::Stylize;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

const EXPORT_ITEM: &str = "Export HTML";
const EXIT_ITEM: &str = "Exit";

/// Run `f` while a spinner with `message` is shown.
pub fn with_spinner<T>(message: &str, f: impl FnOnce() -> T) -> Result<T> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    let out = f();
    spinner.finish_and_clear();
    Ok(out)
}

/// Print one line per card: caption, category and image URL.
pub fn print_gallery(gallery: &Gallery) {
    if gallery.is_empty() {
        println!("{}", "(no works)".dim());
        return;
    }
    for card in gallery.cards() {
        println!(
            "  {}  {}  {}",
            card.caption.as_str().bold(),
            format!("[{}]", card.category_id).dark_grey(),
            card.image_url.as_str().cyan()
        );
    }
}

/// Main interactive menu. Loops until the user picks "Exit". Fetch errors
/// are reported and the loop carries on with the previous gallery.
pub fn main_menu<S: PortfolioSource>(page: &mut Page<S>, default_export: PathBuf) -> Result<()> {
    print_gallery(page.gallery());
    loop {
        let mut items: Vec<String> = page
            .menu()
            .buttons()
            .iter()
            .map(|b| {
                if b.is_active() {
                    format!("● {}", b.label)
                } else {
                    format!("  {}", b.label)
                }
            })
            .collect();
        let buttons = items.len();
        items.push(EXPORT_ITEM.to_string());
        items.push(EXIT_ITEM.to_string());

        let default = page.menu().active_index().unwrap_or(0);
        let selection = Select::new()
            .with_prompt("Filter")
            .items(&items)
            .default(default)
            .interact()?;

        if selection < buttons {
            match with_spinner("Loading works...", || page.click(selection))? {
                Ok(_) => print_gallery(page.gallery()),
                Err(e) => println!("{} {}", "Could not load works:".red(), e),
            }
        } else if selection == buttons {
            let path: String = Input::new()
                .with_prompt("Output file")
                .default(default_export.display().to_string())
                .interact_text()?;
            let path = PathBuf::from(path);
            match html::write_page(page, &path) {
                Ok(()) => println!("Saved {}", path.display()),
                Err(e) => println!("{} {}", "Export failed:".red(), e),
            }
        } else {
            break;
        }
    }
    Ok(())
}

/// Write an already loaded page without prompting.
pub fn export_once<S: PortfolioSource>(page: &Page<S>, path: &Path) -> Result<()> {
    html::write_page(page, path).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Saved {}", path.display());
    Ok(())
}
