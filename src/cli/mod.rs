use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::{ComparatorScreen, ComparisonView, LedgerScreen, NO_CARDS_MESSAGE};
use crate::config::Settings;
use crate::domain::{format_cents, CardOffer, Category, ExpenseId, Field};
use crate::remote::CardClient;

/// Spendwise - expense ledger and credit-card comparator
#[derive(Parser)]
#[command(name = "spendwise")]
#[command(about = "Track session expenses and compare credit-card offers against your salary")]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML). Defaults to spendwise.toml if present
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override the card offer endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Override the fetch timeout, in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive expense session (read from stdin)
    Ledger,

    /// Fetch card offers once and compare them against one or more salaries
    Cards {
        /// Monthly salary in whole units, digits only (e.g. "1500")
        #[arg(required = true)]
        salaries: Vec<String>,
    },

    /// List expense categories
    Categories,
}

impl Cli {
    /// Settings from file and environment, with command-line overrides applied.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings =
            Settings::load(self.config.as_deref()).context("Failed to load configuration")?;

        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_secs = timeout;
        }
        settings.validate()?;
        Ok(settings)
    }

    pub async fn run(self, settings: Settings) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self.command {
            Commands::Ledger => {
                let mut screen = LedgerScreen::new();
                let stdin = io::stdin();
                run_ledger_session(&mut screen, stdin.lock(), &mut out)?;
            }

            Commands::Cards { salaries } => {
                let client = CardClient::new(&settings.endpoint, settings.timeout())
                    .with_context(|| format!("Invalid endpoint '{}'", settings.endpoint))?;

                let mut screen = ComparatorScreen::new();
                screen.load_from(&client).await;
                run_comparisons(&mut screen, &salaries, &mut out)?;
            }

            Commands::Categories => print_categories(&mut out)?,
        }

        Ok(())
    }
}

// ========================
// Ledger session
// ========================

const LEDGER_HELP: &str = "\
Commands:
  add <amount> <category> <description...>   Record an expense
  rm <id>                                    Delete an expense
  list                                       Show expenses and the total
  total                                      Show the total
  categories                                 Show the categories
  help                                       Show this help
  quit                                       Leave the session";

/// Run an interactive ledger session until `quit` or end of input.
pub fn run_ledger_session<R: BufRead, W: Write>(
    screen: &mut LedgerScreen,
    input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Expense ledger. Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match command {
            "add" => add_expense(screen, rest, out)?,
            "rm" | "delete" => delete_expense(screen, rest.trim(), out)?,
            "list" => print_expenses(screen, out)?,
            "total" => writeln!(out, "Total: {}", screen.total_display())?,
            "categories" => print_categories(out)?,
            "help" => writeln!(out, "{}", LEDGER_HELP)?,
            "quit" | "exit" => break,
            other => writeln!(out, "Unknown command '{}'. Type 'help' for commands.", other)?,
        }
    }

    Ok(())
}

fn add_expense<W: Write>(screen: &mut LedgerScreen, args: &str, out: &mut W) -> Result<()> {
    let (amount, rest) = next_token(args);
    let (category, rest) = next_token(rest);
    let description = rest.trim();

    screen.set_amount(amount);
    screen.set_description(description);
    match Category::from_str(category) {
        Some(category) => screen.select_category(category),
        None => screen.clear_category(),
    }

    match screen.submit() {
        Ok(id) => {
            if let Some(expense) = screen.expenses().iter().find(|e| e.id == id) {
                writeln!(
                    out,
                    "Added expense {}: {} ${} ({})",
                    expense.id,
                    expense.description,
                    format_cents(expense.amount_cents),
                    expense.category
                )?;
            }
            writeln!(out, "Total: {}", screen.total_display())?;
        }
        Err(errors) => {
            if let Some(message) = screen.dialog().message() {
                writeln!(out, "{}", message)?;
            }
            for field in errors.invalid_fields() {
                writeln!(out, "  ! {}", field_hint(field))?;
            }
            screen.dismiss_dialog();
        }
    }
    Ok(())
}

/// First whitespace-separated word and the remainder of the line.
fn next_token(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    match line.find(char::is_whitespace) {
        Some(end) => (&line[..end], &line[end..]),
        None => (line, ""),
    }
}

fn field_hint(field: Field) -> &'static str {
    match field {
        Field::Description => "description: letters and spaces only",
        Field::Amount => "amount: a positive number such as 12.50",
        Field::Category => "category: one of food, entertainment, housing, health, other",
    }
}

fn delete_expense<W: Write>(screen: &mut LedgerScreen, arg: &str, out: &mut W) -> Result<()> {
    let Ok(raw) = arg.parse::<i64>() else {
        writeln!(out, "Invalid expense id '{}'", arg)?;
        return Ok(());
    };

    let id = ExpenseId::from(raw);
    if screen.delete(id) {
        writeln!(out, "Deleted expense {}", id)?;
        writeln!(out, "Total: {}", screen.total_display())?;
    } else {
        writeln!(out, "No expense with id {}", id)?;
    }
    Ok(())
}

fn print_expenses<W: Write>(screen: &LedgerScreen, out: &mut W) -> Result<()> {
    if screen.expenses().is_empty() {
        writeln!(out, "No expenses recorded.")?;
    } else {
        writeln!(
            out,
            "{:<15} {:<24} {:<24} {:>12}",
            "ID", "DESCRIPTION", "CATEGORY", "AMOUNT"
        )?;
        writeln!(out, "{}", "-".repeat(78))?;
        for expense in screen.expenses() {
            writeln!(
                out,
                "{:<15} {:<24} {:<24} {:>12}",
                expense.id,
                expense.description,
                expense.category.label(),
                format!("${}", format_cents(expense.amount_cents))
            )?;
        }
        writeln!(out, "{}", "-".repeat(78))?;
    }
    writeln!(
        out,
        "{:<15} {:<24} {:<24} {:>12}",
        "",
        "Total",
        "",
        screen.total_display()
    )?;
    Ok(())
}

fn print_categories<W: Write>(out: &mut W) -> Result<()> {
    for category in Category::ALL {
        writeln!(out, "{:<15} {}", category.as_str(), category.label())?;
    }
    Ok(())
}

// ========================
// Card comparison
// ========================

/// Compare each salary against the loaded offers and print the outcome.
pub fn run_comparisons<W: Write>(
    screen: &mut ComparatorScreen,
    salaries: &[String],
    out: &mut W,
) -> Result<()> {
    if let Some(error) = screen.fetch_error() {
        writeln!(out, "{}", error)?;
    }

    for salary in salaries {
        writeln!(out, "Salary: {}", salary)?;
        screen.set_salary(salary.as_str());

        if screen.compare().is_err() {
            if let Some(message) = screen.dialog().message() {
                writeln!(out, "{}", message)?;
            }
            screen.dismiss_dialog();
            writeln!(out)?;
            continue;
        }

        match screen.results() {
            ComparisonView::Offers(offers) => {
                for offer in offers {
                    print_offer(offer, out)?;
                }
            }
            ComparisonView::NoneFound | ComparisonView::Hidden => {
                writeln!(out, "{}", NO_CARDS_MESSAGE)?;
            }
        }
        writeln!(out)?;
    }

    Ok(())
}

fn print_offer<W: Write>(offer: &CardOffer, out: &mut W) -> Result<()> {
    writeln!(out, "{} ({})", offer.name, offer.institution)?;
    writeln!(out, "  Required salary: {}", offer.minimum_income)?;
    writeln!(out, "  Interest rate:   {}", offer.interest_rate)?;
    writeln!(out, "  Benefits:        {}", offer.benefits)?;
    if !offer.image_url.is_empty() {
        writeln!(out, "  Image:           {}", offer.image_url)?;
    }
    Ok(())
}
