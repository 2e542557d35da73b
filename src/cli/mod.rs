use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::application::{daily_summaries, room_activity, BookingService};
use crate::domain::{format_amount, parse_amount, Booking, LedgerAccount, Room, RoomType, User};
use crate::io::Exporter;

/// Locanda - Hotel Booking Ledger
#[derive(Parser)]
#[command(name = "locanda")]
#[command(about = "A local-first hotel booking and account ledger")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a seeded end-to-end demo scenario
    Demo,

    /// Start an interactive session reading commands from stdin
    Shell,

    /// Execute commands from a script file, one per line
    Run {
        /// Script file path
        path: String,
    },
}

/// One line of the interactive or scripted command language.
/// State lives for the duration of the session only.
#[derive(Parser)]
#[command(no_binary_name = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    /// Create or update a room
    Room {
        /// Room number
        number: u32,

        /// Room type: standard, junior, suite
        room_type: String,

        /// Price per night in whole units
        price: String,
    },

    /// Create or update a user
    User {
        /// User id
        id: u32,

        /// Opening balance in whole units
        balance: String,
    },

    /// Reserve a room for a user over [checkin, checkout)
    Book {
        /// User id
        user: u32,

        /// Room number
        room: u32,

        /// Checkin date (YYYY-MM-DD)
        checkin: String,

        /// Checkout date (YYYY-MM-DD), must be after checkin
        checkout: String,
    },

    /// List rooms, most recently added first
    Rooms,

    /// List users, most recently added first
    Users,

    /// List bookings, most recent first
    Bookings,

    /// Deposit into the cash account
    Deposit {
        /// Amount in whole units
        amount: String,

        /// Value date (YYYY-MM-DD)
        date: String,
    },

    /// Withdraw from the cash account
    Withdraw {
        /// Amount in whole units
        amount: String,

        /// Value date (YYYY-MM-DD)
        date: String,
    },

    /// Print the account statement, most recent first
    Statement,

    /// Print per-day account activity
    Daily,

    /// Print per-room booking volume and revenue
    Occupancy,

    /// Export data to CSV or JSON
    Export {
        /// What to export: rooms, users, bookings, statement, full
        export_type: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// End the session
    Quit,
}

/// Per-process state driven by the command language.
struct Session {
    service: BookingService,
    account: LedgerAccount,
    verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut session = Session {
            service: BookingService::new(),
            account: LedgerAccount::new(),
            verbose: self.verbose,
        };

        match self.command {
            Commands::Demo => session.run_demo(),

            Commands::Shell => {
                let stdin = io::stdin();
                for line in stdin.lock().lines() {
                    let line = line.context("Failed to read from stdin")?;
                    if !session.exec_line(&line)? {
                        break;
                    }
                }
                Ok(())
            }

            Commands::Run { path } => {
                let script = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read script '{}'", path))?;
                for line in script.lines() {
                    if !session.exec_line(line)? {
                        break;
                    }
                }
                Ok(())
            }
        }
    }
}

impl Session {
    /// Execute one command line. Blank lines and `#` comments are
    /// skipped. Returns false when the session should end.
    ///
    /// Business rejections (failed reservations, ledger validation) are
    /// printed and the session continues; only I/O failures propagate.
    fn exec_line(&mut self, line: &str) -> Result<bool> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(true);
        }

        let parsed = ShellLine::try_parse_from(line.split_whitespace());
        let command = match parsed {
            Ok(shell_line) => shell_line.command,
            Err(err) => {
                // Bad input is non-fatal in a session; show usage and go on
                eprintln!("{}", err);
                return Ok(true);
            }
        };

        match self.exec(command) {
            Ok(keep_going) => Ok(keep_going),
            Err(err) => {
                // Same rule for semantic mistakes (bad dates, bad amounts,
                // export targets): report and keep the session alive
                println!("Error: {:#}", err);
                Ok(true)
            }
        }
    }

    fn exec(&mut self, command: ShellCommand) -> Result<bool> {
        match command {
            ShellCommand::Room {
                number,
                room_type,
                price,
            } => {
                let room_type = RoomType::from_str(&room_type)
                    .with_context(|| format!("Unknown room type '{}'", room_type))?;
                let price = parse_amount(&price).context("Invalid price. Use whole units")?;

                let room = self.service.upsert_room(number, room_type, price);
                println!("Room {} set: {} at {}/night", room.number, room.room_type, room.price_per_night);
            }

            ShellCommand::User { id, balance } => {
                let balance =
                    parse_amount(&balance).context("Invalid balance. Use whole units")?;

                let user = self.service.upsert_user(id, balance);
                println!("User {} set: balance {}", user.id, user.balance);
            }

            ShellCommand::Book {
                user,
                room,
                checkin,
                checkout,
            } => {
                let checkin = parse_date(&checkin)?;
                let checkout = parse_date(&checkout)?;

                match self.service.reserve(user, room, checkin, checkout) {
                    Ok(result) => {
                        println!(
                            "Confirmed: Room {} for User {}, {} night(s) at {}, total {} (balance left {})",
                            result.booking.room_number,
                            result.booking.user_id,
                            result.nights,
                            result.booking.price_per_night,
                            result.total_price,
                            result.balance_after,
                        );
                        if self.verbose {
                            eprintln!("[booking] id {}", result.booking.id);
                        }
                    }
                    Err(err) => println!("Rejected: {}", err),
                }
            }

            ShellCommand::Rooms => {
                println!("--- ROOMS (most recent first) ---");
                for room in self.service.list_rooms() {
                    println!("{}", render_room(room));
                }
            }

            ShellCommand::Users => {
                println!("--- USERS (most recent first) ---");
                for user in self.service.list_users() {
                    println!("{}", render_user(user));
                }
            }

            ShellCommand::Bookings => {
                println!("--- BOOKINGS (most recent first) ---");
                for booking in self.service.list_bookings() {
                    println!("{}", render_booking(booking));
                }
            }

            ShellCommand::Deposit { amount, date } => {
                let amount = parse_amount(&amount).context("Invalid amount. Use whole units")?;
                let date = parse_date(&date)?;

                match self.account.deposit(amount, date) {
                    Ok(t) => println!("Deposited {} on {} (balance {})", t.amount, t.date, t.balance),
                    Err(err) => println!("Rejected: {}", err),
                }
            }

            ShellCommand::Withdraw { amount, date } => {
                let amount = parse_amount(&amount).context("Invalid amount. Use whole units")?;
                let date = parse_date(&date)?;

                match self.account.withdraw(amount, date) {
                    Ok(t) => println!("Withdrew {} on {} (balance {})", -t.amount, t.date, t.balance),
                    Err(err) => println!("Rejected: {}", err),
                }
            }

            ShellCommand::Statement => {
                println!("DATE | AMOUNT | BALANCE");
                for t in self.account.statement() {
                    println!("{} | {} | {}", t.date, t.amount, t.balance);
                }
            }

            ShellCommand::Daily => {
                println!("DATE | DEPOSITS | WITHDRAWALS | CLOSING");
                for day in daily_summaries(&self.account) {
                    println!(
                        "{} | {} | {} | {}",
                        day.date, day.deposits, day.withdrawals, day.closing_balance
                    );
                }
            }

            ShellCommand::Occupancy => {
                println!("ROOM | BOOKINGS | NIGHTS | REVENUE");
                for activity in room_activity(&self.service) {
                    println!(
                        "{} | {} | {} | {}",
                        activity.room_number, activity.bookings, activity.nights, activity.revenue
                    );
                }
            }

            ShellCommand::Export {
                export_type,
                output,
            } => {
                self.run_export(&export_type, output.as_deref())?;
            }

            ShellCommand::Quit => return Ok(false),
        }

        Ok(true)
    }

    fn run_export(&self, export_type: &str, output: Option<&str>) -> Result<()> {
        let exporter = Exporter::new(&self.service);

        let writer: Box<dyn Write> = match output {
            Some(path) => Box::new(
                fs::File::create(path)
                    .with_context(|| format!("Failed to create output file '{}'", path))?,
            ),
            None => Box::new(io::stdout()),
        };

        let count = match export_type {
            "rooms" => exporter.export_rooms_csv(writer)?,
            "users" => exporter.export_users_csv(writer)?,
            "bookings" => exporter.export_bookings_csv(writer)?,
            "statement" => exporter.export_statement_csv(&self.account, writer)?,
            "full" => {
                let snapshot = exporter.export_full_json(&self.account, writer)?;
                snapshot.rooms.len()
                    + snapshot.users.len()
                    + snapshot.bookings.len()
                    + snapshot.transactions.len()
            }
            other => anyhow::bail!(
                "Unknown export type '{}'. Use rooms, users, bookings, statement, or full",
                other
            ),
        };

        if let Some(path) = output {
            println!("Exported {} record(s) to {}", count, path);
        }

        Ok(())
    }

    /// Seeded scenario: three rooms, two guests, a handful of booking
    /// attempts exercising every rejection path, then the listings.
    fn run_demo(&mut self) -> Result<()> {
        println!("=== SETUP ===");
        self.service.upsert_room(1, RoomType::Standard, 1000);
        self.service.upsert_room(2, RoomType::Junior, 2000);
        self.service.upsert_room(3, RoomType::Suite, 3000);
        self.service.upsert_user(1, 5000);
        self.service.upsert_user(2, 10_000);
        println!("3 rooms, 2 users");

        println!();
        println!("=== RESERVATIONS ===");
        let attempts = [
            // A week in the junior suite costs more than user 1 holds
            (1, 2, "2026-06-30", "2026-07-07"),
            // Checkout before checkin
            (1, 2, "2026-07-07", "2026-06-30"),
            (1, 1, "2026-07-07", "2026-07-08"),
            // Overlaps the stay just confirmed
            (2, 1, "2026-07-07", "2026-07-09"),
            (2, 3, "2026-07-07", "2026-07-08"),
        ];
        for (user, room, checkin, checkout) in attempts {
            print!("book {} {} {} {}: ", user, room, checkin, checkout);
            match self
                .service
                .reserve(user, room, parse_date(checkin)?, parse_date(checkout)?)
            {
                Ok(result) => println!(
                    "confirmed, {} night(s), total {}",
                    result.nights, result.total_price
                ),
                Err(err) => println!("rejected: {}", err),
            }
        }

        println!();
        println!("=== ROOM 1 RENOVATED ===");
        self.service.upsert_room(1, RoomType::Suite, 10_000);
        println!("Room 1 set: suite at 10000/night (past bookings keep their price)");

        println!();
        println!("--- ROOMS (most recent first) ---");
        for room in self.service.list_rooms() {
            println!("{}", render_room(room));
        }
        println!("--- BOOKINGS (most recent first) ---");
        for booking in self.service.list_bookings() {
            println!("{}", render_booking(booking));
        }
        println!("--- USERS (most recent first) ---");
        for user in self.service.list_users() {
            println!("{}", render_user(user));
        }

        println!();
        println!("=== CASH ACCOUNT ===");
        self.account.deposit(1000, parse_date("2012-01-10")?)?;
        self.account.deposit(2000, parse_date("2012-01-13")?)?;
        self.account.withdraw(500, parse_date("2012-01-14")?)?;

        println!("DATE | AMOUNT | BALANCE");
        for t in self.account.statement() {
            println!("{} | {} | {}", t.date, t.amount, t.balance);
        }

        Ok(())
    }
}

fn render_room(room: &Room) -> String {
    format!(
        "Room {}: {} at {}/night",
        room.number,
        room.room_type,
        format_amount(room.price_per_night)
    )
}

fn render_user(user: &User) -> String {
    format!("User {}: balance {}", user.id, format_amount(user.balance))
}

fn render_booking(booking: &Booking) -> String {
    format!(
        "Booking: User {} -> Room {} ({} at {}) from {} to {}",
        booking.user_id,
        booking.room_number,
        booking.room_type,
        format_amount(booking.price_per_night),
        booking.checkin,
        booking.checkout
    )
}

fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .with_context(|| format!("Invalid date format '{}'. Use YYYY-MM-DD", input))
}
