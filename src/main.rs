//! CourtDesk command line front end
//!
//! Main application entry point

use std::str::FromStr;
use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use CourtDesk::{
    config::Settings,
    export::{ReportWriter, SummaryRows},
    models::{CourtPricing, Event, EventParticipant, Maintenance, PricingPromotion, ServicePricing},
    pipeline::{
        self, CategoryFilter, CriteriaAction, CriteriaFor, DateFilter, EventStats, MaintenanceStats,
        ParticipantStats, PricingStats, PromotionField, PromotionSortKey, Record, ServicePricingField,
        ServicePricingSortKey, SortDirection,
    },
    services::ServiceFactory,
    state::{ListView, Notification, Redirect},
    status::{MaintenanceAction, StatusAction},
    utils::{
        errors::{CourtDeskError, Result},
        helpers::{date_part, format_money, iso_date, today, truncate_text},
        logging,
    },
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Sports facility management from the terminal", long_about = None)]
struct Cli {
    /// Configuration file (extension optional)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List events
    Events {
        #[command(flatten)]
        list: ListArgs,
        /// Patch events whose stored status disagrees with their dates
        #[arg(long)]
        sync_statuses: bool,
    },
    /// List maintenance records
    Maintenance {
        #[command(flatten)]
        list: ListArgs,
        /// Also print the server-computed statistics
        #[arg(long)]
        server_stats: bool,
    },
    /// List the registrations of one event
    Participants {
        event_id: i64,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show the pricing catalog
    Pricing {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Write a CSV report and its summary sheet
    Export {
        #[arg(value_enum)]
        report: ReportKind,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Request a maintenance status change
    Advance {
        maintenance_id: i64,
        /// start, complete, cancel, postpone or reschedule
        action: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportKind {
    Events,
    Maintenance,
}

/// Search, filter, date and sort controls shared by every list command
#[derive(Debug, Args)]
struct ListArgs {
    /// Case-insensitive text search
    #[arg(short, long)]
    search: Option<String>,

    /// Category filter; VALUE may also be "all", "unassigned" or "none"
    #[arg(short, long = "filter", value_name = "FIELD=VALUE")]
    filters: Vec<String>,

    /// all, today, this-week, this-month, past, future or YYYY-MM-DD
    #[arg(short, long)]
    date: Option<String>,

    /// Column to sort by
    #[arg(long)]
    sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    desc: bool,
}

impl ListArgs {
    /// Build a view whose criteria reflect the flags, before anything is fetched
    fn view<R>(&self) -> Result<ListView<R>>
    where
        R: Record,
        R::Field: FromStr<Err = CourtDeskError>,
        R::SortKey: FromStr<Err = CourtDeskError>,
    {
        let mut view = ListView::default();

        if let Some(term) = &self.search {
            view.dispatch(CriteriaAction::SetSearch(term.clone()));
        }
        for filter in &self.filters {
            let (field, value) = filter.split_once('=').ok_or_else(|| {
                CourtDeskError::InvalidInput(format!("filter '{}' must look like FIELD=VALUE", filter))
            })?;
            view.dispatch(CriteriaAction::SetFilter(field.trim().parse()?, CategoryFilter::parse(value.trim())));
        }
        if let Some(date) = &self.date {
            view.dispatch(CriteriaAction::SetDate(DateFilter::parse(date)));
        }
        if let Some(sort) = &self.sort {
            let key: R::SortKey = sort.parse()?;
            view.dispatch(CriteriaAction::SortBy(key));
            if self.desc {
                view.dispatch(CriteriaAction::SortBy(key));
            }
        }
        Ok(view)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::new(),
    }
    .context("failed to load configuration")?;
    settings.validate()?;

    // Initialize logging; the guard flushes the file writer on exit
    let _guard = logging::init_logging(&settings.logging)?;
    info!("Starting {}", CourtDesk::info());

    let services = ServiceFactory::new(&settings)?;

    if let Err(e) = run(cli.command, &settings, &services).await {
        error!(error = %e, "Command failed");
        let notification = Notification::from_error(&e);
        eprintln!("{}", notification);
        if notification.redirect == Some(Redirect::Login) {
            eprintln!("Set api.token or api.token_file (or COURTDESK__API__TOKEN) and try again.");
        }
        std::process::exit(1);
    }

    Ok(())
}

async fn run(command: Commands, settings: &Settings, services: &ServiceFactory) -> Result<()> {
    let max_rows = settings.dashboard.max_rows;
    let today = today();

    match command {
        Commands::Events { list, sync_statuses } => {
            let mut view = list.view::<Event>()?;
            let result = services.event_service.list_events().await;
            report_failure(view.finish_loading(result));

            if sync_statuses && !view.records().is_empty() {
                let updated = services.event_service.sync_statuses(view.records(), today).await?;
                for event in updated {
                    view.upsert(event);
                }
            }

            let visible = view.visible(today);
            print_events(&visible, max_rows);
            print_summary(&EventStats::from_records(visible.iter().copied()));
        }
        Commands::Maintenance { list, server_stats } => {
            let mut view = list.view::<Maintenance>()?;
            let result = services.maintenance_service.list().await;
            report_failure(view.finish_loading(result));

            let visible = view.visible(today);
            print_maintenance(&visible, max_rows);
            print_summary(&MaintenanceStats::from_records(visible.iter().copied()));

            if server_stats {
                let stats = services.maintenance_service.statistics().await?;
                println!();
                println!(
                    "Server: {} total, {} scheduled, {} in progress, {} completed, {} overdue, cost {}",
                    stats.total,
                    stats.scheduled,
                    stats.in_progress,
                    stats.completed,
                    stats.overdue,
                    format_money(stats.total_cost)
                );
            }
        }
        Commands::Participants { event_id, list } => {
            let mut view = list.view::<EventParticipant>()?;
            let result = services.event_service.list_participants(event_id).await;
            report_failure(view.finish_loading(result));

            let visible = view.visible(today);
            print_participants(&visible, max_rows);
            print_summary(&ParticipantStats::from_records(visible.iter().copied()));
        }
        Commands::Pricing { list } => {
            let mut view = list.view::<CourtPricing>()?;
            let catalog = services.pricing_service.load_catalog().await;
            let (court_prices, catalog) = match catalog {
                Ok(mut catalog) => (Ok(std::mem::take(&mut catalog.court_prices)), catalog),
                Err(e) => (Err(e), Default::default()),
            };
            report_failure(view.finish_loading(court_prices));

            let visible = view.visible(today);
            print_court_prices(&visible, max_rows);

            // The catalog tables share the search term
            let search = list.search.clone().unwrap_or_default();
            let today_iso = iso_date(today);
            let service_criteria =
                CriteriaFor::<ServicePricing>::sorted_by(ServicePricingSortKey::Name, SortDirection::Ascending)
                .reduce(CriteriaAction::SetSearch(search.clone()))
                .reduce(CriteriaAction::SetFilter(ServicePricingField::Active, CategoryFilter::parse("yes")));
            let promotion_criteria =
                CriteriaFor::<PricingPromotion>::sorted_by(PromotionSortKey::EndDate, SortDirection::Ascending)
                .reduce(CriteriaAction::SetSearch(search))
                .reduce(CriteriaAction::SetFilter(PromotionField::Active, CategoryFilter::parse("yes")));

            let cheapest = visible
                .iter()
                .filter(|p| p.is_active)
                .map(|p| p.price_per_hour)
                .reduce(f64::min);
            println!();
            for promotion in pipeline::run(&catalog.promotions, &promotion_criteria, today)
                .into_iter()
                .filter(|p| p.is_running_on(&today_iso))
            {
                let example = cheapest
                    .map(|price| format!("{} -> {}", format_money(price), format_money(promotion.apply(price))))
                    .unwrap_or_default();
                println!(
                    "Promotion: {} (until {}) {}",
                    promotion.title,
                    promotion.end_date,
                    example
                );
            }

            println!();
            for service in pipeline::run(&catalog.services, &service_criteria, today) {
                println!(
                    "{:<32} {:>12} {}",
                    truncate_text(&service.name, 32),
                    format_money(service.price),
                    service.unit.as_deref().unwrap_or("")
                );
            }

            print_summary(&PricingStats::from_records(
                visible.iter().copied(),
                &catalog.promotions,
                &today_iso,
            ));
        }
        Commands::Export { report, list } => {
            let writer = ReportWriter::new(&settings.export)?;
            match report {
                ReportKind::Events => {
                    let mut view = list.view::<Event>()?;
                    report_failure(view.finish_loading(services.event_service.list_events().await));
                    let visible = view.visible(today);

                    let path = writer.export(visible.iter().copied(), today)?;
                    let summary = writer.export_summary(
                        "events",
                        &EventStats::from_records(visible.iter().copied()),
                        today,
                    )?;
                    println!("Wrote {} and {}", path.display(), summary.display());
                }
                ReportKind::Maintenance => {
                    let mut view = list.view::<Maintenance>()?;
                    report_failure(view.finish_loading(services.maintenance_service.list().await));
                    let visible = view.visible(today);

                    let path = writer.export(visible.iter().copied(), today)?;
                    let summary = writer.export_summary(
                        "maintenance",
                        &MaintenanceStats::from_records(visible.iter().copied()),
                        today,
                    )?;
                    println!("Wrote {} and {}", path.display(), summary.display());
                }
            }
        }
        Commands::Advance { maintenance_id, action } => {
            let action: MaintenanceAction = action.parse()?;
            let record = services.maintenance_service.get(maintenance_id).await?;

            if let Err(e) = action.check(record.status) {
                let labels: Vec<&str> = MaintenanceAction::available(record.status)
                    .iter()
                    .map(|a| a.label())
                    .collect();
                eprintln!(
                    "Available actions for '{}': {}",
                    record.title,
                    if labels.is_empty() { "none".to_string() } else { labels.join(", ") }
                );
                return Err(e);
            }

            let updated = services.maintenance_service.apply_action(&record, action).await?;
            println!("{}", Notification::success(format!(
                "'{}' is now {}",
                updated.title,
                updated.status.as_str()
            )));
        }
    }

    Ok(())
}

/// A failed fetch leaves an empty list; tell the user why
fn report_failure(notification: Option<Notification>) {
    if let Some(notification) = notification {
        eprintln!("{}", notification);
    }
}

fn print_overflow(shown: usize, max_rows: usize) {
    if shown > max_rows {
        println!("... {} more", shown - max_rows);
    }
    println!("{} row(s)", shown);
}

fn print_summary(stats: &dyn SummaryRows) {
    println!();
    for (label, value) in stats.summary_rows() {
        println!("{:<24} {}", label, value);
    }
}

fn print_events(events: &[&Event], max_rows: usize) {
    println!(
        "{:<6} {:<32} {:<11} {:<10} {:<10} {:>9}",
        "ID", "TITLE", "TYPE", "STATUS", "START", "PLACES"
    );
    for event in events.iter().take(max_rows) {
        let places = match event.max_participants {
            Some(max) => format!("{}/{}", event.current_participants, max),
            None => event.current_participants.to_string(),
        };
        println!(
            "{:<6} {:<32} {:<11} {:<10} {:<10} {:>9}",
            event.id,
            truncate_text(&event.title, 32),
            event.event_type.as_str(),
            event.status.as_str(),
            event.start_date,
            places
        );
    }
    print_overflow(events.len(), max_rows);
}

fn print_maintenance(records: &[&Maintenance], max_rows: usize) {
    println!(
        "{:<6} {:<32} {:<9} {:<12} {:<10} {:>12}",
        "ID", "TITLE", "PRIORITY", "STATUS", "SCHEDULED", "COST"
    );
    for record in records.iter().take(max_rows) {
        let cost = record.actual_cost.or(record.estimated_cost).map(format_money).unwrap_or_default();
        println!(
            "{:<6} {:<32} {:<9} {:<12} {:<10} {:>12}",
            record.id,
            truncate_text(&record.title, 32),
            record.priority.as_str(),
            record.status.as_str(),
            record.scheduled_date,
            cost
        );
    }
    print_overflow(records.len(), max_rows);
}

fn print_participants(participants: &[&EventParticipant], max_rows: usize) {
    println!("{:<6} {:<28} {:<32} {:<11} {:<10}", "ID", "NAME", "EMAIL", "STATUS", "REGISTERED");
    for participant in participants.iter().take(max_rows) {
        println!(
            "{:<6} {:<28} {:<32} {:<11} {:<10}",
            participant.id,
            truncate_text(participant.user_name.as_deref().unwrap_or("-"), 28),
            truncate_text(participant.user_email.as_deref().unwrap_or("-"), 32),
            participant.status.as_str(),
            date_part(&participant.registered_at).unwrap_or("-")
        );
    }
    print_overflow(participants.len(), max_rows);
}

/// `HH:MM` part of a clock time
fn clock(time: &str) -> &str {
    time.get(..5).unwrap_or(time)
}

const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

fn print_court_prices(prices: &[&CourtPricing], max_rows: usize) {
    println!("{:<24} {:<24} {:<5} {:<13} {:>12} {:<4}", "VENUE", "COURT", "DAY", "HOURS", "PER HOUR", "PEAK");
    for pricing in prices.iter().take(max_rows) {
        let day = pricing
            .day_of_week
            .and_then(|d| DAY_NAMES.get(usize::from(d)).copied())
            .unwrap_or("All");
        println!(
            "{:<24} {:<24} {:<5} {:<13} {:>12} {:<4}",
            truncate_text(pricing.venue_name.as_deref().unwrap_or("-"), 24),
            truncate_text(pricing.court_name.as_deref().unwrap_or("-"), 24),
            day,
            format!("{}-{}", clock(&pricing.start_time), clock(&pricing.end_time)),
            format_money(pricing.price_per_hour),
            if pricing.is_peak_hour { "yes" } else { "" }
        );
    }
    print_overflow(prices.len(), max_rows);
}
