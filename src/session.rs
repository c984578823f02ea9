//! Interactive trip-planning session
//!
//! Drives the three workflow stages over stdin/stdout: collect the trip
//! parameters, let the user curate the recommended places, then generate
//! and render the itinerary. The session owns the navigator and threads
//! the typed contexts between stages.

use std::io::{self, BufRead, Write as IoWrite};
use std::sync::Arc;

use chrono::NaiveDate;
use colored::Colorize;
use eyre::Result;
use tracing::{debug, info};

use crate::api::TravelApi;
use crate::catalog::PlaceCatalog;
use crate::compose::compose;
use crate::domain::{ItineraryEvent, Place, TripRequest};
use crate::media::MediaResolver;
use crate::schedule::ScheduleModel;
use crate::workflow::{Navigator, PlanningContext, TransitionError};

/// What the user asked for during the Selecting stage
#[derive(Debug, PartialEq, Eq)]
enum SelectCommand {
    /// Toggle the place at this 1-based list position
    Toggle(usize),
    /// Show the detail view for this 1-based list position
    Details(usize),
    List,
    Done,
    Quit,
    Help,
    Noop,
    Unknown,
}

/// Parse one line of Selecting-stage input
fn parse_select_command(input: &str) -> SelectCommand {
    let input = input.trim();
    if input.is_empty() {
        return SelectCommand::Noop;
    }

    if let Ok(index) = input.parse::<usize>() {
        return SelectCommand::Toggle(index);
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    match parts[0].to_lowercase().as_str() {
        "/details" | "/d" => parts
            .get(1)
            .and_then(|arg| arg.parse::<usize>().ok())
            .map(SelectCommand::Details)
            .unwrap_or(SelectCommand::Unknown),
        "/list" | "/l" => SelectCommand::List,
        "/done" | "/plan" => SelectCommand::Done,
        "/quit" | "/exit" | "/q" | "q" | "quit" | "exit" => SelectCommand::Quit,
        "/help" | "/h" => SelectCommand::Help,
        _ => SelectCommand::Unknown,
    }
}

/// Interactive session over the three-stage workflow
pub struct PlannerSession {
    api: Arc<dyn TravelApi>,
    media: MediaResolver,
    navigator: Navigator,
}

impl PlannerSession {
    pub fn new(api: Arc<dyn TravelApi>, media: MediaResolver) -> Self {
        Self {
            api,
            media,
            navigator: Navigator::new(),
        }
    }

    /// Run the workflow end to end
    ///
    /// `seed` carries any trip fields already provided on the command line;
    /// the Input stage prompts only for the rest.
    pub async fn run(&mut self, seed: TripRequest) -> Result<()> {
        info!("Starting trip-planning session");
        self.print_welcome();

        // Stage 1: Input
        let trip = match self.collect_trip(seed)? {
            Some(trip) => trip,
            None => {
                println!("Session cancelled.");
                return Ok(());
            }
        };
        let ctx = self.navigator.to_selecting(trip)?;

        // Stage 2: Selecting
        let mut catalog = PlaceCatalog::new();
        println!("\n{}", "Fetching recommended places...".dimmed());
        catalog.load(self.api.as_ref(), &ctx.trip).await;

        if catalog.is_empty() {
            println!("No places found.");
        } else {
            self.render_places(&catalog);
        }

        let planning = match self.curate(&mut catalog, ctx.trip)? {
            Some(planning) => planning,
            None => {
                println!("Session cancelled.");
                return Ok(());
            }
        };

        // Stage 3: Planning (terminal)
        let mut schedule = ScheduleModel::new();
        match compose(&planning.places, &planning.selected_ids, &planning.trip) {
            Some(request) => {
                println!("\n{}", "Generating itinerary...".dimmed());
                schedule.generate(self.api.as_ref(), &request).await;
            }
            None => {
                // Entered without a curated selection: render the empty state
                debug!("run: nothing to compose, rendering empty itinerary");
            }
        }
        self.render_schedule(schedule.events());

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "Wayfinder - Your Personal Travel Guide".bright_cyan().bold());
        println!();
    }

    /// Stage 1: prompt for any trip fields the seed did not carry
    ///
    /// Returns `None` on EOF (user closed stdin). Every field may be left
    /// empty; the trip request is always fully-populated with defaults.
    fn collect_trip(&self, seed: TripRequest) -> Result<Option<TripRequest>> {
        let mut builder = TripRequest::builder().merge(seed.clone());

        if seed.source.is_empty() {
            match self.prompt("Travelling from")? {
                Some(value) => builder = builder.source(value),
                None => return Ok(None),
            }
        }
        if seed.destination.is_empty() {
            match self.prompt("Destination")? {
                Some(value) => builder = builder.destination(value),
                None => return Ok(None),
            }
        }
        if seed.departure_date.is_none() {
            match self.prompt_date("Departure date (YYYY-MM-DD)")? {
                Some(date) => builder = builder.departure_date(date),
                None => return Ok(None),
            }
        }
        if seed.return_date.is_none() {
            match self.prompt_date("Return date (YYYY-MM-DD)")? {
                Some(date) => builder = builder.return_date(date),
                None => return Ok(None),
            }
        }
        if seed.budget.is_empty() {
            match self.prompt("Budget")? {
                Some(value) => builder = builder.budget(value),
                None => return Ok(None),
            }
        }
        if seed.description.is_empty() {
            match self.prompt("Tell us about your interests")? {
                Some(value) => builder = builder.description(value),
                None => return Ok(None),
            }
        }

        Ok(Some(builder.build()))
    }

    /// Stage 2 command loop: toggle selections until the user proceeds
    ///
    /// Returns the planning context on `/done`, `None` if the user quit.
    fn curate(&mut self, catalog: &mut PlaceCatalog, trip: TripRequest) -> Result<Option<PlanningContext>> {
        println!(
            "\nToggle places by number, {} for the itinerary, {} for commands.",
            "/done".yellow(),
            "/help".yellow()
        );

        loop {
            let line = match self.prompt(">")? {
                Some(line) => line,
                None => return Ok(None),
            };

            match parse_select_command(&line) {
                SelectCommand::Toggle(index) => {
                    let place_id = catalog
                        .places()
                        .get(index.wrapping_sub(1))
                        .map(|place| place.place_id.clone());
                    match place_id {
                        Some(id) => {
                            catalog.toggle(&id);
                            self.render_places(catalog);
                        }
                        None => println!("No place numbered {}.", index),
                    }
                }
                SelectCommand::Details(index) => match catalog.places().get(index.wrapping_sub(1)) {
                    Some(place) => self.render_details(place),
                    None => println!("No place numbered {}.", index),
                },
                SelectCommand::List => self.render_places(catalog),
                SelectCommand::Done => match self.navigator.to_planning(catalog, trip.clone()) {
                    Ok(planning) => return Ok(Some(planning)),
                    Err(TransitionError::NoPlacesSelected) => {
                        // Guard violation: warn, stay on this stage
                        println!("{}", "Choose at least 1 place to visit!".yellow());
                    }
                    Err(e) => return Err(e.into()),
                },
                SelectCommand::Quit => return Ok(None),
                SelectCommand::Help => self.print_help(),
                SelectCommand::Noop => {}
                SelectCommand::Unknown => println!("Unknown command. Type {} for commands.", "/help".yellow()),
            }
        }
    }

    /// Read one line; `None` means EOF
    fn prompt(&self, label: &str) -> Result<Option<String>> {
        print!("{} ", label.bright_green());
        io::stdout().flush()?;

        let stdin = io::stdin();
        let handle = stdin.lock();
        match handle.lines().next() {
            Some(Ok(line)) => Ok(Some(line.trim().to_string())),
            Some(Err(e)) => Err(e.into()),
            None => Ok(None),
        }
    }

    /// Read a date; unparseable input leaves the date unset
    fn prompt_date(&self, label: &str) -> Result<Option<Option<NaiveDate>>> {
        let line = match self.prompt(label)? {
            Some(line) => line,
            None => return Ok(None),
        };

        if line.is_empty() {
            return Ok(Some(None));
        }

        match line.parse::<NaiveDate>() {
            Ok(date) => Ok(Some(Some(date))),
            Err(_) => {
                println!("{}", "Not a valid date, leaving it unset.".yellow());
                Ok(Some(None))
            }
        }
    }

    fn print_help(&self) {
        println!("Commands:");
        println!("  {}        toggle the place with that number", "<number>".yellow());
        println!("  {}    show details for a place", "/details <n>".yellow());
        println!("  {}           list the places again", "/list".yellow());
        println!("  {}           proceed to the itinerary", "/done".yellow());
        println!("  {}           cancel the session", "/quit".yellow());
    }

    fn render_places(&self, catalog: &PlaceCatalog) {
        println!();
        for (index, place) in catalog.places().iter().enumerate() {
            let marker = if catalog.is_selected(&place.place_id) {
                "[x]".bright_green()
            } else {
                "[ ]".normal()
            };
            println!("{} {:>2}. {}", marker, index + 1, place.name.bold());
            if !place.formatted_address.is_empty() {
                println!("        {}", place.formatted_address);
            }
            println!(
                "        Rated {}/5 by {} people",
                place.rating,
                place.user_ratings_total
            );
            println!("        {}", self.media.photo_url(place).dimmed());
        }
        println!("\n{} selected", catalog.selected_ids().len());
    }

    fn render_details(&self, place: &Place) {
        println!();
        println!("{}", place.name.bold());
        println!("Address: {}", place.formatted_address);
        println!("Rated {}/5 by {} people.", place.rating, place.user_ratings_total);
        if !place.types.is_empty() {
            println!("Known For: {}", place.types.join(", "));
        }
        println!("Map: {}", self.media.map_embed_url(place).dimmed());
    }

    fn render_schedule(&self, events: &[ItineraryEvent]) {
        println!();
        println!("{}", "Your Travel Itinerary".bright_cyan().bold());

        if events.is_empty() {
            println!("No itinerary items.");
            return;
        }

        for (index, event) in events.iter().enumerate() {
            println!();
            println!("{:>2}. {}", index + 1, event.name.bold());
            if !event.timing.is_empty() {
                println!("    When: {}", event.timing);
            }
            if !event.details.is_empty() {
                println!("    {}", event.details);
            }
            if !event.famous_activity.is_empty() {
                println!("    Famous activity: {}", event.famous_activity);
            }
            if !event.total_duration.is_empty() {
                println!("    Duration: {}", event.total_duration);
            }
            if !event.recommended_transport.is_empty() {
                println!("    Getting there: {}", event.recommended_transport);
            }
            if !event.additional_notes.is_empty() {
                println!("    Notes: {}", event.additional_notes.dimmed());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toggle_by_number() {
        assert_eq!(parse_select_command("3"), SelectCommand::Toggle(3));
        assert_eq!(parse_select_command(" 12 "), SelectCommand::Toggle(12));
    }

    #[test]
    fn test_parse_details() {
        assert_eq!(parse_select_command("/details 2"), SelectCommand::Details(2));
        assert_eq!(parse_select_command("/d 2"), SelectCommand::Details(2));
        assert_eq!(parse_select_command("/details"), SelectCommand::Unknown);
    }

    #[test]
    fn test_parse_done_and_quit() {
        assert_eq!(parse_select_command("/done"), SelectCommand::Done);
        assert_eq!(parse_select_command("/quit"), SelectCommand::Quit);
        assert_eq!(parse_select_command("q"), SelectCommand::Quit);
    }

    #[test]
    fn test_parse_empty_and_unknown() {
        assert_eq!(parse_select_command(""), SelectCommand::Noop);
        assert_eq!(parse_select_command("   "), SelectCommand::Noop);
        assert_eq!(parse_select_command("/bogus"), SelectCommand::Unknown);
    }
}
