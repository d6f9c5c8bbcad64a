use crate::presentation::views::{GreetingView, SelectionView};
use crate::ui::{Console, PromptOutcome, ask, selected};
use anyhow::Result;
use bikeshare_types::{FilterSelection, OptionSets};
use std::io::{BufRead, Write};

/// Ask for city, month and day of week.
pub fn get_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    options: &OptionSets,
) -> Result<PromptOutcome<FilterSelection>> {
    console.print(GreetingView)?;

    let city = selected!(ask(
        console,
        "From which city you want to analyze the data?",
        options.cities
    )?);
    let month = selected!(ask(console, "Select a month to analyze.", options.months)?);
    let day = selected!(ask(
        console,
        "Select a day of week to analyze.",
        options.weekdays
    )?);

    let selection = FilterSelection::from_answers(city, month, day)?;
    console.print(SelectionView {
        selection: &selection,
    })?;
    Ok(PromptOutcome::Selected(selection))
}
