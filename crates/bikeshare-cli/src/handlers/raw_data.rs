use crate::presentation::views::{EndOfDataView, RawChunkView};
use crate::ui::{Console, PromptOutcome, ask, selected};
use bikeshare_engine::TripTable;
use bikeshare_types::OptionSets;
use std::io::{self, BufRead, Write};

pub const CHUNK_SIZE: usize = 5;

/// Page through the table five rows at a time while the user asks for more.
pub fn display_raw_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
    options: &OptionSets,
) -> io::Result<PromptOutcome<()>> {
    let answer = selected!(ask(
        console,
        "Would you like to see 5 entries of the raw data?",
        options.yes_no
    )?);
    if answer == "no" {
        return Ok(PromptOutcome::Selected(()));
    }

    let style = console.style();
    let mut cursor = 0;
    loop {
        console.print(RawChunkView {
            columns: table.columns(),
            trips: table.chunk(cursor, CHUNK_SIZE),
            style,
        })?;
        cursor += CHUNK_SIZE;

        if cursor + CHUNK_SIZE >= table.len() {
            console.print(EndOfDataView {
                position: cursor,
                total: table.len(),
            })?;
            return Ok(PromptOutcome::Selected(()));
        }

        let answer = selected!(ask(
            console,
            "Would you like to see the next 5?",
            options.yes_no
        )?);
        if answer == "no" {
            return Ok(PromptOutcome::Selected(()));
        }
    }
}
