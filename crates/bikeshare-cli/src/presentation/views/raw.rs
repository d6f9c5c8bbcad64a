use crate::presentation::Style;
use crate::presentation::formatters::format_rows;
use bikeshare_engine::Trip;
use std::fmt;

pub struct RawChunkView<'a> {
    pub columns: &'a [String],
    pub trips: &'a [Trip],
    pub style: Style,
}

impl fmt::Display for RawChunkView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        let mut lines = format_rows(self.columns, self.trips).into_iter();
        if let Some(header) = lines.next() {
            writeln!(f, "{}", self.style.heading(header))?;
        }
        for line in lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

pub struct EndOfDataView {
    pub position: usize,
    pub total: usize,
}

impl fmt::Display for EndOfDataView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\n** not enough data to display another chunk (current position = {} / data length = {} **",
            self.position, self.total
        )
    }
}
