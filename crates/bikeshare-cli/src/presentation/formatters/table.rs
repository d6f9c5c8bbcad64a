use bikeshare_engine::Trip;

/// Right-aligned text table of raw source rows, headed by the column names
/// and keyed by each trip's source position.
pub fn format_rows(columns: &[String], trips: &[Trip]) -> Vec<String> {
    let index_width = trips
        .iter()
        .map(|t| t.position.to_string().len())
        .max()
        .unwrap_or(0);

    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for trip in trips {
        for (cell, width) in trip.raw_fields().zip(widths.iter_mut()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(trips.len() + 1);
    let header = join_cells(columns.iter().map(String::as_str), &widths);
    lines.push(format!("{:index_width$}  {}", "", header));

    for trip in trips {
        let cells = join_cells(trip.raw_fields(), &widths);
        lines.push(format!("{:>index_width$}  {}", trip.position, cells));
    }

    lines
}

fn join_cells<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| format!("{:>width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
}
